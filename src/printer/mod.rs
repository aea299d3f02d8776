// src/printer/mod.rs

//! The `printer` module is for printing user-facing output; the rendered
//! [`FrequencyTable`] report and the `--summary` statistics.
//!
//! [`FrequencyTable`]: crate::data::frequencytable::FrequencyTable

pub mod printers;
pub mod summary;
