// src/data/mod.rs

//! The `data` module is data containers for [`ConnectionRecord`]s and the
//! [`FrequencyTable`] that counts them.
//!
//! ## Definitions of data
//!
//! ### Line
//!
//! A "line" is a sequence of bytes in a file that:
//!
//! * begins after a prior "line" or the beginning of a file.
//! * ends with a newline character `'\n'` or the end of a file.
//!
//! A "line" is found by a [`LineReader`] and is decoded to a `String`.
//!
//! ### ConnectionRecord
//!
//! A "connection record" is the process image, IP, port, and hostname
//! labeled within one Sysmon network-connection "line".
//!
//! A "connection record" is represented by a [`ConnectionRecord`] and found
//! by a [`ConnectionExtractor`].
//!
//! ### FrequencyTable
//!
//! A "frequency table" counts connection records by
//! process → IP → port → hostname, and renders the final report.
//!
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`ConnectionExtractor`]: crate::readers::connectionextractor::ConnectionExtractor
//! [`ConnectionRecord`]: crate::data::connection::ConnectionRecord
//! [`FrequencyTable`]: crate::data::frequencytable::FrequencyTable

pub mod connection;
pub mod frequencytable;
