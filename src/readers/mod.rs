// src/readers/mod.rs

//! "Readers" for _sctlib_.
//!
//! ## Overview of readers
//!
//! * A [`LineReader`] reads a file and derives lines of text.
//! * A [`ConnectionExtractor`] derives a [`ConnectionRecord`] from a line.
//! * A [`TallyProcessor`] drives a `LineReader` and a `ConnectionExtractor`
//!   over the file, and passes each `ConnectionRecord` to a
//!   [`FrequencyTable`].
//!
//! The _sct_ binary program uses one `TallyProcessor` per run.
//!
//! _These are not rust "Readers"; these structs do not implement the trait
//! [`Read`]. These are "readers" in an informal sense._
//!
//! [`Read`]: std::io::Read
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`ConnectionExtractor`]: crate::readers::connectionextractor::ConnectionExtractor
//! [`ConnectionRecord`]: crate::data::connection::ConnectionRecord
//! [`TallyProcessor`]: crate::readers::tallyprocessor::TallyProcessor
//! [`FrequencyTable`]: crate::data::frequencytable::FrequencyTable

pub mod connectionextractor;
pub mod helpers;
pub mod linereader;
pub mod summary;
pub mod tallyprocessor;
