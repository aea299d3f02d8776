// src/readers/summary.rs

//! Implements `Summary` statistics tracking struct.

use std::time::Duration;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

use crate::common::{
    Count,
    FPath,
    FileSz,
};
use crate::data::frequencytable::FrequencyTable;
use crate::readers::connectionextractor::SummaryConnectionExtractor;
use crate::readers::linereader::LineReader;

/// Statistics about one run over a log file, from the [`LineReader`],
/// the [`ConnectionExtractor`], and the [`FrequencyTable`].
///
/// For CLI option `--summary`.
///
/// [`ConnectionExtractor`]: crate::readers::connectionextractor::ConnectionExtractor
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// the `FPath` of the processed file
    pub path: FPath,
    /// size of the file when opened
    pub filesz: FileSz,
    /// `Count` of lines read
    pub lines_read: Count,
    /// `Count` of bytes read
    pub bytes_read: Count,
    /// `Count` of lines with invalid UTF-8 replaced
    pub lines_lossy: Count,
    pub extractor: SummaryConnectionExtractor,
    /// distinct processes in the `FrequencyTable`
    pub processes: usize,
    /// distinct `(process, ip, port, hostname)` in the `FrequencyTable`
    pub entries: usize,
    /// sum of all counts in the `FrequencyTable`
    pub connections: Count,
    /// wall-clock time of the run
    pub elapsed: Duration,
}

impl Summary {
    /// Gather a `Summary` at the end of a run.
    pub fn new(
        linereader: &LineReader,
        extractor: SummaryConnectionExtractor,
        table: &FrequencyTable,
        elapsed: Duration,
    ) -> Summary {
        defn!();
        let summary = Summary {
            path: linereader.path().clone(),
            filesz: linereader.filesz(),
            lines_read: linereader.lines_read(),
            bytes_read: linereader.bytes_read(),
            lines_lossy: linereader.lines_lossy(),
            extractor,
            processes: table.len_processes(),
            entries: table.len_entries(),
            connections: table.total(),
            elapsed,
        };
        defx!("{:?}", summary);

        summary
    }
}
