// src/readers/tallyprocessor.rs

//! Implements a [`TallyProcessor`], the driver of one pass over a Sysmon
//! log file using a [`LineReader`] and a [`ConnectionExtractor`], counting
//! into a [`FrequencyTable`].
//!
//! This is an _sctlib_ structure used by the binary program _sct_.
//!
//! [`LineReader`]: crate::readers::linereader::LineReader
//! [`ConnectionExtractor`]: crate::readers::connectionextractor::ConnectionExtractor
//! [`FrequencyTable`]: crate::data::frequencytable::FrequencyTable

use std::fmt;
use std::io::{
    Result,
    Write,
};
use std::time::Duration;

#[allow(unused_imports)]
use ::si_trace_print::{
    def1n,
    def1o,
    def1x,
    defn,
    defo,
    defx,
};

use crate::common::{
    FPath,
    ResultFind,
};
use crate::data::frequencytable::FrequencyTable;
use crate::readers::connectionextractor::ConnectionExtractor;
use crate::readers::linereader::LineReader;
use crate::readers::summary::Summary;

/// Drives a [`LineReader`] over the entire file, passes every line to a
/// [`ConnectionExtractor`], and accumulates every record in a
/// [`FrequencyTable`].
///
/// Single pass; memory is bounded by the longest line plus the table.
pub struct TallyProcessor<W: Write> {
    linereader: LineReader,
    extractor: ConnectionExtractor<W>,
    table: FrequencyTable,
}

impl<W: Write> fmt::Debug for TallyProcessor<W> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("TallyProcessor")
            .field("linereader", &self.linereader)
            .field("extractor", &self.extractor)
            .field("table", &self.table)
            .finish()
    }
}

impl<W: Write> TallyProcessor<W> {
    /// Open the file at `path`. Diagnostics are written to `diagnostics`.
    pub fn new(
        path: FPath,
        diagnostics: W,
    ) -> Result<TallyProcessor<W>> {
        def1n!("({:?})", path);
        let linereader = LineReader::new(path)?;
        def1x!("return Ok(TallyProcessor)");

        Ok(TallyProcessor {
            linereader,
            extractor: ConnectionExtractor::new(diagnostics),
            table: FrequencyTable::new(),
        })
    }

    pub fn set_diagnostics_enabled(&mut self, enabled: bool) {
        self.extractor.set_diagnostics_enabled(enabled);
    }

    /// Read every remaining line of the file.
    ///
    /// A read error stops processing and is returned; the table is then
    /// incomplete and should not be reported.
    pub fn process_file(&mut self) -> Result<()> {
        def1n!("({:?})", self.linereader.path());
        loop {
            match self.linereader.next_line() {
                ResultFind::Found(line) => {
                    if let Some(record) = self.extractor.extract(&line) {
                        self.table.accumulate(record);
                    }
                }
                ResultFind::Done => break,
                ResultFind::Err(err) => {
                    def1x!("error {}", err);
                    return Err(err);
                }
            }
        }
        def1x!("{:?}", self.table);

        Ok(())
    }

    pub const fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Consume `self`, returning the `FrequencyTable`.
    pub fn into_table(self) -> FrequencyTable {
        self.table
    }

    pub fn path(&self) -> &FPath {
        self.linereader.path()
    }

    /// Statistics about this run.
    pub fn summary(&self, elapsed: Duration) -> Summary {
        Summary::new(
            &self.linereader,
            self.extractor.summary(),
            &self.table,
            elapsed,
        )
    }
}
