// src/printer/summary.rs

//! Printing of a [`Summary`] for CLI option `--summary`.

use std::io::{
    Result,
    Write,
};

use crate::de_err;
use crate::readers::helpers::basename;
use crate::readers::summary::Summary;

const OPT_SUMMARY_PRINT_INDENT1: &str = "  ";

/// create percentage of `a` to `b`
fn percent64(
    a: u64,
    b: u64,
) -> f64 {
    if b == 0 {
        return 0.0;
    }

    (a as f64) / (b as f64) * 100.0
}

/// Write the `Summary` to `writer`.
pub fn write_summary<W: Write>(
    summary: &Summary,
    writer: &mut W,
) -> Result<()> {
    let indent1 = OPT_SUMMARY_PRINT_INDENT1;
    let extractor = &summary.extractor;
    writeln!(writer, "File:")?;
    writeln!(writer, "{}file            : {:?}", indent1, basename(&summary.path))?;
    writeln!(writer, "{}path            : {:?}", indent1, summary.path)?;
    writeln!(writer, "{}size            : {}", indent1, summary.filesz)?;
    writeln!(writer, "Processed:")?;
    writeln!(writer, "{}bytes           : {}", indent1, summary.bytes_read)?;
    writeln!(writer, "{}lines           : {}", indent1, summary.lines_read)?;
    writeln!(
        writer,
        "{}lines lossy     : {} ({:.1}%)",
        indent1,
        summary.lines_lossy,
        percent64(summary.lines_lossy, summary.lines_read),
    )?;
    writeln!(writer, "{}lines w/ marker : {}", indent1, extractor.lines_marker)?;
    writeln!(
        writer,
        "{}records         : {} ({:.1}% of lines w/ marker)",
        indent1,
        extractor.records_found,
        percent64(extractor.records_found, extractor.lines_marker),
    )?;
    writeln!(writer, "{}incomplete      : {}", indent1, extractor.lines_incomplete)?;
    writeln!(writer, "{}diagnostics     : {}", indent1, extractor.diagnostics_written)?;
    writeln!(writer, "Tallied:")?;
    writeln!(writer, "{}processes       : {}", indent1, summary.processes)?;
    writeln!(writer, "{}entries         : {}", indent1, summary.entries)?;
    writeln!(writer, "{}connections     : {}", indent1, summary.connections)?;
    writeln!(writer, "Program:")?;
    writeln!(writer, "{}elapsed         : {:?}", indent1, summary.elapsed)?;

    Ok(())
}

/// Print the `Summary` to stderr.
pub fn print_summary(summary: &Summary) {
    let stderr = std::io::stderr();
    let mut stderr_lock = stderr.lock();
    match write_summary(summary, &mut stderr_lock) {
        Ok(_) => {}
        Err(_err) => {
            de_err!("write_summary() error {}", _err);
        }
    }
}
