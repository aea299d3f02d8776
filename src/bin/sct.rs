// src/bin/sct.rs

//! Driver program _sct_ drives the [_sctlib_].
//!
//! Processes user-passed command-line arguments.
//! Then opens the passed log file and drives a [`TallyProcessor`] over every
//! line of it. Lines that are Sysmon network-connection events become
//! [`ConnectionRecord`]s which are counted in a [`FrequencyTable`].
//!
//! After the entire file is read, the `FrequencyTable` report is printed to
//! STDOUT. If the file cannot be opened or read then nothing is printed to
//! STDOUT.
//!
//! Lines that bear the detection marker but are missing fields are printed
//! to STDERR, one diagnostic line each, unless passed `--no-diagnostics`.
//!
//! If passed CLI option `--summary`, a [`Summary`] of the run is printed to
//! STDERR after the report.
//!
//! [_sctlib_]: sctlib
//! [`TallyProcessor`]: sctlib::readers::tallyprocessor::TallyProcessor
//! [`ConnectionRecord`]: sctlib::data::connection::ConnectionRecord
//! [`FrequencyTable`]: sctlib::data::frequencytable::FrequencyTable
//! [`Summary`]: sctlib::readers::summary::Summary

#![allow(non_camel_case_types)]

use std::io::Stderr;
use std::process::ExitCode;
use std::time::Instant;

use ::clap::Parser;
use ::const_format::concatcp;
use ::si_trace_print::stack::stack_offset_set;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use ::sctlib::common::FPath;
use ::sctlib::debug::printers::e_err;
use ::sctlib::printer::printers::write_stdout;
use ::sctlib::printer::summary::print_summary;
use ::sctlib::readers::connectionextractor::{
    DETECTION_MARKER,
    DIAGNOSTIC_PREFIX,
};
use ::sctlib::readers::tallyprocessor::TallyProcessor;

// --------------------
// command-line parsing

const CLI_HELP_AFTER: &str = concatcp!(
    r##"
Each line of PATH bearing the marker ""##, DETECTION_MARKER, r##"" is a candidate.
A candidate line yields a connection if the process "Image:" (followed by
"User:"), the "SourceIp:", and the "SourcePort:" are all found.
The "SourceHostname:" is optional.

Encoded line breaks "#015#012" and encoded tabs "#011" are treated as spaces.
Invalid UTF-8 is replaced and does not stop processing.

The report is printed to STDOUT, grouped by process, in order of first
appearance:

  <process image>
    <ip>:<port> (<hostname>) - <count> times

Candidate lines that do not yield a connection are printed to STDERR with
prefix ""##, DIAGNOSTIC_PREFIX, r##"".

---

Version: "##, env!("CARGO_PKG_VERSION"), r##"
MSRV: "##, env!("CARGO_PKG_RUST_VERSION"), r##"
License: "##, env!("CARGO_PKG_LICENSE"), r##"
Author: "##, env!("CARGO_PKG_AUTHORS"), r##"
"##,
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "sct",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(Sysmon Connection Tally)\n",
        "Version: ",
        env!("CARGO_PKG_VERSION_MAJOR"), ".",
        env!("CARGO_PKG_VERSION_MINOR"), ".",
        env!("CARGO_PKG_VERSION_PATCH"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of a Sysmon syslog file.
    #[clap(
        required = true,
        verbatim_doc_comment,
    )]
    path: String,

    /// Print a summary of the run to STDERR after the report.
    #[clap(
        short = 's',
        long,
        verbatim_doc_comment,
    )]
    summary: bool,

    /// Do not print diagnostics about candidate lines that did not yield a
    /// connection.
    #[clap(
        long,
        verbatim_doc_comment,
    )]
    no_diagnostics: bool,
}

/// Process user-passed CLI argument strings into expected types.
///
/// A missing or unknown argument prints the usage and exits with a non-zero
/// status (done by `clap`).
fn cli_process_args() -> (
    FPath,
    bool,
    bool,
) {
    let args = CLI_Args::parse();

    defo!("args {:?}", args);

    (
        FPath::from(args.path),
        args.summary,
        !args.no_diagnostics,
    )
}

// -------------------
// processing

/// Process the user-passed command-line arguments.
/// Run a `TallyProcessor` over the file.
/// Determine a process return code.
pub fn main() -> ExitCode {
    let start_time = Instant::now();
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let (
        path,
        cli_opt_summary,
        cli_opt_diagnostics,
    ) = cli_process_args();

    let mut processor: TallyProcessor<Stderr> = match TallyProcessor::new(path, std::io::stderr()) {
        Ok(val) => val,
        Err(err) => {
            e_err!("{}", err);
            defx!("return FAILURE");
            return ExitCode::FAILURE;
        }
    };
    processor.set_diagnostics_enabled(cli_opt_diagnostics);

    if let Err(err) = processor.process_file() {
        e_err!("{}", err);
        defx!("return FAILURE");
        return ExitCode::FAILURE;
    }

    let report: String = processor.table().render();
    write_stdout(report.as_bytes());

    if cli_opt_summary {
        let summary = processor.summary(start_time.elapsed());
        print_summary(&summary);
    }

    defx!("return SUCCESS");

    ExitCode::SUCCESS
}
