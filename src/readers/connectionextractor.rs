// src/readers/connectionextractor.rs

//! Implements a [`ConnectionExtractor`], the driver of deriving
//! [`ConnectionRecord`s] from lines of a Sysmon network-connection log.
//!
//! Each field is found by its own labeled-field matcher. A line is
//! first normalized; encoded line breaks `#015#012` and encoded tabs `#011`
//! (an artifact of syslog forwarding) become a single space.
//!
//! A line is a candidate only if it contains the detection marker
//! `SourceIp`. A candidate becomes a record only if the process image, IP,
//! and port are all found. The hostname is optional.
//!
//! The log field labels are `SourceIp`, `SourcePort`, `SourceHostname`.
//! They are matched literally, though the report calls them the destination.
//!
//! [`ConnectionRecord`s]: crate::data::connection::ConnectionRecord

use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use ::const_format::concatcp;
use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use crate::common::Count;
use crate::data::connection::ConnectionRecord;
use crate::de_err;
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// labels and patterns
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Encoded carriage return + line feed
pub const ENCODED_CRLF: &str = "#015#012";
/// Encoded tab
pub const ENCODED_TAB: &str = "#011";
/// Replacement for [`ENCODED_CRLF`] and [`ENCODED_TAB`]
pub const ENCODED_REPLACEMENT: &str = " ";

/// Detection marker; lines without it are never candidates.
pub const DETECTION_MARKER: &str = "SourceIp";

pub const LABEL_IMAGE: &str = "Image:";
pub const LABEL_USER: &str = "User:";
pub const LABEL_IP: &str = "SourceIp:";
pub const LABEL_PORT: &str = "SourcePort:";
pub const LABEL_HOSTNAME: &str = "SourceHostname:";

/// Prefix of a diagnostic line written for a candidate line that did not
/// yield a record.
pub const DIAGNOSTIC_PREFIX: &str = "Debug: No match found - ";

/// Capture Group Name for the process image
const CGN_PROCESS: &str = "process";
/// Capture Group Name for the IP
const CGN_IP: &str = "ip";
/// Capture Group Name for the port
const CGN_PORT: &str = "port";
/// Capture Group Name for the hostname
const CGN_HOSTNAME: &str = "hostname";

/// Image text is everything up to the nearest following whitespace + `User:`.
const PATTERN_PROCESS: &str = concatcp!(
    LABEL_IMAGE, r"\s*(?P<", CGN_PROCESS, r">.+?)\s+", LABEL_USER
);
/// Hex digits, colons, and periods; IPv4 or IPv6 text.
const PATTERN_IP: &str = concatcp!(
    LABEL_IP, r"\s*(?P<", CGN_IP, r">[a-fA-F0-9:.]+)"
);
const PATTERN_PORT: &str = concatcp!(
    LABEL_PORT, r"\s*(?P<", CGN_PORT, r">\d+)"
);
/// The capture group is optional; a bare label matches with no capture.
const PATTERN_HOSTNAME: &str = concatcp!(
    LABEL_HOSTNAME, r"\s*(?P<", CGN_HOSTNAME, r">\S+)?"
);

lazy_static! {
    static ref REGEX_PROCESS: Regex = {
        defñ!("lazy_static! REGEX_PROCESS::new()");

        Regex::new(PATTERN_PROCESS).unwrap()
    };
    static ref REGEX_IP: Regex = {
        defñ!("lazy_static! REGEX_IP::new()");

        Regex::new(PATTERN_IP).unwrap()
    };
    static ref REGEX_PORT: Regex = {
        defñ!("lazy_static! REGEX_PORT::new()");

        Regex::new(PATTERN_PORT).unwrap()
    };
    static ref REGEX_HOSTNAME: Regex = {
        defñ!("lazy_static! REGEX_HOSTNAME::new()");

        Regex::new(PATTERN_HOSTNAME).unwrap()
    };
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// labeled-field extractors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Replace encoded line breaks and encoded tabs with a space.
///
/// Borrows `line` when there is nothing to replace.
pub fn normalize(line: &str) -> Cow<'_, str> {
    if !line.contains(ENCODED_CRLF) && !line.contains(ENCODED_TAB) {
        return Cow::Borrowed(line);
    }

    Cow::Owned(
        line.replace(ENCODED_CRLF, ENCODED_REPLACEMENT)
            .replace(ENCODED_TAB, ENCODED_REPLACEMENT)
    )
}

/// Does `line` contain the [`DETECTION_MARKER`]?
#[inline(always)]
pub fn has_detection_marker(line: &str) -> bool {
    line.contains(DETECTION_MARKER)
}

/// Return the first capture of group `name` of `regex` within `line`.
fn capture_first<'a>(
    regex: &Regex,
    name: &str,
    line: &'a str,
) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|captures| captures.name(name))
        .map(|match_| match_.as_str())
}

/// Text after `Image:` up to the following ` User:`, trimmed.
///
/// `None` if there is no `User:` after `Image:`.
pub fn extract_process(line: &str) -> Option<&str> {
    capture_first(&REGEX_PROCESS, CGN_PROCESS, line).map(str::trim)
}

/// Hex digits, colons, and periods after `SourceIp:`.
pub fn extract_ip(line: &str) -> Option<&str> {
    capture_first(&REGEX_IP, CGN_IP, line).map(str::trim)
}

/// Digits after `SourcePort:`.
pub fn extract_port(line: &str) -> Option<&str> {
    capture_first(&REGEX_PORT, CGN_PORT, line)
}

/// Non-whitespace run after `SourceHostname:`, else `""`.
///
/// When the hostname is empty the next label may be captured instead;
/// a captured `SourcePort:` is returned as `""`.
pub fn extract_hostname(line: &str) -> &str {
    match capture_first(&REGEX_HOSTNAME, CGN_HOSTNAME, line) {
        Some(LABEL_PORT) => "",
        Some(hostname) => hostname.trim(),
        None => "",
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// line extraction
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Result of [`extract_connection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineExtract {
    /// The line does not contain the [`DETECTION_MARKER`]
    NoMarker,
    /// The line contains the [`DETECTION_MARKER`] but the process image, IP,
    /// or port was not found
    Incomplete,
    /// A complete record
    Found(ConnectionRecord),
}

impl LineExtract {
    pub const fn is_found(&self) -> bool {
        matches!(self, LineExtract::Found(_))
    }

    pub fn record(self) -> Option<ConnectionRecord> {
        match self {
            LineExtract::Found(record) => Some(record),
            LineExtract::NoMarker | LineExtract::Incomplete => None,
        }
    }
}

/// Extract a [`ConnectionRecord`] from one log line.
///
/// Pure; the result depends only on `line`.
pub fn extract_connection(line: &str) -> LineExtract {
    defn!("({:?})", str_to_String_noraw(line));
    let line: Cow<'_, str> = normalize(line);
    if !has_detection_marker(&line) {
        defx!("return NoMarker");
        return LineExtract::NoMarker;
    }
    let process: Option<&str> = extract_process(&line);
    let ip: Option<&str> = extract_ip(&line);
    let port: Option<&str> = extract_port(&line);
    defo!("process {:?}, ip {:?}, port {:?}", process, ip, port);
    let (process, ip, port) = match (process, ip, port) {
        (Some(process), Some(ip), Some(port)) => (process, ip, port),
        _ => {
            defx!("return Incomplete");
            return LineExtract::Incomplete;
        }
    };
    let hostname: &str = extract_hostname(&line);
    let record = ConnectionRecord::new(process, ip, port, hostname);
    defx!("return Found({:?})", record);

    LineExtract::Found(record)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ConnectionExtractor
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Statistics of a [`ConnectionExtractor`], for CLI option `--summary`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SummaryConnectionExtractor {
    /// `Count` of lines passed to `extract`
    pub lines_processed: Count,
    /// `Count` of lines with the detection marker
    pub lines_marker: Count,
    /// `Count` of records returned
    pub records_found: Count,
    /// `Count` of lines with the detection marker but no record
    pub lines_incomplete: Count,
    /// `Count` of diagnostic lines written
    pub diagnostics_written: Count,
}

/// Wraps [`extract_connection`] with a diagnostic writer and statistics.
///
/// For each line with the detection marker that does not yield a record,
/// one diagnostic line
///
/// ```text
/// Debug: No match found - {line}
/// ```
///
/// is written, with the line as passed. Diagnostics never change the
/// returned result.
pub struct ConnectionExtractor<W: Write> {
    diagnostics: W,
    diagnostics_enabled: bool,
    summary: SummaryConnectionExtractor,
}

impl<W: Write> fmt::Debug for ConnectionExtractor<W> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("ConnectionExtractor")
            .field("diagnostics_enabled", &self.diagnostics_enabled)
            .field("summary", &self.summary)
            .finish()
    }
}

impl<W: Write> ConnectionExtractor<W> {
    /// Create a new `ConnectionExtractor` writing diagnostics to
    /// `diagnostics`.
    pub fn new(diagnostics: W) -> ConnectionExtractor<W> {
        ConnectionExtractor {
            diagnostics,
            diagnostics_enabled: true,
            summary: SummaryConnectionExtractor::default(),
        }
    }

    /// Enable or disable writing of diagnostic lines.
    pub fn set_diagnostics_enabled(&mut self, enabled: bool) {
        defñ!("({})", enabled);
        self.diagnostics_enabled = enabled;
    }

    pub const fn diagnostics_enabled(&self) -> bool {
        self.diagnostics_enabled
    }

    /// Extract a [`ConnectionRecord`] from one log line, or `None`.
    pub fn extract(&mut self, line: &str) -> Option<ConnectionRecord> {
        self.summary.lines_processed += 1;
        match extract_connection(line) {
            LineExtract::Found(record) => {
                self.summary.lines_marker += 1;
                self.summary.records_found += 1;

                Some(record)
            }
            LineExtract::Incomplete => {
                self.summary.lines_marker += 1;
                self.summary.lines_incomplete += 1;
                self.write_diagnostic(line);

                None
            }
            LineExtract::NoMarker => None,
        }
    }

    fn write_diagnostic(&mut self, line: &str) {
        if !self.diagnostics_enabled {
            return;
        }
        match writeln!(self.diagnostics, "{}{}", DIAGNOSTIC_PREFIX, line) {
            Ok(_) => {
                self.summary.diagnostics_written += 1;
            }
            Err(_err) => {
                de_err!("writeln!(diagnostics) error {}", _err);
            }
        }
    }

    pub const fn summary(&self) -> SummaryConnectionExtractor {
        self.summary
    }

    /// Consume `self`, returning the diagnostic writer.
    pub fn into_inner(self) -> W {
        self.diagnostics
    }
}
