// src/lib.rs

//! _Sysmon Connection Tally_ library, _sctlib_.
//!
//! Tallies network connections per process from a Sysmon network-connection
//! log forwarded as syslog.
//!
//! * [`readers`] read the file and extract connection fields from lines.
//! * [`data`] holds the extracted records and the frequency table that
//!   counts them.
//! * [`printer`] writes the report and the run summary.
//!
//! The binary program _sct_ drives these.

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
