// src/data/connection.rs

//! Implement [`ConnectionRecord`], the fields taken from one log line about
//! one network connection.

use std::fmt;

/// A `ConnectionRecord` holds the four fields extracted from one matching
/// Sysmon network-connection log line by a [`ConnectionExtractor`].
///
/// The log labels these fields `SourceIp`, `SourcePort`, and
/// `SourceHostname`. They are reported as the destination of the
/// connection made by the process.
///
/// [`ConnectionExtractor`]: crate::readers::connectionextractor::ConnectionExtractor
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConnectionRecord {
    /// Full path of the process image, e.g. `C:\Windows\System32\svchost.exe`
    pub process: String,
    /// IPv4 or IPv6 text
    pub ip: String,
    /// Port digits
    pub port: String,
    /// May be empty
    pub hostname: String,
}

impl fmt::Debug for ConnectionRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("ConnectionRecord")
            .field("process", &self.process)
            .field("ip", &self.ip)
            .field("port", &self.port)
            .field("hostname", &self.hostname)
            .finish()
    }
}

impl fmt::Display for ConnectionRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{} {}:{} ({})", self.process, self.ip, self.port, self.hostname)
    }
}

impl ConnectionRecord {
    /// Create a new `ConnectionRecord`.
    pub fn new<S: Into<String>>(
        process: S,
        ip: S,
        port: S,
        hostname: S,
    ) -> ConnectionRecord {
        ConnectionRecord {
            process: process.into(),
            ip: ip.into(),
            port: port.into(),
            hostname: hostname.into(),
        }
    }
}

impl<S: Into<String>> From<(S, S, S, S)> for ConnectionRecord {
    fn from(tuple: (S, S, S, S)) -> Self {
        ConnectionRecord::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}
