// src/tests/common.rs

//! Common data for tests.

#![allow(non_upper_case_globals)]

use crate::data::connection::ConnectionRecord;

use ::lazy_static::lazy_static;

/// Short line with every field in order.
pub const LINE_SHORT: &str = r"Oct 18 09:12:01 ws1 Sysmon: Image: C:\a\b.exe User: SYS SourceIp: 10.0.0.5 SourcePort: 443 SourceHostname: host1";

/// [`LINE_SHORT`] with an encoded line break before ` User:`.
pub const LINE_SHORT_CRLF: &str = r"Oct 18 09:12:01 ws1 Sysmon: Image: C:\a\b.exe#015#012 User: SYS SourceIp: 10.0.0.5 SourcePort: 443 SourceHostname: host1";

/// Sysmon event ID 3 as forwarded by rsyslog, fields separated by encoded
/// line breaks.
pub const LINE_SYSMON_SVCHOST: &str = r"Oct 18 09:12:03 ws1 Microsoft-Windows-Sysmon[2604]: Network connection detected:#015#012RuleName: -#015#012UtcTime: 2024-10-18 09:12:02.113#015#012ProcessGuid: {5b1a7f0e-3c2a-6711-1a00-000000000700}#015#012ProcessId: 1244#015#012Image: C:\Windows\System32\svchost.exe#015#012User: NT AUTHORITY\NETWORK SERVICE#015#012Protocol: udp#015#012Initiated: true#015#012SourceIsIpv6: false#015#012SourceIp: 192.168.1.20#015#012SourceHostname: ws1.corp.example#015#012SourcePort: 53#015#012SourcePortName: domain#015#012DestinationIsIpv6: false#015#012DestinationIp: 192.168.1.1#015#012DestinationHostname: -#015#012DestinationPort: 53#015#012DestinationPortName: domain";

/// Sysmon event ID 3 with an IPv6 address, an empty hostname, and encoded tabs.
pub const LINE_SYSMON_CHROME_V6: &str = r"Oct 18 09:12:04 ws1 Microsoft-Windows-Sysmon[2604]: Network connection detected:#015#012Image: C:\Program Files\Google\Chrome\Application\chrome.exe#015#012User: CORP\alice#015#012Protocol: tcp#015#012SourceIsIpv6: true#015#012SourceIp:#011fe80::1c2d:3e4f:5a6b:7c8d#015#012SourceHostname: #015#012SourcePort: 50512#015#012DestinationIp: 2606:4700::6810:84e5#015#012DestinationPort: 443";

/// Sysmon event ID 3 without a `SourceHostname:` label.
pub const LINE_SYSMON_NO_HOSTNAME: &str = r"Oct 18 09:12:05 ws1 Microsoft-Windows-Sysmon[2604]: Network connection detected:#015#012Image: C:\Windows\System32\lsass.exe#015#012User: NT AUTHORITY\SYSTEM#015#012SourceIp: 10.1.2.3#015#012SourcePort: 389";

/// Has the marker but no `Image:`/`User:` pair.
pub const LINE_MARKER_NO_IMAGE: &str = r"Oct 18 09:12:06 ws1 Microsoft-Windows-Sysmon[2604]: SourceIp: 10.0.0.9 SourcePort: 80";

/// Has the marker and `Image:` but no `User:`.
pub const LINE_MARKER_NO_USER: &str = r"Oct 18 09:12:07 ws1 Sysmon: Image: C:\x.exe SourceIp: 10.0.0.9 SourcePort: 80";

/// Has the marker but the port is not digits.
pub const LINE_MARKER_BAD_PORT: &str = r"Oct 18 09:12:08 ws1 Sysmon: Image: C:\x.exe User: SYS SourceIp: 10.0.0.9 SourcePort: -";

/// Has the marker but the IP is not hex, colon, or period characters.
pub const LINE_MARKER_BAD_IP: &str = r"Oct 18 09:12:09 ws1 Sysmon: Image: C:\x.exe User: SYS SourceIp: - SourcePort: 80";

/// Sysmon process creation event; no marker.
pub const LINE_NO_MARKER: &str = r"Oct 18 09:12:10 ws1 Microsoft-Windows-Sysmon[2604]: Process Create:#015#012Image: C:\Windows\System32\cmd.exe#015#012User: CORP\alice#015#012CommandLine: cmd.exe /c dir";

/// Ordinary syslog line.
pub const LINE_SYSLOG: &str = "Oct 18 09:12:11 ws1 sshd[311]: Accepted publickey for alice from 10.0.0.3 port 51812 ssh2";

lazy_static! {
    pub static ref RECORD_SHORT: ConnectionRecord = ConnectionRecord::new(
        r"C:\a\b.exe",
        "10.0.0.5",
        "443",
        "host1",
    );
    pub static ref RECORD_SYSMON_SVCHOST: ConnectionRecord = ConnectionRecord::new(
        r"C:\Windows\System32\svchost.exe",
        "192.168.1.20",
        "53",
        "ws1.corp.example",
    );
    pub static ref RECORD_SYSMON_CHROME_V6: ConnectionRecord = ConnectionRecord::new(
        r"C:\Program Files\Google\Chrome\Application\chrome.exe",
        "fe80::1c2d:3e4f:5a6b:7c8d",
        "50512",
        "",
    );
    pub static ref RECORD_SYSMON_NO_HOSTNAME: ConnectionRecord = ConnectionRecord::new(
        r"C:\Windows\System32\lsass.exe",
        "10.1.2.3",
        "389",
        "",
    );
}
