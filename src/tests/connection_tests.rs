// src/tests/connection_tests.rs

//! tests for `connection.rs`

#![allow(non_snake_case)]

use crate::data::connection::ConnectionRecord;

use ::test_case::test_case;

#[test_case("p", "1.1.1.1", "80", "h", "p 1.1.1.1:80 (h)"; "simple")]
#[test_case(r"C:\a b\c.exe", "fe80::1", "443", "", r"C:\a b\c.exe fe80::1:443 ()"; "path and ipv6")]
fn test_ConnectionRecord_Display(process: &str, ip: &str, port: &str, hostname: &str, expect: &str) {
    let record = ConnectionRecord::new(process, ip, port, hostname);
    assert_eq!(record.to_string(), expect);
}

#[test]
fn test_ConnectionRecord_from_tuple() {
    let record: ConnectionRecord = ("p", "1.1.1.1", "80", "").into();
    assert_eq!(record, ConnectionRecord::new("p", "1.1.1.1", "80", ""));
    assert_eq!(record.process, "p");
    assert_eq!(record.ip, "1.1.1.1");
    assert_eq!(record.port, "80");
    assert_eq!(record.hostname, "");
}

#[test]
fn test_ConnectionRecord_Debug() {
    let record = ConnectionRecord::new("p", "1.1.1.1", "80", "h");
    assert_eq!(
        format!("{:?}", record),
        r#"ConnectionRecord { process: "p", ip: "1.1.1.1", port: "80", hostname: "h" }"#
    );
}
