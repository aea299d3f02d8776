// src/data/frequencytable.rs

//! Implements a [`FrequencyTable`], the nested count of connections
//! per process, IP, port, and hostname.

use std::fmt;

use ::indexmap::IndexMap;
#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use crate::common::{
    Count,
    NLs,
};
use crate::data::connection::ConnectionRecord;

/// hostname → count
pub type MapHostnameCount = IndexMap<String, Count>;
/// port → hostname → count
pub type MapPortHostname = IndexMap<String, MapHostnameCount>;
/// IP → port → hostname → count
pub type MapIpPort = IndexMap<String, MapPortHostname>;
/// process → IP → port → hostname → count
pub type MapProcessIp = IndexMap<String, MapIpPort>;

/// One leaf of a [`FrequencyTable`];
/// `(process, ip, port, hostname, count)`.
pub type Entry<'a> = (&'a str, &'a str, &'a str, &'a str, Count);

/// A four-level count of [`ConnectionRecord`]s keyed by
/// process → IP → port → hostname.
///
/// Every level keeps keys in order of first insertion so the rendered report
/// is deterministic and follows the order of the log. Nothing is ever
/// removed; every leaf count is the number of records accumulated with
/// that exact key path.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    processes: MapProcessIp,
}

impl fmt::Debug for FrequencyTable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("FrequencyTable")
            .field("processes", &self.len_processes())
            .field("entries", &self.len_entries())
            .field("total", &self.total())
            .finish()
    }
}

impl FrequencyTable {
    pub fn new() -> FrequencyTable {
        FrequencyTable::default()
    }

    /// Count one more occurrence of `record`. Missing levels are created with
    /// a count of zero before the increment.
    ///
    /// Returns the updated count for the record's key path.
    pub fn accumulate(
        &mut self,
        record: ConnectionRecord,
    ) -> Count {
        defn!("({:?})", record);
        let ConnectionRecord { process, ip, port, hostname } = record;
        let count: &mut Count = self
            .processes
            .entry(process)
            .or_default()
            .entry(ip)
            .or_default()
            .entry(port)
            .or_default()
            .entry(hostname)
            .or_default();
        *count += 1;
        defx!("return {}", *count);

        *count
    }

    /// The count for the exact key path, or `0` if never seen.
    pub fn count(
        &self,
        process: &str,
        ip: &str,
        port: &str,
        hostname: &str,
    ) -> Count {
        self.processes
            .get(process)
            .and_then(|ips| ips.get(ip))
            .and_then(|ports| ports.get(port))
            .and_then(|hostnames| hostnames.get(hostname))
            .copied()
            .unwrap_or(0)
    }

    /// Count of distinct processes.
    pub fn len_processes(&self) -> usize {
        self.processes.len()
    }

    /// Count of distinct `(process, ip, port, hostname)` leaves.
    pub fn len_entries(&self) -> usize {
        self.iter_entries().count()
    }

    /// Sum of all leaf counts, i.e. the number of records accumulated.
    pub fn total(&self) -> Count {
        self.iter_entries()
            .map(|(_, _, _, _, count)| count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Processes in order of first appearance.
    pub fn processes(&self) -> impl Iterator<Item = &str> {
        self.processes.keys().map(String::as_str)
    }

    /// All leaves, depth-first, each level in order of first appearance.
    pub fn iter_entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.processes.iter().flat_map(|(process, ips)| {
            ips.iter().flat_map(move |(ip, ports)| {
                ports.iter().flat_map(move |(port, hostnames)| {
                    hostnames.iter().map(move |(hostname, count)| {
                        (
                            process.as_str(),
                            ip.as_str(),
                            port.as_str(),
                            hostname.as_str(),
                            *count,
                        )
                    })
                })
            })
        })
    }

    /// Render the grouped report.
    ///
    /// For each process, the process name on its own line, then one
    /// indented line per `(ip, port, hostname)` beneath it
    ///
    /// ```text
    ///   {ip}:{port} ({hostname}) - {count} times
    /// ```
    ///
    /// then a blank line. No sorting; order is first appearance.
    pub fn render(&self) -> String {
        defn!("processes {}", self.len_processes());
        let mut buffer = String::with_capacity(self.len_processes() * 128);
        for (process, ips) in self.processes.iter() {
            buffer.push_str(process);
            buffer.push_str(NLs);
            for (ip, ports) in ips.iter() {
                for (port, hostnames) in ports.iter() {
                    for (hostname, count) in hostnames.iter() {
                        buffer.push_str(&format!("  {}:{} ({}) - {} times\n", ip, port, hostname, count));
                    }
                }
            }
            buffer.push_str(NLs);
        }
        defx!("return {} bytes", buffer.len());

        buffer
    }
}

impl Extend<ConnectionRecord> for FrequencyTable {
    fn extend<I: IntoIterator<Item = ConnectionRecord>>(&mut self, iter: I) {
        for record in iter {
            self.accumulate(record);
        }
    }
}

impl FromIterator<ConnectionRecord> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = ConnectionRecord>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);

        table
    }
}
