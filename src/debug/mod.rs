// src/debug/mod.rs

//! The `debug` module is functions for printing errors and warnings, and
//! helpers for debug builds and test builds.

#[cfg(test)]
pub mod helpers;

pub mod printers;
