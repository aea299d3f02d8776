// src/tests/mod.rs

//! Tests for _sctlib_.
//!
//! Tests are placed at `src/tests/`, inside the `sctlib`, for crate-internal
//! visibility. End-to-end tests of the _sct_ binary are at top-level path
//! `tests/`.

pub mod common;
pub mod connection_tests;
