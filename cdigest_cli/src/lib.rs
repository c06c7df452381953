//! Command line front end for `cdigest_core`
//!
//! The binary lives in `main.rs`; configuration, output formatting and
//! terminal detection are exposed here so integration tests can reach them.

pub mod config;
pub mod output;
pub mod terminal;
