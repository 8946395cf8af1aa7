//! Common test utilities for the wdb crate.
//!
//! - `fixtures`: data directories with tablet descriptors and a stylus catalog
//! - `cli`: helpers for running the `wdb` binary
#![allow(dead_code)]

pub mod cli;
pub mod fixtures;

use tracing_subscriber::EnvFilter;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
