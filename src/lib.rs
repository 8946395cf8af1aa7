//! Tablet database library - descriptors of graphics tablets and styli.
//!
//! This library exposes the core functionality of the `wdb` CLI: loading the
//! `*.tablet` descriptors and the stylus catalog of a data directory, and
//! resolving tablets by USB id, product name or device node.
//!
//! # Modules
//!
//! - `database`: Loading and lookups
//! - `model`: Device and stylus records
//! - `parser`: Descriptor file parsing
//! - `keyfile`: Reader for the `[group]` / `key=value` file format
//! - `device`: Device metadata abstraction (udev or fixed tables)
//! - `config`: Data directory and config file handling
//! - `error`: Error types with user-recoverable hints
//! - `output`: Output mode abstraction (robot/human)
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod database;
pub mod device;
pub mod error;
pub mod keyfile;
pub mod logging;
pub mod model;
pub mod output;
pub mod parser;
