//! Integration tests for the tablet database.
//!
//! These tests load real data directories written to temp dirs and resolve
//! tablets through fixed device metadata, without udev.
//!
//! # Modules
//!
//! - `database_loading`: Loading descriptor directories and the stylus catalog
//! - `resolver`: Lookups by match key, USB id, name and device node
//! - `settings`: Data directory and config file resolution

mod common;

#[path = "integration/database_loading.rs"]
mod database_loading;

#[path = "integration/resolver.rs"]
mod resolver;

#[path = "integration/settings.rs"]
mod settings;
