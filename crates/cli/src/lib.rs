//! Fairway CLI - drive the clubhouse ordering flow from a terminal.
//!
//! The binary (`fairway`) is a thin `clap` layer over the modules here:
//! - [`config`] - Environment configuration
//! - [`store`] - JSON file store for the checkout hand-off
//! - [`catalog_file`] - YAML catalog overrides
//! - [`commands`] - `catalog`, `quote` and `checkout`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog_file;
pub mod commands;
pub mod config;
pub mod store;

pub use config::{CliConfig, ConfigError};
pub use store::JsonFileStore;
