//! Shared primitives: errors, timestamps, configuration, table rendering.

pub mod config;
pub mod error;
pub mod table;
pub mod time;
