//! Infrastructure layer: adapters for config, seed data, and logging.

pub mod config;
pub mod contracts;
pub mod error;
pub mod logging;
pub mod seed;
#[cfg(test)]
pub mod stubs;
