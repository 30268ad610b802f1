//! Core library for the `pws` CLI.
//!
//! This crate defines:
//! - Configuration loading & validation
//! - The station API client (one GET per run, no retries)
//! - Observation parsing and colorized report rendering
//!
//! It is used by `pws-cli`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod station;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{Imperial, Observation};
pub use report::current_report;
pub use station::{ObservationSource, PwsClient};
