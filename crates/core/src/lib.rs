//! Core types for sf-deploy-hooks
//!
//! This is the foundation crate (Layer 0) that all other sfhooks crates
//! depend on. It provides the base error taxonomy and the shared `Result`
//! alias. This crate has no dependencies on other sfhooks crates.

pub mod error;

pub use error::{Error, Result};
