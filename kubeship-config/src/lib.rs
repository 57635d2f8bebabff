//! Configuration management for the kubeship provisioner.
//!
//! Provides environment detection, layered configuration loading from YAML
//! files and environment variables, and the validated configuration types
//! shared by the provisioner binary and library crates.

mod environment;
mod load;
pub mod shared;

pub use environment::*;
pub use load::*;
