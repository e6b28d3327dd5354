//! Application layer - Record intake and circulation
//!
//! This layer turns untyped input into domain entities under a configured
//! policy. It depends on domain but performs no output of its own.

pub mod config;
pub mod records;
pub mod services;

pub use config::*;
pub use records::*;
pub use services::*;
