//! Common utilities and types shared across the tfgen crates.
//!
//! This module provides the error type returned by every fallible
//! generator operation, and the seed type used to construct generators.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::Seed;
