//! Shared test utilities for the AHI composite workspace.
//!
//! Grid generators return plain row-major `Vec<f32>` so any crate can
//! wrap them in its own array type.
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod generators;

pub use generators::*;
