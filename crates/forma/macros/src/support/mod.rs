//! Internal support utilities for the proc-macros.
//!
//! Attribute parsing, diagnostics, and input shape checks.

pub mod attrs;
pub mod diag;
pub mod utils;
