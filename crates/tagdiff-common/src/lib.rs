//! Common utilities for tagdiff.
//!
//! This crate provides shared infrastructure used by every pipeline stage:
//! - **Warning System** - colored, de-duplicated terminal diagnostics

pub mod warning;
