//! Common utilities for selcat.
//!
//! This crate provides shared infrastructure used by the selcat front ends:
//! - **Warning System** - colored, deduplicated warnings on stderr

pub mod warning;
