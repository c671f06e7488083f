//! CLI utilities for bytembed tools
//!
//! Provides shared terminal output:
//! - Status messages
//! - Size formatting

#![warn(missing_docs)]

pub mod output;
