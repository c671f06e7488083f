//! Core types for the bytembed resource embedder
//!
//! This crate provides the pieces shared by the embedder library and the
//! `embed` binary:
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use bytembed_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! assert!(config.schema.embed.chunk_size > 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

