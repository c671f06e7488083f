//! Binary resource embedding for C sources.
//!
//! This crate provides:
//! - A streaming formatter that turns bytes into a `static const char[]`
//!   initializer plus a `<symbol>_len` constant
//! - Chunked conversion from any reader
//! - The file-level `embed` operation used by the `embed` binary
//!
//! Output is appended, so several resources can be collected into a single
//! generated source file by running the operation once per resource.

#![warn(missing_docs)]

mod embed;
mod emitter;
mod error;

pub use bytembed_core::config::{EmbedConfig, LengthStyle};
pub use embed::{embed, embed_reader, EmbedSummary};
pub use emitter::ArrayEmitter;
pub use error::{EmbedError, Result};
