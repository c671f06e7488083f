//! Configuration loading and schema definitions
//!
//! Settings that shape the generated declarations, read from an optional
//! `.bytembed.toml` file.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
