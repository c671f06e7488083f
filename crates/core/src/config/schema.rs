//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest accepted read chunk, in bytes.
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigSchema {
    /// Settings for the generated array declaration
    #[serde(default)]
    pub embed: EmbedConfig,
}

impl ConfigSchema {
    /// Check every section for out-of-range values
    pub fn validate(&self) -> Result<()> {
        self.embed.validate()
    }
}

/// How the `<symbol>_len` constant is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthStyle {
    /// `sizeof(<symbol>)`, computed by the C compiler
    #[default]
    Sizeof,
    /// The byte count written as an integer literal
    Literal,
}

/// Array generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EmbedConfig {
    /// Bytes requested from the resource per read
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Byte literals per generated source line
    #[serde(default = "default_entries_per_line")]
    pub entries_per_line: usize,

    /// Form of the length constant
    #[serde(default)]
    pub length: LengthStyle,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            entries_per_line: default_entries_per_line(),
            length: LengthStyle::default(),
        }
    }
}

impl EmbedConfig {
    /// Reject values the embedder cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(Error::invalid_config_value(
                "embed.chunk_size",
                format!("{} is outside 1..={MAX_CHUNK_SIZE}", self.chunk_size),
            ));
        }
        if self.entries_per_line == 0 {
            return Err(Error::invalid_config_value(
                "embed.entries_per_line",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_chunk_size() -> usize {
    256
}

fn default_entries_per_line() -> usize {
    10
}
