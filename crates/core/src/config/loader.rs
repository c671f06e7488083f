//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed and validated settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// Without an explicit path the current directory is searched; if no
    /// candidate exists the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        schema.validate().context(match &config_path {
            Some(p) => format!("Loading {}", p.display()),
            None => "Using built-in defaults".to_string(),
        })?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [".bytembed.toml", "bytembed.toml", ".config/bytembed.toml"];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config_not_found(path).with_source(e))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LengthStyle;
    use crate::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.embed.entries_per_line, 10);
    }

    #[test]
    fn test_load_explicit_file() {
        let file = config_file("[embed]\nchunk_size = 4096\nlength = \"literal\"\n");
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.path.as_deref(), Some(file.path()));
        assert_eq!(config.schema.embed.chunk_size, 4096);
        assert_eq!(config.schema.embed.entries_per_line, 10);
        assert_eq!(config.schema.embed.length, LengthStyle::Literal);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_malformed_file() {
        let file = config_file("[embed\nchunk_size = ");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = config_file("[embed]\nbytes_per_row = 8\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_invalid_value_rejected() {
        let file = config_file("[embed]\nentries_per_line = 0\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }
}
