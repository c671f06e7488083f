//! Chunked resource conversion and the file-level embed operation.

use crate::emitter::ArrayEmitter;
use crate::error::{EmbedError, Result};
use bytembed_core::config::EmbedConfig;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Outcome of a successful [`embed`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSummary {
    /// Identifier the declarations were named after
    pub symbol: String,
    /// File the declarations were appended to
    pub output: PathBuf,
    /// Number of bytes embedded; the value of `<symbol>_len`
    pub bytes: u64,
}

/// Stream `reader` into a declaration named `symbol` written to `writer`.
///
/// The resource is read `config.chunk_size` bytes at a time, so memory use
/// does not grow with the resource. Returns the number of bytes embedded.
/// The writer is not flushed.
pub fn embed_reader<R: Read, W: Write>(
    symbol: &str,
    reader: R,
    writer: W,
    config: &EmbedConfig,
) -> Result<u64> {
    stream(symbol, reader, writer, config, None, None).map(|(_, bytes)| bytes)
}

/// Append the declarations for `input` to `output`.
///
/// The input is opened first; if that fails the output is left untouched and
/// not created. The output is opened in append mode, so repeated calls against
/// one path collect one declaration per call, in call order.
///
/// Both files are closed on every return path. A failure after the output was
/// opened may leave a partial declaration behind.
pub fn embed(
    symbol: &str,
    input: &Path,
    output: &Path,
    config: &EmbedConfig,
) -> Result<EmbedSummary> {
    let source = open_resource(input).map_err(|source| EmbedError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    debug!(path = %input.display(), "opened resource");

    let sink = OpenOptions::new()
        .append(true)
        .create(true)
        .open(output)
        .map_err(|source| EmbedError::OpenOutput {
            path: output.to_path_buf(),
            source,
        })?;
    debug!(path = %output.display(), "opened output for append");

    let (mut sink, bytes) = stream(
        symbol,
        source,
        BufWriter::new(sink),
        config,
        Some(input),
        Some(output),
    )?;
    sink.flush().map_err(|e| EmbedError::write(Some(output), e))?;

    info!(
        symbol,
        bytes,
        output = %output.display(),
        "appended byte array"
    );

    Ok(EmbedSummary {
        symbol: symbol.to_string(),
        output: output.to_path_buf(),
        bytes,
    })
}

/// Open `path` for reading, refusing directories.
///
/// `File::open` succeeds on a directory on Unix and only the first read
/// fails, which would be after the output has been opened.
fn open_resource(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(io::ErrorKind::IsADirectory, "Is a directory"));
    }
    Ok(file)
}

fn stream<R: Read, W: Write>(
    symbol: &str,
    mut reader: R,
    writer: W,
    config: &EmbedConfig,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(W, u64)> {
    let write_err = |e: io::Error| EmbedError::write(output, e);

    let mut emitter = ArrayEmitter::begin(writer, symbol, config).map_err(write_err)?;
    let mut buf = vec![0u8; config.chunk_size.max(1)];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(EmbedError::read(input, e)),
        };
        trace!(chunk = n, total = emitter.len() + n as u64, "read chunk");
        emitter.push(&buf[..n]).map_err(write_err)?;
    }

    emitter.finish().map_err(write_err)
}
