//! Streaming C byte-array formatter.

use bytembed_core::config::{EmbedConfig, LengthStyle};
use std::io::{self, Write};

/// Writes one `static const char <symbol>[]` declaration incrementally.
///
/// Created with [`ArrayEmitter::begin`], fed with [`ArrayEmitter::push`] as
/// bytes arrive, and closed with [`ArrayEmitter::finish`]. The emitter never
/// holds more than one pushed slice worth of formatted text.
///
/// ```
/// use bytembed_embedder::{ArrayEmitter, EmbedConfig};
///
/// let mut emitter = ArrayEmitter::begin(Vec::new(), "icon_png", &EmbedConfig::default()).unwrap();
/// emitter.push(&[0x89, 0x50, 0x4e, 0x47]).unwrap();
/// let (out, len) = emitter.finish().unwrap();
///
/// assert_eq!(len, 4);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "static const char icon_png[] = {\n0x89, 0x50, 0x4e, 0x47, \n};\n\
///      static const size_t icon_png_len = sizeof(icon_png);\n\n"
/// );
/// ```
#[derive(Debug)]
pub struct ArrayEmitter<W: Write> {
    out: W,
    symbol: String,
    entries_per_line: usize,
    length: LengthStyle,
    /// Entries on the current line; reset at every line break.
    line_fill: usize,
    /// Bytes pushed so far. Independent of `line_fill`.
    total: u64,
    scratch: Vec<u8>,
}

impl<W: Write> ArrayEmitter<W> {
    /// Write the declaration header and return an emitter ready for bytes.
    ///
    /// `symbol` is used verbatim; the caller is responsible for it being a
    /// valid C identifier.
    pub fn begin(mut out: W, symbol: &str, config: &EmbedConfig) -> io::Result<Self> {
        writeln!(out, "static const char {symbol}[] = {{")?;
        Ok(Self {
            out,
            symbol: symbol.to_string(),
            entries_per_line: config.entries_per_line.max(1),
            length: config.length,
            line_fill: 0,
            total: 0,
            scratch: Vec::new(),
        })
    }

    /// Append `bytes` as `0x..` entries, breaking lines as groups fill up.
    pub fn push(&mut self, bytes: &[u8]) -> io::Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }

        let digits = hex::encode(bytes);
        self.scratch.clear();
        self.scratch.reserve(bytes.len() * 6 + bytes.len() / self.entries_per_line + 1);

        for pair in digits.as_bytes().chunks_exact(2) {
            self.scratch.extend_from_slice(b"0x");
            self.scratch.extend_from_slice(pair);
            self.scratch.extend_from_slice(b", ");
            self.line_fill += 1;
            if self.line_fill == self.entries_per_line {
                self.scratch.push(b'\n');
                self.line_fill = 0;
            }
        }

        self.out.write_all(&self.scratch)?;
        self.total += bytes.len() as u64;
        Ok(())
    }

    /// Number of bytes pushed so far.
    pub fn len(&self) -> u64 {
        self.total
    }

    /// True until the first non-empty push.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Close the array, write the length constant, and hand back the writer.
    ///
    /// Returns the writer together with the number of bytes embedded. The
    /// writer is not flushed.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        if self.line_fill > 0 {
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(b"};\n")?;

        let symbol = &self.symbol;
        match self.length {
            LengthStyle::Sizeof => {
                writeln!(self.out, "static const size_t {symbol}_len = sizeof({symbol});")?;
            }
            LengthStyle::Literal => {
                writeln!(self.out, "static const size_t {symbol}_len = {};", self.total)?;
            }
        }
        self.out.write_all(b"\n")?;

        Ok((self.out, self.total))
    }
}
