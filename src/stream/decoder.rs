// src/stream/decoder.rs

use serde_json::{Deserializer, Value};
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::errors::{Result, WatchdiffError};

const READ_CHUNK: usize = 8192;

/// Lazily decodes a byte stream of back-to-back JSON values with no framing
/// between them.
///
/// Bytes are buffered and parsed incrementally: a parse error that is
/// "unexpected end of input" just means more bytes are needed, anything else
/// is a malformed item. A malformed item yields exactly one error and the
/// decoder resyncs at the next plausible top-level object boundary, so one
/// bad chunk never takes down the rest of the stream.
pub struct StreamDecoder<R> {
    reader: R,
    buf: Vec<u8>,
    eof: bool,
}

enum Parsed {
    Value(Value, usize),
    Error(serde_json::Error),
    WhitespaceOnly,
}

impl<R: AsyncRead + Unpin> StreamDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            eof: false,
        }
    }

    /// Next decoded value, `None` once the stream is exhausted.
    ///
    /// The sequence is non-restartable; an `Err` item reports a single
    /// malformed or truncated chunk and the following call carries on at the
    /// resync point.
    pub async fn next_object(&mut self) -> Option<Result<Value>> {
        loop {
            if !self.buf.is_empty() {
                match self.try_parse() {
                    Parsed::Value(value, consumed) => {
                        self.buf.drain(..consumed);
                        return Some(Ok(value));
                    }
                    Parsed::Error(err) if err.is_eof() && !self.eof => {
                        // Incomplete object; fall through and read more.
                    }
                    Parsed::Error(err) if err.is_eof() => {
                        // Stream ended mid-object.
                        self.buf.clear();
                        return Some(Err(WatchdiffError::Decode(err)));
                    }
                    Parsed::Error(err) => {
                        self.resync(&err);
                        return Some(Err(WatchdiffError::Decode(err)));
                    }
                    Parsed::WhitespaceOnly => {
                        self.buf.clear();
                        if self.eof {
                            return None;
                        }
                    }
                }
            } else if self.eof {
                return None;
            }

            let mut chunk = [0u8; READ_CHUNK];
            match self.reader.read(&mut chunk).await {
                Ok(0) => {
                    self.eof = true;
                    if self.buf.is_empty() {
                        return None;
                    }
                }
                Ok(n) => self.buf.extend_from_slice(&chunk[..n]),
                Err(err) => {
                    // A read error ends the stream; report it once.
                    self.eof = true;
                    self.buf.clear();
                    return Some(Err(WatchdiffError::Io(err)));
                }
            }
        }
    }

    fn try_parse(&self) -> Parsed {
        let mut iter = Deserializer::from_slice(&self.buf).into_iter::<Value>();
        match iter.next() {
            Some(Ok(value)) => Parsed::Value(value, iter.byte_offset()),
            Some(Err(err)) => Parsed::Error(err),
            None => Parsed::WhitespaceOnly,
        }
    }

    /// Drop the malformed prefix: skip to the next `{` after the error
    /// position. A malformed chunk with nested objects may take a couple of
    /// attempts to skip past, each reported as its own item error.
    fn resync(&mut self, err: &serde_json::Error) {
        let at = error_offset(&self.buf, err).max(1);
        match self.buf[at.min(self.buf.len())..]
            .iter()
            .position(|b| *b == b'{')
        {
            Some(rel) => {
                let skip = at + rel;
                debug!(skipped_bytes = skip, "resynced after malformed chunk");
                self.buf.drain(..skip);
            }
            None => self.buf.clear(),
        }
    }
}

/// Approximate byte offset of a parse error from its 1-based line/column.
fn error_offset(buf: &[u8], err: &serde_json::Error) -> usize {
    let start = line_start(buf, err.line());
    (start + err.column().saturating_sub(1)).min(buf.len())
}

fn line_start(buf: &[u8], line: usize) -> usize {
    if line <= 1 {
        return 0;
    }
    let mut newlines = 0;
    for (i, b) in buf.iter().enumerate() {
        if *b == b'\n' {
            newlines += 1;
            if newlines == line - 1 {
                return i + 1;
            }
        }
    }
    buf.len()
}
