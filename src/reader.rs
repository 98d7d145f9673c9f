//! Line acquisition from a buffered byte stream.
//!
//! [`LineReader::read_line`] is the single suspension point of the session
//! loop: it blocks until a full line or end-of-stream is available. The line
//! buffer follows an explicit growth policy so that a hostile or accidental
//! flood of input cannot grow it without bound.

use std::io::BufRead;

use crate::error::ShellError;

/// Initial capacity of the line buffer, in bytes.
pub const LINE_BUF_MIN: usize = 64;
/// Hard cap on a single input line, in bytes.
pub const LINE_BUF_MAX: usize = 32768;

/// Outcome of one acquisition step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// A newline-terminated line. The newline is consumed, not stored.
    Line(String),
    /// The stream ended without a trailing newline; the accumulated bytes are
    /// still a complete command. Run it, then end the session cleanly.
    LastLine(String),
    /// The stream ended with nothing left to read.
    Eof,
}

/// Reads lines from a buffered byte stream with a growth-capped buffer.
pub struct LineReader<R> {
    input: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Acquire one line, blocking until a newline or end-of-stream arrives.
    ///
    /// The buffer starts at [`LINE_BUF_MIN`] bytes and doubles as needed up
    /// to [`LINE_BUF_MAX`], counted in raw input bytes. A line that would
    /// overflow the cap yields [`ShellError::LineTooLong`] with the rest of
    /// the oversized line drained from the stream, so the caller can keep
    /// reading at the next line boundary. Raw bytes are accumulated as-is
    /// and converted to a string once per line; non-UTF-8 bytes are replaced
    /// at that point, not rejected.
    pub fn read_line(&mut self) -> Result<LineRead, ShellError> {
        let mut buf: Vec<u8> = Vec::with_capacity(LINE_BUF_MIN);
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                return Ok(if buf.is_empty() {
                    LineRead::Eof
                } else {
                    LineRead::LastLine(into_line(buf))
                });
            }
            let (chunk, consumed) = match available.iter().position(|&b| b == b'\n') {
                Some(pos) => (&available[..pos], pos + 1),
                None => (available, available.len()),
            };
            if buf.len() + chunk.len() > LINE_BUF_MAX {
                let newline_seen = consumed > chunk.len();
                self.input.consume(consumed);
                if !newline_seen {
                    self.discard_to_newline()?;
                }
                return Err(ShellError::LineTooLong {
                    limit: LINE_BUF_MAX,
                });
            }
            ensure_room(&mut buf, chunk.len());
            buf.extend_from_slice(chunk);
            let newline_seen = consumed > chunk.len();
            self.input.consume(consumed);
            if newline_seen {
                return Ok(LineRead::Line(into_line(buf)));
            }
        }
    }

    /// Skip input through the next newline (or end-of-stream).
    fn discard_to_newline(&mut self) -> Result<(), ShellError> {
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.input.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.input.consume(len);
                }
            }
        }
    }
}

/// Convert one accumulated line exactly once, at the line boundary.
///
/// Converting whole lines rather than read chunks keeps multi-byte
/// characters that straddle a chunk boundary intact.
fn into_line(buf: Vec<u8>) -> String {
    String::from_utf8(buf)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Grow `buf` by doubling until it can hold `extra` more bytes.
///
/// Callers check the cap first; this only manages capacity.
fn ensure_room(buf: &mut Vec<u8>, extra: usize) {
    let needed = buf.len() + extra;
    let mut cap = buf.capacity().max(LINE_BUF_MIN);
    while cap < needed {
        cap *= 2;
    }
    if cap > buf.capacity() {
        buf.reserve_exact(cap - buf.len());
    }
}
