//! Layout of a four-line FASTQ record.

use anyhow::{Context, Result};
use std::io::BufRead;

/// Leading byte of an identifier line.
pub const SENTINEL: u8 = b'@';

/// Lines per record, identifier line included.
pub const RECORD_LINES: usize = 4;

/// Payload lines following the identifier line (sequence, separator, quality).
pub const BODY_LINES: usize = RECORD_LINES - 1;

/// Returns the identifier of `line`, or `None` if it is not an identifier line.
///
/// The identifier is the first whitespace-delimited token, sentinel included.
pub fn identifier(line: &[u8]) -> Option<&[u8]> {
    if line.first() != Some(&SENTINEL) {
        return None;
    }

    let end = line
        .iter()
        .position(|&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c'))
        .unwrap_or(line.len());
    Some(&line[..end])
}

/// Line-at-a-time reader over raw bytes.
///
/// Line terminators are kept so that copied lines are byte-identical.
pub struct LineSource<R> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
        }
    }

    /// Reads the next line into the internal buffer.
    ///
    /// Returns `false` once the stream is exhausted.
    pub fn next_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.line)
            .context("Failed to read line")?;
        Ok(n > 0)
    }

    /// The line read by the last successful call to [`next_line`](Self::next_line).
    pub fn line(&self) -> &[u8] {
        &self.line
    }

    /// Reads up to [`BODY_LINES`] lines, handing each one to `sink`.
    ///
    /// Returns the number of lines actually available before end of stream.
    pub fn read_body<F>(&mut self, mut sink: F) -> Result<usize>
    where
        F: FnMut(&[u8]) -> Result<()>,
    {
        let mut read = 0;
        for _ in 0..BODY_LINES {
            if !self.next_line()? {
                break;
            }
            sink(&self.line)?;
            read += 1;
        }
        Ok(read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_identifier_first_token() {
        assert_eq!(identifier(b"@read1 1:N:0:ACGT\n"), Some(&b"@read1"[..]));
        assert_eq!(identifier(b"@read1\tx\n"), Some(&b"@read1"[..]));
        assert_eq!(identifier(b"@read1\r\n"), Some(&b"@read1"[..]));
        assert_eq!(identifier(b"@read1"), Some(&b"@read1"[..]));
        assert_eq!(identifier(b"@ tail\n"), Some(&b"@"[..]));
        assert_eq!(identifier(b"@a\x0bx\n"), Some(&b"@a"[..]));
        assert_eq!(identifier(b"@a\x0cx\n"), Some(&b"@a"[..]));
    }

    #[test]
    fn test_identifier_rejects_other_lines() {
        assert_eq!(identifier(b"ACGT\n"), None);
        assert_eq!(identifier(b"+\n"), None);
        assert_eq!(identifier(b" @read1\n"), None);
        assert_eq!(identifier(b""), None);
    }

    #[test]
    fn test_line_source_keeps_terminators() {
        let mut source = LineSource::new(Cursor::new(b"a\r\nb\nc".to_vec()));
        assert!(source.next_line().unwrap());
        assert_eq!(source.line(), b"a\r\n");
        assert!(source.next_line().unwrap());
        assert_eq!(source.line(), b"b\n");
        assert!(source.next_line().unwrap());
        assert_eq!(source.line(), b"c");
        assert!(!source.next_line().unwrap());
        assert!(source.line().is_empty());
    }

    #[test]
    fn test_read_body_stops_at_end_of_stream() {
        let mut source = LineSource::new(Cursor::new(b"ACGT\n+\n".to_vec()));
        let mut seen = Vec::new();
        let read = source
            .read_body(|line| {
                seen.extend_from_slice(line);
                Ok(())
            })
            .unwrap();
        assert_eq!(read, 2);
        assert_eq!(seen, b"ACGT\n+\n");
    }
}
