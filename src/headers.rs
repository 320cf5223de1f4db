//! Identifier set built from the reference file.

use crate::record::{identifier, LineSource, BODY_LINES};
use anyhow::Result;
use std::collections::HashSet;
use std::io::BufRead;

/// Set of read identifiers to retrieve.
///
/// Built once from the reference file and only queried afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    identifiers: HashSet<Vec<u8>>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier; duplicates collapse into one entry.
    pub fn insert(&mut self, identifier: &[u8]) {
        if !self.identifiers.contains(identifier) {
            self.identifiers.insert(identifier.to_vec());
        }
    }

    pub fn contains(&self, identifier: &[u8]) -> bool {
        self.identifiers.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for identifier in iter {
            set.insert(identifier.as_ref());
        }
        set
    }
}

/// Counters collected while scanning the reference file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Identifier lines encountered, duplicates included.
    pub records: usize,
    /// Lines skipped because they did not start a record.
    pub skipped_lines: usize,
    /// Records cut short by end of stream.
    pub truncated: usize,
}

/// Loads the identifier of every record in `reader`.
///
/// Lines that do not start with `@` are skipped one at a time. After an
/// identifier line the next three lines are discarded unread. A record
/// truncated by end of stream still contributes its identifier.
///
/// # Example
/// ```
/// use getreads::load_headers;
///
/// let fastq = b"@read1 extra\nACGT\n+\nIIII\n@read2\nTT\n+\nII\n";
/// let (headers, stats) = load_headers(&fastq[..])?;
/// assert!(headers.contains(b"@read1"));
/// assert_eq!(stats.records, 2);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_headers<R: BufRead>(reader: R) -> Result<(HeaderSet, ScanStats)> {
    let mut source = LineSource::new(reader);
    let mut headers = HeaderSet::new();
    let mut stats = ScanStats::default();

    while source.next_line()? {
        let Some(id) = identifier(source.line()) else {
            stats.skipped_lines += 1;
            continue;
        };
        headers.insert(id);
        stats.records += 1;

        if source.read_body(|_| Ok(()))? < BODY_LINES {
            stats.truncated += 1;
        }
    }

    Ok((headers, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_headers_basic() {
        let fastq = b"@readA desc\nACGT\n+\nIIII\n@readB\nGGCC\n+readB\nJJJJ\n";
        let (headers, stats) = load_headers(&fastq[..]).unwrap();

        assert_eq!(headers.len(), 2);
        assert!(headers.contains(b"@readA"));
        assert!(headers.contains(b"@readB"));
        assert!(!headers.contains(b"@readA desc"));
        assert_eq!(
            stats,
            ScanStats {
                records: 2,
                skipped_lines: 0,
                truncated: 0
            }
        );
    }

    #[test]
    fn test_load_headers_duplicates_collapse() {
        let fastq = b"@r1\nA\n+\nI\n@r1\nC\n+\nI\n@r2\nG\n+\nI\n";
        let (once, _) = load_headers(&fastq[..]).unwrap();
        let (twice, stats) = load_headers(&fastq[..]).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
        assert_eq!(stats.records, 3);
    }

    #[test]
    fn test_load_headers_skips_stray_lines() {
        let fastq = b"garbage\n\n@r1\nA\n+\nI\n";
        let (headers, stats) = load_headers(&fastq[..]).unwrap();

        assert_eq!(headers.len(), 1);
        assert!(headers.contains(b"@r1"));
        assert_eq!(stats.skipped_lines, 2);
    }

    #[test]
    fn test_body_lines_are_not_inspected() {
        // A quality line starting with '@' is swallowed as body, not read as a header.
        let fastq = b"@r1\nACGT\n+\n@III\n";
        let (headers, _) = load_headers(&fastq[..]).unwrap();

        assert_eq!(headers.len(), 1);
        assert!(!headers.contains(b"@III"));
    }

    #[test]
    fn test_truncated_record_keeps_identifier() {
        let fastq = b"@r1\nA\n+\nI\n@r2\nACGT\n";
        let (headers, stats) = load_headers(&fastq[..]).unwrap();

        assert!(headers.contains(b"@r2"));
        assert_eq!(stats.truncated, 1);
    }

    #[test]
    fn test_empty_input() {
        let (headers, stats) = load_headers(&b""[..]).unwrap();
        assert!(headers.is_empty());
        assert_eq!(stats, ScanStats::default());
    }

    #[test]
    fn test_from_iterator() {
        let headers: HeaderSet = ["@a", "@b", "@a"].into_iter().collect();
        assert_eq!(headers.len(), 2);
        assert!(headers.contains(b"@b"));
    }
}
