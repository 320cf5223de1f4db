//! Copy the records whose identifier is in a [`HeaderSet`].

use crate::headers::HeaderSet;
use crate::record::{identifier, LineSource, BODY_LINES};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Counters collected while filtering the data file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractStats {
    /// Identifier lines encountered.
    pub records: usize,
    /// Records copied to the output.
    pub written: usize,
    /// Lines skipped because they did not start a record.
    pub skipped_lines: usize,
    /// Records cut short by end of stream, matching or not.
    pub truncated: usize,
}

/// Copies every record of `input` whose identifier is in `headers` to `output`.
///
/// Matching records are written byte for byte in input order. Non-matching
/// records are consumed without inspecting their body. A matching record
/// truncated by end of stream is written as far as it goes.
pub fn process_reads<R, W>(input: R, output: &mut W, headers: &HeaderSet) -> Result<ExtractStats>
where
    R: BufRead,
    W: Write,
{
    let mut source = LineSource::new(input);
    let mut stats = ExtractStats::default();

    while source.next_line()? {
        let line = source.line();
        let Some(id) = identifier(line) else {
            stats.skipped_lines += 1;
            continue;
        };
        stats.records += 1;

        let body = if headers.contains(id) {
            output
                .write_all(line)
                .context("Failed to write FASTQ record")?;
            stats.written += 1;
            source.read_body(|body_line| {
                output
                    .write_all(body_line)
                    .context("Failed to write FASTQ record")
            })?
        } else {
            source.read_body(|_| Ok(()))?
        };

        if body < BODY_LINES {
            stats.truncated += 1;
        }
    }

    Ok(stats)
}
