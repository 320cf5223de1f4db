//! FASTQ stream opening, with transparent gzip handling.

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use noodles::bgzf;
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix marking a gzip-compressed file.
pub const GZIP_SUFFIX: &str = ".gz";

/// Returns true when the file name ends with `.gz`.
pub fn is_gzip_path(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .ends_with(GZIP_SUFFIX.as_bytes())
}

/// Opens a FASTQ file for line-oriented reading.
///
/// Files named `*.gz` are decoded with `MultiGzDecoder`, which also handles
/// BGZF and concatenated gzip members.
///
/// # Example
/// ```no_run
/// use getreads::io::open_reader;
/// use std::io::BufRead;
/// use std::path::Path;
///
/// let reader = open_reader(Path::new("reads.fastq.gz"))?;
/// for line in reader.lines() {
///     println!("{}", line?);
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open {}", path.display()))?;

    let reader: Box<dyn BufRead> = if is_gzip_path(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(reader)
}

/// Returns the path the output is actually written to.
///
/// Compressed output always carries the `.gz` suffix.
pub fn output_path(path: &Path, compress: bool) -> PathBuf {
    if !compress || is_gzip_path(path) {
        return path.to_path_buf();
    }

    let mut name = OsString::from(path.as_os_str());
    name.push(GZIP_SUFFIX);
    PathBuf::from(name)
}

/// Encoding of the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    /// Single-member gzip at the given level (0-9).
    Gzip(u32),
    /// Blocked gzip, readable by any gzip decoder.
    Bgzf,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain text"),
            OutputFormat::Gzip(level) => write!(f, "gzip (level {})", level),
            OutputFormat::Bgzf => write!(f, "BGZF"),
        }
    }
}

/// Internal writer implementation for each output format.
enum RecordWriterInner {
    Plain(BufWriter<File>),
    Gzip(BufWriter<GzEncoder<File>>),
    Bgzf(bgzf::io::Writer<File>),
}

/// Writer for extracted FASTQ records.
///
/// Bytes are passed through unchanged; compression trailers are written by
/// [`finish`](Self::finish). Dropping the writer without calling `finish`
/// silently ignores errors from the final flush.
pub struct RecordWriter {
    writer: RecordWriterInner,
}

impl RecordWriter {
    /// Creates the output file at `path` with the given encoding.
    pub fn create(path: &Path, format: OutputFormat) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Cannot open {} for writing", path.display()))?;

        let writer = match format {
            OutputFormat::Plain => RecordWriterInner::Plain(BufWriter::new(file)),
            OutputFormat::Gzip(level) => RecordWriterInner::Gzip(BufWriter::new(
                GzEncoder::new(file, Compression::new(level)),
            )),
            OutputFormat::Bgzf => RecordWriterInner::Bgzf(bgzf::io::Writer::new(file)),
        };

        Ok(Self { writer })
    }

    /// Flushes buffers and writes compression trailers.
    pub fn finish(self) -> Result<()> {
        match self.writer {
            RecordWriterInner::Plain(mut w) => {
                w.flush().context("Failed to flush output file")
            }
            RecordWriterInner::Gzip(w) => {
                let encoder = w
                    .into_inner()
                    .map_err(|e| e.into_error())
                    .context("Failed to flush gzip writer")?;
                encoder
                    .finish()
                    .map(|_| ())
                    .context("Failed to finish gzip writer")
            }
            RecordWriterInner::Bgzf(w) => w
                .finish()
                .map(|_| ())
                .context("Failed to finish BGZF writer"),
        }
    }
}

impl Write for RecordWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.writer {
            RecordWriterInner::Plain(w) => w.write(buf),
            RecordWriterInner::Gzip(w) => w.write(buf),
            RecordWriterInner::Bgzf(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.writer {
            RecordWriterInner::Plain(w) => w.flush(),
            RecordWriterInner::Gzip(w) => w.flush(),
            RecordWriterInner::Bgzf(w) => w.flush(),
        }
    }
}
