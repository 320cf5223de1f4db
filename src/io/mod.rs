//! I/O module for opening FASTQ streams.
//!
//! Inputs and outputs are plain or gzip-compressed depending on the file name.

pub mod fastq;

// Re-export main types
pub use fastq::{is_gzip_path, open_reader, output_path, OutputFormat, RecordWriter};
