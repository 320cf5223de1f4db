//! Retrieve a subset of FASTQ reads.
//!
//! Identifiers are collected from a reference FASTQ file, then every record of a
//! second file whose identifier is in that set is copied verbatim to the output.

pub mod cli;
pub mod extract;
pub mod headers;
pub mod io;
pub mod record;

pub use extract::{process_reads, ExtractStats};
pub use headers::{load_headers, HeaderSet, ScanStats};
