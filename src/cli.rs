// Command-line interface definition

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "getreads",
    version,
    about = "Retrieve a set of reads from a FASTQ file",
    long_about = None,
    after_help = "Input FASTQ files may be gzip compressed (with \".gz\" extension).\n\
                  <OUTPUT> will be compressed if <INPUT> is."
)]
pub struct Cli {
    /// FASTQ file listing reads to be retrieved (used only to get read headers)
    #[arg(value_name = "HEADERS")]
    pub headers: PathBuf,

    /// FASTQ file listing original reads
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for reads
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Gzip compression level for compressed output
    #[arg(short = 'l', long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: u32,

    /// Write compressed output as BGZF instead of plain gzip
    #[arg(long)]
    pub bgzf: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Positional arguments after the output path are ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Styled messages for verbose reporting on stderr.
pub mod fmt {
    use console::style;
    use std::fmt::Display;

    pub fn header(text: impl Display) -> String {
        style(format!("== {} ==", text)).bold().cyan().to_string()
    }

    /// Parameter name padded to `width` so values line up.
    pub fn param_aligned(name: impl Display, width: usize) -> String {
        style(format!("{:<width$}", name.to_string(), width = width))
            .dim()
            .to_string()
    }

    pub fn progress(text: impl Display) -> String {
        format!("{} {}", style("->").blue().bold(), text)
    }

    pub fn success(text: impl Display) -> String {
        format!("{} {}", style("ok").green().bold(), text)
    }

    pub fn warning(text: impl Display) -> String {
        format!("{} {}", style("warning:").yellow().bold(), text)
    }

    pub fn error(text: impl Display) -> String {
        format!("{} {}", style("Error!").red().bold(), text)
    }
}
