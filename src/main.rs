use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use getreads::cli::{fmt, Cli};
use getreads::io::{is_gzip_path, open_reader, output_path, OutputFormat, RecordWriter};
use getreads::{load_headers, process_reads};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Only --version counts as success; usage and help requests fail.
            return match e.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", fmt::error(format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let compress = is_gzip_path(&cli.input);
    let output = output_path(&cli.output, compress);
    let format = match (compress, cli.bgzf) {
        (false, _) => OutputFormat::Plain,
        (true, false) => OutputFormat::Gzip(cli.level),
        (true, true) => OutputFormat::Bgzf,
    };

    if cli.verbose {
        eprintln!("{}", fmt::header("GetReads Configuration"));
        eprintln!("{}: {}", fmt::param_aligned("Headers", 12), cli.headers.display());
        eprintln!("{}: {}", fmt::param_aligned("Input", 12), cli.input.display());
        eprintln!("{}: {}", fmt::param_aligned("Output", 12), output.display());
        eprintln!("{}: {}", fmt::param_aligned("Format", 12), format);
        eprintln!();
    }

    // All three files are opened before any record is processed.
    let reference = open_reader(&cli.headers)?;
    let input = open_reader(&cli.input)?;
    let mut writer = RecordWriter::create(&output, format)?;

    if cli.verbose {
        eprintln!("{}", fmt::progress("Loading read headers..."));
    }
    let (headers, scan) = load_headers(reference)?;
    if cli.verbose {
        eprintln!(
            "{}: {} ({} records)",
            fmt::param_aligned("Headers", 12),
            headers.len(),
            scan.records
        );
    }

    if cli.verbose {
        eprintln!("{}", fmt::progress("Copying matching reads..."));
    }
    let stats = process_reads(input, &mut writer, &headers)?;
    writer.finish()?;

    if cli.verbose {
        eprintln!("{}: {}", fmt::param_aligned("Scanned", 12), stats.records);
        eprintln!("{}: {}", fmt::param_aligned("Written", 12), stats.written);
        let skipped = scan.skipped_lines + stats.skipped_lines;
        if skipped > 0 {
            eprintln!("{}", fmt::warning(format!("{} stray lines skipped", skipped)));
        }
        let truncated = scan.truncated + stats.truncated;
        if truncated > 0 {
            eprintln!(
                "{}",
                fmt::warning(format!("{} records truncated by end of file", truncated))
            );
        }
        eprintln!("{}", fmt::success(format!("Output written to {}", output.display())));
    }

    Ok(())
}
