/*!
 * Command-line interface for codeclip
 */

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use codeclip::clipboard::copy_to_clipboard;
use codeclip::config::{Args, Config, Destination, Mode};
use codeclip::error::Result;
use codeclip::fs::OsFileSystem;
use codeclip::report::{ReportFormat, Reporter, ScanReport};
use codeclip::scanner::Scanner;
use codeclip::writer::MarkdownWriter;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "codeclip", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;
    config.validate()?;

    if let Some(path) = &config.settings_path {
        log::debug!("Using settings from {}", path.display());
    }
    let excludes = config.excludes();
    log::debug!("Exclude patterns: {:?}", excludes.patterns());

    let progress = if config.quiet || config.destination == Destination::Stdout {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📂 Collecting");

    let scanner = Scanner::new(
        config.source.lister(),
        Box::new(OsFileSystem),
        excludes,
        Arc::new(progress.clone()),
    );
    let writer = MarkdownWriter::new();

    let start_time = Instant::now();

    let (markdown, statistics, success_message) = match &config.mode {
        Mode::Directory(dir) => {
            let scan = scanner.scan(dir)?;
            let markdown = writer.render_document(&scan).to_string();
            (markdown, scan.statistics, "Directory code copied")
        }
        Mode::Structure(dir) => {
            let scan = scanner.scan(dir)?;
            let markdown = writer.render_structure(&scan).to_string();
            (markdown, scan.statistics, "Directory structure copied")
        }
        Mode::Files(paths) => {
            let (sections, statistics) = scanner.read_files(paths);
            if sections.is_empty() {
                log::warn!("None of the given files is a readable text file");
            }
            (writer.render_files(&sections), statistics, "Code copied")
        }
    };

    progress.finish_and_clear();

    deliver(&config.destination, &markdown)?;
    let duration = start_time.elapsed();

    if !config.quiet {
        if config.destination == Destination::Clipboard {
            eprintln!("{} to clipboard!", success_message);
        }
        let report = ScanReport::new(
            config.destination.to_string(),
            duration,
            markdown.len(),
            statistics,
        );
        Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    }

    Ok(())
}

/// Hand the finished Markdown to its destination
fn deliver(destination: &Destination, markdown: &str) -> Result<()> {
    match destination {
        Destination::Clipboard => copy_to_clipboard(markdown)?,
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markdown.as_bytes())?;
            stdout.flush()?;
        }
        Destination::File(path) => fs::write(path, markdown)?,
    }
    Ok(())
}
