use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use ascii_painter::{load_config, Session};

/// Draw on a character canvas from a command file
#[derive(Debug, Parser)]
#[command(name = "ascii-painter", version)]
struct Cli {
    /// Path to the command file, `-` for stdin
    #[arg(short, long, default_value = "input.txt")]
    input: String,

    /// Path to the output file receiving every rendered frame
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Glyph used for lines and rectangles
    #[arg(long)]
    brush: Option<char>,

    /// Stop at the first failing line
    #[arg(long)]
    stop_on_error: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log every command to stderr
    #[arg(long)]
    debug: bool,
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut data = String::new();
        io::stdin()
            .read_to_string(&mut data)
            .context("Failed to read commands from stdin")?;
        Ok(data)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file {input}"))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr, stdout carries the frames
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting ascii-painter version {}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(brush) = cli.brush {
        config.brush = brush;
    }
    if cli.stop_on_error {
        config.stop_on_error = true;
    }
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let data = read_input(&cli.input)?;
    let mut session = Session::new(config);
    let report = session.run(&data);

    let mut stdout = io::stdout().lock();
    for frame in &report.frames {
        writeln!(stdout, "{frame}").context("Failed to write to stdout")?;
    }
    stdout.flush()?;

    fs::write(&cli.output, report.output())
        .with_context(|| format!("Failed to write output file {}", cli.output.display()))?;
    tracing::info!(
        "Wrote {} frames to {}",
        report.frames.len(),
        cli.output.display()
    );

    if !report.is_success() {
        for failure in &report.failures {
            eprintln!("line {}: {}", failure.line_no, failure.error);
        }
        if report.aborted {
            eprintln!("stopped at first error");
        }
        process::exit(1);
    }

    Ok(())
}
