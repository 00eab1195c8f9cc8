use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use pdftext_core::{Config, Extractor, config_file};
use pdftext_mupdf::MupdfBackend;
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// PDF text extractor - Write the text of every page of a PDF to a UTF-8 file
#[derive(Parser, Debug)]
#[command(name = "pdftext", version, about, long_about = None)]
struct Cli {
    /// Path to the PDF to read (or PDFTEXT_INPUT)
    input: Option<PathBuf>,

    /// Path to the text file to write (or PDFTEXT_OUTPUT; default: INPUT with .txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read paths from this TOML file instead of the default config locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extract and report page lengths without writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log to stderr; repeat for more detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = ColorMode(!cli.no_color && std::io::stdout().is_terminal());
    let mut stdout = std::io::stdout().lock();

    match execute(cli, color, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "extraction failed");
            // Nothing more to report if stdout itself is gone.
            let _ = output::print_error(&mut stdout, &e, color);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn execute(cli: Cli, color: ColorMode, writer: &mut dyn Write) -> anyhow::Result<()> {
    // Resolve configuration: CLI flags > env vars > config file > defaults
    let file = match cli.config {
        Some(ref path) => config_file::load_explicit(path)?,
        None => config_file::load_config(),
    };
    let config = Config::resolve(cli.input, cli.output, |key| std::env::var(key).ok(), &file)?;
    tracing::debug!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        "resolved paths"
    );

    let backend = MupdfBackend::new();
    let extractor = Extractor::new(&backend);

    if cli.dry_run {
        let text = extractor.extract(&config.input_path)?;
        let pdf_name = config
            .input_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| config.input_path.display().to_string());
        output::print_dry_run_report(writer, &pdf_name, &text, color)?;
        return Ok(());
    }

    let summary = extractor.run(&config.input_path, &config.output_path)?;
    output::print_success(writer, &summary, &config.output_path, color)?;
    Ok(())
}
