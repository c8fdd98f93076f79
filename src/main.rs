use std::path::PathBuf;

use clap::{Parser, Subcommand};
use leadx::app;
use leadx_core::{ExportFormat, Extractor};
use leadx_feeds::TextSource;

#[derive(Parser)]
#[command(name = "leadx", about = "Lead extractor — pasted lead blocks and spreadsheet exports to contact tables")]
struct Cli {
    /// Config file (defaults to ~/.config/leadx/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: table, csv, json or jsonl. Overrides `[output] format`.
    #[arg(long, global = true)]
    format: Option<ExportFormat>,

    /// Log at debug level to stderr (RUST_LOG still wins when set).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract from a pasted text block (file, or stdin when absent or "-").
    Text { path: Option<PathBuf> },
    /// Extract from a CSV spreadsheet export with `Event Datum` and `Utm Medium` columns.
    Rows { path: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = app::load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);
    let extractor = Extractor::from_config(&config.policy);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let written = match cli.command {
        Command::Text { path } => {
            app::run_text_source(&TextSource::from_arg(path), &extractor, format, &mut out)?
        }
        Command::Rows { path } => {
            let mut err = std::io::stderr().lock();
            app::run_rows(&path, &extractor, format, &mut out, &mut err)?
        }
    };

    tracing::info!(leads = written, %format, "done");
    Ok(())
}
