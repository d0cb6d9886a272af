//! tessitura - instrument and voice ranges in the terminal
//!
//! Run with: cargo run -- [view|table|json]

mod app;
mod ui;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{ensure, Result as EyreResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::Tessitura;
use tessitura::{
    pitch::{MAX_OCTAVE, MIN_OCTAVE},
    ChartConfig,
};

#[derive(Debug, Parser)]
#[command(name = "tessitura", version, about = "Pitch ranges of instruments and voices")]
struct Cli {
    /// Lowest octave line, as a power of two applied to 440 Hz
    #[arg(
        long,
        global = true,
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(MIN_OCTAVE as i64..=MAX_OCTAVE as i64)
    )]
    low_octave: i32,

    /// Highest octave line, as a power of two applied to 440 Hz
    #[arg(
        long,
        global = true,
        default_value_t = 7,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(MIN_OCTAVE as i64..=MAX_OCTAVE as i64)
    )]
    high_octave: i32,

    /// Replace the chart title
    #[arg(long, global = true)]
    title: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chart (default)
    View,
    /// Print one line per instrument
    Table,
    /// Print the chart data as JSON
    #[cfg(feature = "serde")]
    Json,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let app = Tessitura::new().config(config(&cli)?);

    match cli.command.unwrap_or(Command::View) {
        Command::View => app.run(),
        Command::Table => app.print_table(&mut std::io::stdout().lock()),
        #[cfg(feature = "serde")]
        Command::Json => app.print_json(&mut std::io::stdout().lock()),
    }
}

/// Chart settings asked for on the command line
fn config(cli: &Cli) -> EyreResult<ChartConfig> {
    ensure!(
        cli.low_octave <= cli.high_octave,
        "--low-octave ({}) must not be above --high-octave ({})",
        cli.low_octave,
        cli.high_octave
    );

    let mut config = ChartConfig::new().octaves(cli.low_octave, cli.high_octave);
    if let Some(title) = &cli.title {
        config = config.title(title.as_str());
    }
    Ok(config)
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
