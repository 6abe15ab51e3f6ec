//! pattern-demo
//!
//! Runs the design pattern walkthroughs and prints their console output.
//!
//! # Usage
//!
//! ```bash
//! # every demo
//! cargo run --bin pattern-demo
//!
//! # one demo, with debug logs
//! RUST_LOG=design_patterns=debug cargo run --bin pattern-demo -- builder
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use design_patterns::demo::{self, Pattern};
use design_patterns::output::StdoutSink;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "pattern-demo", version, about = "Runs design pattern demos")]
struct CliArgs {
    /// Demo to run; all demos when omitted.
    #[arg(value_enum)]
    pattern: Option<Pattern>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,design_patterns=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = CliArgs::parse();
    let sink = StdoutSink;

    match cli.pattern {
        Some(pattern) => pattern.run(&sink)?,
        None => demo::run_all(&sink)?,
    }

    tracing::info!("demos finished");
    Ok(())
}
