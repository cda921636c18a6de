//! Feedback Pulse CLI
//!
//! Command-line interface:
//! - Serve the dashboard and API
//! - Submit one piece of feedback
//! - Submit feedback interactively from stdin
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use feedback_pulse::api::{serve, AppState};
use feedback_pulse::classifier::HttpClassifier;
use feedback_pulse::config::{generate_default_config, Config, ConfigSource};
use feedback_pulse::tally::{FeedbackTally, SubmitResult, SubmitReport};
use feedback_pulse::view::{ResultLine, View};

#[derive(Parser)]
#[command(name = "feedback-pulse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify feedback sentiment and keep a running tally")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Classification endpoint URL, overrides config
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the dashboard and API server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Submit one piece of feedback
    Submit {
        /// Feedback text (words are joined with spaces)
        text: Vec<String>,
    },

    /// Read feedback line by line from stdin until EOF
    Interactive,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Config { output } => return write_default_config(output.as_deref()),
        command => command,
    };

    // An explicit --config must load; a broken default file is reported once logging is up
    let loaded = match &cli.config {
        Some(path) => Ok((Config::load_with_env(path)?, ConfigSource::File(path.clone()))),
        None => Config::load_default(),
    };
    let (mut config, source) = match loaded {
        Ok((config, source)) => (config, Ok(source)),
        Err(e) => (Config::from_env(), Err(e)),
    };
    if let Some(endpoint) = cli.endpoint {
        config.classifier.endpoint = endpoint;
    }

    feedback_pulse::logging::init(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    match source {
        Ok(ConfigSource::File(path)) => tracing::info!("Loaded config from {:?}", path),
        Ok(ConfigSource::Defaults) => {
            tracing::debug!("Using default config with environment overrides")
        }
        Err(e) => tracing::warn!(error = %e, "Ignoring config file, using defaults"),
    }

    tracing::debug!(endpoint = %config.classifier.endpoint, "Using classification endpoint");

    let classifier = Arc::new(
        HttpClassifier::new(config.classifier.clone())
            .context("Failed to create classification client")?,
    );
    let tally = Arc::new(FeedbackTally::new(classifier));

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }

            tracing::info!("Starting Feedback Pulse v{}", env!("CARGO_PKG_VERSION"));
            serve(AppState::new(tally), &config.api).await?;
        }

        Commands::Submit { text } => {
            let result = tally.submit(&text.join(" ")).await;
            print_result(&result);
            print_view(&tally, config.view.bar_width).await;

            if result.is_err() {
                std::process::exit(1);
            }
        }

        Commands::Interactive => {
            run_interactive(&tally, config.view.bar_width).await?;
        }

        Commands::Config { .. } => {}
    }

    Ok(())
}

/// Prompt, submit, redraw, until stdin closes
async fn run_interactive(tally: &FeedbackTally, bar_width: usize) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    print_view(tally, bar_width).await;

    loop {
        stdout.write_all(b"feedback> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        if !line.trim().is_empty() {
            println!("{}", ResultLine::pending().message);
        }
        let result = tally.submit(&line).await;
        print_result(&result);
        // Failures leave the chart as it was, so only redraw on an answer
        if result.is_ok() {
            print_view(tally, bar_width).await;
        }
    }

    Ok(())
}

fn print_result(result: &SubmitResult<SubmitReport>) {
    let line = match result {
        Ok(report) => ResultLine::for_outcome(&report.outcome),
        Err(e) => ResultLine::for_error(e),
    };
    println!("{}", line.message);
}

async fn print_view(tally: &FeedbackTally, bar_width: usize) {
    let view = View::from_snapshot(tally.snapshot().await);
    println!();
    print!("{}", view.chart.render_text(bar_width));
    println!();
    println!("{}", view.summary);
    println!();
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write config to {:?}", path))?;
            println!("Wrote default config to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
