//! Elemental command-line tool
//!
//! Cleans, wireframes and standardizes Elementor component JSON, generates
//! starter templates, and can serve the same operations over HTTP.
//!
//! Usage:
//!   elemental clean component.json --wireframe
//!   elemental template hero > hero.json
//!   elemental serve --port 4080

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use elemental_cli::{ValidationReport, build_router};
use elemental_pipeline::{Config, OutcomeStatus, Pipeline, StructureSummary};
use elemental_templates::{TemplateKind, render_template};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "elemental")]
#[command(about = "Clean, wireframe and standardize Elementor component JSON")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = elemental_pipeline::CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the input is JSON and an Elementor document
    Validate {
        /// Input file, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,
    },
    /// Remove empty and internal settings, optionally reducing to a wireframe
    Clean {
        #[arg(default_value = "-")]
        input: String,
        /// Strip styling and apply the wireframe look; `--wireframe=false`
        /// overrides a config file that turns it on
        #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        wireframe: Option<bool>,
        /// Also reduce the output to the `{type, siteurl, elements}` envelope
        #[arg(short, long)]
        standardize: bool,
    },
    /// Rewrite the top-level envelope to `{type, siteurl, elements}`
    Standardize {
        #[arg(default_value = "-")]
        input: String,
    },
    /// Print a starter document
    Template {
        /// hero, features or form
        kind: TemplateKind,
    },
    /// Print node counts by kind
    Inspect {
        #[arg(default_value = "-")]
        input: String,
    },
    /// Serve the pipeline over HTTP
    Serve {
        /// Port to listen on (defaults to the config's server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {input}"))
    }
}

fn report(status: &OutcomeStatus) {
    if let OutcomeStatus::PassedThrough { kind, reason } = status {
        warn!("{}: {}; input returned unchanged", kind.user_message(), reason);
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let pipeline = Pipeline::new(Config::load_from(&args.config));

    match args.command {
        Command::Validate { input } => {
            let report = ValidationReport::of(&read_input(&input)?);
            match &report.message {
                None => println!("valid"),
                Some(message) => println!("{message}"),
            }
            if !report.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Clean {
            input,
            wireframe,
            standardize,
        } => {
            let text = read_input(&input)?;
            let wireframe = wireframe.unwrap_or(pipeline.config().pipeline.wireframe);
            let outcome = if standardize {
                pipeline.clean_standardized(&text, wireframe)
            } else {
                pipeline.clean(&text, wireframe)
            };
            report(&outcome.status);
            println!("{}", outcome.output);
        }
        Command::Standardize { input } => {
            let outcome = pipeline.standardize(&read_input(&input)?);
            report(&outcome.status);
            println!("{}", outcome.output);
        }
        Command::Template { kind } => {
            println!("{}", render_template(kind)?);
        }
        Command::Inspect { input } => {
            let document = pipeline.parse(&read_input(&input)?)?;
            let summary = StructureSummary::of(&document);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Serve { port } => {
            let port = port.unwrap_or(pipeline.config().server.port);
            let app = build_router(Arc::new(pipeline));
            let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
                .await
                .with_context(|| format!("Failed to bind HTTP port {port}"))?;
            info!("HTTP API listening on port {}", port);
            axum::serve(listener, app).await.context("HTTP server failed")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
