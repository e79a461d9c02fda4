// Zoo Query Binary Entry Point
//
// Purpose: Ask which enclosures can take a group of animals
// Usage: cargo run --features cli --bin zoo_query -- <species> <quantity> [--json|--explain]
//
// Data source: ZOO_CONFIG (JSON file), else ZOO_DATA_DIR (CSV/Parquet tables),
// else the built-in sample zoo.

use clap::Parser;
use enclosure_allocator::explanation::{ExplanationGenerator, MarkdownFormatter};
use enclosure_allocator::{QueryError, QueryResponse, ZooSource};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Which enclosures can take a group of animals", long_about = None)]
struct Args {
    /// Species name (case-insensitive)
    species: String,

    /// Number of animals; anything but a positive integer is an invalid quantity
    #[arg(allow_hyphen_values = true)]
    quantity: String,

    /// Print the response as JSON
    #[arg(long, conflicts_with = "explain")]
    json: bool,

    /// Print a per-enclosure rule report
    #[arg(long)]
    explain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Plain,
    Json,
    Explain,
}

impl Args {
    fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.explain {
            OutputMode::Explain
        } else {
            OutputMode::Plain
        }
    }
}

fn main() -> ExitCode {
    // Usage errors exit with 2 from clap
    let args = Args::parse();

    // Logs go to stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enclosure_allocator=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let species = args.species.as_str();
    let mode = args.mode();

    let quantity = parse_quantity(&args.quantity);

    let source = ZooSource::from_env();
    tracing::info!("Using {}", source);
    let engine = source.load_engine()?;

    match mode {
        OutputMode::Plain => {
            let result = engine.evaluate(species, quantity);
            match &result {
                Ok(descriptors) => {
                    for descriptor in descriptors {
                        println!("{}", descriptor);
                    }
                }
                Err(e) => println!("{}", e),
            }
            Ok(exit_code(&result))
        }
        OutputMode::Json => {
            let result = engine.evaluate(species, quantity);
            let code = exit_code(&result);
            println!("{}", serde_json::to_string_pretty(&QueryResponse::from(result))?);
            Ok(code)
        }
        OutputMode::Explain => match ExplanationGenerator::generate(&engine, species, quantity) {
            Ok(report) => {
                print!("{}", MarkdownFormatter::format(&report));
                Ok(if report.admitted_count() > 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(1)
                })
            }
            Err(e) => {
                println!("{}", e);
                Ok(ExitCode::from(1))
            }
        },
    }
}

/// Anything that is not an integer becomes 0, an invalid quantity
fn parse_quantity(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

fn exit_code(result: &Result<Vec<String>, QueryError>) -> ExitCode {
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
