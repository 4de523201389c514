use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use railgen::adjacency::{BuildConfig, BuildError, build_adjacency};
use railgen::network::{LoadError, RailNetwork};
use railgen::output::{OutputFormat, RenderError, render, render_pretty};

/// Generate per-station adjacency nodes from a YAML rail network
/// description, for consumption by a route finder.
#[derive(Debug, Parser)]
#[command(name = "railgen", version, about)]
struct Args {
    /// Input YAML network description.
    input: PathBuf,

    /// Output path for the node document.
    output: PathBuf,

    /// Wrap the document as a JavaScript assignment (`stations = ...;`).
    #[arg(long)]
    javascript: bool,

    /// Suppress the pretty-printed document on stdout.
    #[arg(long)]
    quiet: bool,

    /// Drop numeric corner markers from stop lists before deriving
    /// adjacency.
    #[arg(long)]
    skip_corners: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("railgen: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let network = RailNetwork::from_path(&args.input)?;

    let config = BuildConfig::new(args.skip_corners);
    let adjacency = build_adjacency(&network, &config)?;

    let format = if args.javascript {
        OutputFormat::JavaScript
    } else {
        OutputFormat::Json
    };
    let rendered = render(&network, &adjacency, format)?;
    std::fs::write(&args.output, &rendered).map_err(|source| CliError::WriteOutput {
        path: args.output.clone(),
        source,
    })?;

    if !args.quiet {
        println!("{}", render_pretty(&network, &adjacency)?);
    }

    Ok(())
}
