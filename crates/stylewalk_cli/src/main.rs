//! stylewalk CLI
//!
//! Loads a JSON syntax tree, walks it with the reference pass and prints the
//! result as CSS.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use stylewalk_ast::{Node, parse_json, to_css};
use stylewalk_core::passes::ReferencePass;
use stylewalk_core::{Engine, WalkConfig, WalkOutcome, walk_with_config};

/// stylewalk - walk and rewrite stylesheet syntax trees
#[derive(Parser)]
#[command(name = "swalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Walk configuration file path (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a tree as CSS without walking it
    Print {
        /// Path to the tree JSON
        path: PathBuf,
    },

    /// Apply the reference pass and print the result
    Run {
        /// Path to the tree JSON
        path: PathBuf,

        /// Engine to walk with (recursive, iterative); overrides the config
        #[arg(short, long)]
        engine: Option<Engine>,
    },

    /// Apply the reference pass with both engines and compare the results
    Check {
        /// Path to the tree JSON
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(mismatch) => {
            if mismatch {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Print { path } => run_print(path).map(|_| false),
        Commands::Run { path, engine } => {
            let config = match engine {
                Some(engine) => config.with_engine(*engine),
                None => config,
            };
            run_walk(path, &config).map(|_| false)
        }
        Commands::Check { path } => run_check(path, &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<WalkConfig> {
    match path {
        Some(path) => WalkConfig::from_file(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to load config from {}", path.display())),
        None => Ok(WalkConfig::default()),
    }
}

fn load_tree(path: &Path) -> Result<Vec<Node>> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    parse_json(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

fn run_print(path: &Path) -> Result<()> {
    let tree = load_tree(path)?;
    print!("{}", to_css(&tree));
    Ok(())
}

fn run_walk(path: &Path, config: &WalkConfig) -> Result<()> {
    let mut tree = load_tree(path)?;
    let (outcome, pass) = apply_reference_pass(config, &mut tree)?;

    info!(
        engine = %config.engine,
        ?outcome,
        entered = pass.entered,
        replaced = pass.replaced,
        "walk finished"
    );
    print!("{}", to_css(&tree));
    Ok(())
}

/// Runs every engine over its own copy of the tree. Returns true when any
/// of them disagrees with the first one.
fn run_check(path: &Path, config: &WalkConfig) -> Result<bool> {
    let tree = load_tree(path)?;

    let mut results = Vec::with_capacity(Engine::ALL.len());
    for engine in Engine::ALL {
        let mut copy = tree.clone();
        let config = config.clone().with_engine(engine);
        let (outcome, pass) = apply_reference_pass(&config, &mut copy)?;
        debug!(%engine, ?outcome, entered = pass.entered, "engine finished");
        results.push((engine, outcome, pass, to_css(&copy)));
    }

    let Some((first, rest)) = results.split_first() else {
        return Ok(false);
    };

    let mut mismatch = false;
    for other in rest {
        if other.1 != first.1 || other.2 != first.2 || other.3 != first.3 {
            warn!(
                left = %first.0,
                right = %other.0,
                left_outcome = ?first.1,
                right_outcome = ?other.1,
                "engines disagree"
            );
            println!("--- {}\n{}--- {}\n{}", first.0, first.3, other.0, other.3);
            mismatch = true;
        }
    }

    if mismatch {
        println!("engines disagree");
    } else {
        println!("engines agree ({:?})", first.1);
    }
    Ok(mismatch)
}

fn apply_reference_pass(
    config: &WalkConfig,
    tree: &mut Vec<Node>,
) -> Result<(WalkOutcome, ReferencePass)> {
    let mut pass = ReferencePass::new();
    let outcome = walk_with_config(config, tree, &mut pass).into_diagnostic()?;
    Ok((outcome, pass))
}
