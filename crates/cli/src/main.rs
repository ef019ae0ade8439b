//! HHN CLI - drive the Hierarchical HotNet pathway adapter from the shell

mod logging;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use hhn_core::application::pipeline::{input_filename_map, run_pipeline};
use hhn_core::application::AlgorithmRegistry;
use hhn_core::config::ContainerFramework;
use hhn_core::port::time_provider::SystemTimeProvider;
use hhn_core::port::AlgorithmArgs;
use hhn_infra_container::SubprocessContainerRunner;
use hhn_infra_dataset::TsvDatasetSource;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_ALGORITHM: &str = "hhn";

#[derive(Parser)]
#[command(name = "hhn")]
#[command(about = "Hierarchical HotNet pathway adapter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "HHN_CONFIG")]
    config: Option<PathBuf>,

    /// Algorithm adapter to use
    #[arg(long, global = true, default_value = DEFAULT_ALGORITHM)]
    algorithm: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the algorithm's input files from a dataset
    GenerateInputs {
        /// Node table files (headered TSV, first column NODEID)
        #[arg(long, required = true, num_args = 1..)]
        nodes: Vec<PathBuf>,

        /// Interactome file (headerless TSV)
        #[arg(long)]
        interactome: PathBuf,

        /// Directory receiving the input files
        #[arg(long)]
        out_dir: PathBuf,
    },

    /// Run the algorithm container on prepared inputs
    Run {
        /// Gene-to-score file
        #[arg(long)]
        scores: Option<PathBuf>,

        /// Edge list file
        #[arg(long)]
        edge_list: Option<PathBuf>,

        /// Index-to-gene file
        #[arg(long)]
        index: Option<PathBuf>,

        /// Raw pathway destination
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Container runtime (docker, singularity)
        #[arg(long)]
        framework: Option<ContainerFramework>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a raw pathway into the universal format
    ParseOutput {
        /// Raw pathway file
        raw: PathBuf,

        /// Standardized pathway destination
        standardized: PathBuf,
    },

    /// generate-inputs, run and parse-output in one pass
    Pipeline {
        #[arg(long, required = true, num_args = 1..)]
        nodes: Vec<PathBuf>,

        #[arg(long)]
        interactome: PathBuf,

        #[arg(long)]
        out_dir: PathBuf,

        #[arg(long)]
        framework: Option<ContainerFramework>,

        #[arg(long)]
        json: bool,
    },
}

fn set_arg(args: &mut AlgorithmArgs, key: &str, value: Option<&Path>) {
    if let Some(path) = value {
        args.insert(key.to_string(), path.to_string_lossy().into_owned());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Configuration, then logging (logging settings live in the config)
    let config = settings::load(cli.config.as_deref())?;
    let _log_guard = logging::init(&config.logging)?;

    info!("hhn v{} starting", VERSION);

    // 2. Wire adapters
    let runner = Arc::new(SubprocessContainerRunner::new(
        Arc::new(SystemTimeProvider),
        config.container.clone(),
    ));
    let registry = AlgorithmRegistry::with_defaults(runner, config.container.clone());
    let algo = registry.get(&cli.algorithm)?;

    // 3. Dispatch
    match cli.command {
        Commands::GenerateInputs {
            nodes,
            interactome,
            out_dir,
        } => {
            let data = TsvDatasetSource::new(nodes, interactome)
                .load()
                .context("Failed to load dataset")?;
            let filename_map = input_filename_map(algo.as_ref(), &out_dir);
            algo.generate_inputs(&data, &filename_map)?;

            println!("{}", "✓ Inputs generated".green().bold());
            for (role, path) in &filename_map {
                println!("  {} {}", format!("{}:", role).bold(), path.display());
            }
        }
        Commands::Run {
            scores,
            edge_list,
            index,
            output,
            framework,
            json,
        } => {
            let mut args = AlgorithmArgs::new();
            set_arg(&mut args, "scores", scores.as_deref());
            set_arg(&mut args, "edge_list", edge_list.as_deref());
            set_arg(&mut args, "index", index.as_deref());
            set_arg(&mut args, "output_file", output.as_deref());

            let framework = framework.unwrap_or(config.container.framework);
            let outcome = algo.run(&args, framework).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.container_log);
                println!(
                    "{} {}",
                    "✓ Raw pathway written to".green().bold(),
                    outcome.output_file.display()
                );
            }
        }
        Commands::ParseOutput { raw, standardized } => {
            algo.parse_output(&raw, &standardized)?;
            println!(
                "{} {}",
                "✓ Pathway written to".green().bold(),
                standardized.display()
            );
        }
        Commands::Pipeline {
            nodes,
            interactome,
            out_dir,
            framework,
            json,
        } => {
            let data = TsvDatasetSource::new(nodes, interactome)
                .load()
                .context("Failed to load dataset")?;
            let framework = framework.unwrap_or(config.container.framework);
            let report = run_pipeline(algo.as_ref(), &data, &out_dir, framework).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.container_log);
                println!(
                    "{} {}",
                    "✓ Pathway written to".green().bold(),
                    report.pathway.display()
                );
            }
        }
    }

    Ok(())
}
