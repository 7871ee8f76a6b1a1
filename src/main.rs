//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0

//! CRD generator binary
//!
//! Command-line entry point for generating batches of CRD YAML files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crd_generator::{
    load_config, save_config, CrdGenerator, GeneratorConfig, CRD_GENERATOR_VERSION,
    DEFAULT_CONFIG_PATH,
};

#[derive(Parser)]
#[command(name = "crd-generator")]
#[command(about = "Synthetic CustomResourceDefinition batch generator")]
#[command(version = CRD_GENERATOR_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of definitions to generate
    #[arg(long)]
    count: Option<u32>,

    /// Maximum nesting level of each field schema
    #[arg(long)]
    max_nesting_level: Option<u32>,

    /// Output directory for generated files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a single definition to stdout
    Print {
        /// Definition index
        #[arg(short, long, default_value_t = 1)]
        index: u32,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = resolve_config(&cli)?;

    match cli.command {
        Some(Commands::Print { index }) => {
            let generator = CrdGenerator::new(config)?;
            print!("{}", generator.render_document(index)?);
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Generate { output } => {
                if let Some(parent) = output.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                save_config(&GeneratorConfig::default(), &output)?;
                println!("Wrote example configuration to {}", output.display());
            }
        },
        None => {
            let generator = CrdGenerator::new(config)?;
            let summary = generator.run()?;
            println!(
                "Generated {} CRD YAML files in the {} directory.",
                summary.files_written,
                summary.output_dir.display()
            );
        }
    }

    Ok(())
}

/// Merge the configuration file (if any) with command-line overrides
fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(count) = cli.count {
        config.count = count;
    }
    if let Some(max_nesting_level) = cli.max_nesting_level {
        config.max_nesting_level = max_nesting_level;
    }
    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}
