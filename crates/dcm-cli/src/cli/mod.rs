//! CLI for the DCM data-collection toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dcm_core::config;
use std::path::PathBuf;

use commands::{run_clear, run_inspect, run_render, run_window};

/// Top-level CLI for the DCM data-collection toolkit.
#[derive(Debug, Parser)]
#[command(name = "dcm")]
#[command(about = "DCM: cache-backed collection toolkit for flaky analytics sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show whether an artifact exists at a cache key, and its shape.
    Inspect {
        /// Artifact path; relative keys resolve against the configured cache root.
        path: PathBuf,
    },

    /// Delete the artifact at a cache key so the next load recomputes it.
    Clear {
        /// Artifact path; relative keys resolve against the configured cache root.
        path: PathBuf,
    },

    /// Assemble a query from a template file and print it.
    Render {
        /// Path to the template file.
        #[arg(long)]
        template: PathBuf,

        /// Replacement as TAG=VALUE; repeatable, applied in order.
        #[arg(long = "set", value_name = "TAG=VALUE")]
        set: Vec<String>,
    },

    /// Print a reporting date window as "START END".
    Window {
        /// Which window to print.
        #[arg(value_enum)]
        which: WindowKind,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowKind {
    /// First and last day of the previous calendar month.
    LastMonth,
    /// The 1st through the 15th of the current month.
    FirstHalf,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg.cache);

        match cli.command {
            CliCommand::Inspect { path } => run_inspect(&cfg, &path)?,
            CliCommand::Clear { path } => run_clear(&cfg, &path)?,
            CliCommand::Render { template, set } => run_render(&template, &set)?,
            CliCommand::Window { which } => run_window(which),
        }

        Ok(())
    }
}
