//! Command-line interface for the NutriCart engine.
//!
//! Three subcommands cover the operational surface: `plan` and `swap` load
//! the recipe catalogue and cluster model, run the planner against a
//! JSON-encoded request, and print the result; `ingest` builds the
//! catalogue database from the offline pipeline's clustered recipe dump.
//! Artefact paths merge from CLI flags, configuration files, and
//! `NUTRICART_*` environment variables.

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod ingest;
mod plan;

pub use error::CliError;

pub(crate) const ARG_ARTEFACTS_DIR: &str = "artefacts-dir";
pub(crate) const ARG_CATALOG_DB: &str = "catalog-db";
pub(crate) const ARG_CLUSTER_MODEL: &str = "cluster-model";
pub(crate) const ARG_RECIPES: &str = "recipes";
pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ENV_INGEST_CATALOG_DB: &str = "NUTRICART_CMDS_INGEST_CATALOG_DB";
pub(crate) const ENV_INGEST_RECIPES: &str = "NUTRICART_CMDS_INGEST_RECIPES";
pub(crate) const ENV_PLAN_REQUEST: &str = "NUTRICART_CMDS_PLAN_REQUEST_PATH";

/// Run the NutriCart CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging,
/// artefact loading, or command execution fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout();
    match cli.command {
        Command::Plan(args) => plan::run_plan(args, &mut stdout),
        Command::Swap(args) => plan::run_swap(args, &mut stdout),
        Command::Ingest(args) => ingest::run_ingest(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nutricart",
    about = "Meal planning utilities for the NutriCart engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a weekly meal plan for a profile request.
    Plan(plan::PlanArgs),
    /// Draw a single substitute meal for a profile request.
    Swap(plan::PlanArgs),
    /// Build the recipe catalogue database from a clustered recipe dump.
    Ingest(ingest::IngestArgs),
}

#[cfg(test)]
mod tests;
