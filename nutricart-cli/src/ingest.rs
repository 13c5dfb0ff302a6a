//! Ingest command: build the catalogue database from a clustered dump.
//!
//! The offline training pipeline emits a JSON array of recipe records with
//! their cluster assignments; ingestion persists them as the SQLite
//! catalogue the planner loads at startup.

use camino::Utf8PathBuf;
use clap::Parser;
use nutricart_core::{Recipe, SqliteCatalog};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG_DB, ARG_RECIPES, CliError, ENV_INGEST_CATALOG_DB, ENV_INGEST_RECIPES,
};

/// CLI arguments for the `ingest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Define the input dump and output database for catalogue \
                 ingestion. Paths can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Build the recipe catalogue database from a clustered dump"
)]
#[ortho_config(prefix = "NUTRICART")]
pub(crate) struct IngestArgs {
    /// Path to the clustered recipe dump (JSON array of recipe records).
    #[arg(long = ARG_RECIPES, value_name = "path")]
    #[serde(default)]
    pub(crate) recipes: Option<Utf8PathBuf>,
    /// Destination path for the catalogue database.
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

impl IngestArgs {
    fn into_config(self) -> Result<IngestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        IngestConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IngestConfig {
    recipes: Utf8PathBuf,
    catalog_db: Utf8PathBuf,
}

impl TryFrom<IngestArgs> for IngestConfig {
    type Error = CliError;

    fn try_from(args: IngestArgs) -> Result<Self, Self::Error> {
        let recipes = args.recipes.ok_or(CliError::MissingArgument {
            field: ARG_RECIPES,
            env: ENV_INGEST_RECIPES,
        })?;
        let catalog_db = args.catalog_db.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG_DB,
            env: ENV_INGEST_CATALOG_DB,
        })?;
        Ok(Self {
            recipes,
            catalog_db,
        })
    }
}

pub(crate) fn run_ingest(args: IngestArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let raw = std::fs::read_to_string(config.recipes.as_std_path()).map_err(|source| {
        CliError::ReadInput {
            path: config.recipes.clone(),
            source,
        }
    })?;
    let recipes: Vec<Recipe> =
        serde_json::from_str(&raw).map_err(|source| CliError::ParseInput {
            path: config.recipes.clone(),
            source,
        })?;

    SqliteCatalog::write(config.catalog_db.as_std_path(), &recipes)?;
    log::info!(
        "ingested {} recipes into {}",
        recipes.len(),
        config.catalog_db
    );
    Ok(())
}
