//! Plan and swap command implementations.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use nutricart_core::{ClusterModel, FallbackCatalog, MealPlanner, PlanRequest, SqliteCatalog};
use nutricart_planner::ClusterPlanner;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ARTEFACTS_DIR, ARG_CATALOG_DB, ARG_CLUSTER_MODEL, ARG_REQUEST, CliError, ENV_PLAN_REQUEST,
};

/// Catalogue database filename assumed inside `--artefacts-dir`.
pub(crate) const DEFAULT_CATALOG_DB: &str = "recipes.db";
/// Cluster model filename assumed inside `--artefacts-dir`.
pub(crate) const DEFAULT_CLUSTER_MODEL: &str = "clusters.bin";

/// CLI arguments shared by the `plan` and `swap` subcommands.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Generate meals by loading prepared artefacts (recipes.db, \
                 clusters.bin) and running the planner against a profile. \
                 The request itself is provided as a JSON-encoded \
                 PlanRequest.",
    about = "Generate meals for a profile request"
)]
#[ortho_config(prefix = "NUTRICART")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Directory containing the default artefact filenames.
    #[arg(long = ARG_ARTEFACTS_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) artefacts_dir: Option<Utf8PathBuf>,
    /// Override the path to the SQLite recipe catalogue (`recipes.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
    /// Override the path to the cluster model artefact (`clusters.bin`).
    #[arg(long = ARG_CLUSTER_MODEL, value_name = "path")]
    #[serde(default)]
    pub(crate) cluster_model: Option<Utf8PathBuf>,
    /// Override the request seed for reproducible sampling.
    #[arg(long, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan`/`swap` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the recipe catalogue database.
    pub(crate) catalog_db: Utf8PathBuf,
    /// Path to the cluster model artefact.
    pub(crate) cluster_model: Utf8PathBuf,
    /// Seed override applied on top of the request file.
    pub(crate) seed: Option<u64>,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let artefacts_dir = args
            .artefacts_dir
            .unwrap_or_else(|| Utf8PathBuf::from("."));
        let catalog_db = args
            .catalog_db
            .unwrap_or_else(|| artefacts_dir.join(DEFAULT_CATALOG_DB));
        let cluster_model = args
            .cluster_model
            .unwrap_or_else(|| artefacts_dir.join(DEFAULT_CLUSTER_MODEL));
        Ok(Self {
            request_path,
            catalog_db,
            cluster_model,
            seed: args.seed,
        })
    }
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)?;
        require_existing(&self.catalog_db, ARG_CATALOG_DB)?;
        require_existing(&self.cluster_model, ARG_CLUSTER_MODEL)?;
        Ok(())
    }

    fn load_request(&self) -> Result<PlanRequest, CliError> {
        let raw = std::fs::read_to_string(self.request_path.as_std_path()).map_err(|source| {
            CliError::ReadInput {
                path: self.request_path.clone(),
                source,
            }
        })?;
        let mut request: PlanRequest =
            serde_json::from_str(&raw).map_err(|source| CliError::ParseInput {
                path: self.request_path.clone(),
                source,
            })?;
        if let Some(seed) = self.seed {
            request.seed = seed;
        }
        Ok(request)
    }

    fn build_planner(&self) -> Result<ClusterPlanner, CliError> {
        let catalog = SqliteCatalog::load(self.catalog_db.as_std_path())?;
        let model = ClusterModel::load(self.cluster_model.as_std_path())?;
        Ok(ClusterPlanner::new(
            catalog,
            model,
            FallbackCatalog::builtin(),
        ))
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    if path.as_std_path().is_file() {
        Ok(())
    } else {
        Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

pub(crate) fn run_plan<W: Write>(args: PlanArgs, out: &mut W) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request = config.load_request()?;
    let planner = config.build_planner()?;

    let plan = planner.weekly_plan(&request);
    serde_json::to_writer_pretty(&mut *out, &plan)?;
    writeln!(out).map_err(CliError::WriteOutput)
}

pub(crate) fn run_swap<W: Write>(args: PlanArgs, out: &mut W) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request = config.load_request()?;
    let planner = config.build_planner()?;

    let meal = planner.swap_meal(&request);
    serde_json::to_writer_pretty(&mut *out, &meal)?;
    writeln!(out).map_err(CliError::WriteOutput)
}
