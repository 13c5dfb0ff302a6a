//! Error types emitted by the NutriCart CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use nutricart_core::{ClusterModelError, SqliteCatalogError};
use thiserror::Error;

/// Errors emitted by the NutriCart CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing CLI flag.
        field: &'static str,
        /// Environment variable that can supply the value instead.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Name of the CLI flag referencing the path.
        field: &'static str,
        /// Path that failed the check.
        path: Utf8PathBuf,
    },
    /// Reading an input file failed.
    #[error("failed to read {path}: {source}")]
    ReadInput {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// An input file held invalid JSON.
    #[error("failed to parse {path}: {source}")]
    ParseInput {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Decoder error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Loading or writing the recipe catalogue failed.
    #[error(transparent)]
    Catalog(#[from] SqliteCatalogError),
    /// Loading the cluster model artefact failed.
    #[error(transparent)]
    ClusterModel(#[from] ClusterModelError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[from] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(std::io::Error),
}
