//! SQLite-backed loading and persistence for the recipe catalogue.
//!
//! The catalogue database is produced by the offline pipeline (a `recipes`
//! table with the `cluster` column already assigned) and read once at
//! process start; nutrition and price columns are nullable and backfilled
//! downstream when meals are emitted.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

use crate::{Catalog, CatalogError, Recipe};

/// Error raised when reading or writing the catalogue database.
#[derive(Debug, Error)]
pub enum SqliteCatalogError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {}: {source}", path.display())]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a statement failed.
    #[error("failed to {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A row carried a cluster id outside the supported range.
    #[error("recipe '{name}' has cluster id {cluster} outside the supported range")]
    ClusterOutOfRange {
        /// Name of the offending recipe.
        name: String,
        /// Raw cluster value read from the database.
        cluster: i64,
    },
    /// The database held no recipes; the engine cannot serve without a
    /// catalogue.
    #[error("catalogue database at {} contains no recipes", path.display())]
    EmptyCatalog {
        /// Location of the SQLite database on disk.
        path: PathBuf,
    },
    /// Generic SQLite failure while reading rows.
    #[error("database error: {source}")]
    Database {
        /// Source error raised by the SQLite driver.
        #[from]
        source: rusqlite::Error,
    },
}

/// Read-only loader for the recipe catalogue database.
#[derive(Debug)]
pub struct SqliteCatalog;

impl SqliteCatalog {
    /// Load the full catalogue from a `recipes` table.
    ///
    /// The database is opened read-only; rows are returned in id order so
    /// repeated loads observe a stable catalogue ordering.
    ///
    /// # Errors
    /// Returns [`SqliteCatalogError`] when the database cannot be opened or
    /// queried, when a cluster id does not fit `u32`, or when the table is
    /// empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog, SqliteCatalogError> {
        let path = path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqliteCatalogError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;

        let recipes = load_recipes(&connection)?;
        let catalog = Catalog::new(recipes).map_err(|CatalogError::Empty| {
            SqliteCatalogError::EmptyCatalog {
                path: path.to_path_buf(),
            }
        })?;
        log::info!(
            "loaded recipe catalogue from {}: {} recipes",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Create or replace a catalogue database from recipes; the interface
    /// the ingest tooling writes through.
    ///
    /// # Errors
    /// Returns [`SqliteCatalogError`] when the database cannot be created or
    /// written.
    pub fn write<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<(), SqliteCatalogError> {
        let path = path.as_ref();
        let mut connection =
            Connection::open(path).map_err(|source| SqliteCatalogError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;

        let tx = connection
            .transaction()
            .map_err(|source| SqliteCatalogError::Query {
                operation: "begin catalogue transaction",
                source,
            })?;
        tx.execute("DROP TABLE IF EXISTS recipes", [])
            .map_err(|source| SqliteCatalogError::Query {
                operation: "reset recipes table",
                source,
            })?;
        tx.execute(
            "CREATE TABLE recipes (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                calories REAL,
                protein REAL,
                carbs REAL,
                fat REAL,
                price REAL,
                cluster INTEGER NOT NULL
            )",
            [],
        )
        .map_err(|source| SqliteCatalogError::Query {
            operation: "create recipes table",
            source,
        })?;
        for recipe in recipes {
            tx.execute(
                "INSERT INTO recipes (name, calories, protein, carbs, fat, price, cluster)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                (
                    recipe.name.as_str(),
                    recipe.calories,
                    recipe.protein,
                    recipe.carbs,
                    recipe.fat,
                    recipe.price,
                    recipe.cluster,
                ),
            )
            .map_err(|source| SqliteCatalogError::Query {
                operation: "insert recipe row",
                source,
            })?;
        }
        tx.commit().map_err(|source| SqliteCatalogError::Query {
            operation: "commit catalogue transaction",
            source,
        })
    }
}

fn load_recipes(connection: &Connection) -> Result<Vec<Recipe>, SqliteCatalogError> {
    let mut statement = connection
        .prepare(
            "SELECT name, calories, protein, carbs, fat, price, cluster
             FROM recipes ORDER BY id",
        )
        .map_err(|source| SqliteCatalogError::Query {
            operation: "prepare recipe selection",
            source,
        })?;

    let mut rows = statement
        .query([])
        .map_err(|source| SqliteCatalogError::Query {
            operation: "query recipes",
            source,
        })?;
    let mut recipes = Vec::new();

    while let Some(row) = rows.next()? {
        let name: String = row.get(0)?;
        let calories: Option<f64> = row.get(1)?;
        let protein: Option<f64> = row.get(2)?;
        let carbs: Option<f64> = row.get(3)?;
        let fat: Option<f64> = row.get(4)?;
        let price: Option<f64> = row.get(5)?;
        let cluster_raw: i64 = row.get(6)?;
        let cluster = u32::try_from(cluster_raw).map_err(|_| {
            SqliteCatalogError::ClusterOutOfRange {
                name: name.clone(),
                cluster: cluster_raw,
            }
        })?;

        recipes.push(Recipe {
            name,
            calories,
            protein,
            carbs,
            fat,
            price,
            cluster,
        });
    }

    Ok(recipes)
}
