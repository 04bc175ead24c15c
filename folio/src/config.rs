//! Application configuration management.
//!
//! Configuration is layered from default values, an optional TOML file, and
//! environment variables, in increasing order of precedence.

use crate::SolverLib;
use folio_sqlite::config::SqliteConfig;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Optimizer selection and limits
    #[serde(default)]
    pub solver: SolverConfig,

    /// Snapshot store configuration
    #[serde(default)]
    pub database: SqliteConfig,
}

/// Which optimizer to run, and how long it may take
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SolverConfig {
    /// The optimizer used when the command line does not name one
    #[serde(default)]
    pub lib: SolverLib,

    /// Wall-clock budget for a single solve, e.g. "250ms" (Clarabel only)
    #[serde(default, with = "humantime_serde")]
    pub time_limit: Option<Duration>,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `FOLIO_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// ```bash
    /// export FOLIO_SOLVER__LIB="greedy"
    /// export FOLIO_SOLVER__TIME_LIMIT="2s"
    /// export FOLIO_DATABASE__DATABASE_PATH="/data/snapshots.db"
    /// ```
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("FOLIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
