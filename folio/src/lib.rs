use clap::Parser;
use folio_solver::io::OutcomeError;
use folio_sqlite::Db;
use std::{io::Write, path::PathBuf};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

pub mod config;
use config::AppConfig;

// The top-level arguments: an optional config file and which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub async fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig { solver, database } = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Solve { io, lib } => {
                let portfolio = io.portfolio()?;
                let lib = lib.unwrap_or(solver.lib);
                tracing::debug!(assets = portfolio.0.len(), ?lib, "solving allocation");

                // The solve is a blocking call, so it is kept off the async workers
                let outcome = tokio::task::spawn_blocking(move || lib.solve(&portfolio, &solver))
                    .await?
                    .inspect_err(|error| match error {
                        OutcomeError::Allocation(_) => {
                            tracing::warn!(%error, "constraints admit no optimal allocation")
                        }
                        OutcomeError::Palette(_) => {
                            tracing::warn!(%error, "too many assets to chart")
                        }
                    })?;

                let mut output = io.writer()?;
                serde_json::to_writer_pretty(&mut output, &outcome)?;
                writeln!(output)?;
                output.flush()?;
            }
            Commands::Export { io, format } => {
                let portfolio = io.portfolio()?;

                let format = if let Some(format) = format {
                    format
                } else if let Some(ext) = io.extension() {
                    ext.parse()?
                } else {
                    return Err(CliError::ExportInference)?;
                };

                let mut output = io.writer()?;
                format.export(&portfolio, &mut output)?;
                output.flush()?;
            }
            Commands::Palette { count } => {
                palette(count, &mut std::io::stdout().lock())?;
            }
            Commands::Sync { io } => {
                let portfolio = io.portfolio()?;
                let db = Db::open(&database).await?;
                let mut output = io.writer()?;
                sync(&db, &portfolio, &mut output).await?;
                output.flush()?;
            }
            Commands::Show { id } => {
                let db = Db::open(&database).await?;
                show(&db, id, &mut std::io::stdout().lock()).await?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Unable to infer export format, please specify a valid format")]
    ExportInference,
    #[error("No snapshot with id {0}")]
    SnapshotNotFound(i64),
}
