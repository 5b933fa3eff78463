mod compare;
mod serve;

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};

pub use self::{compare::CompareArgs, serve::ServeArgs};
use crate::{
    api::models::MeterReadings,
    config::Config,
    core::catalog::Catalog,
    db::{accounts::Accounts, readings::Readings},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTTP API.
    #[clap(name = "serve")]
    Serve(Box<ServeArgs>),

    /// Compare the price plans for readings from a file and print the ranking.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),
}

#[must_use]
#[derive(Parser)]
pub struct ConfigArgs {
    /// TOML file with the price plans and the accounts, built-in plans are used when omitted.
    #[clap(long = "config", env = "CONFIG_PATH")]
    pub path: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<(Catalog, Accounts)> {
        Config::read_from(self.path.as_deref())?.try_into_parts()
    }
}

/// Read a JSON array of meter readings and append them to the store.
#[instrument(skip(readings))]
fn load_readings(path: &Path, readings: &Readings) -> Result {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let batches: Vec<MeterReadings> = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse `{}`", path.display()))?;
    for (index, batch) in batches.into_iter().enumerate() {
        let batch = match batch.validate() {
            Ok(batch) => batch,
            Err(errors) => bail!("invalid readings at index {index}: {}", errors.join(", ")),
        };
        debug!(smart_meter_id = %batch.smart_meter_id, n_readings = batch.readings.len(), "loaded");
        readings.store(&batch.smart_meter_id, batch.readings);
    }
    Ok(())
}
