use std::{collections::BTreeMap, fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    core::{
        catalog::Catalog,
        price_plan::{PeakTimeMultiplier, PricePlan},
    },
    db::accounts::Accounts,
    prelude::*,
    quantity::rate::KilowattHourRate,
};

const DEFAULT: &str = include_str!("../config.toml");

#[must_use]
#[derive(Deserialize)]
pub struct Config {
    pub price_plans: Vec<PricePlan>,

    /// Smart meter ID to price plan name.
    #[serde(default)]
    pub accounts: BTreeMap<String, String>,
}

impl Config {
    /// Read the configuration file, or fall back to the built-in configuration.
    #[instrument]
    pub fn read_from(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                toml::from_str(&contents)
                    .with_context(|| format!("failed to parse `{}`", path.display()))?
            }
            None => toml::from_str(DEFAULT).context("failed to parse the default configuration")?,
        };
        Ok(config)
    }

    /// Validate the configuration and split it into the catalog and the accounts.
    pub fn try_into_parts(self) -> Result<(Catalog, Accounts)> {
        for price_plan in &self.price_plans {
            ensure!(!price_plan.name.is_empty(), "price plan name must not be empty");
            ensure!(
                (KilowattHourRate::ZERO..=PricePlan::MAX_UNIT_RATE).contains(&price_plan.unit_rate),
                "price plan `{}` unit rate must be within 0 and {}",
                price_plan.name,
                PricePlan::MAX_UNIT_RATE,
            );
            ensure!(
                price_plan.peak_time_multipliers.iter().all(|multiplier| {
                    (Decimal::ZERO..=PeakTimeMultiplier::MAX).contains(&multiplier.multiplier)
                }),
                "price plan `{}` multipliers must be within 0 and {}",
                price_plan.name,
                PeakTimeMultiplier::MAX,
            );
        }
        let catalog = Catalog::try_new(self.price_plans)?;
        ensure!(!catalog.is_empty(), "at least one price plan is required");
        let accounts = Accounts::from(self.accounts);
        for (smart_meter_id, plan_id) in accounts.iter() {
            if catalog.get(plan_id).is_none() {
                warn!(smart_meter_id, plan_id, "the account refers to an unknown price plan");
            }
        }
        info!(n_price_plans = catalog.len(), "configured");
        Ok((catalog, accounts))
    }
}
