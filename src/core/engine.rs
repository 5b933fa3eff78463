use std::collections::BTreeMap;

use itertools::Itertools;
use rust_decimal::Decimal;

use crate::{
    core::{catalog::Catalog, price_plan::PricePlan, reading::Reading, source::ReadingSource},
    prelude::*,
    quantity::{cost::Cost, time::Hours},
};

/// Total cost per price plan name.
pub type CostPerPlan = BTreeMap<String, Cost>;

/// Prices meter readings against every plan of the catalog.
#[must_use]
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Compare the plans for the smart meter.
    ///
    /// Returns [`None`] when the source knows nothing about the meter.
    #[instrument(skip(self, source))]
    pub fn compare<S>(&self, source: &S, smart_meter_id: &str) -> Option<CostPerPlan>
    where
        S: ReadingSource + ?Sized,
    {
        let Some(readings) = source.get_readings(smart_meter_id) else {
            info!("no readings found");
            return None;
        };
        Some(self.cost_per_plan(&readings))
    }

    /// Calculate the cost of the readings under each plan of the catalog.
    #[instrument(skip_all, fields(n_readings = readings.len(), n_plans = self.catalog.len()))]
    pub fn cost_per_plan(&self, readings: &[Reading]) -> CostPerPlan {
        self.catalog
            .iter()
            .map(|price_plan| {
                let cost = total_cost(readings, price_plan);
                debug!(price_plan = %price_plan.name, %cost, "calculated");
                (price_plan.name.clone(), cost)
            })
            .collect()
    }
}

/// Integrate the readings with the trapezoidal rule and price each interval.
///
/// The readings may come in any order. Each interval cost is rounded half-up
/// to [`Cost::SCALE`] decimal places before it is added to the total.
///
/// Readings up to [`Reading::MAX_VALUE`] and prices up to [`PricePlan::MAX_UNIT_RATE`]
/// times [`PeakTimeMultiplier::MAX`] cannot overflow over the whole `chrono` time range.
///
/// [`PeakTimeMultiplier::MAX`]: crate::core::price_plan::PeakTimeMultiplier::MAX
pub fn total_cost(readings: &[Reading], price_plan: &PricePlan) -> Cost {
    readings
        .iter()
        .sorted_by_key(|reading| reading.timestamp)
        .tuple_windows()
        .filter_map(|(current, next)| interval_cost(current, next, price_plan))
        .sum()
}

fn interval_cost(current: &Reading, next: &Reading, price_plan: &PricePlan) -> Option<Cost> {
    let time_delta = next.timestamp - current.timestamp;
    if time_delta.num_seconds() == 0 {
        trace!(timestamp = %current.timestamp, "skipping the zero-length interval");
        return None;
    }
    let hours = Hours::from(time_delta);
    let average_power = (current.value + next.value) / Decimal::TWO;
    let unit_price = price_plan.price_at(current.timestamp);
    let cost = (average_power * hours * unit_price).round();
    trace!(
        timestamp = %current.timestamp,
        %hours,
        %average_power,
        %unit_price,
        %cost,
        "priced the interval",
    );
    Some(cost)
}
