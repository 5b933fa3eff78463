use std::path::PathBuf;

use clap::Parser;

use crate::{
    cli::{ConfigArgs, load_readings},
    core::{engine::Engine, ranking::rank},
    db::readings::Readings,
    prelude::*,
    tables::build_ranking_table,
};

#[derive(Parser)]
pub struct CompareArgs {
    /// JSON file with an array of meter readings.
    #[clap(long = "readings", env = "READINGS_PATH")]
    pub readings_path: PathBuf,

    #[clap(long, env = "SMART_METER_ID")]
    pub smart_meter_id: String,

    /// Show only this many cheapest plans.
    #[clap(long)]
    pub limit: Option<usize>,
}

impl CompareArgs {
    pub fn run(&self, config: &ConfigArgs) -> Result {
        let (catalog, accounts) = config.load()?;
        let readings = Readings::default();
        load_readings(&self.readings_path, &readings)?;

        let engine = Engine::new(catalog);
        let Some(cost_per_plan) = engine.compare(&readings, &self.smart_meter_id) else {
            bail!("no readings found for `{}`", self.smart_meter_id);
        };
        let ranking = rank(&cost_per_plan, self.limit);
        let current_plan_id = accounts.plan_id_for(&self.smart_meter_id);
        println!("{}", build_ranking_table(&ranking, engine.catalog(), current_plan_id));
        Ok(())
    }
}
