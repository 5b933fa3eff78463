pub mod models;
mod price_plans;
mod readings;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{core::engine::Engine, db::Db};

pub struct AppState {
    pub engine: Engine,
    pub db: Db,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/readings/store", post(readings::store))
        .route("/readings/read/{smart_meter_id}", get(readings::read))
        .route("/price-plans/compare-all/{smart_meter_id}", get(price_plans::compare_all))
        .route("/price-plans/recommend/{smart_meter_id}", get(price_plans::recommend))
        .with_state(state)
}
