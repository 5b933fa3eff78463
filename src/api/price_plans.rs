use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    api::{
        AppState,
        models::{PricePlanComparisons, Recommendation, RecommendQuery},
    },
    core::ranking::rank,
    prelude::*,
};

const NO_CONSUMPTION_DATA: &str = "No consumption data found for the given smart meter ID";

fn no_consumption_data() -> Response {
    (StatusCode::NO_CONTENT, [("message", NO_CONSUMPTION_DATA)]).into_response()
}

#[instrument(skip(state))]
pub async fn compare_all(
    State(state): State<Arc<AppState>>,
    Path(smart_meter_id): Path<String>,
) -> Response {
    let Some(cost_per_plan) = state.engine.compare(&state.db.readings, &smart_meter_id) else {
        return no_consumption_data();
    };
    Json(PricePlanComparisons {
        price_plan_id: state.db.accounts.plan_id_for(&smart_meter_id).map(str::to_string),
        price_plan_comparisons: cost_per_plan,
    })
    .into_response()
}

#[instrument(skip(state))]
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Path(smart_meter_id): Path<String>,
    Query(query): Query<RecommendQuery>,
) -> Response {
    let Some(cost_per_plan) = state.engine.compare(&state.db.readings, &smart_meter_id) else {
        return no_consumption_data();
    };
    let recommendations: Vec<Recommendation> = rank(&cost_per_plan, query.limit)
        .into_iter()
        .map(|(name, cost)| Recommendation::from([(name, cost)]))
        .collect();
    debug!(n_recommendations = recommendations.len(), "ranked");
    Json(recommendations).into_response()
}
