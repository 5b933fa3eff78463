use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    api::{
        AppState,
        models::{ElectricityReading, MeterReadings},
    },
    core::source::ReadingSource,
    prelude::*,
};

#[instrument(skip_all)]
pub async fn store(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MeterReadings>, JsonRejection>,
) -> Response {
    let meter_readings = match payload {
        Ok(Json(meter_readings)) => meter_readings,
        Err(rejection) => {
            warn!(%rejection, "malformed readings");
            return (StatusCode::BAD_REQUEST, Json([rejection.body_text()])).into_response();
        }
    };
    match meter_readings.validate() {
        Ok(valid) => {
            state.db.readings.store(&valid.smart_meter_id, valid.readings);
            StatusCode::OK.into_response()
        }
        Err(errors) => {
            warn!(?errors, "rejected the readings");
            (StatusCode::BAD_REQUEST, Json(errors)).into_response()
        }
    }
}

#[instrument(skip(state))]
pub async fn read(
    State(state): State<Arc<AppState>>,
    Path(smart_meter_id): Path<String>,
) -> Response {
    match state.db.readings.get_readings(&smart_meter_id) {
        Some(readings) if !readings.is_empty() => {
            let readings: Vec<ElectricityReading> =
                readings.into_iter().map(ElectricityReading::from).collect();
            Json(readings).into_response()
        }
        _ => StatusCode::NO_CONTENT.into_response(),
    }
}
