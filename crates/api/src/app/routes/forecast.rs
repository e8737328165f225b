use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Query, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/ration", get(get_ration_forecast))
        .route("/depletion", get(get_depletion_forecast))
}

pub async fn get_ration_forecast(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::RationQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    let Some((days, people)) = query.params() else {
        return StatusCode::NO_CONTENT.into_response();
    };

    match services.forecast_ration(days, people) {
        Ok(lines) => Json(lines).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_depletion_forecast(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::DepletionQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    let reference_time = query.reference_time(Utc::now());

    match services.forecast_depletion(reference_time) {
        Ok(lines) => Json(lines).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
