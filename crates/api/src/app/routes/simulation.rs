use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Run a consumption simulation. This permanently depletes the shared store.
pub async fn simulate(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::SimulateRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let Some((people, days)) = body.params() else {
        return StatusCode::NO_CONTENT.into_response();
    };

    // The run holds the store's write lock; keep it off the async workers.
    let result = tokio::task::spawn_blocking(move || services.simulate(people, days)).await;

    match result {
        Ok(Ok(outcome)) => {
            tracing::info!(
                people,
                days,
                simulated = outcome.records.len(),
                depleted_early = outcome.depleted_early,
                "simulation committed"
            );
            Json(outcome).into_response()
        }
        Ok(Err(e)) => errors::domain_error_to_response(e),
        Err(e) => {
            tracing::error!(error = %e, "simulation task failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "simulation failed")
        }
    }
}
