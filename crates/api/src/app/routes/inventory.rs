use std::sync::Arc;

use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/items", get(list_items))
}

/// Current stock snapshot, in store order.
pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> impl IntoResponse {
    Json(services.items())
}
