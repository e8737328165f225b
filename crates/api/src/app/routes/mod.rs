use axum::{Router, routing::post};

pub mod forecast;
pub mod inventory;
pub mod simulation;
pub mod system;

/// Router for all inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/forecast", forecast::router())
        .route("/simulate", post(simulation::simulate))
}
