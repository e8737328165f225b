use anyhow::Context;
use chrono::Utc;

use rationboard_api::app::{self, services::AppServices};
use rationboard_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rationboard_observability::init();

    let config = ApiConfig::from_env()?;
    let inventory = config.build_inventory(Utc::now())?;
    let app = app::build_app(AppServices::new(inventory));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
