use anyhow::Result;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::store::ClimateStore;

pub async fn run(addr: &str, store: ClimateStore) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(store).layer(cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Climate API listening at http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
