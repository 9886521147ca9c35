use axum::Router;
use cascade_dns_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        doh_url = format!("http://{}/dns-query", bind_addr),
        admin_url = format!("http://{}/admin/record", bind_addr),
        "Starting web server"
    );

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app).await?;

    Ok(())
}

fn create_app(state: AppState) -> Router {
    create_api_routes(state).layer(TraceLayer::new_for_http())
}
