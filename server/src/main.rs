mod config;
mod routes;
mod state;

use tracker_ui::app::Shell;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let shell = Shell::standard().expect("shell bootstrap failed");
    tracing::info!(
        routes = shell.routes().entries().len(),
        fallback = shell.routes().fallback_target(),
        "route table loaded"
    );

    let state = state::AppState::new(shell);
    let app = routes::app(state).expect("leptos app setup failed");

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "tracker listening");
    axum::serve(listener, app).await.expect("server failed");
}
