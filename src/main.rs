//! Server entry point

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use yi_restaurant::config::Settings;
use yi_restaurant::routes::create_router;
use yi_restaurant::state::AppState;
use yi_restaurant::store::{self, SqliteReservationStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🚀 Starting Yí Restaurant website...");

    // Load configuration
    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    // Open the SQLite store and make sure the schema exists
    let pool = store::connect(&settings.database).await?;
    store::create_schema(&pool).await?;
    info!("✅ Reservation store ready at {}", settings.database.url);

    let store = Arc::new(SqliteReservationStore::new(pool));
    let state = Arc::new(AppState::new(store, settings.admin.clone())?);

    // Build the router
    let app = create_router(state);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📚 Routes:");
    info!("   ─── Public Pages ───");
    info!("   GET  /                 - Home");
    info!("   GET  /menu             - Menu");
    info!("   GET  /about            - About");
    info!("   GET  /contact          - Contact");
    info!("   GET  /gallery          - Gallery");
    info!("");
    info!("   ─── Forms ───");
    info!("   POST /reservation      - Submit a reservation");
    info!("   POST /contact-form     - Submit a contact message");
    info!("");
    info!("   ─── Admin Console (Basic auth) ───");
    info!("   GET  /admin                          - Redirect to listing");
    info!("   GET  /admin/reservations             - List reservations");
    info!("   GET  /admin/reservation/{{id}}/edit    - Edit form");
    info!("   POST /admin/reservation/{{id}}/edit    - Apply edit");
    info!("   POST /admin/reservation/{{id}}/delete  - Delete");
    info!("");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,yi_restaurant=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_level(true).compact())
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
