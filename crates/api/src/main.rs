use std::net::SocketAddr;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fenestra_api::config::ServerConfig;
use fenestra_api::notifications::{EmailConfig, Mailer};
use fenestra_api::routes;
use fenestra_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Logging ---
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fenestra_api=debug,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Config ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Configuration loaded");

    // --- Database pool ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL is not set");

    let pool = fenestra_db::create_pool(&database_url)
        .await
        .expect("Database connection failed");
    fenestra_db::health_check(&pool)
        .await
        .expect("Database did not answer the startup health check");
    fenestra_db::run_migrations(&pool)
        .await
        .expect("Migration run failed");
    tracing::info!("Database ready, migrations applied");

    // --- CORS ---
    let cors = build_cors_layer(&config);

    // --- Notification mailer ---
    // Missing SMTP configuration is not an error; submissions simply go
    // unannounced.
    let mailer = EmailConfig::from_env().map(Mailer::new);
    match &mailer {
        Some(_) => tracing::info!("Contact notification mailer enabled"),
        None => tracing::info!("SMTP_HOST not set, contact notifications disabled"),
    }

    // --- Shared state ---
    let state = AppState::new(pool, config.clone(), mailer);

    let request_id_header = HeaderName::from_static("x-request-id");

    // --- Routes and middleware ---
    // Layers run bottom-up; keep tests/common/mod.rs in step with this
    // stack when changing it.
    let app = Router::new()
        // /health lives at the root so probes skip the API prefix.
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        // Turn panics into 500 responses instead of dropped connections.
        .layer(CatchPanicLayer::new())
        // Cut off slow handlers.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Echo the request ID back to the caller.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // One INFO span per request, response status included.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Assign the ID before anything above logs it.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    // --- Serve ---
    let ip = config.host.parse().expect("HOST is not a valid IP address");
    let addr = SocketAddr::new(ip, config.port);
    tracing::info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("TCP bind failed");

    // Peer addresses feed the client-info extractor when no reverse proxy
    // sets X-Forwarded-For.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");

    tracing::info!("Shutdown complete");
}

/// Resolve when the process is asked to stop.
///
/// Listens for SIGINT and, on Unix, SIGTERM, so both an interactive Ctrl-C
/// and a process manager's stop request drain in-flight requests before the
/// listener closes.
async fn shutdown_signal() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Ctrl-C handler installation failed");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation failed")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("SIGINT received, draining connections"),
        () = sigterm => tracing::info!("SIGTERM received, draining connections"),
    }
}

/// CORS layer from the configured origin list.
///
/// A malformed origin panics here, at startup, rather than surfacing later
/// as mysteriously rejected browser requests.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::with_capacity(config.cors_origins.len());
    for origin in &config.cors_origins {
        let parsed = origin
            .parse()
            .unwrap_or_else(|e| panic!("CORS origin '{origin}' does not parse: {e}"));
        origins.push(parsed);
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
