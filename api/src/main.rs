use api::middleware::log_request;
use api::routes::routes;
use api::state::AppState;
use axum::middleware::from_fn;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::{config::AppConfig, paths};

#[tokio::main]
async fn main() {
    let config = AppConfig::global();
    let _log_guard = init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    let data_file = paths::data_file_path();
    if let Err(e) = paths::ensure_parent_dir(&data_file) {
        tracing::error!(path = %data_file.display(), error = %e, "Cannot create data directory");
    }
    tracing::info!(
        env = %config.env,
        data_file = %data_file.display(),
        "Using project data file"
    );

    let app_state = AppState::with_data_file(data_file);

    let app = routes(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Starting {} on http://{}", config.project_name, addr);

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

fn init_logging(
    log_file: &str,
    log_level: &str,
    log_to_stdout: bool,
) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let log_dir = paths::ensure_dir(paths::log_dir()).unwrap_or_else(|_| Path::new(".").into());

    let file_appender = rolling::daily(log_dir, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
