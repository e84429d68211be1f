use anyhow::Context;
use api::app;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use tracing_appender::rolling;
use util::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::global().clone();
    let _log_guard = init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    if let Err(err) = config.ensure_database_dir() {
        tracing::warn!(path = %config.database_path, error = %err, "failed to create database directory");
    }
    let db = db::connect(&config.database_url())
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;

    let app = app(AppState::new(db));

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid address {}", config.bind_address()))?;

    tracing::info!(env = %config.env, %addr, "starting {}", config.project_name);
    println!("Starting {} on http://{}", config.project_name, addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind")?;
    axum::serve(listener, app).await.context("Server crashed")?;

    Ok(())
}

fn init_logging(
    log_file: &str,
    log_level: &str,
    log_to_stdout: bool,
) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
