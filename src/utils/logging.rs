use crate::config::AppConfig;
use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{filter::Targets, fmt, fmt::time::UtcTime, prelude::*, EnvFilter};

fn base_filter(config: &AppConfig) -> EnvFilter {
    let default = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber. Keep the returned guards alive for the
/// lifetime of the process or buffered file output is lost.
pub fn setup_logging(config: &AppConfig) -> anyhow::Result<(WorkerGuard, WorkerGuard)> {
    let log_dir = &config.logging.dir;
    let svc = &config.logging.service;

    // -----------------------
    // Service Logs
    // -----------------------
    let normal_log_dir = format!("{}/{}", log_dir, svc);
    fs::create_dir_all(&normal_log_dir)?;
    let (normal_writer, normal_guard) =
        tracing_appender::non_blocking(rolling::daily(normal_log_dir, format!("{}.log", svc)));

    let normal_layer = fmt::layer()
        .with_writer(normal_writer)
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_thread_ids(false)
        .with_filter(base_filter(config));

    // -----------------------
    // Access Logs
    // -----------------------
    let access_log_dir = format!("{}/access", log_dir);
    fs::create_dir_all(&access_log_dir)?;
    let (access_writer, access_guard) = tracing_appender::non_blocking(rolling::daily(
        access_log_dir,
        format!("{}_access.log", svc),
    ));

    let access_layer = fmt::layer()
        .with_writer(access_writer)
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_filter(Targets::new().with_target("tower_http", tracing::Level::INFO));

    // -----------------------
    // Console Layer
    // -----------------------
    let console_layer = fmt::layer()
        .compact()
        .with_timer(UtcTime::rfc_3339())
        .with_target(true)
        .with_thread_ids(false)
        .with_filter(base_filter(config));

    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(normal_layer)
            .with(access_layer)
            .with(console_layer),
    )?;

    Ok((normal_guard, access_guard))
}
