//! Server Initialization
//!
//! Loads configuration, installs logging, wires the providers into the job
//! runner, starts the worker and scheduler, then serves HTTP until shutdown.

use rocket::config::LogLevel;
use rsb_application::JobRunner;
use rsb_domain::ports::{SharedJobQueue, SharedSettingsSource};
use rsb_infrastructure::config::{AppConfig, ConfigLoader};
use rsb_infrastructure::logging::init_logging;
use rsb_infrastructure::{ErrorContext, JobWorker, Scheduler, SettingsStore, job_channel};
use rsb_providers::{ApplozicClientFactory, DiscourseDirectory, HttpClientConfig};
use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::routes::auth::WebhookAuthConfig;
use crate::routes::build_rocket;
use crate::state::ServerState;

/// Run the bridge until the HTTP server shuts down
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let loader = config_loader(config_path);
    let config = loader.load()?;
    init_logging(&config.logging)?;

    info!(
        address = %config.server.address,
        port = config.server.port,
        enabled = config.bridge.enabled,
        group = %config.bridge.group_name,
        "Starting Roster Sync Bridge"
    );
    let missing = config.bridge.missing_credentials();
    if !missing.is_empty() {
        warn!(missing = ?missing, "Bridge credentials incomplete, remote calls will fail");
    }

    let settings = Arc::new(SettingsStore::with_loader(loader, config.bridge.clone()));
    let runner = create_job_runner(&config, settings.clone())?;

    let (queue, receiver) = job_channel();
    let queue: SharedJobQueue = Arc::new(queue);
    let worker = JobWorker::new(runner, receiver)
        .with_settings_reload(settings.clone())
        .spawn();
    let scheduler = Scheduler::new(queue.clone(), config.schedule.clone()).start();

    let source: SharedSettingsSource = settings;
    let state = ServerState::new(source, queue);
    let auth = WebhookAuthConfig::new(config.server.webhook_token.clone());
    let ignited = build_rocket(rocket_config(&config)?, state, auth)
        .launch()
        .await?;

    info!("HTTP server stopped, draining job queue");
    scheduler.stop();
    drop(ignited);
    if let Err(e) = worker.await {
        error!(error = %e, "Job worker terminated abnormally");
    }
    Ok(())
}

fn config_loader(config_path: Option<&Path>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Build the job runner over the Discourse directory and Applozic clients
pub fn create_job_runner(
    config: &AppConfig,
    settings: SharedSettingsSource,
) -> rsb_domain::Result<JobRunner> {
    let http_client = HttpClientConfig::with_timeout(config.remote.timeout()).build_client()?;
    let directory = DiscourseDirectory::new(http_client.clone(), &config.host)?;
    let remotes = ApplozicClientFactory::new(http_client, config.remote.base_url.clone());
    Ok(JobRunner::new(
        settings,
        Arc::new(directory),
        Arc::new(remotes),
    ))
}

fn rocket_config(config: &AppConfig) -> rsb_domain::Result<rocket::Config> {
    let address: IpAddr = config
        .server
        .address
        .parse()
        .config_context(format!("invalid server address '{}'", config.server.address))?;

    Ok(rocket::Config {
        address,
        port: config.server.port,
        log_level: LogLevel::Critical,
        ..rocket::Config::default()
    })
}
