//! # homewatchd — homewatch daemon
//!
//! Composition root that wires the two cores together and runs them.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize tracing
//! - Open the sensor store handle and construct the reading repositories
//! - Construct the device client and start the controller link
//! - Log link events and a latest-value snapshot at boot
//! - Handle graceful shutdown (SIGINT) with a bounded link close
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tokio::sync::broadcast;

use homewatch_adapter_device_tcp::{DeviceClient, DeviceConfig};
use homewatch_adapter_storage_mysql_sqlx::{
    MysqlDoorReadings, MysqlEnvironmentReadings, MysqlFireReadings, MysqlPetReadings,
    MysqlPlantReadings, Store, StoreConfig,
};
use homewatch_app::ports::{
    DeviceLink, DoorReadings, EnvironmentReadings, FireReadings, PetReadings, PlantReadings,
};
use homewatch_domain::link::LinkEvent;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(config.logging.filter.as_str()))
        .init();

    // Sensor store. An unreachable store is tolerated at boot — the
    // dashboard then renders "no data" until it comes back.
    let store = match store_config(&config).build().await {
        Ok(store) => {
            tracing::info!(
                host = %config.store.host,
                port = config.store.port,
                database = %config.store.database,
                "sensor store connected"
            );
            Some(store)
        }
        Err(err) => {
            tracing::warn!(error = %err, "sensor store unavailable, continuing without it");
            None
        }
    };

    if let Some(store) = &store {
        log_latest_snapshot(store, &config.store.home_id).await;
    }

    // Device link.
    let client = DeviceClient::new(DeviceConfig {
        host: config.device.host.clone(),
        port: config.device.port,
        ..DeviceConfig::default()
    });
    let events = tokio::spawn(log_link_events(client.subscribe()));
    client.connect(&config.device.host, config.device.port).await;

    tracing::info!("homewatchd running, press ctrl-c to stop");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    tracing::info!("shutting down");
    client.close().await;
    if let Some(store) = &store {
        store.close().await;
    }
    events.abort();

    Ok(())
}

fn store_config(config: &Config) -> StoreConfig {
    StoreConfig {
        host: config.store.host.clone(),
        port: config.store.port,
        database: config.store.database.clone(),
        user: config.store.user.clone(),
        password: config.store.password.clone(),
    }
}

/// Prime the log with the newest value of every sensor domain.
async fn log_latest_snapshot(store: &Store, home_id: &str) {
    let pool = store.pool();

    match MysqlEnvironmentReadings::new(pool.clone()).latest(home_id).await {
        Some(reading) => tracing::info!(
            temperature = reading.temperature,
            humidity = reading.humidity,
            "latest indoor climate"
        ),
        None => tracing::info!("no indoor climate data"),
    }

    match MysqlFireReadings::new(pool.clone()).latest(home_id).await {
        Some(alert) => tracing::info!(
            fire = %alert.fire_status,
            gas = %alert.level_status,
            "latest fire/gas state"
        ),
        None => tracing::info!("no fire/gas data"),
    }

    match MysqlPlantReadings::new(pool.clone())
        .latest_soil_moisture(home_id)
        .await
    {
        Some(moisture) => tracing::info!(moisture, "latest soil moisture"),
        None => tracing::info!("no soil moisture data"),
    }

    match MysqlPetReadings::new(pool.clone()).latest_toilet(home_id).await {
        Some(toilet) => tracing::info!(toilet = %toilet, "latest pet toilet state"),
        None => tracing::info!("no pet data"),
    }

    match MysqlDoorReadings::new(pool.clone()).latest(home_id).await {
        Some(state) => tracing::info!(state = %state, "latest door state"),
        None => tracing::info!("no door data"),
    }
}

/// Forward link events into the log until the client goes away.
async fn log_link_events(mut events: broadcast::Receiver<LinkEvent>) {
    loop {
        match events.recv().await {
            Ok(LinkEvent::Connected) => tracing::info!("controller link up"),
            Ok(LinkEvent::Disconnected) => tracing::info!("controller link down"),
            Ok(LinkEvent::MessageReceived(payload)) => {
                tracing::info!(payload = %payload, "controller message");
            }
            Ok(LinkEvent::ErrorOccurred(reason)) => {
                tracing::warn!(reason = %reason, "controller link error");
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                tracing::warn!(missed, "link event subscriber lagged");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
