use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

mod config;
mod data;
mod db;
mod features;
mod handlers;
mod routes;
mod schema;
mod state;
mod utils;

#[cfg(test)]
mod test_support;

use config::AppConfig;
use features::media::LocalObjectStorage;
use features::ranking::{WeeklyRankingJob, scheduler};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    // Database configuration
    let pool = db::create_pool(&config.database_url).context("Failed to create DB pool")?;
    {
        let mut conn = pool.get()?;
        db::init_schema(&mut conn).context("Failed to initialise schema")?;
    }

    let storage = Arc::new(LocalObjectStorage::new(
        &config.media_dir,
        &config.media_base_url,
        config.presign_ttl,
    ));

    // Weekly champion board refresh
    scheduler::spawn(
        pool.clone(),
        WeeklyRankingJob::new(config.ranking_size),
        config.ranking_interval,
    );

    let state = AppState {
        pool,
        storage,
        bcrypt_cost: config.bcrypt_cost,
    };
    let app = routes::app(state, &config.media_dir);

    // Start server
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
