//! SQL demo: connect to PostgreSQL, list and read `product` rows, insert a batch.

use storefront::config::Config;
use storefront::db;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::create_pool(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("unable to open connection to db: {}", e))?;

    let report = db::sql_demo::run(&pool).await?;
    tracing::info!(
        rows = report.rows_listed,
        inserted = report.inserted_ids.len(),
        "sql demo finished"
    );

    pool.close().await;
    Ok(())
}
