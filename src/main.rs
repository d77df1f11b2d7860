//! Entry point: load config, wire dependencies, and run the server.

use storefront::auth::JwtSecret;
use storefront::config::Config;
use storefront::{create_app, AppState, ProductService};
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

    let state = AppState {
        product_service: ProductService::seeded(),
        jwt_secret: JwtSecret::new(
            config.jwt_secret.clone(),
            config.token_user.clone(),
            config.token_ttl,
        ),
    };

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
