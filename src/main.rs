use mimalloc::MiMalloc;
use mongodb::Client;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mongo_init::{Config, provision};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        uri = %cfg.uri,
        user = %cfg.user,
        database = %cfg.database,
        "bootstrapping MongoDB user"
    );

    let client = Client::with_uri_str(&cfg.uri).await?;
    let admin = client.database("admin");
    provision::add_user(&admin, &cfg).await?;

    Ok(())
}
