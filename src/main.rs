use donation_portal::AppResources;
use donation_portal::api::start_webserver;
use donation_portal::config::load_config_or_panic;
use donation_portal::provider::IdentityProvider;
use donation_portal::store::theme::ThemeStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing() {
    let default_directives = "donation_portal=info,hyper=warn,reqwest=warn";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install().expect("Failed to install `color_eyre::install`");
    initialize_tracing();

    // Local development keeps provider credentials in a .env file.
    dotenvy::dotenv().ok();

    let config = Arc::new(load_config_or_panic());
    let provider = IdentityProvider::new(reqwest::Client::new(), config.provider.clone());
    let theme = Arc::new(RwLock::new(ThemeStore::new(config.default_theme)));

    let resources = AppResources {
        config,
        provider,
        theme,
    };

    start_webserver(resources).await?;
    Ok(())
}
