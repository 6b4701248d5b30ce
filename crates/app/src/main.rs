use anyhow::Context;

use sundry_products::create_random_product;
use sundry_swapi::{ReqwestFetch, SwapiClient, SwapiConfig};

const DEFAULT_USER: &str = "clark@kent.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    sundry_observability::init();

    let user = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_USER.to_string());

    match create_random_product(&user) {
        Ok(product) => println!("{}", serde_json::to_string_pretty(&product)?),
        Err(e) => tracing::warn!(%user, error = %e, "product not created"),
    }

    let config = SwapiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "fetching planets");

    let client = SwapiClient::with_config(ReqwestFetch::new(), config);
    let page = client.planets().await.context("fetching planets")?;

    match page.count() {
        Some(count) => println!("{count} planets known; first page:"),
        None => println!("{}", serde_json::to_string_pretty(&page)?),
    }
    for planet in page.results() {
        println!("  {}", planet.name);
    }

    Ok(())
}
