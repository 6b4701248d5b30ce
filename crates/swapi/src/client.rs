use thiserror::Error;

use crate::config::SwapiConfig;
use crate::fetch::{Fetch, TransportError};
use crate::planets::PlanetPage;

/// Failure to obtain a planets page.
///
/// Every variant reads `unable to make request`; the cause stays reachable
/// through `source()`.
#[derive(Debug, Error)]
pub enum SwapiError {
    #[error("unable to make request")]
    Transport(#[source] TransportError),

    #[error("unable to make request")]
    EmptyBody,

    #[error("unable to make request")]
    InvalidBody(#[source] serde_json::Error),
}

/// Client for the planets listing over any [`Fetch`] implementation.
#[derive(Debug, Clone)]
pub struct SwapiClient<F> {
    fetch: F,
    config: SwapiConfig,
}

impl<F: Fetch> SwapiClient<F> {
    pub fn new(fetch: F) -> Self {
        Self::with_config(fetch, SwapiConfig::default())
    }

    pub fn with_config(fetch: F, config: SwapiConfig) -> Self {
        Self { fetch, config }
    }

    pub fn config(&self) -> &SwapiConfig {
        &self.config
    }

    /// Fetch the first page of planets (exactly one GET).
    pub async fn planets(&self) -> Result<PlanetPage, SwapiError> {
        fetch_planets(&self.fetch, &self.config.planets_url()).await
    }
}

/// Fetch the planets listing from the public API through `fetch`.
pub async fn get_star_wars_planets<F>(fetch: &F) -> Result<PlanetPage, SwapiError>
where
    F: Fetch + ?Sized,
{
    fetch_planets(fetch, &SwapiConfig::default().planets_url()).await
}

async fn fetch_planets<F>(fetch: &F, url: &str) -> Result<PlanetPage, SwapiError>
where
    F: Fetch + ?Sized,
{
    tracing::debug!(%url, "requesting planets");

    let response = fetch.get(url).await.map_err(|e| {
        tracing::warn!(%url, error = %e, "planets request failed");
        SwapiError::Transport(e)
    })?;

    if response.is_empty_body() {
        tracing::warn!(%url, status = response.status, "planets response had no body");
        return Err(SwapiError::EmptyBody);
    }

    let page: PlanetPage = serde_json::from_slice(&response.body).map_err(|e| {
        tracing::warn!(%url, status = response.status, error = %e, "planets response was not a JSON object");
        SwapiError::InvalidBody(e)
    })?;

    tracing::info!(%url, status = response.status, count = ?page.count(), "planets fetched");
    Ok(page)
}
