//! `sundry-swapi` — thin client for the Star Wars API planets listing.
//!
//! Networking sits behind the [`Fetch`] capability so callers (and tests) can
//! substitute their own transport. One request per call; no retries, caching
//! or timeouts.

pub mod client;
pub mod config;
pub mod fetch;
pub mod planets;

pub use client::{get_star_wars_planets, SwapiClient, SwapiError};
pub use config::SwapiConfig;
pub use fetch::{Fetch, FetchResponse, ReqwestFetch, TransportError};
pub use planets::{Planet, PlanetPage};
