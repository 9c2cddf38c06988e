//! Fetches remote fire data and commits it to the store.
//!
//! Every fetch brackets its network call with a [`RequestGuard`] so the
//! store's pending-request counter balances on all exit paths. There is no
//! retry anywhere in here: the place list and status document leave prior
//! state untouched on failure, while a failed per-place fetch discards the
//! whole place context (see [`Gateway::fetch_fire_summary`]).

use crate::config::Config;
use crate::fire::{FireSummary, Place, UpdateStatus};
use crate::store::{RequestGuard, SharedStore};
use anyhow::{Result, anyhow};
use log::{info, warn};
use std::time::Duration;
use surf_governor::GovernorMiddleware;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
  #[error("request to {url} failed: {message}")]
  RemoteFetch { url: String, message: String },
}

/// The remote endpoints, behind a trait so tests can substitute canned data.
#[async_trait::async_trait]
pub trait FireApi: Send + Sync {
  async fn places(&self) -> Result<Vec<Place>>;
  async fn fire_summary(&self, latitude: f64, longitude: f64) -> Result<FireSummary>;
  async fn update_status(&self) -> Result<UpdateStatus>;
}

/// The real endpoints over HTTP.
pub struct HttpFireApi {
  api_url: String,
  base_url: String,
  client: surf::Client,
}

impl HttpFireApi {
  #[must_use]
  pub fn new(config: &Config) -> Self {
    let client: surf::Client = surf::Config::new()
      .set_timeout(Some(Duration::from_secs(30)))
      .try_into()
      .expect("client");
    Self {
      api_url: config.api_url.clone(),
      base_url: config.base_url.clone(),
      client: client.with(GovernorMiddleware::per_second(10).expect("rate limiter")),
    }
  }

  async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
    self.client.get(url).recv_json::<T>().await.map_err(|e| {
      anyhow!(GatewayError::RemoteFetch { url: url.to_string(), message: e.to_string() })
    })
  }
}

#[async_trait::async_trait]
impl FireApi for HttpFireApi {
  async fn places(&self) -> Result<Vec<Place>> {
    let url = format!("{}/places/communities?tags=awe", self.api_url);
    self.get_json(&url).await
  }

  async fn fire_summary(&self, latitude: f64, longitude: f64) -> Result<FireSummary> {
    let url = format!("{}/fire/point/{latitude}/{longitude}", self.api_url);
    self.get_json(&url).await
  }

  async fn update_status(&self) -> Result<UpdateStatus> {
    let url = format!("{}/status.json", self.base_url);
    self.get_json(&url).await
  }
}

pub struct Gateway<A: FireApi> {
  api: A,
  store: SharedStore,
}

impl Gateway<HttpFireApi> {
  #[must_use]
  pub fn new(config: &Config, store: SharedStore) -> Self {
    Self::with_api(HttpFireApi::new(config), store)
  }
}

impl<A: FireApi> Gateway<A> {
  pub fn with_api(api: A, store: SharedStore) -> Self {
    Self { api, store }
  }

  #[must_use]
  pub fn store(&self) -> &SharedStore {
    &self.store
  }

  /// Loads the community list. On failure the store's place list stays
  /// whatever it was and the error surfaces to the caller.
  pub async fn fetch_places(&self) -> Result<()> {
    let _guard = RequestGuard::new(&self.store);
    let places = self.api.places().await?;
    info!("loaded {} places", places.len());
    self.store.lock().unwrap().set_places(places);
    Ok(())
  }

  /// Loads the per-place fire summary and derives the nearby-fire list
  /// from it. On failure the place context is discarded entirely (selection
  /// cleared, view sent home) rather than leaving a half-updated panel.
  pub async fn fetch_fire_summary(&self, place: &Place) -> Result<()> {
    let _guard = RequestGuard::new(&self.store);
    match self.api.fire_summary(place.latitude, place.longitude).await {
      Ok(summary) => {
        self.store.lock().unwrap().commit_fire_summary(summary);
        Ok(())
      }
      Err(e) => {
        warn!("fire summary fetch for {} failed: {e}", place.id);
        let mut store = self.store.lock().unwrap();
        store.clear_selection();
        store.navigate_home();
        Err(e)
      }
    }
  }

  /// Selects the place (eagerly clearing data from the previous selection)
  /// and fetches its summary.
  pub async fn select_and_fetch(&self, place: Place) -> Result<()> {
    self.store.lock().unwrap().select_place(place.clone());
    self.fetch_fire_summary(&place).await
  }

  /// Loads the data-freshness document. Optional: every getter that reads
  /// it tolerates its absence, so a failure here only surfaces the error.
  pub async fn fetch_update_status(&self) -> Result<()> {
    let _guard = RequestGuard::new(&self.store);
    let status = self.api.update_status().await?;
    self.store.lock().unwrap().set_update_status(status);
    Ok(())
  }
}
