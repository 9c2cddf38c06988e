//! The application's single source of truth.
//!
//! All mutation goes through named methods that hold the state for the whole
//! transition, so readers never observe a half-applied change. Mutations emit
//! a [`StoreEvent`] to registered subscribers instead of relying on any
//! implicit change tracking.

use crate::catalog::{LayerDescriptor, LayerParams, ResolvedSource};
use crate::fire::{FireSummary, NearbyFire, Place, UpdateStatus, derive_nearby_fires};
use crate::permalink::{self, UrlSync};
use chrono::NaiveDateTime;
use log::{debug, warn};
use std::fmt::Display;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
  #[error("no layer matches {key}")]
  NotFound { key: String },
  #[error("layer {id} has a fixed source and takes no parameters")]
  InvalidParameter { id: String },
}

/// How a layer is addressed: by its stable id, or by the compact numeric id
/// used in permalinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerKey {
  Id(String),
  Numeric(u32),
}

impl Display for LayerKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      LayerKey::Id(id) => write!(f, "id \"{id}\""),
      LayerKey::Numeric(n) => write!(f, "numeric id {n}"),
    }
  }
}

impl From<&str> for LayerKey {
  fn from(id: &str) -> Self {
    LayerKey::Id(id.to_string())
  }
}

impl From<u32> for LayerKey {
  fn from(numeric: u32) -> Self {
    LayerKey::Numeric(numeric)
  }
}

/// Runtime state of one catalog entry, one per descriptor, in catalog order.
#[derive(Debug, Clone)]
pub struct LayerState {
  pub descriptor: LayerDescriptor,
  pub visible: bool,
  pub params: Option<LayerParams>,
  pub resolved: ResolvedSource,
}

impl LayerState {
  fn from_descriptor(descriptor: &LayerDescriptor) -> Self {
    Self {
      visible: descriptor.initially_visible,
      params: descriptor.default_params,
      resolved: descriptor.resolve(None),
      descriptor: descriptor.clone(),
    }
  }
}

/// Notification sent to subscribers after a mutation has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
  LayersInitialized,
  LayerVisibility { id: String, visible: bool },
  LayerParamsUpdated { id: String },
  SelectionChanged,
  PlacesLoaded,
  FireDataLoaded,
  StatusLoaded,
  /// Fetching data for the selected place failed terminally; the view
  /// should return to the default (home) map.
  NavigateHome,
}

type Subscriber = Box<dyn Fn(&StoreEvent) + Send>;

pub struct Store {
  layers: Vec<LayerState>,
  layer_menu_visible: bool,
  pending_requests: u32,
  places: Option<Vec<Place>>,
  selected: Option<Place>,
  api_output: Option<FireSummary>,
  nearby_fires: Option<Vec<NearbyFire>>,
  fire_count: u64,
  acres_burned: u64,
  status: Option<UpdateStatus>,
  subscribers: Vec<Subscriber>,
}

impl Store {
  #[must_use]
  pub fn new(catalog: &[LayerDescriptor]) -> Self {
    let mut store = Self {
      layers: Vec::new(),
      layer_menu_visible: true,
      pending_requests: 0,
      places: None,
      selected: None,
      api_output: None,
      nearby_fires: None,
      fire_count: 0,
      acres_burned: 0,
      status: None,
      subscribers: Vec::new(),
    };
    store.initialize_layers(catalog);
    store
  }

  /// Derives runtime state for every catalog entry, preserving order.
  ///
  /// Calling this a second time replaces all runtime layer state and loses
  /// any user toggles; it is meant as a one-time startup operation.
  pub fn initialize_layers(&mut self, catalog: &[LayerDescriptor]) {
    self.layers = catalog.iter().map(LayerState::from_descriptor).collect();
    self.notify(&StoreEvent::LayersInitialized);
  }

  pub fn subscribe(&mut self, subscriber: Subscriber) {
    self.subscribers.push(subscriber);
  }

  fn notify(&self, event: &StoreEvent) {
    for subscriber in &self.subscribers {
      subscriber(event);
    }
  }

  fn layer_index(&self, key: &LayerKey) -> Result<usize, StoreError> {
    let found = match key {
      LayerKey::Id(id) => self.layers.iter().position(|l| l.descriptor.id == id),
      LayerKey::Numeric(n) => self.layers.iter().position(|l| l.descriptor.numeric_id == *n),
    };
    found.ok_or_else(|| StoreError::NotFound { key: key.to_string() })
  }

  #[must_use]
  pub fn layers(&self) -> &[LayerState] {
    &self.layers
  }

  #[must_use]
  pub fn layer(&self, id: &str) -> Option<&LayerState> {
    self.layers.iter().find(|l| l.descriptor.id == id)
  }

  #[must_use]
  pub fn visible_layers(&self) -> Vec<&LayerState> {
    self.layers.iter().filter(|l| l.visible).collect()
  }

  /// Sets a layer's visibility to the given value. The layer may be
  /// addressed by stable id or by numeric id; if a URL-sync collaborator is
  /// supplied the permalink is recomputed synchronously after the mutation.
  pub fn set_layer_visibility(
    &mut self,
    key: &LayerKey,
    visible: bool,
    url: Option<&mut dyn UrlSync>,
  ) -> Result<(), StoreError> {
    let index = self.layer_index(key)?;
    self.layers[index].visible = visible;
    let id = self.layers[index].descriptor.id.to_string();
    debug!("layer {id} visibility set to {visible}");
    if let Some(url) = url {
      permalink::sync(self, url);
    }
    self.notify(&StoreEvent::LayerVisibility { id, visible });
    Ok(())
  }

  /// Flips a layer's visibility, or sets it when `set_to` is given. Unlike
  /// [`Store::set_layer_visibility`] this resolves by stable id only; see
  /// DESIGN.md for the lookup contract. Returns the new visibility.
  pub fn toggle_layer_visibility(
    &mut self,
    id: &str,
    set_to: Option<bool>,
    url: Option<&mut dyn UrlSync>,
  ) -> Result<bool, StoreError> {
    let index = self.layer_index(&LayerKey::from(id))?;
    let visible = set_to.unwrap_or(!self.layers[index].visible);
    self.set_layer_visibility(&LayerKey::from(id), visible, url)?;
    Ok(visible)
  }

  /// Turns every layer off. Does not touch the URL.
  pub fn hide_all_layers(&mut self) {
    for layer in &mut self.layers {
      layer.visible = false;
    }
    debug!("all layers hidden");
  }

  /// Re-resolves a parameterized layer's WMS name, time, and title.
  pub fn update_layer_params(&mut self, id: &str, params: LayerParams) -> Result<(), StoreError> {
    let index = self.layer_index(&LayerKey::from(id))?;
    if !self.layers[index].descriptor.is_parameterized() {
      return Err(StoreError::InvalidParameter { id: id.to_string() });
    }
    let resolved = self.layers[index].descriptor.resolve(Some(params));
    let layer = &mut self.layers[index];
    layer.params = Some(params);
    layer.resolved = resolved;
    self.notify(&StoreEvent::LayerParamsUpdated { id: id.to_string() });
    Ok(())
  }

  /// Selects a place and eagerly discards data fetched for the previous
  /// selection, in one transition. Readers never see the new place paired
  /// with the old place's fires.
  pub fn select_place(&mut self, place: Place) {
    self.selected = Some(place);
    self.api_output = None;
    self.nearby_fires = None;
    self.notify(&StoreEvent::SelectionChanged);
  }

  pub fn clear_selection(&mut self) {
    self.selected = None;
    self.api_output = None;
    self.nearby_fires = None;
    self.notify(&StoreEvent::SelectionChanged);
  }

  pub fn navigate_home(&mut self) {
    self.notify(&StoreEvent::NavigateHome);
  }

  pub fn begin_request(&mut self) {
    self.pending_requests += 1;
  }

  pub fn end_request(&mut self) {
    if self.pending_requests == 0 {
      warn!("pending request counter underflow; a request was ended twice");
    } else {
      self.pending_requests -= 1;
    }
  }

  #[must_use]
  pub fn is_loading(&self) -> bool {
    self.pending_requests > 0
  }

  #[must_use]
  pub fn pending_requests(&self) -> u32 {
    self.pending_requests
  }

  pub fn set_places(&mut self, places: Vec<Place>) {
    self.places = Some(places);
    self.notify(&StoreEvent::PlacesLoaded);
  }

  #[must_use]
  pub fn places(&self) -> Option<&[Place]> {
    self.places.as_deref()
  }

  #[must_use]
  pub fn selected(&self) -> Option<&Place> {
    self.selected.as_ref()
  }

  /// Commits the raw summary document, then derives the nearby-fire list
  /// from it. The raw document lands first so the derivation can never be
  /// observed without its source.
  pub fn commit_fire_summary(&mut self, summary: FireSummary) {
    if let Some(count) = summary.fire_count {
      self.fire_count = count;
    }
    if let Some(acres) = summary.acres_burned {
      #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
      {
        self.acres_burned = acres.max(0.0).round() as u64;
      }
    }
    self.api_output = Some(summary);
    self.nearby_fires = self.api_output.as_ref().map(derive_nearby_fires);
    self.notify(&StoreEvent::FireDataLoaded);
  }

  #[must_use]
  pub fn api_output(&self) -> Option<&FireSummary> {
    self.api_output.as_ref()
  }

  #[must_use]
  pub fn nearby_fires(&self) -> Option<&[NearbyFire]> {
    self.nearby_fires.as_deref()
  }

  #[must_use]
  pub fn nearby_fire_count(&self) -> usize {
    self.nearby_fires.as_ref().map_or(0, Vec::len)
  }

  #[must_use]
  pub fn nearby_fire_names(&self) -> Vec<String> {
    self
      .nearby_fires
      .as_ref()
      .map_or_else(Vec::new, |fires| fires.iter().map(|f| f.name.clone()).collect())
  }

  #[must_use]
  pub fn fire_count(&self) -> u64 {
    self.fire_count
  }

  /// Season acreage with thousands separators, for the splash text.
  #[must_use]
  pub fn acres_burned_display(&self) -> String {
    group_thousands(self.acres_burned)
  }

  /// Display name of a known place: name plus parenthesized alternate name.
  #[must_use]
  pub fn display_name(&self, place_id: &str) -> Option<String> {
    let place = self.places.as_ref()?.iter().find(|p| p.id == place_id)?;
    Some(place.to_string())
  }

  pub fn set_update_status(&mut self, status: UpdateStatus) {
    self.status = Some(status);
    self.notify(&StoreEvent::StatusLoaded);
  }

  #[must_use]
  pub fn update_status(&self) -> Option<&UpdateStatus> {
    self.status.as_ref()
  }

  /// When the named layer's data was last refreshed. `None` whenever the
  /// status document is absent or has no parsable entry for the layer.
  #[must_use]
  pub fn last_updated(&self, layer_id: &str) -> Option<NaiveDateTime> {
    self.status.as_ref().and_then(|s| s.layer_updated(layer_id))
  }

  #[must_use]
  pub fn data_updated(&self) -> Option<NaiveDateTime> {
    self.status.as_ref().and_then(UpdateStatus::document_updated)
  }

  pub fn toggle_layer_menu(&mut self) {
    self.layer_menu_visible = !self.layer_menu_visible;
  }

  pub fn show_layer_menu(&mut self) {
    self.layer_menu_visible = true;
  }

  pub fn hide_layer_menu(&mut self) {
    self.layer_menu_visible = false;
  }

  #[must_use]
  pub fn layer_menu_visible(&self) -> bool {
    self.layer_menu_visible
  }
}

/// The store as shared by the gateway and the presentation layer.
pub type SharedStore = Arc<Mutex<Store>>;

#[must_use]
pub fn shared(store: Store) -> SharedStore {
  Arc::new(Mutex::new(store))
}

/// Scoped acquisition for the pending-request counter: increments on
/// construction and decrements on drop, so the counter balances on every
/// exit path, including panics and early `?` returns.
pub struct RequestGuard {
  store: SharedStore,
}

impl RequestGuard {
  #[must_use]
  pub fn new(store: &SharedStore) -> Self {
    store.lock().unwrap().begin_request();
    Self { store: store.clone() }
  }
}

impl Drop for RequestGuard {
  fn drop(&mut self) {
    self.store.lock().unwrap().end_request();
  }
}

fn group_thousands(value: u64) -> String {
  let digits = value.to_string();
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(c);
  }
  grouped
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::{CATALOG, LayerParams};
  use std::sync::atomic::{AtomicUsize, Ordering};

  fn store() -> Store {
    Store::new(&CATALOG)
  }

  #[test]
  fn initialization_applies_catalog_defaults() {
    let store = store();
    assert_eq!(store.layers().len(), CATALOG.len());
    assert!(store.layer("fires").unwrap().visible);
    assert!(!store.layer("viirs").unwrap().visible);
  }

  #[test]
  fn fixed_layers_resolve_verbatim() {
    let store = store();
    let layer = store.layer("lightning_strikes").unwrap();
    assert_eq!(layer.resolved.name, "lightning_strikes");
    let layer = store.layer("snow_cover_3338").unwrap();
    assert_eq!(layer.resolved.name, "alaska_wildfires:snow_cover_3338");
  }

  #[test]
  fn set_visibility_accepts_both_key_kinds() {
    let mut store = store();
    store.set_layer_visibility(&LayerKey::from("viirs"), true, None).unwrap();
    assert!(store.layer("viirs").unwrap().visible);

    let numeric = store.layer("viirs").unwrap().descriptor.numeric_id;
    store.set_layer_visibility(&LayerKey::from(numeric), false, None).unwrap();
    assert!(!store.layer("viirs").unwrap().visible);
  }

  #[test]
  fn unknown_keys_fail_fast() {
    let mut store = store();
    assert!(matches!(
      store.set_layer_visibility(&LayerKey::from("nope"), true, None),
      Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
      store.set_layer_visibility(&LayerKey::from(999u32), true, None),
      Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
      store.toggle_layer_visibility("nope", None, None),
      Err(StoreError::NotFound { .. })
    ));
  }

  #[test]
  fn toggling_twice_is_an_involution() {
    let mut store = store();
    let before = store.layer("viirs").unwrap().visible;
    store.toggle_layer_visibility("viirs", None, None).unwrap();
    assert_eq!(store.layer("viirs").unwrap().visible, !before);
    store.toggle_layer_visibility("viirs", None, None).unwrap();
    assert_eq!(store.layer("viirs").unwrap().visible, before);
  }

  #[test]
  fn toggle_with_explicit_value_sets() {
    let mut store = store();
    assert!(store.toggle_layer_visibility("viirs", Some(true), None).unwrap());
    assert!(store.toggle_layer_visibility("viirs", Some(true), None).unwrap());
    assert!(store.layer("viirs").unwrap().visible);
  }

  #[test]
  fn hide_all_layers_hides_everything() {
    let mut store = store();
    store.set_layer_visibility(&LayerKey::from("viirs"), true, None).unwrap();
    store.hide_all_layers();
    assert!(store.visible_layers().is_empty());
  }

  #[test]
  fn updating_params_reresolves() {
    let mut store = store();
    store.update_layer_params("gridded_lightning", LayerParams { month: 8 }).unwrap();
    let layer = store.layer("gridded_lightning").unwrap();
    assert_eq!(layer.resolved.time.as_deref(), Some("2015-08-01T00:00:00Z"));
    assert_eq!(layer.resolved.title, "Historical lightning strikes in August");
  }

  #[test]
  fn fixed_layers_reject_params() {
    let mut store = store();
    assert_eq!(
      store.update_layer_params("fires", LayerParams { month: 8 }),
      Err(StoreError::InvalidParameter { id: "fires".to_string() })
    );
  }

  #[test]
  fn selecting_a_place_clears_stale_data() {
    let mut store = store();
    store.commit_fire_summary(FireSummary::default());
    assert!(store.api_output().is_some());

    store.select_place(Place {
      id: "AK146".to_string(),
      name: "Healy".to_string(),
      alt_name: None,
      latitude: 63.87,
      longitude: -148.97,
    });
    assert!(store.api_output().is_none());
    assert!(store.nearby_fires().is_none());
    assert_eq!(store.selected().unwrap().id, "AK146");
  }

  #[test]
  fn clear_selection_drops_everything_at_once() {
    let mut store = store();
    store.select_place(Place {
      id: "AK146".to_string(),
      name: "Healy".to_string(),
      alt_name: None,
      latitude: 63.87,
      longitude: -148.97,
    });
    store.commit_fire_summary(FireSummary::default());
    store.clear_selection();
    assert!(store.selected().is_none());
    assert!(store.api_output().is_none());
    assert!(store.nearby_fires().is_none());
  }

  #[test]
  fn request_guard_balances_on_success_and_panic() {
    let shared = shared(store());
    {
      let _guard = RequestGuard::new(&shared);
      assert!(shared.lock().unwrap().is_loading());
      let _second = RequestGuard::new(&shared);
      assert_eq!(shared.lock().unwrap().pending_requests(), 2);
    }
    assert!(!shared.lock().unwrap().is_loading());

    let shared_for_panic = shared.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
      let _guard = RequestGuard::new(&shared_for_panic);
      panic!("request blew up");
    }));
    assert!(result.is_err());
    assert_eq!(shared.lock().unwrap().pending_requests(), 0);
  }

  #[test]
  fn counter_never_goes_negative() {
    let mut store = store();
    store.end_request();
    assert_eq!(store.pending_requests(), 0);
    assert!(!store.is_loading());
  }

  #[test]
  fn subscribers_see_mutations() {
    let mut store = store();
    static EVENTS: AtomicUsize = AtomicUsize::new(0);
    store.subscribe(Box::new(|event| {
      if matches!(event, StoreEvent::LayerVisibility { .. }) {
        EVENTS.fetch_add(1, Ordering::SeqCst);
      }
    }));
    store.set_layer_visibility(&LayerKey::from("viirs"), true, None).unwrap();
    assert_eq!(EVENTS.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn acres_display_groups_thousands() {
    let mut store = store();
    store.commit_fire_summary(FireSummary {
      acres_burned: Some(1_234_567.0),
      ..FireSummary::default()
    });
    assert_eq!(store.acres_burned_display(), "1,234,567");

    store.commit_fire_summary(FireSummary { acres_burned: Some(512.0), ..FireSummary::default() });
    assert_eq!(store.acres_burned_display(), "512");
  }

  #[test]
  fn display_name_appends_alt_name() {
    let mut store = store();
    store.set_places(vec![
      Place {
        id: "AK124".to_string(),
        name: "Utqiagvik".to_string(),
        alt_name: Some("Barrow".to_string()),
        latitude: 71.29,
        longitude: -156.79,
      },
      Place {
        id: "AK146".to_string(),
        name: "Healy".to_string(),
        alt_name: None,
        latitude: 63.87,
        longitude: -148.97,
      },
    ]);
    assert_eq!(store.display_name("AK124").as_deref(), Some("Utqiagvik (Barrow)"));
    assert_eq!(store.display_name("AK146").as_deref(), Some("Healy"));
    assert_eq!(store.display_name("AK999"), None);
  }

  #[test]
  fn status_getters_tolerate_absence() {
    let store = store();
    assert_eq!(store.last_updated("fires"), None);
    assert_eq!(store.data_updated(), None);
  }
}
