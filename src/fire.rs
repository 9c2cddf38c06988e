//! Wire types for the fire point API and the update-status document, plus
//! the normalization applied to them before they are committed to the store.
//!
//! The upstream services are loose with types: `active` arrives as the
//! strings `"1"`/`"0"` and `acres` as either a number or a numeric string.
//! Deserialization tolerates all of it.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// A community the user can select on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub alt_name: Option<String>,
  pub latitude: f64,
  pub longitude: f64,
}

impl Display for Place {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.alt_name {
      Some(alt) => write!(f, "{} ({alt})", self.name),
      None => write!(f, "{}", self.name),
    }
  }
}

fn de_acres<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(match value {
    serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
    serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
    _ => 0.0,
  })
}

fn de_active<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(match value {
    serde_json::Value::String(s) => s == "1",
    serde_json::Value::Bool(b) => b,
    serde_json::Value::Number(n) => n.as_i64() == Some(1),
    _ => false,
  })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FireProperties {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "de_acres")]
  pub acres: f64,
  #[serde(default, deserialize_with = "de_active")]
  pub active: bool,
}

/// One feature from the point or polygon collection. The geometry is kept
/// as raw JSON; only the presentation layer looks at it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FireFeature {
  #[serde(default)]
  pub properties: FireProperties,
  #[serde(default)]
  pub geometry: Option<serde_json::Value>,
}

/// The per-coordinate summary returned by `/fire/point/{lat}/{lon}`.
///
/// Unknown fields are preserved so the document is committed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FireSummary {
  #[serde(default)]
  pub fire_points: Vec<FireFeature>,
  #[serde(default)]
  pub fire_polygons: Vec<FireFeature>,
  #[serde(default)]
  pub fire_count: Option<u64>,
  #[serde(default)]
  pub acres_burned: Option<f64>,
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
  Point,
  Polygon,
}

impl Display for GeometryKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      GeometryKind::Point => write!(f, "point"),
      GeometryKind::Polygon => write!(f, "polygon"),
    }
  }
}

/// A fire burning near the selected place, normalized from the two feature
/// collections of the summary document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyFire {
  pub name: String,
  pub acres: f64,
  pub active: bool,
  pub geometry: GeometryKind,
}

fn to_nearby(feature: &FireFeature, geometry: GeometryKind) -> NearbyFire {
  NearbyFire {
    name: feature.properties.name.clone().unwrap_or_else(|| "Unnamed fire".to_string()),
    acres: feature.properties.acres,
    active: feature.properties.active,
    geometry,
  }
}

/// Concatenates the point and polygon collections, keeps only active fires,
/// and sorts descending by acres. The sort is stable, so fires of equal size
/// keep their input order (points before polygons).
#[must_use]
pub fn derive_nearby_fires(summary: &FireSummary) -> Vec<NearbyFire> {
  let mut fires: Vec<NearbyFire> = summary
    .fire_points
    .iter()
    .map(|f| to_nearby(f, GeometryKind::Point))
    .chain(summary.fire_polygons.iter().map(|f| to_nearby(f, GeometryKind::Polygon)))
    .filter(|f| f.active)
    .collect();
  fires.sort_by(|a, b| b.acres.partial_cmp(&a.acres).unwrap_or(std::cmp::Ordering::Equal));
  fires
}

/// Data-freshness document served next to the map (`status.json`), keyed by
/// layer id with a top-level stamp for the document itself.
///
/// Committed verbatim; entries that do not look like `{"updated": ...}` are
/// simply never resolved by [`UpdateStatus::layer_updated`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatus {
  #[serde(default)]
  pub updated: Option<String>,
  #[serde(flatten)]
  pub layers: HashMap<String, serde_json::Value>,
}

impl UpdateStatus {
  #[must_use]
  pub fn layer_updated(&self, layer_id: &str) -> Option<NaiveDateTime> {
    self
      .layers
      .get(layer_id)
      .and_then(|entry| entry.get("updated"))
      .and_then(serde_json::Value::as_str)
      .and_then(parse_stamp)
  }

  #[must_use]
  pub fn document_updated(&self) -> Option<NaiveDateTime> {
    self.updated.as_deref().and_then(parse_stamp)
  }
}

/// Parses the `YYYYMMDDHH` freshness stamps. The stamps carry no minute
/// component, so the date and hour are parsed separately.
#[must_use]
pub fn parse_stamp(stamp: &str) -> Option<NaiveDateTime> {
  if stamp.len() != 10 || !stamp.is_ascii() {
    return None;
  }
  let date = NaiveDate::parse_from_str(&stamp[..8], "%Y%m%d").ok()?;
  let hour: u32 = stamp[8..].parse().ok()?;
  date.and_hms_opt(hour, 0, 0)
}
