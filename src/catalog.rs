pub mod markup;

use chrono::{Datelike, Month, Utc};
use once_cell::sync::Lazy;

/// Parameters for a parameterized layer source.
///
/// Currently the only parameterized layer is the monthly lightning
/// climatology, so a month number is all there is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayerParams {
  /// Month number, 1 = January.
  pub month: u8,
}

/// Which extra control the presentation layer renders for a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ControlKind {
  Months,
}

/// The WMS name, TIME dimension, and display title a layer source resolves to.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResolvedSource {
  pub name: String,
  pub time: Option<String>,
  pub title: String,
}

/// A layer's map source: either a fixed WMS identifier, or a pure function
/// from parameters to a `{name, time, title}` triple for sources sliced by
/// time or parameter (e.g. the monthly climatology selector).
#[derive(Debug, Clone, Copy)]
pub enum LayerSource {
  Fixed(&'static str),
  Parameterized(fn(LayerParams) -> ResolvedSource),
}

/// Static description of one catalog entry.
#[derive(Debug, Clone)]
pub struct LayerDescriptor {
  /// Stable string key, unique within the catalog.
  pub id: &'static str,
  /// Small integer used only for compact URL encoding. Unique, assigned in
  /// catalog order.
  pub numeric_id: u32,
  pub title: String,
  /// Grouping title for layer families (e.g. the AQI forecast hours).
  pub subtitle: Option<&'static str>,
  pub source: LayerSource,
  /// WMS STYLES parameter, where the default style is not wanted.
  pub style_name: Option<&'static str>,
  /// Draw-order hint; higher draws on top. Absent means catalog order.
  pub z_index: Option<i32>,
  pub legend_markup: &'static str,
  pub abstract_markup: String,
  pub legend_class_override: Option<&'static str>,
  /// One-line annotation shown next to the title (e.g. "24-hour average AQI").
  pub blurb: Option<&'static str>,
  pub control_kind: Option<ControlKind>,
  pub default_params: Option<LayerParams>,
  /// Client-rendered marker/heatmap layers rather than server tiles.
  pub is_local_source: bool,
  pub initially_visible: bool,
}

impl LayerDescriptor {
  fn fixed(id: &'static str, numeric_id: u32, wms_name: &'static str, title: &str) -> Self {
    Self {
      id,
      numeric_id,
      title: title.to_string(),
      subtitle: None,
      source: LayerSource::Fixed(wms_name),
      style_name: None,
      z_index: None,
      legend_markup: "",
      abstract_markup: String::new(),
      legend_class_override: None,
      blurb: None,
      control_kind: None,
      default_params: None,
      is_local_source: false,
      initially_visible: false,
    }
  }

  /// Resolve the source with the given parameters (ignored for fixed
  /// sources). Parameterized resolution is pure, so calling this twice with
  /// the same parameters gives the same result.
  #[must_use]
  pub fn resolve(&self, params: Option<LayerParams>) -> ResolvedSource {
    match self.source {
      LayerSource::Fixed(name) => ResolvedSource {
        name: name.to_string(),
        time: None,
        title: self.title.clone(),
      },
      LayerSource::Parameterized(f) => {
        let params = params.or(self.default_params).unwrap_or(LayerParams { month: 1 });
        f(params)
      }
    }
  }

  #[must_use]
  pub fn is_parameterized(&self) -> bool {
    matches!(self.source, LayerSource::Parameterized(_))
  }
}

fn month_name(month: u8) -> &'static str {
  Month::try_from(month).map_or("Unknown", |m| m.name())
}

fn lightning_climatology_source(params: LayerParams) -> ResolvedSource {
  ResolvedSource {
    name: "alaska_wildfires:lightning-monthly-climatology".to_string(),
    time: Some(format!("2015-{:02}-01T00:00:00Z", params.month)),
    title: format!("Historical lightning strikes in {}", month_name(params.month)),
  }
}

fn aqi_forecast(id: &'static str, numeric_id: u32, wms_name: &'static str, title: &str) -> LayerDescriptor {
  LayerDescriptor {
    subtitle: Some("Air quality forecast"),
    style_name: Some("alaska_wildfires:aqi_forecast"),
    z_index: Some(20),
    legend_markup: markup::AQI_LEGEND,
    abstract_markup: markup::AQI_FORECAST_ABSTRACT.to_string(),
    ..LayerDescriptor::fixed(id, numeric_id, wms_name, title)
  }
}

/// The wildfire map's layer catalog, in draw/menu order.
pub static CATALOG: Lazy<Vec<LayerDescriptor>> = Lazy::new(build_catalog);

fn build_catalog() -> Vec<LayerDescriptor> {
  let year = Utc::now().year();
  vec![
    LayerDescriptor {
      is_local_source: true,
      initially_visible: true,
      legend_class_override: Some("is-one-third"),
      legend_markup: markup::ACTIVE_FIRES_LEGEND,
      abstract_markup: format!(
        "<p>Active (red) and inactive (gray) fires for the {year} season, using data from the most \
         recent information from the Alaska Interagency Coordination Center. Small fires (1 acre or \
         less) are shown with a dot. Larger fires and fires with mapped perimeters have a halo to \
         show their relative size. Recently-discovered fires may not have a mapped perimeter.</p>\
         <p>Data are accessed from the Alaska Interagency Coordination Center (AICC) <a \
         target=\"_blank\" href=\"https://fire.ak.blm.gov/predsvcs/maps.php\">data services</a>.</p>"
      ),
      ..LayerDescriptor::fixed("fires", 0, "fires", &format!("{year} Wildfires"))
    },
    LayerDescriptor {
      z_index: Some(20),
      legend_markup: markup::LIGHTNING_LEGEND,
      abstract_markup: markup::LIGHTNING_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed(
        "lightning_strikes",
        1,
        "lightning_strikes",
        "Lightning strikes, last 36 hours",
      )
    },
    LayerDescriptor {
      id: "gridded_lightning",
      numeric_id: 2,
      title: "Historical lightning strikes".to_string(),
      subtitle: None,
      source: LayerSource::Parameterized(lightning_climatology_source),
      style_name: None,
      z_index: Some(15),
      legend_markup: markup::LIGHTNING_CLIMATOLOGY_LEGEND,
      abstract_markup: markup::LIGHTNING_CLIMATOLOGY_ABSTRACT.to_string(),
      legend_class_override: None,
      blurb: None,
      control_kind: Some(ControlKind::Months),
      default_params: Some(LayerParams { month: 5 }),
      is_local_source: false,
      initially_visible: false,
    },
    aqi_forecast("aqi_forecast_6_hrs", 3, "alaska_wildfires:aqi_forecast_6_hrs", "6 Hours"),
    aqi_forecast("aqi_forecast_12_hrs", 4, "alaska_wildfires:aqi_forecast_12_hrs", "12 Hours"),
    aqi_forecast("aqi_forecast_24_hrs", 5, "alaska_wildfires:aqi_forecast_24_hrs", "24 Hours"),
    aqi_forecast("aqi_forecast_48_hrs", 6, "alaska_wildfires:aqi_forecast_48_hrs", "48 Hours"),
    LayerDescriptor {
      is_local_source: true,
      z_index: Some(100),
      legend_markup: markup::VIIRS_LEGEND,
      abstract_markup: markup::VIIRS_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed("viirs", 7, "viirs", "Hotspots, last 48 hours")
    },
    LayerDescriptor {
      z_index: Some(3),
      legend_class_override: Some("is-one-third"),
      legend_markup: markup::LANDCOVER_LEGEND,
      abstract_markup: markup::LANDCOVER_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed(
        "alaska_landcover_2015",
        8,
        "alaska_wildfires:alaska_landcover_2015",
        "Land cover types",
      )
    },
    LayerDescriptor {
      z_index: Some(10),
      style_name: Some("historical_fire_polygon_buckets"),
      legend_markup: markup::HISTORICAL_PERIMETERS_LEGEND,
      abstract_markup: markup::HISTORICAL_PERIMETERS_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed(
        "historical_fire_perimeters",
        9,
        "historical_fire_perimeters",
        "Historical fire perimeters",
      )
    },
    LayerDescriptor {
      z_index: Some(10),
      style_name: Some("alaska_wildfires:snow_cover"),
      legend_markup: markup::SNOW_COVER_LEGEND,
      abstract_markup: markup::SNOW_COVER_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed(
        "snow_cover_3338",
        10,
        "alaska_wildfires:snow_cover_3338",
        "Today&rsquo;s Snow Cover",
      )
    },
    LayerDescriptor {
      z_index: Some(10),
      style_name: Some("alaska_wildfires:spruce_adjective"),
      legend_markup: markup::FIRE_DANGER_LEGEND,
      abstract_markup: markup::FIRE_DANGER_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed(
        "spruceadj_3338",
        11,
        "alaska_wildfires:spruceadj_3338",
        "Today&rsquo;s Fire Danger Ratings",
      )
    },
    LayerDescriptor {
      z_index: Some(5),
      style_name: Some("flammability"),
      legend_markup: markup::FLAMMABILITY_LEGEND,
      abstract_markup: markup::HISTORICAL_FLAMMABILITY_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed(
        "alfresco_relative_flammability_cru_ts40_historical_1900_1999_iem",
        12,
        "alaska_wildfires:alfresco_relative_flammability_cru_ts40_historical_1900_1999_iem",
        "Historical modeled flammability",
      )
    },
    LayerDescriptor {
      z_index: Some(5),
      style_name: Some("flammability"),
      legend_markup: markup::FLAMMABILITY_LEGEND,
      abstract_markup: markup::PROJECTED_FLAMMABILITY_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed(
        "alfresco_relative_flammability_NCAR-CCSM4_rcp85_2000_2099",
        13,
        "alaska_wildfires:alfresco_relative_flammability_NCAR-CCSM4_rcp85_2000_2099",
        "Projected flammability",
      )
    },
    LayerDescriptor {
      is_local_source: true,
      z_index: Some(20),
      blurb: Some("24-hour average AQI"),
      legend_class_override: Some("is-one-third"),
      legend_markup: markup::AQI_LEGEND,
      abstract_markup: markup::PURPLE_AIR_ABSTRACT.to_string(),
      ..LayerDescriptor::fixed("purple_air", 14, "purple_air", "Air quality sensor network")
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn ids_are_unique() {
    let ids: HashSet<_> = CATALOG.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), CATALOG.len());
  }

  #[test]
  fn numeric_ids_follow_catalog_order() {
    for (index, layer) in CATALOG.iter().enumerate() {
      assert_eq!(layer.numeric_id as usize, index, "layer {}", layer.id);
    }
  }

  #[test]
  fn only_fires_is_initially_visible() {
    let visible: Vec<_> = CATALOG.iter().filter(|l| l.initially_visible).map(|l| l.id).collect();
    assert_eq!(visible, vec!["fires"]);
  }

  #[test]
  fn fixed_sources_resolve_to_their_name() {
    for layer in CATALOG.iter() {
      if let LayerSource::Fixed(name) = layer.source {
        let resolved = layer.resolve(None);
        assert_eq!(resolved.name, name);
        assert_eq!(resolved.time, None);
        assert_eq!(resolved.title, layer.title);
      }
    }
  }

  #[test]
  fn climatology_resolution_is_deterministic() {
    let layer = CATALOG.iter().find(|l| l.id == "gridded_lightning").unwrap();
    assert!(layer.is_parameterized());
    assert_eq!(layer.control_kind, Some(ControlKind::Months));

    let params = LayerParams { month: 7 };
    let first = layer.resolve(Some(params));
    let second = layer.resolve(Some(params));
    assert_eq!(first, second);
    assert_eq!(first.name, "alaska_wildfires:lightning-monthly-climatology");
    assert_eq!(first.time.as_deref(), Some("2015-07-01T00:00:00Z"));
    assert_eq!(first.title, "Historical lightning strikes in July");
  }

  #[test]
  fn climatology_defaults_to_may() {
    let layer = CATALOG.iter().find(|l| l.id == "gridded_lightning").unwrap();
    let resolved = layer.resolve(None);
    assert_eq!(resolved.time.as_deref(), Some("2015-05-01T00:00:00Z"));
    assert_eq!(resolved.title, "Historical lightning strikes in May");
  }
}
