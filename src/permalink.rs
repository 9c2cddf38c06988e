//! Mirrors the set of visible layers into a `layers` URL query parameter and
//! restores it on load.
//!
//! The encoding is the comma-joined numeric ids of the visible layers, in
//! catalog order. When nothing is visible the parameter is omitted entirely
//! rather than present-as-empty. Restoring is lenient: numeric ids that no
//! longer exist in the catalog are skipped, so old permalinks keep working
//! as the catalog evolves.

use crate::store::{LayerKey, Store};
use itertools::Itertools;
use log::debug;

/// Name of the query parameter.
pub const LAYERS_PARAM: &str = "layers";

/// A router or address bar the store can push the parameter into.
pub trait UrlSync {
  /// `None` removes the parameter from the URL.
  fn set_layers_param(&mut self, value: Option<&str>);
}

/// Encodes the currently visible layers, or `None` when no layer is visible.
#[must_use]
pub fn encode(store: &Store) -> Option<String> {
  let ids: Vec<u32> =
    store.layers().iter().filter(|l| l.visible).map(|l| l.descriptor.numeric_id).collect();
  if ids.is_empty() { None } else { Some(ids.iter().join(",")) }
}

/// Recomputes the parameter and pushes it to the collaborator.
pub fn sync(store: &Store, url: &mut dyn UrlSync) {
  url.set_layers_param(encode(store).as_deref());
}

/// Applies a `layers` parameter value read from the URL on load. Each
/// resolvable numeric id becomes visible; unknown ids and malformed tokens
/// are ignored.
pub fn apply(store: &mut Store, value: &str) {
  for token in value.split(',') {
    let Ok(numeric) = token.trim().parse::<u32>() else {
      debug!("ignoring malformed layers token {token:?}");
      continue;
    };
    if store.set_layer_visibility(&LayerKey::Numeric(numeric), true, None).is_err() {
      debug!("ignoring unknown numeric layer id {numeric} from permalink");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::CATALOG;

  #[derive(Default)]
  struct RecordingUrl {
    last: Option<Option<String>>,
  }

  impl UrlSync for RecordingUrl {
    fn set_layers_param(&mut self, value: Option<&str>) {
      self.last = Some(value.map(str::to_string));
    }
  }

  fn store() -> Store {
    let mut store = Store::new(&CATALOG);
    store.hide_all_layers();
    store
  }

  #[test]
  fn no_visible_layers_means_no_param() {
    assert_eq!(encode(&store()), None);
  }

  #[test]
  fn encodes_numeric_ids_in_catalog_order() {
    let mut store = store();
    for numeric in [5u32, 0, 3] {
      store.set_layer_visibility(&LayerKey::Numeric(numeric), true, None).unwrap();
    }
    assert_eq!(encode(&store).as_deref(), Some("0,3,5"));
  }

  #[test]
  fn round_trip_restores_the_visible_set() {
    let mut source = store();
    for numeric in [0u32, 3, 5] {
      source.set_layer_visibility(&LayerKey::Numeric(numeric), true, None).unwrap();
    }
    let param = encode(&source).unwrap();

    let mut restored = store();
    apply(&mut restored, &param);
    let visible: Vec<u32> =
      restored.visible_layers().iter().map(|l| l.descriptor.numeric_id).collect();
    assert_eq!(visible, vec![0, 3, 5]);
  }

  #[test]
  fn unknown_and_malformed_tokens_are_skipped() {
    let mut store = store();
    apply(&mut store, "1,999,banana,,3");
    let visible: Vec<u32> = store.visible_layers().iter().map(|l| l.descriptor.numeric_id).collect();
    assert_eq!(visible, vec![1, 3]);
  }

  #[test]
  fn visibility_changes_push_the_param() {
    let mut store = store();
    let mut url = RecordingUrl::default();
    store.set_layer_visibility(&LayerKey::Numeric(7), true, Some(&mut url)).unwrap();
    assert_eq!(url.last, Some(Some("7".to_string())));

    store.toggle_layer_visibility("viirs", None, Some(&mut url)).unwrap();
    assert_eq!(url.last, Some(None));
  }
}
