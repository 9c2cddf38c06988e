use std::path::PathBuf;

use dirs::home_dir;
use log::error;

/// Default fire data API.
pub const DEFAULT_API_URL: &str = "https://earthmaps.io";
/// Default host for app-adjacent documents (e.g. `status.json`).
pub const DEFAULT_BASE_URL: &str = "https://alaskawildfires.org";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Config {
  pub config_path: Option<PathBuf>,
  /// Base URL of the fire data API.
  pub api_url: String,
  /// Base URL for static app documents.
  pub base_url: String,
}

impl Config {
  #[must_use]
  pub fn new() -> Self {
    let from_env = Self::from_env();
    let from_file = Self::from_file();
    let default = Self::default();

    let mut merged = from_env;
    if let Some(from_file) = &from_file {
      merged = merged.merge(from_file);
    }
    merged = merged.merge(&default);

    if merged.config_path.is_some() && from_file.is_none() {
      merged.init_cfg_file();
    }

    merged
  }

  fn from_env() -> Self {
    let config_path = std::env::var("AKFIREMAP_CONFIG").ok().map(PathBuf::from);
    let api_url = std::env::var("AKFIREMAP_API_URL").unwrap_or_default();
    let base_url = std::env::var("AKFIREMAP_BASE_URL").unwrap_or_default();

    Self { config_path, api_url, base_url }
  }

  fn merge(mut self, other: &Self) -> Self {
    self.config_path = self.config_path.or(other.config_path.clone());
    if self.api_url.is_empty() {
      self.api_url = other.api_url.clone();
    }
    if self.base_url.is_empty() {
      self.base_url = other.base_url.clone();
    }
    self
  }

  fn from_file() -> Option<Self> {
    let config_path = std::env::var("AKFIREMAP_CONFIG")
      .ok()
      .map(PathBuf::from)
      .or_else(|| home_dir().map(|p| p.join(".config").join("akfiremap")))?;
    let config_path = config_path.join("config.json");

    serde_json::from_str(&std::fs::read_to_string(&config_path).ok()?)
      .inspect_err(|e| error!("Failed to read config file: {e}"))
      .ok()?
  }

  fn init_cfg_file(&self) {
    if let Some(path) = &self.config_path {
      if !path.exists() {
        let _ = std::fs::create_dir_all(path).inspect_err(|e| {
          error!("Failed to create config directory: {e}");
        });
      }

      let path = path.join("config.json");
      if !path.exists() {
        let config = serde_json::to_string_pretty(self);
        if let Ok(config) = config {
          let _ = std::fs::write(path, config).inspect_err(|e| {
            error!("Failed to write config file: {e}");
          });
        } else {
          error!("Failed to serialize config");
        }
      }
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      config_path: home_dir().map(|p| p.join(".config").join("akfiremap")),
      api_url: DEFAULT_API_URL.to_string(),
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn merge_prefers_existing_values() {
    let env = Config {
      config_path: None,
      api_url: "https://example.org".to_string(),
      base_url: String::new(),
    };
    let merged = env.merge(&Config::default());
    assert_eq!(merged.api_url, "https://example.org");
    assert_eq!(merged.base_url, DEFAULT_BASE_URL);
  }
}
