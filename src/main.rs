use akfiremap::catalog::CATALOG;
use akfiremap::config::Config;
use akfiremap::gateway::Gateway;
use akfiremap::permalink;
use akfiremap::store::{Store, shared};
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// List the layer catalog.
  Layers,
  /// Fetch and list the communities known to the fire API.
  Places,
  /// Fetch the fire summary for a community and print a report.
  Report {
    /// Community id, e.g. AK146.
    community_id: String,
  },
  /// Fetch the data-freshness document and print per-layer stamps.
  Status,
  /// Print the layers permalink parameter for a set of layer ids.
  Permalink {
    /// Stable layer ids to turn on.
    ids: Vec<String>,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();

  let config = Config::new();
  let store = shared(Store::new(&CATALOG));
  let gateway = Gateway::new(&config, store.clone());

  match args.command {
    Command::Layers => {
      let store = store.lock().unwrap();
      for layer in store.layers() {
        let marker = if layer.visible { "*" } else { " " };
        println!(
          "{marker} [{:>2}] {:<24} {}",
          layer.descriptor.numeric_id, layer.descriptor.id, layer.resolved.title
        );
      }
    }
    Command::Places => {
      gateway.fetch_places().await?;
      let store = store.lock().unwrap();
      for place in store.places().unwrap_or_default() {
        println!("{:<8} {place}  ({:.4}, {:.4})", place.id, place.latitude, place.longitude);
      }
    }
    Command::Report { community_id } => {
      gateway.fetch_places().await?;
      gateway.fetch_update_status().await.unwrap_or_else(|e| {
        log::warn!("status document unavailable: {e}");
      });
      let place = {
        let store = store.lock().unwrap();
        store
          .places()
          .unwrap_or_default()
          .iter()
          .find(|p| p.id.eq_ignore_ascii_case(&community_id))
          .cloned()
      };
      let Some(place) = place else {
        bail!("unknown community id {community_id}");
      };
      gateway.select_and_fetch(place).await?;

      let store = store.lock().unwrap();
      println!("{}", store.display_name(&community_id).unwrap_or(community_id));
      if let Some(updated) = store.data_updated() {
        println!("Data as of {}", updated.format("%B %-d, %Y"));
      }
      println!(
        "{} active fires this season, approximately {} acres burned",
        store.fire_count(),
        store.acres_burned_display()
      );
      match store.nearby_fires() {
        Some([]) | None => println!("No active fires nearby."),
        Some(fires) => {
          println!("Fires burning nearby:");
          for fire in fires {
            println!("  {:<32} {:>12.1} acres  ({})", fire.name, fire.acres, fire.geometry);
          }
        }
      }
    }
    Command::Status => {
      gateway.fetch_update_status().await?;
      let store = store.lock().unwrap();
      for layer in store.layers() {
        match store.last_updated(layer.descriptor.id) {
          Some(stamp) => {
            println!("{:<24} {}", layer.descriptor.id, stamp.format("%Y-%m-%d %H:00"));
          }
          None => println!("{:<24} -", layer.descriptor.id),
        }
      }
    }
    Command::Permalink { ids } => {
      let mut store = store.lock().unwrap();
      store.hide_all_layers();
      for id in &ids {
        store.toggle_layer_visibility(id, Some(true), None)?;
      }
      match permalink::encode(&store) {
        Some(param) => println!("{}={param}", permalink::LAYERS_PARAM),
        None => println!("(no visible layers, parameter omitted)"),
      }
    }
  }

  Ok(())
}
