use bushgate_core::deeplink::{apple_maps_url, google_maps_url};
use bushgate_core::gates::{find_gate, GateBounds};
use bushgate_core::Config;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum GatesAction {
    /// List the gates in effect
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print driving-direction links for a gate
    Links {
        /// Gate name prefix or 1-based index
        gate: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the bounding box framing all gates
    Bounds {
        /// Margin factor added on every side
        #[arg(long, default_value = "0.2")]
        pad: f64,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: GatesAction) -> Result<(), Box<dyn std::error::Error>> {
    let gates = Config::load()?.effective_gates();
    for gate in &gates {
        gate.validate()?;
    }

    match action {
        GatesAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&gates)?);
            } else {
                for (i, gate) in gates.iter().enumerate() {
                    println!("{}. {} ({}, {})", i + 1, gate.name, gate.lat, gate.lon);
                    if !gate.note.is_empty() {
                        println!("   {}", gate.note);
                    }
                }
            }
        }
        GatesAction::Links { gate, json } => {
            let gate = find_gate(&gates, &gate)?;
            let apple = apple_maps_url(gate);
            let google = google_maps_url(gate);
            if json {
                let out = serde_json::json!({
                    "gate": gate.name,
                    "apple_maps": apple.as_str(),
                    "google_maps": google.as_str(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", gate.name);
                println!("  Apple Maps:  {apple}");
                println!("  Google Maps: {google}");
            }
        }
        GatesAction::Bounds { pad, json } => {
            let bounds = match GateBounds::of(&gates) {
                Some(bounds) => bounds.padded(pad),
                None => {
                    eprintln!("no gates configured");
                    std::process::exit(1);
                }
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&bounds)?);
            } else {
                let (lat, lon) = bounds.center();
                println!(
                    "lat {:.6}..{:.6}  lon {:.6}..{:.6}",
                    bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
                );
                println!("center {lat:.6}, {lon:.6}");
            }
        }
    }
    Ok(())
}
