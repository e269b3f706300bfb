use bushgate_core::Config;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
        ConfigAction::Init => {
            let path = Config::config_path()?;
            if path.exists() {
                eprintln!("config already exists at {}", path.display());
                std::process::exit(1);
            }
            Config::default().save()?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
