use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bushgate", version, about = "Bushgate game-drive companion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive-mode classification
    Mode {
        #[command(subcommand)]
        action: commands::mode::ModeAction,
    },
    /// Park gate directory and direction links
    Gates {
        #[command(subcommand)]
        action: commands::gates::GatesAction,
    },
    /// Game-drive checklist
    Checklist {
        #[command(subcommand)]
        action: commands::checklist::ChecklistAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Mode { action } => commands::mode::run(action),
        Commands::Gates { action } => commands::gates::run(action),
        Commands::Checklist { action } => commands::checklist::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bushgate", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
