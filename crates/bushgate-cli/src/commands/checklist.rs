use bushgate_core::checklist::checklist_items;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ChecklistAction {
    /// Print the game-drive checklist
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ChecklistAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChecklistAction::Show { json } => {
            let items = checklist_items();
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in items {
                    println!("[ ] {item}");
                }
            }
        }
    }
    Ok(())
}
