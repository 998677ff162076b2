use chartview_core::{load_label_table, NotesService};
use clap::{Parser, Subcommand};
use quicknotes::format_snake_case;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chartview")]
#[command(about = "Clinical chart viewer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a raw quick-notes export and print the extracted fields
    Parse {
        /// File holding the raw export; reads stdin when omitted
        file: Option<PathBuf>,
        /// YAML file with label overrides (token: label)
        #[arg(long)]
        labels: Option<PathBuf>,
        /// Emit the parsed, formatted and display mappings as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse { file, labels, json }) => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            let table = load_label_table(labels.as_deref())?;
            let service = NotesService::new(table);

            let parsed = service.parse_quick_notes(Some(&raw));
            let formatted = service.format_quick_notes(&parsed);
            let display = service.resolve_display(&parsed, &formatted);

            if json {
                let output = serde_json::json!({
                    "parsed": parsed,
                    "formatted": formatted,
                    "display": display,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if display.is_empty() {
                println!("No fields extracted.");
            } else {
                for (field, value) in &display {
                    println!("{}: {}", format_snake_case(field), value);
                }
            }
        }
        None => {
            println!("Use 'chartview --help' for commands");
        }
    }

    Ok(())
}
