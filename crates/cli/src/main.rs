use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use intake_core::{read_submission, Narrative, CONDITION_CATALOG};
use intake_delivery::subject_line;

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "New-patient intake narrative compiler")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the narrative for a JSON submission file
    Render {
        /// Path to the submission (a JSON object of field name to value)
        file: PathBuf,
    },
    /// Print the e-mail subject line for a JSON submission file
    Subject {
        /// Path to the submission
        file: PathBuf,
        /// Submission date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List the condition catalog as key and label
    Catalog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { file }) => {
            let submission = read_submission(&file)?;
            let narrative = Narrative::compile(&submission);
            if narrative.is_empty() {
                eprintln!("Nothing to report in {}", file.display());
            } else {
                println!("{narrative}");
            }
        }
        Some(Commands::Subject { file, date }) => {
            let submission = read_submission(&file)?;
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            println!("{}", subject_line(&submission, date));
        }
        Some(Commands::Catalog) => {
            for condition in CONDITION_CATALOG.iter() {
                println!("{}\t{}", condition.key, condition.label);
            }
        }
        None => {
            println!("Use 'intake --help' for commands");
        }
    }

    Ok(())
}
