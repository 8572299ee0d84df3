use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use crate::confirm::{Confirm, PromptConfirm};
use crate::models::{ConversionDirection, ConversionRequest};
use crate::session::{Session, Submission};
use crate::storage::FileStore;
use crate::utils::{
    LOG_FILE_NAME, ensure_dir, format_path_with_tilde, logging, resolve_data_dir, sanitize_label,
};

#[derive(Parser)]
#[command(name = "temp-converter")]
#[command(version = "0.1.0")]
#[command(about = "Convert temperatures between Celsius and Fahrenheit", long_about = None)]
pub struct Cli {
    /// Directory holding the conversion history
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a temperature and record it in the history
    Convert {
        /// Temperature to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit to convert to
        #[arg(long, value_enum, default_value_t = TargetUnit::Fahrenheit)]
        to: TargetUnit,

        /// Convert unusually high values without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the conversion history, newest first
    History {
        /// Clear the history instead of showing it
        #[arg(long)]
        clear: bool,

        /// Clear without asking
        #[arg(short, long)]
        yes: bool,
    },
    /// Open the interactive converter
    Tui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetUnit {
    Fahrenheit,
    Celsius,
}

impl From<TargetUnit> for ConversionDirection {
    fn from(unit: TargetUnit) -> Self {
        match unit {
            TargetUnit::Fahrenheit => ConversionDirection::CelsiusToFahrenheit,
            TargetUnit::Celsius => ConversionDirection::FahrenheitToCelsius,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    match command {
        Commands::Tui => {
            ensure_dir(&data_dir)?;
            logging::init_file(&data_dir.join(LOG_FILE_NAME))?;
        }
        _ => logging::init_stderr(),
    }
    let session = Session::new(FileStore::new(&data_dir));

    match command {
        Commands::Convert { value, to, yes } => convert(session, value, (*to).into(), *yes),
        Commands::History { clear: true, yes, .. } => clear_history(session, *yes),
        Commands::History { clear: false, .. } => show_history(session, &data_dir),
        Commands::Tui => crate::tui::run_interactive(session),
    }
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes { Box::new(|_: &str| true) } else { Box::new(PromptConfirm::stdio()) }
}

fn convert(
    mut session: Session<FileStore>,
    value: &str,
    direction: ConversionDirection,
    yes: bool,
) -> Result<()> {
    let request = ConversionRequest::new(value, direction);
    let mut confirm = confirmer(yes);

    match session.submit(&request, confirm.as_mut()) {
        Ok(Submission::Converted(conversion)) => {
            println!("{} → {}", conversion.from_label(), conversion.to_label());
            Ok(())
        }
        Ok(Submission::Declined) => {
            println!("Conversion cancelled");
            Ok(())
        }
        Err(e) => bail!(e),
    }
}

fn show_history(session: Session<FileStore>, data_dir: &Path) -> Result<()> {
    let history = session.history();

    if history.is_empty() {
        println!("No conversion history yet");
    } else {
        println!("Conversion History");
        println!("==================");
        for record in history {
            println!(
                "{} → {}  ({} • {})",
                sanitize_label(record.from_label()),
                sanitize_label(record.to_label()),
                sanitize_label(record.timestamp()),
                sanitize_label(record.date())
            );
        }
    }
    println!();
    println!("Data directory: {}", format_path_with_tilde(data_dir));

    Ok(())
}

fn clear_history(mut session: Session<FileStore>, yes: bool) -> Result<()> {
    if session.history().is_empty() {
        println!("No conversion history yet");
        return Ok(());
    }

    let mut confirm = confirmer(yes);
    if session.clear_history(confirm.as_mut()) {
        println!("History cleared");
    } else {
        println!("History kept");
    }
    Ok(())
}
