//! The Smoothie Machine - order a custom smoothie from the terminal.
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clients_interfaces::{
    batch, generate_orders, screen::OrderForm, terminal_screen::TerminalScreen,
};
use orders::OrderSelection;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_ORDERS_FILE: &str = "smoothie_orders.jsonl";

#[derive(Parser)]
#[command(name = "smoothie_machine")]
#[command(about = "The Smoothie Machine - price and describe a custom smoothie", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order one smoothie
    Order {
        /// Cup size: small, medium or large
        #[arg(long)]
        size: Option<String>,

        /// Liquid base, e.g. "oat milk"
        #[arg(long)]
        base: Option<String>,

        /// A fruit to blend in; repeat for more
        #[arg(long = "fruit")]
        fruits: Vec<String>,

        /// An extra to add; repeat for more
        #[arg(long = "extra")]
        extras: Vec<String>,

        /// Sweetener, or "none" for no added sweetener
        #[arg(long)]
        sweetener: Option<String>,

        /// Name to greet the customer with
        #[arg(long)]
        name: Option<String>,

        /// Special instructions
        #[arg(long)]
        notes: Option<String>,
    },

    /// Order every smoothie in a JSON Lines file
    Batch {
        /// File with one selection per line
        file: PathBuf,
    },

    /// Write random sample selections to a JSON Lines file
    Generate {
        /// Number of selections
        #[arg(long, default_value_t = 10)]
        count: usize,

        /// Output file
        #[arg(long, default_value = DEFAULT_ORDERS_FILE)]
        output: PathBuf,

        /// Seed for a reproducible file
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Clear the form
    Reset,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Order {
            size,
            base,
            fruits,
            extras,
            sweetener,
            name,
            notes,
        } => {
            let mut selection = OrderSelection::new()
                .with_size(size.unwrap_or_default())
                .with_base(base.unwrap_or_default())
                .with_fruits(fruits)
                .with_extras(extras);
            if let Some(sweetener) = sweetener {
                selection = selection.with_sweetener(sweetener);
            }
            if let Some(name) = name {
                selection = selection.with_customer_name(name);
            }
            if let Some(notes) = notes {
                selection = selection.with_notes(notes);
            }

            let mut form = OrderForm::new(TerminalScreen::stdout());
            match form.submit(&selection) {
                Ok(_) => Ok(ExitCode::SUCCESS),
                Err(_) => Ok(ExitCode::from(2)),
            }
        }
        Commands::Batch { file } => {
            let reader = File::open(&file)
                .map(BufReader::new)
                .with_context(|| format!("opening {}", file.display()))?;
            let mut form = OrderForm::new(TerminalScreen::stdout());
            let report = batch::process_orders(&mut form, reader)?;
            println!(
                "{} ordered, {} incomplete, {} skipped, total ${}",
                report.accepted, report.incomplete, report.skipped, report.total
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate {
            count,
            output,
            seed,
        } => {
            generate_orders::generate_orders(&output, count, seed)?;
            println!("{count} selections written to {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Reset => {
            let mut form = OrderForm::new(TerminalScreen::stdout());
            form.reset();
            Ok(ExitCode::SUCCESS)
        }
    }
}
