use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "billfold")]
#[command(about = "Track and submit expense reports from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record the logged-in user
    Init {
        #[arg(long)]
        email: String,

        #[arg(long)]
        admin: bool,
    },

    Bills {
        #[command(subcommand)]
        command: BillsCommand,
    },
}

#[derive(Subcommand)]
pub enum BillsCommand {
    /// Show submitted expense reports, most recent first
    List,

    /// Show the new-bill form page
    Form,

    /// Submit a new expense report
    New {
        #[arg(long = "type")]
        expense_type: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "Expense date, YYYY-MM-DD")]
        date: String,

        #[arg(long)]
        amount: f64,

        #[arg(long)]
        vat: f64,

        #[arg(long, default_value = "20")]
        pct: u8,

        #[arg(long)]
        commentary: Option<String>,

        #[arg(long, help = "Receipt image to attach (jpg, jpeg or png)")]
        file: Option<PathBuf>,
    },

    /// Open the receipt preview for one bill
    Preview { bill_id: String },
}
