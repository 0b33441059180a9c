use std::path::Path;

use anyhow::{Context, Result};
use billfold_app::BillForm;
use billfold_store::JsonStore;

use crate::args::{BillsCommand, Cli, Commands};
use crate::config::{self, Config};
use crate::handlers;

pub async fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init { email, admin } => handlers::init::handle(&data_dir, email, admin),

        Commands::Bills { command } => {
            let config = Config::load_from(&data_dir.join("config.toml"))?;
            let session = config
                .session()
                .context("No user configured. Run 'billfold init --email <EMAIL>' first")?;
            let store = JsonStore::open(&data_dir)?;

            match command {
                BillsCommand::List => handlers::list::handle(store.bills(), cli.format).await,

                BillsCommand::Form => handlers::form::handle(cli.format),

                BillsCommand::New {
                    expense_type,
                    name,
                    date,
                    amount,
                    vat,
                    pct,
                    commentary,
                    file,
                } => {
                    let form = BillForm {
                        expense_type,
                        expense_name: name,
                        date,
                        amount,
                        vat,
                        pct,
                        commentary,
                    };
                    handlers::new_bill::handle(store.bills(), session, form, file, cli.format)
                        .await
                }

                BillsCommand::Preview { bill_id } => {
                    handlers::preview::handle(store.bills(), &bill_id, cli.format).await
                }
            }
        }
    }
}

fn show_guidance(data_dir: &Path) {
    println!("billfold - expense report tracker\n");

    if !data_dir.join("config.toml").exists() {
        println!("Get started:");
        println!("  billfold init --email <EMAIL>\n");
    }

    println!("Quick commands:");
    println!("  billfold bills list                 # View your expense reports");
    println!("  billfold bills new --type <TYPE> --date <DATE> --amount <N> --vat <N>");
    println!("  billfold bills preview <BILL_ID>    # Open a receipt\n");
    println!("For more commands:");
    println!("  billfold --help");
}
