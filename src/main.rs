mod cli;
mod commands;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use billing_service::application::BillingStore;
use billing_service::infrastructure::file_store::FileBlobStore;
use billing_service::infrastructure::pdf::DEFAULT_PDF_COMMAND;
use clap::Parser;
use dotenvy::dotenv;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(env_or("BILLING_DATA_DIR", ".billing")));

    let adapter = match FileBlobStore::open(&data_dir).await {
        Ok(adapter) => Arc::new(adapter),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut store = BillingStore::load(adapter).await;

    let result = match cli.command {
        Commands::Create { title, address } => commands::create::run(&mut store, &title, address),
        Commands::Delete { id } => commands::delete::run(&mut store, id),
        Commands::AddItem {
            id,
            name,
            price,
            quantity,
        } => commands::add_item::run(&mut store, id, name, price, quantity),
        Commands::List { search, sort } => commands::list::run(&store, search.as_deref(), sort.into()),
        Commands::Show { id } => commands::show::run(&store, id),
        Commands::Export {
            id,
            out_dir,
            renderer,
        } => {
            let out_dir =
                out_dir.unwrap_or_else(|| PathBuf::from(env_or("BILLING_EXPORT_DIR", "invoices")));
            let program = renderer
                .unwrap_or_else(|| env_or("BILLING_PDF_COMMAND", DEFAULT_PDF_COMMAND));
            commands::export::run(&store, id, &program, &out_dir).await
        }
    };

    // Drain pending document writes before reporting the outcome.
    store.close().await;

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
