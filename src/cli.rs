use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use billing_service::domain::billing::SortOrder;

#[derive(Parser)]
#[command(
    name = "billing",
    about = "Create billing lists, add line items, and export PDF invoices",
    version
)]
pub struct Cli {
    /// Directory holding the persisted billing document
    /// (defaults to $BILLING_DATA_DIR, then ".billing")
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new billing list
    Create {
        /// List title: 3-50 letters, digits, spaces, dashes, or underscores
        title: String,

        /// Billing address printed on the invoice
        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a billing list
    Delete {
        /// Id of the list to delete
        id: Uuid,
    },

    /// Add a line item to a list
    AddItem {
        /// Id of the target list
        id: Uuid,

        /// Item name
        name: String,

        /// Unit price, e.g. "2.50"
        price: String,

        /// Quantity, a whole number
        quantity: String,
    },

    /// Show all billing lists
    List {
        /// Keep only titles containing this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Ordering of the listing
        #[arg(long, value_enum, default_value_t = SortArg::Recent)]
        sort: SortArg,
    },

    /// Show one list with its items and running total
    Show {
        /// Id of the list to show
        id: Uuid,
    },

    /// Export a list as a PDF invoice
    Export {
        /// Id of the list to export
        id: Uuid,

        /// Directory the invoice is written to
        /// (defaults to $BILLING_EXPORT_DIR, then "invoices")
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Rasterizer invoked as `<program> <html> <pdf>`
        /// (defaults to $BILLING_PDF_COMMAND, then wkhtmltopdf)
        #[arg(long)]
        renderer: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Newest first
    Recent,
    /// A to Z by title
    Az,
    /// Z to A by title
    Za,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Recent => SortOrder::Recent,
            SortArg::Az => SortOrder::TitleAsc,
            SortArg::Za => SortOrder::TitleDesc,
        }
    }
}
