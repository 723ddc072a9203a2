use super::IOArgs;
use clap::Subcommand;
use sf_core::models::{SortOrder, default_categories};

#[derive(Subcommand)]
pub enum Commands {
    /// Arrange the products and report one page of the listing
    Page {
        #[command(flatten)]
        io: IOArgs,

        /// The 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// The number of products per page
        #[arg(short = 's', long, default_value_t = 20)]
        page_size: usize,

        /// The display order (featured, price_asc, price_desc, newest, name)
        #[arg(long, default_value = "featured")]
        sort: SortOrder,

        /// Only list products whose name or category contains this text
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// A canonical category, in priority order (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,
    },

    /// Report how many products fall into each category group
    Categories {
        #[command(flatten)]
        io: IOArgs,

        /// A canonical category, in priority order (repeatable)
        #[arg(short, long = "category")]
        categories: Vec<String>,
    },
}

/// The canonical categories given on the command line, or the built-in list
pub(crate) fn canonical(categories: Vec<String>) -> Vec<String> {
    if categories.is_empty() {
        default_categories()
    } else {
        categories
    }
}
