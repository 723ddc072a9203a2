use clap::Parser;
use sf_core::models::{ListingQuery, PageError, PageRequest};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Page {
                io,
                page,
                page_size,
                sort,
                search,
                categories,
            } => {
                let products = io.products()?;
                let request = PageRequest::new(page, page_size).map_err(CliError::from)?;
                let query = ListingQuery {
                    sort,
                    q: search,
                    ..Default::default()
                };
                let listing =
                    sf_mixer::listing(&products, &canonical(categories), &query, request)
                        .map_err(CliError::from)?;
                serde_json::to_writer_pretty(io.write()?, &listing)?;
            }
            Commands::Categories { io, categories } => {
                let products = io.products()?;
                let counts = sf_mixer::category_counts(&products, &canonical(categories));
                serde_json::to_writer_pretty(io.write()?, &counts)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("invalid page request: {0}")]
    Page(#[from] PageError),
}
