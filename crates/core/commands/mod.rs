use crate::app::{self, LogShelf};

use bookfinder::{
    app::{AppController, Phase},
    Filter,
};

use clap::Subcommand;
use eyre::{eyre, Context};
use log::trace;

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search the catalog once and print the results
    ///
    /// A blank query does not search and prints a prompt instead.
    #[clap(arg_required_else_help = true)]
    Search {
        /// The text to search for, multiple words are joined by a space
        #[clap(required = true)]
        query: Vec<String>,

        /// Restrict the search to one field: all, title, author or isbn
        #[clap(short = 'F', long, default_value = "all")]
        filter: Filter,

        /// Print the entries as JSON in the catalog's own format
        #[clap(long)]
        json: bool,
    },

    /// Search and browse results interactively
    ///
    /// Select a result to open its details, from where it can be added to the wishlist or
    /// reading list.
    Browse {
        /// The filter selected by default for each search: all, title, author or isbn
        #[clap(short = 'F', long, default_value = "all")]
        filter: Filter,
    },
}

impl Commands {
    pub fn execute(self) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Commands::Search {
                query,
                filter,
                json,
            } => {
                let query = query.join(" ");
                trace!("search subcommand called with '{query}' and the {filter} filter");
                let mut app = AppController::new();
                app::run_search(&mut app, &query, filter);

                match app.phase() {
                    Phase::Failed => Err(eyre!("{}", app.error().unwrap_or_default()).into()),
                    Phase::Results if json => serde_json::to_string_pretty(app.entries())
                        .wrap_err("Cannot write the entries as JSON")
                        .map_err(Into::into),
                    _ => Ok(app.results_view().to_string()),
                }
            }
            Commands::Browse { filter } => {
                trace!("browse subcommand called with the {filter} filter");
                app::browse(filter, &mut LogShelf).map_err(Into::into)
            }
        }
    }
}
