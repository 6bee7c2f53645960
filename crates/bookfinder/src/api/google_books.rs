use log::{info, trace, warn};
use serde::Deserialize;

use crate::{catalog::CatalogEntry, query::SearchTerm, Error};

use super::Client;

const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// The largest result cap accepted by the volumes endpoint.
pub(crate) const MAX_RESULTS_LIMIT: u8 = 40;

pub(crate) fn search<C: Client>(
    term: &SearchTerm,
    max_results: u8,
) -> Result<Vec<CatalogEntry>, Error> {
    let max_results = clamp_max_results(max_results);
    info!("Searching for '{term}' using Google Books API");
    let url = format!("{GOOGLE_BOOKS_URL}?q={term}&maxResults={max_results}");

    let client = C::default();
    let GoogleModel { items } = client.get_json(&url)?;

    trace!("Request was successful - {} entries found", items.len());

    Ok(items)
}

fn clamp_max_results(max_results: u8) -> u8 {
    let clamped = max_results.clamp(1, MAX_RESULTS_LIMIT);
    if clamped != max_results {
        warn!("Result cap of {max_results} is not supported - using {clamped} instead");
    }
    clamped
}

/// The volumes response; `items` is left out entirely when nothing matches.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct GoogleModel {
    #[serde(default)]
    items: Vec<CatalogEntry>,
}
