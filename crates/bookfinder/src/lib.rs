#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # bookfinder
//!
//! bookfinder is a library for searching the Google Books catalog and presenting the results.
//! A search is built from user text and a [`Filter`] into a [`SearchTerm`], sent to the catalog
//! with [`search`] and turned into [`view`]s of the returned [`CatalogEntry`] values.
//!
//! [`app::AppController`] ties these together as a single state machine that a front end drives
//! with user events.

mod api;
pub mod app;
pub mod catalog;
mod error;
pub mod query;
pub mod view;

pub use api::Client;
pub use catalog::CatalogEntry;
pub use error::{Error, ErrorKind};
pub use query::{Filter, SearchTerm};

use log::trace;

type DefaultClient = reqwest::blocking::Client;

/// The result cap used when none is given, also the largest cap the catalog accepts.
pub const DEFAULT_MAX_RESULTS: u8 = api::google_books::MAX_RESULTS_LIMIT;

/// Search catalog entries matching the `term` using the default API.
///
/// At most `max_results` entries are returned, in the order the catalog ranks them. Caps outside
/// of `1..=40` are clamped into that range.
///
/// # Errors
///
/// An `Err` is returned when the request cannot be completed or the catalog responds with a
/// non-success status.
/// An `Err` is returned when the response cannot be parsed into [`CatalogEntry`] values.
///
/// No matching entries is not an error, an empty [`Vec`] is returned.
#[inline]
pub fn search(term: &SearchTerm, max_results: u8) -> Result<Vec<CatalogEntry>, Error> {
    trace!("Search entries for the term '{term}'");
    api::google_books::search::<DefaultClient>(term, max_results)
}
