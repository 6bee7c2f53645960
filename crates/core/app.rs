use bookfinder::{
    app::AppController,
    view::{DetailAction, DetailOutcome, Shelf},
    CatalogEntry, Error, Filter,
};
use eyre::eyre;
use log::info;

use crate::interact::{user_input, user_select, user_select_opt};

/// A [`Shelf`] that reports the action; nothing is kept between runs.
pub struct LogShelf;

impl Shelf for LogShelf {
    fn add_to_wishlist(&mut self, entry: &CatalogEntry) -> Result<(), Error> {
        info!("'{}' not added - the wishlist is not stored", entry.title());
        Ok(())
    }

    fn add_to_reading_list(&mut self, entry: &CatalogEntry) -> Result<(), Error> {
        info!("'{}' not added - the reading list is not stored", entry.title());
        Ok(())
    }
}

/// Submit `query` and run the request to completion.
///
/// Returns `false` when the query was blank and nothing was searched.
pub fn run_search(app: &mut AppController, query: &str, filter: Filter) -> bool {
    let Some(request) = app.submit(query, filter) else {
        return false;
    };

    info!("{}", app.results_view());
    let result = request.execute();
    app.complete(request.ticket(), result)
}

enum Next {
    Search,
    Quit,
}

pub fn browse<S: Shelf>(default_filter: Filter, shelf: &mut S) -> eyre::Result<String> {
    let mut app = AppController::new();
    println!("{}\n", app.results_view());

    let filters = Filter::ALL;
    loop {
        let query = user_input("Search")?;
        let current = filters
            .iter()
            .position(|f| *f == default_filter)
            .unwrap_or_default();
        let filter = filters[user_select("Filter", &filters, current)?];

        if !run_search(&mut app, &query, filter) {
            println!("{}\n", app.results_view());
            continue;
        }
        println!("{}\n", app.results_view());

        if let Next::Quit = browse_results(&mut app, shelf)? {
            return Ok(String::new());
        }
    }
}

fn browse_results<S: Shelf>(app: &mut AppController, shelf: &mut S) -> eyre::Result<Next> {
    loop {
        let mut items: Vec<String> = app
            .entries()
            .iter()
            .map(|entry| match entry.published_year() {
                Some(year) => format!("{} ({year})", entry.title()),
                None => entry.title().to_owned(),
            })
            .collect();
        let new_search = items.len();
        items.push("New search".to_owned());
        items.push("Quit".to_owned());

        let selection = match user_select_opt("Open a book", &items, 0)? {
            Some(i) if i == new_search => return Ok(Next::Search),
            Some(i) if i < new_search => i,
            _ => return Ok(Next::Quit),
        };

        if app.select(selection).is_none() {
            return Err(eyre!(
                "Internal error: user selection should be valid and not cause an out of index error"
            ));
        }
        show_detail(app, shelf)?;
    }
}

fn show_detail<S: Shelf>(app: &mut AppController, shelf: &mut S) -> eyre::Result<()> {
    let Some(detail) = app.detail_view() else {
        return Ok(());
    };
    println!("\n{detail}\n");

    loop {
        let action = DetailAction::ALL[user_select("Action", &DetailAction::ALL, 0)?];
        match detail.apply(action, shelf)? {
            DetailOutcome::Stay => println!("{action}: done"),
            DetailOutcome::Close => break,
        }
    }

    app.close_detail();
    Ok(())
}
