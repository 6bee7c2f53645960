//! Pure renderings of the application state.
//!
//! Views borrow the entries they show and never change them. Each view implements
//! [`std::fmt::Display`] to produce its terminal rendering.

mod detail;
mod results;

pub use detail::{DetailAction, DetailOutcome, DetailView, NoopShelf, Shelf};
pub use results::{Card, ResultsState, ResultsView, EMPTY_HINT, EMPTY_PROMPT};
