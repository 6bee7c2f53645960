use std::fmt;

use log::trace;

use crate::{catalog::CatalogEntry, Error};

/// Receiver of the secondary actions offered by a [`DetailView`].
///
/// Nothing is stored by default, both methods are no-ops. Implement this trait to give the
/// actions a backing store.
pub trait Shelf {
    /// Called when the user asks to add `entry` to their wishlist.
    ///
    /// # Errors
    ///
    /// Implementations return an [`Err`] when the entry could not be stored.
    fn add_to_wishlist(&mut self, entry: &CatalogEntry) -> Result<(), Error> {
        trace!("Wishlist is not stored - ignoring '{}'", entry.id);
        Ok(())
    }

    /// Called when the user asks to add `entry` to their reading list.
    ///
    /// # Errors
    ///
    /// Implementations return an [`Err`] when the entry could not be stored.
    fn add_to_reading_list(&mut self, entry: &CatalogEntry) -> Result<(), Error> {
        trace!("Reading list is not stored - ignoring '{}'", entry.id);
        Ok(())
    }
}

/// The default [`Shelf`] which accepts every action and keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopShelf;

impl Shelf for NoopShelf {}

/// Controls offered by the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailAction {
    /// Pass the entry to [`Shelf::add_to_wishlist`].
    AddToWishlist,
    /// Pass the entry to [`Shelf::add_to_reading_list`].
    AddToReadingList,
    /// Close the detail view.
    Close,
}

impl DetailAction {
    /// Every action in the order they are offered.
    pub const ALL: [Self; 3] = [Self::AddToWishlist, Self::AddToReadingList, Self::Close];
}

impl fmt::Display for DetailAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AddToWishlist => "Add to Wishlist",
            Self::AddToReadingList => "Add to Reading List",
            Self::Close => "Close",
        })
    }
}

/// Whether the detail view stays open after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailOutcome {
    /// The view stays open.
    Stay,
    /// The view is closed and the selection should be cleared.
    Close,
}

/// The expanded view of a single selected entry.
#[derive(Clone, Copy, Debug)]
pub struct DetailView<'a> {
    entry: &'a CatalogEntry,
}

impl<'a> DetailView<'a> {
    /// Create the detail view of `entry`.
    #[must_use]
    pub const fn new(entry: &'a CatalogEntry) -> Self {
        Self { entry }
    }

    /// The entry shown by the view.
    #[must_use]
    pub const fn entry(&self) -> &'a CatalogEntry {
        self.entry
    }

    /// Run `action` against the `shelf`.
    ///
    /// [`DetailAction::Close`] never touches the shelf; the caller is expected to clear the
    /// selection when [`DetailOutcome::Close`] is returned.
    ///
    /// # Errors
    ///
    /// Any [`Err`] returned by the [`Shelf`] is passed on.
    pub fn apply<S>(&self, action: DetailAction, shelf: &mut S) -> Result<DetailOutcome, Error>
    where
        S: Shelf + ?Sized,
    {
        match action {
            DetailAction::AddToWishlist => shelf.add_to_wishlist(self.entry)?,
            DetailAction::AddToReadingList => shelf.add_to_reading_list(self.entry)?,
            DetailAction::Close => return Ok(DetailOutcome::Close),
        }
        Ok(DetailOutcome::Stay)
    }
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.entry;
        let title = entry.title();
        writeln!(f, "{title}")?;
        write!(f, "{}", "=".repeat(title.chars().count().max(1)))?;

        let authors = entry.authors();
        if !authors.is_empty() {
            write!(f, "\nAuthors:     {}", authors.join(", "))?;
        }
        if let Some(year) = entry.published_year() {
            write!(f, "\nPublished:   {year}")?;
        }
        if let Some(publisher) = entry.publisher() {
            write!(f, "\nPublisher:   {publisher}")?;
        }
        let categories = entry.categories();
        if !categories.is_empty() {
            write!(f, "\nCategories:  {}", categories.join(", "))?;
        }
        if let Some(pages) = entry.page_count() {
            write!(f, "\nPages:       {pages}")?;
        }
        if let Some(identifier) = entry.first_identifier() {
            write!(f, "\nIdentifier:  {identifier}")?;
        }
        write!(f, "\nCover:       {}", entry.thumbnail())?;

        if let Some(description) = entry.description() {
            write!(f, "\n\nDescription\n-----------\n{description}")?;
        }
        Ok(())
    }
}
