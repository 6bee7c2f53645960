use std::{borrow::Cow, fmt};

use crate::catalog::{CatalogEntry, NO_DESCRIPTION};

/// Heading shown before any search has produced results.
pub const EMPTY_PROMPT: &str = "Search for your favorite books";
/// Hint shown under [`EMPTY_PROMPT`].
pub const EMPTY_HINT: &str = "Enter a title, author, or ISBN to get started";

const SUMMARY_LEN: usize = 120;

/// The list of search results together with the loading and error flags of the last search.
#[derive(Clone, Copy, Debug)]
pub struct ResultsView<'a> {
    entries: &'a [CatalogEntry],
    loading: bool,
    error: Option<&'a str>,
}

/// What the results area displays. Exactly one state is shown at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsState<'a> {
    /// A search is in flight, results and prompts are hidden.
    Loading,
    /// The last search failed or found nothing.
    Error(&'a str),
    /// No results and nothing to report, invite the user to search.
    Empty,
    /// One card per entry in response order.
    Populated(Vec<Card<'a>>),
}

impl<'a> ResultsView<'a> {
    /// Create a view over `entries` with the state flags of the last search.
    #[must_use]
    pub const fn new(entries: &'a [CatalogEntry], loading: bool, error: Option<&'a str>) -> Self {
        Self {
            entries,
            loading,
            error,
        }
    }

    /// The single state the results area shows.
    #[must_use]
    pub fn state(&self) -> ResultsState<'a> {
        if self.loading {
            ResultsState::Loading
        } else if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            ResultsState::Error(message)
        } else if self.entries.is_empty() {
            ResultsState::Empty
        } else {
            ResultsState::Populated(self.entries.iter().map(Card::new).collect())
        }
    }
}

impl fmt::Display for ResultsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state())
    }
}

impl fmt::Display for ResultsState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("Searching..."),
            Self::Error(message) => f.write_str(message),
            Self::Empty => write!(f, "{EMPTY_PROMPT}\n{EMPTY_HINT}"),
            Self::Populated(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n\n")?;
                    }
                    write!(f, "{:>3}. {card}", i + 1)?;
                }
                Ok(())
            }
        }
    }
}

/// Summary of a single entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card<'a> {
    entry: &'a CatalogEntry,
}

impl<'a> Card<'a> {
    /// Create the card of `entry`.
    #[must_use]
    pub const fn new(entry: &'a CatalogEntry) -> Self {
        Self { entry }
    }

    /// The entry shown, passed to the selection.
    #[must_use]
    pub const fn entry(&self) -> &'a CatalogEntry {
        self.entry
    }

    /// Title of the entry.
    #[must_use]
    pub fn title(&self) -> &'a str {
        self.entry.title()
    }

    /// Authors joined by a comma, or the unknown author label.
    #[must_use]
    pub fn authors(&self) -> String {
        self.entry.authors_label()
    }

    /// Year the entry was published.
    #[must_use]
    pub fn year(&self) -> Option<u16> {
        self.entry.published_year()
    }

    /// First category of the entry.
    #[must_use]
    pub fn category(&self) -> Option<&'a str> {
        self.entry.first_category()
    }

    /// Thumbnail URL or the fallback image.
    #[must_use]
    pub fn thumbnail(&self) -> &'a str {
        self.entry.thumbnail()
    }

    /// The start of the description, cut on a word boundary.
    #[must_use]
    pub fn summary(&self) -> Cow<'a, str> {
        let Some(description) = self.entry.description() else {
            return Cow::Borrowed(NO_DESCRIPTION);
        };

        if description.chars().count() <= SUMMARY_LEN {
            return Cow::Borrowed(description);
        }

        let cut: String = description.chars().take(SUMMARY_LEN).collect();
        let cut = cut.rsplit_once(' ').map_or(cut.as_str(), |(head, _)| head);
        Cow::Owned(format!("{}...", cut.trim_end()))
    }
}

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        write!(f, "     {}", self.authors())?;
        if let Some(year) = self.year() {
            write!(f, "\n     Published: {year}")?;
        }
        if let Some(category) = self.category() {
            write!(f, "\n     {category}")?;
        }
        write!(f, "\n     {}", self.summary())
    }
}
