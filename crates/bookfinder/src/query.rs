//! Building catalog search terms from user input.

use std::{fmt, str::FromStr};

use crate::{Error, ErrorKind};

/// Restricts a search to a single field of the catalog entries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    /// Search every field.
    #[default]
    All,
    /// Search titles only.
    Title,
    /// Search author names only.
    Author,
    /// Search by ISBN.
    Isbn,
}

impl Filter {
    /// Every filter in the order they are offered to a user.
    pub const ALL: [Self; 4] = [Self::All, Self::Title, Self::Author, Self::Isbn];

    /// The field-scope marker prefixed to the search text, if any.
    #[must_use]
    pub const fn scope(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Title => Some("intitle:"),
            Self::Author => Some("inauthor:"),
            Self::Isbn => Some("isbn:"),
        }
    }

    /// Name used to parse and display the filter.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Title => "title",
            Self::Author => "author",
            Self::Isbn => "isbn",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("Unknown filter '{s}' - expected one of all, title, author or isbn"),
                )
            })
    }
}

/// A search term ready to be used as the `q` parameter of a catalog request.
///
/// The user text is percent-encoded and, for a field filter, prefixed with the field-scope
/// marker of that field.
///
/// # Examples
///
/// ```
/// use bookfinder::{Filter, SearchTerm};
///
/// assert_eq!("dune%20messiah", SearchTerm::new("dune messiah", Filter::All).as_str());
/// assert_eq!("inauthor:Frank%20Herbert", SearchTerm::new("Frank Herbert", Filter::Author).as_str());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm {
    filter: Filter,
    encoded: String,
}

impl SearchTerm {
    /// Build the term for `text` scoped by `filter`.
    ///
    /// Surrounding whitespace is trimmed from `text`, and an ISBN also loses its hyphens and inner
    /// whitespace, before encoding. No validation is done on `text`, see [`SearchTerm::is_blank`]
    /// and [`SearchTerm::is_empty`].
    #[must_use]
    pub fn new(text: &str, filter: Filter) -> Self {
        let text = text.trim();
        let encoded = match filter.scope() {
            None => urlencoding::encode(text).into_owned(),
            Some(scope) => {
                let mut term = scope.to_owned();
                if filter == Filter::Isbn {
                    // remove hyphens and spaces from ISBN-13 (if applicable)
                    let isbn: String = text
                        .chars()
                        .filter(|c| *c != '-' && !c.is_whitespace())
                        .collect();
                    term.push_str(&urlencoding::encode(&isbn));
                } else {
                    term.push_str(&urlencoding::encode(text));
                }
                term
            }
        };

        Self { filter, encoded }
    }

    /// Is the user text empty or whitespace only.
    #[must_use]
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }

    /// Is there no search text left after normalising, such as an ISBN made only of hyphens.
    ///
    /// A term without text only holds the field-scope marker and would match nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encoded.len() == self.filter.scope().map_or(0, str::len)
    }

    /// The filter the term was built with.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// The encoded term.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, SearchTerm};
    use crate::ErrorKind;

    #[test]
    fn all_filter_is_encoded_text_only() {
        assert_eq!("dune", SearchTerm::new("dune", Filter::All).as_str());
        assert_eq!(
            "the%20left%20hand%20of%20darkness",
            SearchTerm::new("the left hand of darkness", Filter::All).as_str()
        );
        assert_eq!(
            "c%2B%2B%20%26%20rust%3F",
            SearchTerm::new("c++ & rust?", Filter::All).as_str()
        );
    }

    #[test]
    fn field_filters_are_prefixed_with_scope_marker() {
        let cases = [
            (Filter::Title, "intitle:"),
            (Filter::Author, "inauthor:"),
            (Filter::Isbn, "isbn:"),
        ];

        for (filter, marker) in cases {
            let term = SearchTerm::new("a&b c", filter);
            assert!(term.as_str().starts_with(marker), "{term} for {filter}");
            assert_eq!(filter, term.filter());
        }

        assert_eq!(
            "intitle:a%26b%20c",
            SearchTerm::new("a&b c", Filter::Title).as_str()
        );
        assert_eq!(
            "inauthor:Ursula%20K.%20Le%20Guin",
            SearchTerm::new("Ursula K. Le Guin", Filter::Author).as_str()
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_encoding() {
        assert_eq!("dune", SearchTerm::new(" dune ", Filter::All).as_str());
        assert_eq!(
            "intitle:dune%20messiah",
            SearchTerm::new("\tdune messiah\n", Filter::Title).as_str()
        );
    }

    #[test]
    fn isbn_filter_strips_hyphens() {
        assert_eq!(
            "isbn:9780380815937",
            SearchTerm::new("978-0380815937", Filter::Isbn).as_str()
        );
        assert_eq!(
            "isbn:0735619670",
            SearchTerm::new(" 0 7356 19670 ", Filter::Isbn).as_str()
        );
    }

    #[test]
    fn blank_text_is_detected() {
        assert!(SearchTerm::is_blank(""));
        assert!(SearchTerm::is_blank(" \t\n"));
        assert!(!SearchTerm::is_blank(" dune "));
    }

    #[test]
    fn term_without_text_is_empty() {
        assert!(SearchTerm::new("---", Filter::Isbn).is_empty());
        assert!(SearchTerm::new("- -", Filter::Isbn).is_empty());
        assert!(SearchTerm::new("", Filter::Title).is_empty());
        assert!(SearchTerm::new("  ", Filter::All).is_empty());

        assert!(!SearchTerm::new("978-0380815937", Filter::Isbn).is_empty());
        assert!(!SearchTerm::new("-", Filter::Title).is_empty());
        assert!(!SearchTerm::new("dune", Filter::All).is_empty());
    }

    #[test]
    fn filter_parses_from_name() {
        assert_eq!(Filter::Title, "title".parse().unwrap());
        assert_eq!(Filter::Isbn, "ISBN".parse().unwrap());
        assert_eq!(Filter::All, " all ".parse().unwrap());

        let err = "publisher".parse::<Filter>().unwrap_err();
        assert_eq!(ErrorKind::InvalidInput, err.kind());
        assert_eq!("author", Filter::Author.to_string());
    }
}
