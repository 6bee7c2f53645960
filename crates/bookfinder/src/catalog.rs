//! The catalog entry model as returned by the Google Books volumes API.
//!
//! The API schema is used as-is: [`CatalogEntry`] deserializes straight from a volume object and
//! serializes back to the same shape. Display helpers substitute the fallback values used by the
//! views when optional data is missing.

use serde::{Deserialize, Serialize};

/// Image shown when an entry has no thumbnail of its own.
pub const FALLBACK_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=200";

/// Label shown in place of the authors when an entry has none.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Label shown in place of the description when an entry has none.
pub const NO_DESCRIPTION: &str = "No description available";

/// A single book record from the catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogEntry {
    /// Opaque identifier assigned by the catalog.
    pub id: String,
    /// Bibliographic data of the volume.
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

/// Volume information from the Google Books API.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    /// Title of the volume.
    #[serde(default)]
    pub title: String,
    /// Authors in the order the catalog lists them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    /// Partial date such as `1998`, `1998-05` or `1998-05-01`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Long form description of the volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cover images of the volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_links: Option<ImageLinks>,
    /// Subject categories, most relevant first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Number of printed pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    /// Name of the publisher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// ISBN and other identifiers of the volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
}

/// Links to cover images of a volume.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ImageLinks {
    /// URL of the thumbnail sized cover.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// An identifier such as an `ISBN_10` or `ISBN_13` number.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndustryIdentifier {
    /// Kind of identifier, such as `ISBN_13`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The identifier value.
    pub identifier: String,
}

impl std::fmt::Display for IndustryIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.identifier)
    }
}

impl CatalogEntry {
    /// Title of the entry.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.volume_info.title
    }

    /// The authors of the entry, empty when the catalog has none.
    #[must_use]
    pub fn authors(&self) -> &[String] {
        self.volume_info.authors.as_deref().unwrap_or_default()
    }

    /// Authors joined by a comma or [`UNKNOWN_AUTHOR`] when there are no authors.
    #[must_use]
    pub fn authors_label(&self) -> String {
        let authors = self.authors();
        if authors.is_empty() {
            UNKNOWN_AUTHOR.to_owned()
        } else {
            authors.join(", ")
        }
    }

    /// The year component of the published date.
    ///
    /// The catalog uses partial dates (`1998`, `1998-05` or `1998-05-01`) so only the leading
    /// component is read; `None` is returned when it is not a number.
    #[must_use]
    pub fn published_year(&self) -> Option<u16> {
        self.volume_info
            .published_date
            .as_deref()
            .and_then(|date| date.trim().split('-').next())
            .and_then(|year| year.parse::<u16>().ok())
    }

    /// The description, `None` when missing or blank.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.volume_info
            .description
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    /// The thumbnail URL or [`FALLBACK_THUMBNAIL`].
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        self.volume_info
            .image_links
            .as_ref()
            .and_then(|links| links.thumbnail.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_THUMBNAIL)
    }

    /// Every category of the entry, empty when the catalog has none.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        self.volume_info.categories.as_deref().unwrap_or_default()
    }

    /// The category shown in summaries.
    #[must_use]
    pub fn first_category(&self) -> Option<&str> {
        self.categories().first().map(String::as_str)
    }

    /// Name of the publisher.
    #[must_use]
    pub fn publisher(&self) -> Option<&str> {
        self.volume_info.publisher.as_deref()
    }

    /// Number of printed pages.
    #[must_use]
    pub const fn page_count(&self) -> Option<u32> {
        self.volume_info.page_count
    }

    /// The identifier shown in the detail view.
    #[must_use]
    pub fn first_identifier(&self) -> Option<&IndustryIdentifier> {
        self.volume_info
            .industry_identifiers
            .as_deref()
            .and_then(<[_]>::first)
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogEntry, VolumeInfo, FALLBACK_THUMBNAIL, UNKNOWN_AUTHOR};

    fn entry_published(date: &str) -> CatalogEntry {
        CatalogEntry {
            id: "1".to_owned(),
            volume_info: VolumeInfo {
                title: "Ignore".to_owned(),
                published_date: Some(date.to_owned()),
                ..VolumeInfo::default()
            },
        }
    }

    #[test]
    fn year_is_read_from_every_partial_date_form() {
        for date in ["1998", "1998-05", "1998-05-01"] {
            assert_eq!(
                Some(1998),
                entry_published(date).published_year(),
                "date of '{date}'"
            );
        }
    }

    #[test]
    fn unparsable_date_has_no_year() {
        assert_eq!(None, entry_published("199x@apples").published_year());
        assert_eq!(None, entry_published("").published_year());
        assert_eq!(None, CatalogEntry::default().published_year());
    }

    #[test]
    fn missing_optional_fields_use_fallbacks() {
        let entry = CatalogEntry::default();

        assert_eq!(UNKNOWN_AUTHOR, entry.authors_label());
        assert_eq!(FALLBACK_THUMBNAIL, entry.thumbnail());
        assert!(entry.first_category().is_none());
        assert!(entry.first_identifier().is_none());
        assert!(entry.description().is_none());
    }

    #[test]
    fn entry_decodes_from_volume_json() {
        let json = r#"{
            "id": "B1",
            "volumeInfo": {
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "publishedDate": "1965-08-01",
                "imageLinks": { "smallThumbnail": "small", "thumbnail": "http://thumb" },
                "categories": ["Fiction", "Science"],
                "pageCount": 412,
                "industryIdentifiers": [
                    { "type": "ISBN_13", "identifier": "9780441013593" },
                    { "type": "ISBN_10", "identifier": "0441013597" }
                ]
            }
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).unwrap();

        assert_eq!("B1", entry.id);
        assert_eq!("Dune", entry.title());
        assert_eq!("Frank Herbert", entry.authors_label());
        assert_eq!(Some(1965), entry.published_year());
        assert_eq!("http://thumb", entry.thumbnail());
        assert_eq!(Some("Fiction"), entry.first_category());
        assert_eq!(Some(412), entry.page_count());
        assert_eq!(
            "ISBN_13: 9780441013593",
            entry.first_identifier().unwrap().to_string()
        );
    }

    #[test]
    fn serializes_with_catalog_field_names() {
        let entry = entry_published("1998");
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!("1998", value["volumeInfo"]["publishedDate"]);
        assert!(value["volumeInfo"].get("authors").is_none());
    }
}
