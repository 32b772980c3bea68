use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Known genres, in the order used for reporting.
pub const GENRES: [&str; 5] = ["fiction", "non-fiction", "reference", "children", "biography"];

/// Provenance marker attached to records that entered through a merge.
pub const NEW_SECTION: &str = "New";

/// A single book in the catalog
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
    pub available: bool,
    pub popularity_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Book as decoded from external input, before the mandatory fields are checked
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RawBook {
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub publication_year: Option<i32>,
    pub available: Option<bool>,
    pub popularity_score: Option<f64>,
    pub section: Option<String>,
}

impl Book {
    pub fn new(
        id: &str,
        title: &str,
        author: &str,
        genre: &str,
        publication_year: i32,
        available: bool,
        popularity_score: f64,
    ) -> Self {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_year,
            available,
            popularity_score,
            section: None,
        }
    }

    /// Decade bucket of the publication year (2018 -> 2010)
    ///
    /// Uses floor division so years before 0 land in the bucket below them.
    /// Computed in `i64` so every `i32` year has a bucket.
    pub fn decade(&self) -> i64 {
        i64::from(self.publication_year).div_euclid(10) * 10
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "On Loan"
        }
    }

    pub fn is_new_arrival(&self) -> bool {
        self.section.as_deref() == Some(NEW_SECTION)
    }
}

impl From<Book> for RawBook {
    fn from(book: Book) -> Self {
        RawBook {
            id: Some(book.id),
            title: Some(book.title),
            author: Some(book.author),
            genre: Some(book.genre),
            publication_year: Some(book.publication_year),
            available: Some(book.available),
            popularity_score: Some(book.popularity_score),
            section: book.section,
        }
    }
}

impl TryFrom<RawBook> for Book {
    type Error = CatalogError;

    /// Reports the first absent field in declaration order.
    fn try_from(raw: RawBook) -> Result<Self> {
        fn require<T>(value: Option<T>, field: &str) -> Result<T> {
            value.ok_or_else(|| CatalogError::MissingField(field.to_string()))
        }

        Ok(Book {
            id: require(raw.id, "id")?,
            title: require(raw.title, "title")?,
            author: require(raw.author, "author")?,
            genre: require(raw.genre, "genre")?,
            publication_year: require(raw.publication_year, "publication_year")?,
            available: require(raw.available, "available")?,
            popularity_score: require(raw.popularity_score, "popularity_score")?,
            section: raw.section,
        })
    }
}
