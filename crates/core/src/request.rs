//! Untyped invocation boundary
//!
//! Callers that only have loosely shaped JSON (catalog files, `libris call`)
//! go through this module. It turns missing values into
//! [`CatalogError::MissingArgument`] and mis-shaped values into
//! [`CatalogError::WrongType`] before any operation runs, so the typed
//! operations in the rest of the crate never see bad input.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::book::{Book, RawBook};
use crate::error::{CatalogError, Result};
use crate::merge::integrate_new_arrivals;
use crate::projection::{
    generate_citations, get_book_availability, transform_titles, TitleCase,
};
use crate::query::{
    filter_by_availability, filter_by_decade, filter_by_genre, filter_by_keyword,
};
use crate::session::Session;
use crate::stats::{
    build_statistics, calculate_average_popularity, calculate_genre_counts, GenreCounts,
    LibraryStatistics,
};

/// Number of entries in the most-popular ranking unless asked otherwise.
pub const DEFAULT_TOP: usize = 3;

/// Decode a collection of book records from a JSON value.
pub fn books_from_value(name: &str, value: Option<&Value>) -> Result<Vec<Book>> {
    let items = match value {
        None | Some(Value::Null) => return Err(CatalogError::missing_argument(name)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(CatalogError::wrong_type(name, "a list")),
    };

    items
        .iter()
        .map(|item| {
            if !item.is_object() {
                return Err(CatalogError::wrong_type(name, "a list of objects"));
            }
            let raw: RawBook = serde_json::from_value(item.clone()).map_err(|e| {
                CatalogError::wrong_type(name, &format!("a list of book records ({e})"))
            })?;
            Book::try_from(raw)
        })
        .collect()
}

fn required_str(args: &Map<String, Value>, key: &str) -> Result<String> {
    match args.get(key) {
        None | Some(Value::Null) => Err(CatalogError::missing_argument(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CatalogError::wrong_type(key, "a string")),
    }
}

fn optional_str(args: &Map<String, Value>, key: &str, default: &str) -> Result<String> {
    match args.get(key) {
        None => Ok(default.to_string()),
        Some(Value::Null) => Err(CatalogError::missing_argument(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CatalogError::wrong_type(key, "a string")),
    }
}

fn optional_bool(args: &Map<String, Value>, key: &str, default: bool) -> Result<bool> {
    match args.get(key) {
        None => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(CatalogError::wrong_type(key, "a boolean")),
    }
}

fn required_i32(args: &Map<String, Value>, key: &str) -> Result<i32> {
    match args.get(key) {
        None | Some(Value::Null) => Err(CatalogError::missing_argument(key)),
        Some(value) => value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| CatalogError::wrong_type(key, "an integer")),
    }
}

fn optional_usize(args: &Map<String, Value>, key: &str, default: usize) -> Result<usize> {
    match args.get(key) {
        None => Ok(default),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| CatalogError::wrong_type(key, "a non-negative integer")),
    }
}

/// A catalog operation with its parameters already validated
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    FilterByGenre { genre: String },
    FilterByAvailability { available: bool },
    FilterByDecade { decade: i32 },
    FilterByKeyword { keyword: String },
    TransformTitles { case: TitleCase },
    GenerateCitations,
    BookAvailability,
    GenreCounts,
    AveragePopularity,
    Statistics { top: usize },
    IntegrateNewArrivals,
}

impl Operation {
    /// Operation names accepted by [`Operation::parse`]
    pub const NAMES: [&'static str; 11] = [
        "filter_by_genre",
        "filter_by_availability",
        "filter_by_decade",
        "filter_by_keyword",
        "transform_titles",
        "generate_citations",
        "get_book_availability",
        "calculate_genre_counts",
        "calculate_average_popularity",
        "statistics",
        "integrate_new_arrivals",
    ];

    pub fn parse(name: &str, args: &Map<String, Value>) -> Result<Self> {
        let operation = match name {
            "filter_by_genre" => Operation::FilterByGenre {
                genre: required_str(args, "genre")?,
            },
            "filter_by_availability" => Operation::FilterByAvailability {
                available: optional_bool(args, "available", true)?,
            },
            "filter_by_decade" => Operation::FilterByDecade {
                decade: required_i32(args, "decade")?,
            },
            "filter_by_keyword" => Operation::FilterByKeyword {
                keyword: required_str(args, "keyword")?,
            },
            "transform_titles" => Operation::TransformTitles {
                case: TitleCase::parse(&optional_str(args, "case", "upper")?),
            },
            "generate_citations" => Operation::GenerateCitations,
            "get_book_availability" => Operation::BookAvailability,
            "calculate_genre_counts" => Operation::GenreCounts,
            "calculate_average_popularity" => Operation::AveragePopularity,
            "statistics" => Operation::Statistics {
                top: optional_usize(args, "top", DEFAULT_TOP)?,
            },
            "integrate_new_arrivals" => Operation::IntegrateNewArrivals,
            other => return Err(CatalogError::UnknownOperation(other.to_string())),
        };

        Ok(operation)
    }

    pub fn apply(&self, books: &[Book], new_arrivals: &[Book]) -> Outcome {
        match self {
            Operation::FilterByGenre { genre } => Outcome::Books(filter_by_genre(books, genre)),
            Operation::FilterByAvailability { available } => {
                Outcome::Books(filter_by_availability(books, *available))
            }
            Operation::FilterByDecade { decade } => {
                Outcome::Books(filter_by_decade(books, *decade))
            }
            Operation::FilterByKeyword { keyword } => {
                Outcome::Books(filter_by_keyword(books, keyword))
            }
            Operation::TransformTitles { case } => Outcome::Lines(transform_titles(books, *case)),
            Operation::GenerateCitations => Outcome::Lines(generate_citations(books)),
            Operation::BookAvailability => Outcome::Lines(get_book_availability(books)),
            Operation::GenreCounts => Outcome::GenreCounts(calculate_genre_counts(books)),
            Operation::AveragePopularity => {
                Outcome::Average(calculate_average_popularity(books))
            }
            Operation::Statistics { top } => Outcome::Statistics(build_statistics(books, *top)),
            Operation::IntegrateNewArrivals => {
                Outcome::Books(integrate_new_arrivals(books, new_arrivals))
            }
        }
    }
}

/// Value produced by an [`Operation`]
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Outcome {
    Books(Vec<Book>),
    Lines(Vec<String>),
    GenreCounts(GenreCounts),
    Average(f64),
    Statistics(LibraryStatistics),
}

/// An operation plus optional collections that replace the session's own
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub operation: Operation,
    books: Option<Vec<Book>>,
    new_arrivals: Option<Vec<Book>>,
}

impl Call {
    /// Validate an operation name and its JSON arguments.
    ///
    /// `arguments` must be an object or absent. A `books` or `new_arrivals`
    /// key, when present, must hold a list of complete book records.
    pub fn parse(name: &str, arguments: Option<&Value>) -> Result<Self> {
        let empty = Map::new();
        let args = match arguments {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(map)) => map,
            Some(_) => return Err(CatalogError::wrong_type("arguments", "an object")),
        };

        let books = match args.get("books") {
            Some(value) => Some(books_from_value("books", Some(value))?),
            None => None,
        };
        let new_arrivals = match args.get("new_arrivals") {
            Some(value) => Some(books_from_value("new_arrivals", Some(value))?),
            None => None,
        };

        Ok(Call {
            operation: Operation::parse(name, args)?,
            books,
            new_arrivals,
        })
    }

    /// Run against the session, leaving it untouched.
    pub fn run(&self, session: &Session) -> Outcome {
        let books = self.books.as_deref().unwrap_or(session.books());
        let new_arrivals = self
            .new_arrivals
            .as_deref()
            .unwrap_or(session.new_arrivals());
        self.operation.apply(books, new_arrivals)
    }
}
