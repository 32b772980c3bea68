//! Core library for libris
//!
//! This crate implements the **Functional Core** of the libris application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`libris_core`** (this crate): Pure transformation functions with zero I/O
//! - **`libris`**: Prompts, printing and file loading (the Imperative Shell)
//!
//! Every function here takes the collections it works on as explicit
//! arguments and returns fresh values. Nothing holds on to the catalog
//! between calls; the caller owns it through a [`session::Session`].
//!
//! # Module Organization
//!
//! - [`book`]: The book record, its loosely shaped input form, known genres
//! - [`seed`]: The built-in catalog and new-arrivals fixtures
//! - [`query`]: Filters by genre, availability, decade and keyword
//! - [`projection`]: Titles, citations and availability strings
//! - [`stats`]: Genre counts, average popularity, most popular ranking
//! - [`merge`]: Integration of new arrivals into the catalog
//! - [`format`]: One-line display form of a book with its star rating
//! - [`session`]: Caller-owned catalog state with the once-only merge guard
//! - [`request`]: Validation of untyped JSON arguments into operations
//!
//! # Example Usage
//!
//! ```rust
//! use libris_core::query::filter_by_decade;
//! use libris_core::seed::initialize_data;
//!
//! let (books, _new_arrivals) = initialize_data();
//! let ids: Vec<String> = filter_by_decade(&books, 2010)
//!     .into_iter()
//!     .map(|b| b.id)
//!     .collect();
//!
//! assert_eq!(ids, vec!["B001", "B002", "B003", "B005"]);
//! ```

pub mod book;
pub mod error;
pub mod format;
pub mod merge;
pub mod projection;
pub mod query;
pub mod request;
pub mod seed;
pub mod session;
pub mod stats;

pub use book::{Book, RawBook, GENRES};
pub use error::{CatalogError, Result};
pub use session::{MergeStatus, Session};
