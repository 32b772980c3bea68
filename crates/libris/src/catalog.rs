//! Catalog loading for the CLI session

use crate::prelude::{eprintln, *};
use libris_core::request::books_from_value;
use libris_core::seed::initialize_data;
use libris_core::{Book, Session};
use std::fs;
use std::path::Path;

/// Read a JSON array of book records from disk.
pub fn load_books(path: &Path, name: &str) -> std::result::Result<Vec<Book>, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::CatalogFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| Error::InvalidJson {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(books_from_value(name, Some(&value))?)
}

/// Build the session from the configured files, falling back to the seed.
pub fn load_session(global: &crate::Global) -> Result<Session> {
    let (seed_books, seed_arrivals) = initialize_data();

    let books = match &global.catalog {
        Some(path) => {
            log::info!("loading catalog from {}", path.display());
            load_books(path, "books")?
        }
        None => seed_books,
    };

    let new_arrivals = match &global.arrivals {
        Some(path) => {
            log::info!("loading new arrivals from {}", path.display());
            load_books(path, "new_arrivals")?
        }
        None => seed_arrivals,
    };

    log::debug!(
        "session ready with {} books and {} pending arrivals",
        books.len(),
        new_arrivals.len()
    );

    if global.verbose {
        eprintln!(
            "Loaded {} books and {} new arrivals",
            books.len(),
            new_arrivals.len()
        );
    }

    Ok(Session::new(books, new_arrivals))
}
