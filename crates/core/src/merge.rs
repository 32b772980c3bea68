//! Integration of a new-arrivals batch into the catalog

use crate::book::{Book, NEW_SECTION};

/// Combine the catalog with a batch of new arrivals.
///
/// Catalog books come first with any `section` cleared, followed by the
/// arrivals tagged with the "New" section. The function keeps no memory of
/// earlier merges: feeding it an already merged catalog strips the old tags
/// and tags only the batch passed in now. See [`crate::session::Session`]
/// for the once-only guard.
pub fn integrate_new_arrivals(books: &[Book], new_arrivals: &[Book]) -> Vec<Book> {
    let originals = books.iter().map(|b| Book {
        section: None,
        ..b.clone()
    });

    let arrivals = new_arrivals.iter().map(|b| Book {
        section: Some(NEW_SECTION.to_string()),
        ..b.clone()
    });

    originals.chain(arrivals).collect()
}
