//! Caller-owned catalog state
//!
//! Operations never hold the catalog themselves. The presentation layer owns
//! a [`Session`], passes its collections into each operation, and replaces
//! the active catalog only when integrating new arrivals.

use crate::book::Book;
use crate::merge::integrate_new_arrivals;
use crate::seed::initialize_data;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    books: Vec<Book>,
    new_arrivals: Vec<Book>,
    integrated: bool,
}

/// Result of asking a session to integrate its pending arrivals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStatus {
    Integrated { added: usize },
    AlreadyIntegrated,
}

impl Session {
    pub fn new(books: Vec<Book>, new_arrivals: Vec<Book>) -> Self {
        Session {
            books,
            new_arrivals,
            integrated: false,
        }
    }

    /// Session over the built-in fixtures
    pub fn seeded() -> Self {
        let (books, new_arrivals) = initialize_data();
        Session::new(books, new_arrivals)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn new_arrivals(&self) -> &[Book] {
        &self.new_arrivals
    }

    pub fn is_integrated(&self) -> bool {
        self.integrated
    }

    pub fn total_books(&self) -> usize {
        self.books.len()
    }

    pub fn available_books(&self) -> usize {
        self.books.iter().filter(|b| b.available).count()
    }

    /// Merge the pending arrivals into the active catalog, at most once.
    pub fn integrate(&mut self) -> MergeStatus {
        if self.integrated {
            log::debug!("new arrivals already integrated, skipping merge");
            return MergeStatus::AlreadyIntegrated;
        }

        self.books = integrate_new_arrivals(&self.books, &self.new_arrivals);
        self.integrated = true;

        log::debug!(
            "integrated {} new arrivals, catalog now holds {} books",
            self.new_arrivals.len(),
            self.books.len()
        );

        MergeStatus::Integrated {
            added: self.new_arrivals.len(),
        }
    }
}
