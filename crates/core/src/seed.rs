//! Built-in catalog fixtures
//!
//! The literal values here are relied upon by tests and by the default CLI
//! session; change them only together.

use crate::book::Book;

/// Returns the initial catalog and the pending batch of new arrivals.
pub fn initialize_data() -> (Vec<Book>, Vec<Book>) {
    let books = vec![
        Book::new(
            "B001",
            "Python Fundamentals",
            "John Smith",
            "reference",
            2019,
            true,
            4.5,
        ),
        Book::new(
            "B002",
            "Mystery at Midnight",
            "Jane Doe",
            "fiction",
            2018,
            false,
            4.2,
        ),
        Book::new(
            "B003",
            "History of Computing",
            "Alan Turing",
            "non-fiction",
            2015,
            true,
            3.8,
        ),
        Book::new(
            "B004",
            "The Dragon's Quest",
            "Emily Johnson",
            "children",
            2020,
            true,
            4.7,
        ),
        Book::new(
            "B005",
            "Life of Einstein",
            "Robert Brown",
            "biography",
            2017,
            false,
            4.1,
        ),
    ];

    let new_arrivals = vec![
        Book::new(
            "N001",
            "Data Science Handbook",
            "Sarah Miller",
            "reference",
            2023,
            true,
            4.9,
        ),
        Book::new(
            "N002",
            "Quantum Physics Simplified",
            "Richard Feynman",
            "non-fiction",
            2022,
            true,
            4.3,
        ),
    ];

    (books, new_arrivals)
}
