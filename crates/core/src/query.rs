//! Selection of records by predicate
//!
//! Every filter returns a fresh collection holding the matching records in
//! their original order. Inputs are never modified.

use crate::book::Book;

fn select(books: &[Book], predicate: impl Fn(&Book) -> bool) -> Vec<Book> {
    books.iter().filter(|b| predicate(b)).cloned().collect()
}

/// Exact match on the genre text. Unknown genres simply match nothing.
pub fn filter_by_genre(books: &[Book], genre: &str) -> Vec<Book> {
    select(books, |b| b.genre == genre)
}

pub fn filter_by_availability(books: &[Book], available: bool) -> Vec<Book> {
    select(books, |b| b.available == available)
}

/// Books whose publication year falls in `decade` (e.g. 2010 covers 2010..=2019).
///
/// Any integer is accepted; one that is not a decade boundary matches nothing.
pub fn filter_by_decade(books: &[Book], decade: i32) -> Vec<Book> {
    select(books, |b| b.decade() == i64::from(decade))
}

/// Case-insensitive substring match against title or author.
///
/// An empty keyword matches every book.
pub fn filter_by_keyword(books: &[Book], keyword: &str) -> Vec<Book> {
    let keyword = keyword.to_lowercase();
    select(books, |b| {
        b.title.to_lowercase().contains(&keyword) || b.author.to_lowercase().contains(&keyword)
    })
}
