//! Derived display values, one per record

use serde::{Deserialize, Serialize};

use crate::book::Book;

/// Casing applied by [`transform_titles`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TitleCase {
    #[default]
    Upper,
    Lower,
    /// First letter of each word upper-cased, the rest lower-cased
    Title,
    /// Titles are returned as stored
    Original,
}

impl TitleCase {
    /// Maps a case mode name to a casing. Unrecognized names keep titles as-is.
    pub fn parse(mode: &str) -> Self {
        match mode {
            "upper" => TitleCase::Upper,
            "lower" => TitleCase::Lower,
            "title" => TitleCase::Title,
            _ => TitleCase::Original,
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            TitleCase::Upper => text.to_uppercase(),
            TitleCase::Lower => text.to_lowercase(),
            TitleCase::Title => title_case(text),
            TitleCase::Original => text.to_string(),
        }
    }
}

/// Capitalize each whitespace-separated word, keeping the whitespace intact.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

pub fn transform_titles(books: &[Book], case: TitleCase) -> Vec<String> {
    books.iter().map(|b| case.apply(&b.title)).collect()
}

/// `"<author> (<year>). <title>."` for every book
pub fn generate_citations(books: &[Book]) -> Vec<String> {
    books
        .iter()
        .map(|b| format!("{} ({}). {}.", b.author, b.publication_year, b.title))
        .collect()
}

/// `"<title> - Available"` or `"<title> - On Loan"` for every book
pub fn get_book_availability(books: &[Book]) -> Vec<String> {
    books
        .iter()
        .map(|b| format!("{} - {}", b.title, b.availability_label()))
        .collect()
}
