//! Console rendering of catalog data
//!
//! Every function returns the text to print so the menu loop and the
//! subcommands can send it to whichever writer they own.

use colored::Colorize;
use libris_core::format::format_book;
use libris_core::stats::LibraryStatistics;
use libris_core::Book;

/// Score as the menu shows it: "4.7", "5.0", "4.26"
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

/// "non-fiction" -> "Non-fiction"
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub fn format_collection(books: &[Book]) -> String {
    let mut result = format!("\n{}\n", "Current Book Collection:".bright_cyan().bold());
    for book in books {
        result.push_str(&format_book(book));
        result.push('\n');
    }
    result
}

pub fn format_results(books: &[Book]) -> String {
    let mut result = format!("\n{}\n", "Filtered Results:".bright_cyan().bold());
    if books.is_empty() {
        result.push_str(&format!("{}\n", "No books match the criteria.".yellow()));
    }
    for book in books {
        result.push_str(&format_book(book));
        result.push('\n');
    }
    result
}

/// Numbered list under a heading such as "Titles" or "Citations"
pub fn format_numbered(heading: &str, items: &[String]) -> String {
    let mut result = format!("\n{}\n", format!("{heading}:").bright_cyan().bold());
    for (idx, item) in items.iter().enumerate() {
        result.push_str(&format!("{}. {}\n", idx + 1, item));
    }
    result
}

pub fn format_statistics(stats: &LibraryStatistics) -> String {
    let mut result = format!("\n{}\n", "Library Statistics:".bright_cyan().bold());
    result.push_str(&format!("Total books: {}\n", stats.total_books));
    result.push_str(&format!("Available books: {}\n", stats.available_books));
    result.push_str(&format!(
        "Average popularity: {}/5.0\n",
        format_score(stats.average_popularity)
    ));
    for entry in stats.genre_counts.iter() {
        result.push_str(&format!("{} books: {}\n", capitalize(entry.genre), entry.count));
    }

    result.push_str(&format!("\n{}\n", "Most Popular Books:".bright_yellow().bold()));
    for (idx, book) in stats.most_popular.iter().enumerate() {
        result.push_str(&format!(
            "{}. {} ({}/5.0)\n",
            idx + 1,
            book.title,
            format_score(book.popularity_score)
        ));
    }
    result
}

/// Catalog as an aligned table
pub fn format_table(books: &[Book]) -> String {
    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "ID", "Title", "Author", "Genre", "Year", "Status", "Rating"
    ]);
    for book in books {
        let title = match &book.section {
            Some(section) => format!("{} [{}]", book.title, section),
            None => book.title.clone(),
        };
        table.add_row(prettytable::row![
            book.id,
            title,
            book.author,
            book.genre,
            book.publication_year,
            book.availability_label(),
            format_score(book.popularity_score)
        ]);
    }
    table.to_string()
}

pub fn format_json<T>(value: &T) -> crate::prelude::Result<String>
where
    T: serde::Serialize + ?Sized,
{
    serde_json::to_string_pretty(value)
        .map_err(|e| crate::prelude::eyre!("JSON serialization failed: {}", e))
}
