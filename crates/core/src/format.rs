//! Single-line rendering of a book

use crate::book::{Book, RawBook};
use crate::error::Result;

const RATING_SLOTS: usize = 5;

/// Five-slot star rating: one "★" per whole point, "☆" for the remainder.
///
/// The score is truncated, not rounded. Scores above five render five filled
/// stars; negative scores render none filled.
pub fn render_stars(score: f64) -> String {
    // `as` saturates: negative and NaN scores become zero.
    let filled = (score.trunc() as usize).min(RATING_SLOTS);
    let hollow = RATING_SLOTS.saturating_sub(filled);
    format!("{}{}", "★".repeat(filled), "☆".repeat(hollow))
}

pub fn format_book(book: &Book) -> String {
    let section = book
        .section
        .as_ref()
        .map(|s| format!(" [{s}]"))
        .unwrap_or_default();

    format!(
        "{} | {}{} | {} | {} | {} | {} | Rating: {}",
        book.id,
        book.title,
        section,
        book.author,
        book.genre,
        book.publication_year,
        book.availability_label(),
        render_stars(book.popularity_score)
    )
}

/// Format a record that has not yet been checked for its mandatory fields.
pub fn get_formatted_book(raw: &RawBook) -> Result<String> {
    let book = Book::try_from(raw.clone())?;
    Ok(format_book(&book))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::seed::initialize_data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_stars() {
        assert_eq!(render_stars(4.5), "★★★★☆");
        assert_eq!(render_stars(4.99), "★★★★☆");
        assert_eq!(render_stars(3.8), "★★★☆☆");
        assert_eq!(render_stars(5.0), "★★★★★");
        assert_eq!(render_stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_render_stars_out_of_range() {
        assert_eq!(render_stars(6.2), "★★★★★");
        assert_eq!(render_stars(1e300), "★★★★★");
        assert_eq!(render_stars(f64::INFINITY), "★★★★★");
        assert_eq!(render_stars(-1.0), "☆☆☆☆☆");
        assert_eq!(render_stars(f64::NAN), "☆☆☆☆☆");
    }

    #[test]
    fn test_format_book() {
        let (books, _) = initialize_data();
        assert_eq!(
            format_book(&books[0]),
            "B001 | Python Fundamentals | John Smith | reference | 2019 | Available | Rating: ★★★★☆"
        );
        assert_eq!(
            format_book(&books[1]),
            "B002 | Mystery at Midnight | Jane Doe | fiction | 2018 | On Loan | Rating: ★★★★☆"
        );
    }

    #[test]
    fn test_format_book_with_section() {
        let (_, new_arrivals) = initialize_data();
        let mut book = new_arrivals[0].clone();
        book.section = Some("New".to_string());
        assert_eq!(
            format_book(&book),
            "N001 | Data Science Handbook [New] | Sarah Miller | reference | 2023 | Available | Rating: ★★★★☆"
        );
    }

    #[test]
    fn test_get_formatted_book_complete() {
        let (books, _) = initialize_data();
        let raw = RawBook::from(books[2].clone());
        assert_eq!(get_formatted_book(&raw).unwrap(), format_book(&books[2]));
    }

    #[test]
    fn test_get_formatted_book_missing_fields() {
        let raw = RawBook {
            id: Some("M001".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            get_formatted_book(&raw),
            Err(CatalogError::MissingField(_))
        ));
    }

    #[test]
    fn test_get_formatted_book_each_field_required() {
        let (books, _) = initialize_data();
        let complete = RawBook::from(books[0].clone());

        let strip: [(&str, fn(&mut RawBook)); 7] = [
            ("id", |r| r.id = None),
            ("title", |r| r.title = None),
            ("author", |r| r.author = None),
            ("genre", |r| r.genre = None),
            ("publication_year", |r| r.publication_year = None),
            ("available", |r| r.available = None),
            ("popularity_score", |r| r.popularity_score = None),
        ];

        for (field, remove) in strip {
            let mut raw = complete.clone();
            remove(&mut raw);
            assert_eq!(
                get_formatted_book(&raw),
                Err(CatalogError::MissingField(field.to_string()))
            );
        }
    }
}
