//! Aggregations over a collection
//!
//! Per-genre counts only consider the fixed [`GENRES`] list; books with any
//! other genre are stored and filtered normally but never counted here.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::book::{Book, GENRES};

/// Number of books in one known genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: &'static str,
    pub count: usize,
}

/// Counts for every known genre, in [`GENRES`] order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCounts(Vec<GenreCount>);

impl GenreCounts {
    pub fn get(&self, genre: &str) -> Option<usize> {
        self.0.iter().find(|c| c.genre == genre).map(|c| c.count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenreCount> {
        self.0.iter()
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|c| c.count).sum()
    }
}

// Serialized as a JSON object whose keys keep the fixed genre order.
impl Serialize for GenreCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(entry.genre, &entry.count)?;
        }
        map.end()
    }
}

pub fn calculate_genre_counts(books: &[Book]) -> GenreCounts {
    GenreCounts(
        GENRES
            .iter()
            .map(|&genre| GenreCount {
                genre,
                count: books.iter().filter(|b| b.genre == genre).count(),
            })
            .collect(),
    )
}

/// Mean popularity score rounded to two decimals, 0.0 for an empty collection.
pub fn calculate_average_popularity(books: &[Book]) -> f64 {
    if books.is_empty() {
        return 0.0;
    }

    let total: f64 = books.iter().map(|b| b.popularity_score).sum();
    round_to_hundredths(total / books.len() as f64)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The `n` highest scored books, best first.
///
/// The sort is stable, so equally scored books keep their catalog order.
pub fn most_popular(books: &[Book], n: usize) -> Vec<Book> {
    let mut ranked = books.to_vec();
    ranked.sort_by(|a, b| b.popularity_score.total_cmp(&a.popularity_score));
    ranked.truncate(n);
    ranked
}

/// Summary report over the active catalog
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct LibraryStatistics {
    pub total_books: usize,
    pub available_books: usize,
    pub average_popularity: f64,
    pub genre_counts: GenreCounts,
    pub most_popular: Vec<Book>,
}

pub fn build_statistics(books: &[Book], top_n: usize) -> LibraryStatistics {
    LibraryStatistics {
        total_books: books.len(),
        available_books: books.iter().filter(|b| b.available).count(),
        average_popularity: calculate_average_popularity(books),
        genre_counts: calculate_genre_counts(books),
        most_popular: most_popular(books, top_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initialize_data;
    use pretty_assertions::assert_eq;

    fn book(id: &str, genre: &str, score: f64) -> Book {
        Book::new(id, id, "Author", genre, 2000, true, score)
    }

    // ============================================================================
    // calculate_genre_counts tests
    // ============================================================================

    #[test]
    fn test_genre_counts_seed() {
        let (books, _) = initialize_data();
        let counts = calculate_genre_counts(&books);
        for genre in GENRES {
            assert_eq!(counts.get(genre), Some(1), "{genre}");
        }
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_genre_counts_fixed_order() {
        let counts = calculate_genre_counts(&[]);
        let genres: Vec<&str> = counts.iter().map(|c| c.genre).collect();
        assert_eq!(genres, GENRES.to_vec());
        assert!(counts.iter().all(|c| c.count == 0));
    }

    #[test]
    fn test_genre_counts_ignore_unknown_genres() {
        let books = vec![
            book("A", "fiction", 1.0),
            book("B", "poetry", 1.0),
            book("C", "fiction", 1.0),
        ];
        let counts = calculate_genre_counts(&books);
        assert_eq!(counts.get("fiction"), Some(2));
        assert_eq!(counts.get("poetry"), None);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_genre_counts_serialize_in_order() {
        let (books, _) = initialize_data();
        let json = serde_json::to_string(&calculate_genre_counts(&books)).unwrap();
        assert_eq!(
            json,
            r#"{"fiction":1,"non-fiction":1,"reference":1,"children":1,"biography":1}"#
        );
    }

    // ============================================================================
    // calculate_average_popularity tests
    // ============================================================================

    #[test]
    fn test_average_popularity_seed() {
        let (books, _) = initialize_data();
        assert_eq!(calculate_average_popularity(&books), 4.26);
    }

    #[test]
    fn test_average_popularity_empty() {
        assert_eq!(calculate_average_popularity(&[]), 0.0);
    }

    #[test]
    fn test_average_popularity_rounds_to_two_decimals() {
        let books = vec![
            book("A", "fiction", 1.0),
            book("B", "fiction", 2.0),
            book("C", "fiction", 2.0),
        ];
        assert_eq!(calculate_average_popularity(&books), 1.67);
    }

    // ============================================================================
    // most_popular tests
    // ============================================================================

    #[test]
    fn test_most_popular_seed() {
        let (books, _) = initialize_data();
        let top: Vec<String> = most_popular(&books, 3).into_iter().map(|b| b.id).collect();
        assert_eq!(top, vec!["B004", "B001", "B002"]);
    }

    #[test]
    fn test_most_popular_ties_keep_catalog_order() {
        let books = vec![
            book("A", "fiction", 4.0),
            book("B", "fiction", 5.0),
            book("C", "fiction", 4.0),
            book("D", "fiction", 4.0),
        ];
        let top: Vec<String> = most_popular(&books, 3).into_iter().map(|b| b.id).collect();
        assert_eq!(top, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_most_popular_fewer_than_n() {
        let books = vec![book("A", "fiction", 1.0), book("B", "fiction", 3.0)];
        let top: Vec<String> = most_popular(&books, 3).into_iter().map(|b| b.id).collect();
        assert_eq!(top, vec!["B", "A"]);
    }

    // ============================================================================
    // build_statistics tests
    // ============================================================================

    #[test]
    fn test_build_statistics_seed() {
        let (books, _) = initialize_data();
        let stats = build_statistics(&books, 3);
        assert_eq!(stats.total_books, 5);
        assert_eq!(stats.available_books, 3);
        assert_eq!(stats.average_popularity, 4.26);
        assert_eq!(stats.genre_counts.total(), 5);
        assert_eq!(stats.most_popular.len(), 3);
    }

    #[test]
    fn test_build_statistics_empty() {
        let stats = build_statistics(&[], 3);
        assert_eq!(stats.total_books, 0);
        assert_eq!(stats.available_books, 0);
        assert_eq!(stats.average_popularity, 0.0);
        assert!(stats.most_popular.is_empty());
    }
}
