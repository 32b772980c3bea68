//! Interactive text menu
//!
//! The loop owns the session for the whole run. Bad input is reported and
//! the loop carries on; only I/O failures end it early.

use crate::display::{format_collection, format_numbered, format_results, format_statistics};
use crate::prelude::{eprintln, *};
use colored::Colorize;
use libris_core::projection::{
    generate_citations, get_book_availability, transform_titles, TitleCase,
};
use libris_core::query::{
    filter_by_availability, filter_by_decade, filter_by_genre, filter_by_keyword,
};
use libris_core::request::DEFAULT_TOP;
use libris_core::stats::build_statistics;
use libris_core::{MergeStatus, Session};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Exit,
    View,
    Filter,
    Transform,
    Statistics,
    Integrate,
}

impl MainChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(MainChoice::Exit),
            "1" => Some(MainChoice::View),
            "2" => Some(MainChoice::Filter),
            "3" => Some(MainChoice::Transform),
            "4" => Some(MainChoice::Statistics),
            "5" => Some(MainChoice::Integrate),
            _ => None,
        }
    }
}

/// Case submenu: 1 upper, 2 lower, 3 title, anything else falls back to upper.
fn parse_case_option(input: &str) -> TitleCase {
    match input.trim() {
        "2" => TitleCase::Lower,
        "3" => TitleCase::Title,
        _ => TitleCase::Upper,
    }
}

fn parse_decade(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

struct Menu<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Print `text` and read one line. `None` means stdin is closed.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn header(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n{}",
            "===== LIBRARY BOOK MANAGEMENT SYSTEM =====".bright_cyan().bold()
        )?;
        writeln!(self.output, "Total Books: {}", self.session.total_books())?;
        writeln!(
            self.output,
            "Available Books: {}",
            self.session.available_books()
        )?;
        writeln!(self.output, "\n1. View Books")?;
        writeln!(self.output, "2. Filter Books")?;
        writeln!(self.output, "3. Transform Data")?;
        writeln!(self.output, "4. Generate Statistics")?;
        writeln!(self.output, "5. Integrate New Arrivals")?;
        writeln!(self.output, "0. Exit")
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            self.header()?;

            let Some(choice) = self.prompt("Enter your choice (0-5): ")? else {
                return Ok(());
            };

            log::debug!("menu choice {choice:?}");

            let keep_going = match MainChoice::parse(&choice) {
                Some(MainChoice::Exit) => {
                    writeln!(
                        self.output,
                        "Thank you for using the Library Book Management System!"
                    )?;
                    return Ok(());
                }
                Some(MainChoice::View) => {
                    write!(self.output, "{}", format_collection(self.session.books()))?;
                    true
                }
                Some(MainChoice::Filter) => self.filter()?,
                Some(MainChoice::Transform) => self.transform()?,
                Some(MainChoice::Statistics) => {
                    let stats = build_statistics(self.session.books(), DEFAULT_TOP);
                    write!(self.output, "{}", format_statistics(&stats))?;
                    true
                }
                Some(MainChoice::Integrate) => {
                    match self.session.integrate() {
                        MergeStatus::Integrated { .. } => writeln!(
                            self.output,
                            "{}",
                            "New arrivals added to the collection.".green()
                        )?,
                        MergeStatus::AlreadyIntegrated => writeln!(
                            self.output,
                            "{}",
                            "New arrivals already integrated.".yellow()
                        )?,
                    }
                    true
                }
                None => {
                    writeln!(
                        self.output,
                        "{}",
                        "Invalid choice. Please try again.".red()
                    )?;
                    true
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Returns `false` when input ran out mid-submenu.
    fn filter(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n1. Filter by Genre")?;
        writeln!(self.output, "2. Filter by Availability")?;
        writeln!(self.output, "3. Filter by Decade")?;
        writeln!(self.output, "4. Filter by Keyword")?;

        let Some(option) = self.prompt("Select filter option (1-4): ")? else {
            return Ok(false);
        };

        let filtered = match option.trim() {
            "1" => {
                let Some(genre) = self.prompt(
                    "Enter genre to filter by (fiction/non-fiction/reference/children/biography): ",
                )?
                else {
                    return Ok(false);
                };
                filter_by_genre(self.session.books(), &genre)
            }
            "2" => {
                let Some(answer) =
                    self.prompt("Filter by available or on loan? (available/on_loan): ")?
                else {
                    return Ok(false);
                };
                filter_by_availability(self.session.books(), answer == "available")
            }
            "3" => {
                let Some(answer) =
                    self.prompt("Enter decade to filter by (e.g., 2010 for 2010s): ")?
                else {
                    return Ok(false);
                };
                match parse_decade(&answer) {
                    Some(decade) => filter_by_decade(self.session.books(), decade),
                    None => {
                        writeln!(
                            self.output,
                            "{}",
                            "Invalid input. Please enter a number.".red()
                        )?;
                        return Ok(true);
                    }
                }
            }
            "4" => {
                let Some(keyword) = self.prompt("Enter keyword to search for: ")? else {
                    return Ok(false);
                };
                filter_by_keyword(self.session.books(), &keyword)
            }
            _ => {
                writeln!(self.output, "{}", "Invalid filter option.".red())?;
                return Ok(true);
            }
        };

        write!(self.output, "{}", format_results(&filtered))?;
        Ok(true)
    }

    /// Returns `false` when input ran out mid-submenu.
    fn transform(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\n1. Transform Titles")?;
        writeln!(self.output, "2. Generate Citations")?;
        writeln!(self.output, "3. Display Availability")?;

        let Some(option) = self.prompt("Select transformation option (1-3): ")? else {
            return Ok(false);
        };

        let text = match option.trim() {
            "1" => {
                writeln!(self.output, "\n1. Uppercase")?;
                writeln!(self.output, "2. Lowercase")?;
                writeln!(self.output, "3. Title Case")?;
                let Some(case) = self.prompt("Select case option (1-3): ")? else {
                    return Ok(false);
                };
                let titles = transform_titles(self.session.books(), parse_case_option(&case));
                format_numbered("Titles", &titles)
            }
            "2" => format_numbered("Citations", &generate_citations(self.session.books())),
            "3" => format_numbered(
                "Availability",
                &get_book_availability(self.session.books()),
            ),
            _ => {
                writeln!(self.output, "{}", "Invalid transformation option.".red())?;
                return Ok(true);
            }
        };

        write!(self.output, "{text}")?;
        Ok(true)
    }
}

/// Run the menu on stdin/stdout until the user exits or input ends.
pub fn run(session: Session, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting menu with {} books and {} pending arrivals",
            session.total_books(),
            session.new_arrivals().len()
        );
    }

    let stdin = io::stdin();
    let mut menu = Menu {
        session,
        input: stdin.lock(),
        output: anstream::stdout(),
    };

    menu.run().context("Menu I/O failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Drive the menu with scripted input and return everything it printed.
    fn drive(script: &str) -> (String, Session) {
        let mut menu = Menu {
            session: Session::seeded(),
            input: Cursor::new(script.as_bytes().to_vec()),
            output: Vec::new(),
        };
        menu.run().unwrap();
        (String::from_utf8(menu.output).unwrap(), menu.session)
    }

    #[test]
    fn test_main_choice_parse() {
        assert_eq!(MainChoice::parse("0"), Some(MainChoice::Exit));
        assert_eq!(MainChoice::parse(" 5 "), Some(MainChoice::Integrate));
        assert_eq!(MainChoice::parse("6"), None);
        assert_eq!(MainChoice::parse("view"), None);
    }

    #[test]
    fn test_parse_case_option_defaults_to_upper() {
        assert_eq!(parse_case_option("1"), TitleCase::Upper);
        assert_eq!(parse_case_option("2"), TitleCase::Lower);
        assert_eq!(parse_case_option("3"), TitleCase::Title);
        assert_eq!(parse_case_option("9"), TitleCase::Upper);
    }

    #[test]
    fn test_parse_decade() {
        assert_eq!(parse_decade("2010\n"), Some(2010));
        assert_eq!(parse_decade("twenty ten"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (output, _) = drive("0\n");
        assert!(output.contains("Total Books: 5"));
        assert!(output.contains("Available Books: 3"));
        assert!(output.contains("Thank you for using the Library Book Management System!"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (output, _) = drive("");
        assert!(output.contains("Enter your choice (0-5): "));
    }

    #[test]
    fn test_view_books() {
        let (output, _) = drive("1\n0\n");
        assert!(output.contains("Current Book Collection:"));
        assert!(output.contains("B005 | Life of Einstein | Robert Brown"));
    }

    #[test]
    fn test_invalid_choice_is_reported() {
        let (output, _) = drive("9\n0\n");
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Thank you for using"));
    }

    #[test]
    fn test_filter_by_decade() {
        let (output, _) = drive("2\n3\n2020\n0\n");
        assert!(output.contains("Filtered Results:"));
        assert!(output.contains("B004 | The Dragon's Quest"));
        assert!(!output.contains("B001 | Python Fundamentals"));
    }

    #[test]
    fn test_filter_by_decade_non_numeric() {
        let (output, _) = drive("2\n3\nabc\n0\n");
        assert!(output.contains("Invalid input. Please enter a number."));
        assert!(output.contains("Thank you for using"));
    }

    #[test]
    fn test_filter_by_availability_on_loan() {
        let (output, _) = drive("2\n2\non_loan\n0\n");
        assert!(output.contains("B002 | Mystery at Midnight"));
        assert!(output.contains("B005 | Life of Einstein"));
        assert!(!output.contains("B001 | Python Fundamentals"));
    }

    #[test]
    fn test_filter_by_genre_no_match() {
        let (output, _) = drive("2\n1\npoetry\n0\n");
        assert!(output.contains("No books match the criteria."));
    }

    #[test]
    fn test_filter_answers_are_not_trimmed() {
        let (output, _) = drive("2\n1\nfiction \n0\n");
        assert!(output.contains("No books match the criteria."));

        let (output, _) = drive("2\n2\n available\n0\n");
        assert!(output.contains("B002 | Mystery at Midnight"));
        assert!(!output.contains("B001 | Python Fundamentals"));
    }

    #[test]
    fn test_filter_by_keyword() {
        let (output, _) = drive("2\n4\nEINSTEIN\n0\n");
        assert!(output.contains("B005 | Life of Einstein"));
    }

    #[test]
    fn test_transform_titles_title_case() {
        let (output, _) = drive("3\n1\n3\n0\n");
        assert!(output.contains("Titles:"));
        assert!(output.contains("3. History Of Computing\n"));
    }

    #[test]
    fn test_transform_citations() {
        let (output, _) = drive("3\n2\n0\n");
        assert!(output.contains("1. John Smith (2019). Python Fundamentals.\n"));
    }

    #[test]
    fn test_transform_availability() {
        let (output, _) = drive("3\n3\n0\n");
        assert!(output.contains("2. Mystery at Midnight - On Loan\n"));
    }

    #[test]
    fn test_statistics() {
        let (output, _) = drive("4\n0\n");
        assert!(output.contains("Average popularity: 4.26/5.0"));
        assert!(output.contains("Most Popular Books:"));
        assert!(output.contains("1. The Dragon's Quest (4.7/5.0)"));
    }

    #[test]
    fn test_integrate_once_only() {
        let (output, session) = drive("5\n5\n0\n");
        assert!(output.contains("New arrivals added to the collection."));
        assert!(output.contains("New arrivals already integrated."));
        assert!(output.contains("Total Books: 7"));
        assert_eq!(session.total_books(), 7);
    }

    #[test]
    fn test_view_after_integrate_shows_section() {
        let (output, _) = drive("5\n1\n0\n");
        assert!(output.contains("N001 | Data Science Handbook [New]"));
        assert!(output.contains("B001 | Python Fundamentals | John Smith"));
    }

    #[test]
    fn test_end_of_input_inside_submenu() {
        let (output, _) = drive("2\n1\n");
        assert!(output.contains("Enter genre to filter by"));
        assert!(!output.contains("Thank you for using"));
    }
}
