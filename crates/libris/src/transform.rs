use crate::display::{format_json, format_numbered};
use crate::prelude::{print, println, *};
use libris_core::projection::{
    generate_citations, get_book_availability, transform_titles, TitleCase,
};
use libris_core::Session;

#[derive(Debug, Clone, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseOption {
    /// ALL CAPITALS
    Upper,
    /// all lower case
    Lower,
    /// First Letter Of Each Word
    Title,
    /// Titles as stored
    Original,
}

impl From<CaseOption> for TitleCase {
    fn from(c: CaseOption) -> Self {
        match c {
            CaseOption::Upper => TitleCase::Upper,
            CaseOption::Lower => TitleCase::Lower,
            CaseOption::Title => TitleCase::Title,
            CaseOption::Original => TitleCase::Original,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct TitlesOptions {
    /// Case to apply to every title
    #[arg(short, long, value_enum, default_value = "upper")]
    pub case: CaseOption,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct LinesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn output_lines(heading: &str, lines: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", format_json(&lines)?);
    } else {
        print!("{}", format_numbered(heading, lines));
    }
    Ok(())
}

pub fn titles(options: TitlesOptions, session: &Session) -> Result<()> {
    let case = TitleCase::from(options.case);
    log::debug!("transforming {} titles to {:?}", session.total_books(), case);
    output_lines("Titles", &transform_titles(session.books(), case), options.json)
}

pub fn citations(options: LinesOptions, session: &Session) -> Result<()> {
    output_lines("Citations", &generate_citations(session.books()), options.json)
}

pub fn availability(options: LinesOptions, session: &Session) -> Result<()> {
    output_lines(
        "Availability",
        &get_book_availability(session.books()),
        options.json,
    )
}
