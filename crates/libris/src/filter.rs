use crate::display::{format_json, format_results};
use crate::prelude::{eprintln, print, println, *};
use libris_core::query::{
    filter_by_availability, filter_by_decade, filter_by_genre, filter_by_keyword,
};
use libris_core::Session;

#[derive(Debug, clap::Parser)]
#[command(name = "filter")]
#[command(about = "Filter the catalog by genre, availability, decade or keyword")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Books of one genre (fiction, non-fiction, reference, children, biography)
    #[clap(name = "genre")]
    Genre {
        #[arg(value_name = "GENRE")]
        genre: String,
    },

    /// Books that are available, or on loan with --on-loan
    #[clap(name = "available")]
    Available {
        #[arg(long)]
        on_loan: bool,
    },

    /// Books published in a decade (e.g. 2010 for the 2010s)
    #[clap(name = "decade")]
    Decade {
        #[arg(value_name = "DECADE", allow_negative_numbers = true)]
        decade: i32,
    },

    /// Books whose title or author contains a keyword, ignoring case
    #[clap(name = "keyword")]
    Keyword {
        #[arg(value_name = "KEYWORD")]
        keyword: String,
    },
}

pub fn run(app: App, session: &Session, global: crate::Global) -> Result<()> {
    let books = session.books();

    let filtered = match &app.command {
        Commands::Genre { genre } => filter_by_genre(books, genre),
        Commands::Available { on_loan } => filter_by_availability(books, !on_loan),
        Commands::Decade { decade } => filter_by_decade(books, *decade),
        Commands::Keyword { keyword } => filter_by_keyword(books, keyword),
    };

    log::debug!(
        "{:?} matched {} of {} books",
        app.command,
        filtered.len(),
        books.len()
    );

    if global.verbose {
        eprintln!("Matched {} of {} books", filtered.len(), books.len());
    }

    if app.json {
        println!("{}", format_json(&filtered)?);
    } else {
        print!("{}", format_results(&filtered));
    }

    Ok(())
}
