use crate::display::{format_collection, format_json, format_statistics, format_table};
use crate::prelude::{print, println, *};
use colored::Colorize;
use libris_core::request::DEFAULT_TOP;
use libris_core::stats::build_statistics;
use libris_core::{MergeStatus, Session};

#[derive(Debug, clap::Args)]
pub struct ListOptions {
    /// Render the catalog as a table
    #[arg(long, conflicts_with = "json")]
    pub table: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct StatsOptions {
    /// How many of the most popular books to show
    #[arg(short, long, env = "LIBRIS_TOP", default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct IntegrateOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn list(options: ListOptions, session: &Session) -> Result<()> {
    if options.json {
        println!("{}", format_json(&session.books())?);
    } else if options.table {
        print!("{}", format_table(session.books()));
    } else {
        print!("{}", format_collection(session.books()));
    }
    Ok(())
}

pub fn stats(options: StatsOptions, session: &Session) -> Result<()> {
    let statistics = build_statistics(session.books(), options.top);

    if options.json {
        println!("{}", format_json(&statistics)?);
    } else {
        print!("{}", format_statistics(&statistics));
    }
    Ok(())
}

pub fn integrate(options: IntegrateOptions, mut session: Session) -> Result<()> {
    if let MergeStatus::Integrated { added } = session.integrate() {
        log::info!("integrated {added} new arrivals");
        if !options.json {
            println!("{}", f!("{added} new arrivals added to the collection.").green());
        }
    }

    list(
        ListOptions {
            table: false,
            json: options.json,
        },
        &session,
    )
}
