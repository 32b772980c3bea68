#![allow(unused)]

use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod call;
mod catalog;
mod display;
mod error;
mod filter;
mod menu;
mod prelude;
mod report;
mod transform;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse, filter and summarize a small library catalog"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// JSON file with the catalog to start from (defaults to the built-in catalog)
    #[clap(long, env = "LIBRIS_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// JSON file with the batch of new arrivals (defaults to the built-in batch)
    #[clap(long, env = "LIBRIS_ARRIVALS", global = true)]
    arrivals: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "LIBRIS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Interactive menu (default when no subcommand is given)
    Menu,

    /// Show the current catalog
    List(crate::report::ListOptions),

    /// Filter the catalog by genre, availability, decade or keyword
    Filter(crate::filter::App),

    /// Show every title in upper, lower or title case
    Titles(crate::transform::TitlesOptions),

    /// Generate a citation for every book
    Citations(crate::transform::LinesOptions),

    /// Show whether each book is available or on loan
    Availability(crate::transform::LinesOptions),

    /// Catalog statistics and the most popular books
    Stats(crate::report::StatsOptions),

    /// Show the catalog with the new arrivals integrated
    Integrate(crate::report::IntegrateOptions),

    /// Run a catalog operation with JSON arguments
    Call(crate::call::CallOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let session = catalog::load_session(&app.global)?;

    match app.command.unwrap_or(SubCommands::Menu) {
        SubCommands::Menu => crate::menu::run(session, app.global),
        SubCommands::List(options) => crate::report::list(options, &session),
        SubCommands::Filter(sub_app) => crate::filter::run(sub_app, &session, app.global),
        SubCommands::Titles(options) => crate::transform::titles(options, &session),
        SubCommands::Citations(options) => crate::transform::citations(options, &session),
        SubCommands::Availability(options) => crate::transform::availability(options, &session),
        SubCommands::Stats(options) => crate::report::stats(options, &session),
        SubCommands::Integrate(options) => crate::report::integrate(options, session),
        SubCommands::Call(options) => crate::call::run(options, &session, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
