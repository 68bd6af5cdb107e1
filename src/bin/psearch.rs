//! CLI entry point for the `psearch` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use people_search::cli::{commands, Menu};
use people_search::{Catalog, PeopleList, PsearchError, Query, RecordReader, Strategy};

#[derive(Parser)]
#[command(
    name = "psearch",
    about = "Search a list of people by name or email"
)]
struct Cli {
    /// File with one person per line
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find people matching the given words
    Find {
        /// Matching strategy: all, any or none
        #[arg(long, default_value = "any")]
        strategy: String,
        /// Words to search for
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print all people in file order
    List,
    /// Show record and word counts
    Stats,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json = cli.format == "json";

    let people = match &cli.data {
        Some(path) => RecordReader::load_or_empty(path),
        None => PeopleList::default(),
    };
    let catalog = Catalog::new(people);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        None => Menu::new(&catalog, io::stdin().lock(), &mut out).run(),
        Some(Commands::Find { strategy, words }) => match strategy.parse::<Strategy>() {
            Ok(strategy) => {
                let query = Query::from_text(strategy, &words.join(" "));
                commands::cmd_find(&mut out, &catalog, &query, json)
            }
            Err(e) => Err(e),
        },
        Some(Commands::List) => commands::cmd_list(&mut out, &catalog, json),
        Some(Commands::Stats) => commands::cmd_stats(&mut out, &catalog, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            PsearchError::Io(_) => 1,
            PsearchError::UnknownStrategy(_) | PsearchError::InvalidMenuChoice(_) => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
