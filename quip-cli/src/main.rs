//! quip - answer keyword queries from the command line
//!
//! `quip avg 1 2 3` answers a single query. Without a query, every line read
//! from stdin is answered in turn.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use quip_core::{init_logging, Config, Engine};
use quip_plugin::{Answer, Locale, SearchContext};
use quip_std::standard_registry;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(name = "quip", version)]
#[command(about = "Instant answers for random values, statistics, dice and base conversion")]
struct Args {
    /// Query to answer (read line by line from stdin when omitted)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,

    /// Locale for number parsing and formatting (e.g. de-DE)
    #[arg(long, short = 'l', env = "QUIP_LOCALE")]
    locale: Option<String>,

    /// Result page the query was issued from
    #[arg(long, short = 'p', default_value_t = 1)]
    page: u32,

    /// Config file (defaults to ./quip.yaml when present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Print answers as JSON objects
    #[arg(long)]
    json: bool,

    /// List the available answerers and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    init_logging(&config.logging.level)?;

    let engine = Engine::new(&config, standard_registry(&config));

    if args.list {
        println!("{}", serde_json::to_string_pretty(&engine.answerer_infos())?);
        return Ok(());
    }

    let locale: Locale = match &args.locale {
        Some(tag) => tag.parse()?,
        None => config.default_locale.clone(),
    };
    let search = SearchContext::new(locale).with_page(args.page);

    if !args.query.is_empty() {
        let query = args.query.join(" ");
        match engine.dispatch(&query, &search) {
            Some(answer) => print_answer(&answer, args.json)?,
            None => {
                eprintln!("{}", format!("no answer for '{}'", query).dimmed());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match engine.dispatch(&line, &search) {
            Some(answer) => print_answer(&answer, args.json)?,
            None => eprintln!("{}", format!("no answer for '{}'", line.trim()).dimmed()),
        }
    }

    Ok(())
}

fn print_answer(answer: &Answer, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(answer)?);
    } else {
        println!("{}", answer.text().bold());
    }
    Ok(())
}
