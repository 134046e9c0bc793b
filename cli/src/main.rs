mod report;

use std::time::Duration;

use clap::{Parser, ValueEnum};
use dotenv::dotenv;
use job_scraper::Location;
use report::Board;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Scraper(#[from] job_scraper::Error),
    #[error("SuperJob api key missing, set SECRET_KEY_SJ or pass --superjob-key")]
    MissingApiKey,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Headhunter,
    Superjob,
}

const DEFAULT_LANGUAGES: [&str; 12] = [
    "Python",
    "Java",
    "JavaScript",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "GO",
    "Shell",
    "Swift",
    "TypeScript",
];

/// Compare vacancy counts and average salaries of programming languages on HeadHunter and SuperJob
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job boards to query, all of them when omitted
    #[arg(long, value_enum)]
    site: Vec<Target>,

    /// Programming languages to search for, replaces the default list
    #[arg(long)]
    language: Vec<String>,

    #[arg(long, default_value = "Россия")]
    country: String,

    #[arg(long, default_value = "Москва")]
    city: String,

    /// Pause between page requests and between languages
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,

    /// SuperJob application key
    #[arg(long, env = "SECRET_KEY_SJ", hide_env_values = true)]
    superjob_key: Option<String>,

    #[arg(long, default_value = "https://api.hh.ru")]
    headhunter_url: String,

    #[arg(long, default_value = "https://api.superjob.ru")]
    superjob_url: String,

    #[arg(long, default_value = "2.2")]
    superjob_api_version: String,
}

impl Cli {
    fn targets(&self) -> Vec<Target> {
        if self.site.is_empty() {
            vec![Target::Headhunter, Target::Superjob]
        } else {
            self.site.clone()
        }
    }

    fn languages(&self) -> Vec<String> {
        if self.language.is_empty() {
            DEFAULT_LANGUAGES.into_iter().map(String::from).collect()
        } else {
            self.language.clone()
        }
    }

    fn location(&self) -> Location {
        Location::new(self.country.as_str(), self.city.as_str())
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

async fn run(args: Cli) -> Result<()> {
    let targets = args.targets();
    if targets.contains(&Target::Superjob) && args.superjob_key.is_none() {
        return Err(Error::MissingApiKey);
    }
    // every location is resolved before the first vacancy search
    let mut boards = Vec::with_capacity(targets.len());
    for target in targets {
        boards.push(Board::prepare(target, &args).await?);
    }
    let languages = args.languages();
    let mut tables = Vec::with_capacity(boards.len());
    for board in &boards {
        tables.push(board.report(&languages, &args).await?);
    }
    for table in tables {
        println!("{}", table);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();
    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
