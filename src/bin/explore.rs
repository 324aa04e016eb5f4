use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use synonym_finder::{Config, Pipeline, PunctuationTokenizer, Session, SynonymError};
use tracing_subscriber::EnvFilter;

// interactive lookup of the words sharing the most context with a given word.
// treated as a binary executable so it can be ran independently from main

/// Lists the words most similar to each queried word.
#[derive(Parser, Debug)]
#[command(name = "explore")]
struct Cli {
    /// Path to the parameters file (JSON)
    #[arg(long)]
    config: PathBuf,
    /// Query a single word and exit instead of reading stdin
    #[arg(long)]
    word: Option<String>,
    /// Overrides `max_results`, zero or less means no limit
    #[arg(long, allow_hyphen_values = true)]
    max_results: Option<i64>,
    /// Overrides `threshold`
    #[arg(long, allow_hyphen_values = true)]
    threshold: Option<f64>,
}

fn print_query(session: &Session, word: &str) -> anyhow::Result<()> {

    match session.query(word) {
        Ok(similar_words) => {
            for (i, (similar, score)) in similar_words.iter().enumerate() {
                println!("{} : {} ? {} = {:.4}", i, word.trim(), similar, score);
            }
            if similar_words.is_empty() {
                println!("no word passed the threshold");
            }
        },
        Err(SynonymError::UnknownWord { .. }) => println!("No descriptor exists for this word."),
        Err(e) => return Err(e.into())
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut params = Config::new(&cli.config)?.get_params();
    if let Some(max_results) = cli.max_results {
        params.max_results = max_results;
    }
    if let Some(threshold) = cli.threshold {
        params.threshold = threshold;
    }

    let table = Pipeline::build(&params, &PunctuationTokenizer::default())?;
    let session = Session::new(table, params.metric, params.max_results, params.threshold);

    if let Some(word) = cli.word {
        return print_query(&session, &word);
    }

    let stdin = io::stdin();
    loop {
        print!("Most common context for which word? ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break
        }
        let word = line.trim();
        if word.eq_ignore_ascii_case("quit") {
            break
        }
        if word.is_empty() {
            continue
        }

        print_query(&session, word)?;
        println!();
    }

    Ok(())
}
