use std::path::PathBuf;

use clap::Parser;
use synonym_finder::{Config, Metric, Pipeline, PunctuationTokenizer};
use tracing_subscriber::EnvFilter;

/// Answers synonym questions from sentence co-occurrences in a corpus.
#[derive(Parser, Debug)]
#[command(name = "synonym_finder")]
struct Cli {
    /// Path to the parameters file (JSON)
    #[arg(long)]
    config: PathBuf,
    /// Test records, overrides `test_file`
    #[arg(long)]
    test_file: Option<String>,
    /// Similarity metric, overrides `metric`
    #[arg(long)]
    metric: Option<Metric>,
    /// Threads for descriptor building, overrides `num_threads`
    #[arg(long)]
    threads: Option<usize>,
    /// Print every record verdict
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut params = Config::new(&cli.config)?.get_params();
    if let Some(test_file) = cli.test_file {
        params.test_file = Some(test_file);
    }
    if let Some(metric) = cli.metric {
        params.metric = metric;
    }
    if let Some(threads) = cli.threads {
        params.num_threads = threads;
    }
    tracing::info!("{}", params);

    let report = Pipeline::run(&params, &PunctuationTokenizer::default())?;

    if cli.verbose {
        for result in &report.results {
            println!("{}", result);
            println!("{}", "*".repeat(30));
        }
    }
    println!("{}", report);

    Ok(())
}
