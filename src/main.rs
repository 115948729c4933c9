use std::time::Instant;

use anyhow::Result;
use boggle_solver::{
    config::{Config, OutputFormat},
    game::{BoggleSolver, GridGenerator},
    models::SolveReport,
    Dictionary,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Used when no word list file is available
const SAMPLE_WORDS: &[&str] = &[
    "abed", "abo", "aby", "aero", "aery", "bad", "bade", "bead", "bed", "boa", "bore", "bored",
    "box", "boy", "bread", "bred", "bro", "broad", "byre", "byroad", "dab", "deb", "derby", "dev",
    "oba", "obe", "orb", "orbed", "orby", "ore", "oread", "read", "reb", "red", "rev", "road",
    "rob", "robe", "robed", "verb", "very", "yob", "yore",
];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match Dictionary::load(&config.dictionary_path).await {
        Ok(dict) => dict,
        Err(e) => {
            tracing::warn!("{:#}. Using the built-in sample word list.", e);
            Dictionary::from_words(SAMPLE_WORDS)
        }
    };
    let solver = BoggleSolver::with_dictionary(dictionary);

    let width = config.board.width;
    let height = config.board.height;
    let letters = match config.board.letters {
        Some(letters) => letters,
        None => {
            let letters = GridGenerator::generate(width.max(0) as usize, height.max(0) as usize);
            tracing::info!("Generated random {}x{} board: {}", width, height, letters);
            letters
        }
    };

    let started = Instant::now();
    let words = solver.solve_board(width, height, Some(&letters))?;
    let elapsed_ms = started.elapsed().as_millis();
    tracing::info!("Found {} words in {} ms", words.len(), elapsed_ms);

    let report = SolveReport::new(width as usize, height as usize, &letters, elapsed_ms, words);
    match config.output {
        OutputFormat::Text => {
            println!("{}", report.elapsed_ms);
            for word in &report.words {
                println!("{}", word);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
