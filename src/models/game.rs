use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Outcome of one solve, as printed by the driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    pub width: usize,
    pub height: usize,
    pub letters: String,
    pub elapsed_ms: u128,
    /// Found words, sorted ascending
    pub words: Vec<String>,
}

impl SolveReport {
    pub fn new<I>(width: usize, height: usize, letters: &str, elapsed_ms: u128, words: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort();
        Self {
            width,
            height,
            letters: letters.chars().take(width * height).collect(),
            elapsed_ms,
            words,
        }
    }
}
