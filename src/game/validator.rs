use std::collections::HashSet;

use crate::{
    dictionary::Dictionary,
    game::Board,
    models::Position,
    utils::letters::push_fragment,
};

/// Checks a word claimed as a specific path of cells
pub struct WordValidator<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> WordValidator<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// Check if word exists in dictionary
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Validate that positions form a valid path on the board
    pub fn is_valid_path(board: &Board, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that all positions are within bounds
        if !positions.iter().all(|&pos| board.contains(pos)) {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Board::are_adjacent(window[0], window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Extract word from board positions, reading `Q` tiles as "qu"
    pub fn extract_word(board: &Board, positions: &[Position]) -> String {
        let mut word = String::new();
        for &pos in positions {
            push_fragment(&mut word, board.letter_at(pos));
        }
        word
    }

    /// The word spelled by `positions`, if the path is legal and the word is
    /// in the dictionary
    pub fn validate(&self, board: &Board, positions: &[Position]) -> Option<String> {
        if !Self::is_valid_path(board, positions) {
            return None;
        }

        let word = Self::extract_word(board, positions);
        self.is_valid_word(&word).then_some(word)
    }
}
