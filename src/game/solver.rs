use std::collections::HashSet;
use std::time::Instant;

use crate::{
    dictionary::{Dictionary, TrieNode},
    error::SolverError,
    game::Board,
    models::Position,
    utils::letters::{is_qu_tile, push_fragment},
};

/// Finds every legal word traceable on a board.
///
/// The solver owns the current dictionary. Scratch state is allocated per
/// [`solve_board`](Self::solve_board) call, so a single solver may be shared
/// between threads once its word list is set.
#[derive(Debug, Default)]
pub struct BoggleSolver {
    legal_words: Option<Dictionary>,
}

impl BoggleSolver {
    /// Solver with no word list; every solve returns nothing until one is set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            legal_words: Some(dictionary),
        }
    }

    /// Replace the legal word list. Any previously built dictionary is dropped.
    pub fn set_legal_words<I, S>(&mut self, words: Option<I>) -> Result<(), SolverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words.ok_or(SolverError::NullArgument { name: "words" })?;
        self.legal_words = Some(Dictionary::from_words(words));
        Ok(())
    }

    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.legal_words.as_ref()
    }

    /// Solve a `width` x `height` board laid out row-major in `letters`.
    ///
    /// Returns an empty set when no word list has been set yet. Found words
    /// are lowercase, with each `Q` tile spelled "qu".
    pub fn solve_board(
        &self,
        width: i32,
        height: i32,
        letters: Option<&str>,
    ) -> Result<HashSet<String>, SolverError> {
        let Some(dictionary) = &self.legal_words else {
            tracing::debug!("solve_board called before legal words were set");
            return Ok(HashSet::new());
        };

        let board = Board::new(width, height, letters)?;
        Ok(Self::solve(dictionary, &board))
    }

    /// Solve an already validated board against `dictionary`
    pub fn solve(dictionary: &Dictionary, board: &Board) -> HashSet<String> {
        let started = Instant::now();
        let mut search = Search::new(board);

        for pos in board.positions() {
            search.visit(pos, dictionary.root());
        }

        tracing::debug!(
            width = board.width(),
            height = board.height(),
            found = search.found.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "board solved"
        );

        search.found
    }
}

/// Follow one board tile from `node`.
///
/// A `Q` tile consumes two levels (`Q` then `U`). A dictionary without that
/// chain has no match here and the branch ends.
pub fn descend(node: &TrieNode, letter: char) -> Option<&TrieNode> {
    let next = node.lookup_child(letter)?;
    if is_qu_tile(letter) {
        next.lookup_child('U')
    } else {
        Some(next)
    }
}

/// Backtracking state for one solve call
struct Search<'a> {
    board: &'a Board,
    visited: Vec<bool>,
    word: String,
    found: HashSet<String>,
}

impl<'a> Search<'a> {
    fn new(board: &'a Board) -> Self {
        Self {
            board,
            visited: vec![false; board.cell_count()],
            word: String::new(),
            found: HashSet::new(),
        }
    }

    /// Step onto `pos` from `node`, explore, then undo the step.
    fn visit(&mut self, pos: Position, node: &TrieNode) {
        let letter = self.board.letter_at(pos);
        let Some(next) = descend(node, letter) else {
            return;
        };

        let idx = self.board.index(pos);
        self.visited[idx] = true;
        let pushed = push_fragment(&mut self.word, letter);

        self.explore(pos, next);

        self.word.truncate(self.word.len() - pushed);
        self.visited[idx] = false;
    }

    fn explore(&mut self, pos: Position, node: &TrieNode) {
        // A word may also prefix a longer one; keep going after recording it.
        if node.is_end_of_word() {
            self.found.insert(self.word.clone());
        }

        let board = self.board;
        for next in board.neighbors(pos) {
            if !self.visited[board.index(next)] {
                self.visit(next, node);
            }
        }
    }
}
