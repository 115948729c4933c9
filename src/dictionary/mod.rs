use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

/// One letter position shared by every word with a common prefix.
#[derive(Debug, Default)]
pub struct TrieNode {
    letter: Option<char>,
    children: HashMap<char, TrieNode>,
    end_of_word: bool,
}

impl TrieNode {
    fn with_letter(letter: char) -> Self {
        Self {
            letter: Some(letter),
            ..Self::default()
        }
    }

    /// The letter this node represents (`None` for the root)
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether the prefix ending here is a complete legal word
    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    /// Follow the child link for `letter`, ignoring case.
    pub fn lookup_child(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&normalize(letter))
    }
}

/// Prefix tree over the legal word list.
///
/// Keys are canonical uppercase letters; callers may pass either case.
#[derive(Debug, Default)]
pub struct Dictionary {
    root: TrieNode,
    word_count: usize,
}

impl Dictionary {
    /// Build a dictionary from a word list. Order of the input is irrelevant.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::empty();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read word list {}", path.display()))?;

        let dictionary = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|word| !word.is_empty()),
        );

        tracing::info!(
            "Loaded {} words into dictionary from {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Create an empty dictionary (matches nothing)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Discard the current tree and rebuild it from `words`.
    pub fn rebuild<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        *self = Self::from_words(words);
    }

    fn insert(&mut self, word: &str) {
        let mut current = &mut self.root;
        for letter in word.chars() {
            let key = normalize(letter);
            current = current
                .children
                .entry(key)
                .or_insert_with(|| TrieNode::with_letter(key));
        }

        if !current.end_of_word {
            current.end_of_word = true;
            self.word_count += 1;
        }
    }

    /// The empty-prefix node
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Follow the child link for `letter` from `node`.
    pub fn lookup_child(node: &TrieNode, letter: char) -> Option<&TrieNode> {
        node.lookup_child(letter)
    }

    fn walk(&self, sequence: &str) -> Option<&TrieNode> {
        sequence
            .chars()
            .try_fold(&self.root, |node, letter| node.lookup_child(letter))
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(TrieNode::is_end_of_word)
    }

    /// Check if any word starts with `prefix`
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Uppercase `letter`, keeping it as-is when it has no single-char uppercase
fn normalize(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}
