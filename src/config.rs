use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub dictionary_path: String,
    pub board: BoardConfig,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    /// Row-major board letters; a random board is generated when unset
    pub letters: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let board = BoardConfig {
            width: lookup("BOARD_WIDTH")
                .unwrap_or_else(|| "4".to_string())
                .parse()
                .context("BOARD_WIDTH must be a number")?,
            height: lookup("BOARD_HEIGHT")
                .unwrap_or_else(|| "4".to_string())
                .parse()
                .context("BOARD_HEIGHT must be a number")?,
            letters: lookup("BOARD_LETTERS").filter(|letters| !letters.trim().is_empty()),
        };

        let output = match lookup("OUTPUT_FORMAT").as_deref().map(str::trim) {
            None | Some("") => OutputFormat::Text,
            Some(format) if format.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(format) if format.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(other) => {
                tracing::warn!("Unknown OUTPUT_FORMAT {:?}, falling back to text", other);
                OutputFormat::Text
            }
        };

        Ok(Config {
            dictionary_path: lookup("DICTIONARY_PATH")
                .unwrap_or_else(|| "./dictionary.txt".to_string()),
            board,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.dictionary_path, "./dictionary.txt");
        assert_eq!(config.board.width, 4);
        assert_eq!(config.board.height, 4);
        assert!(config.board.letters.is_none());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("DICTIONARY_PATH", "/usr/share/dict/words"),
            ("BOARD_WIDTH", "3"),
            ("BOARD_HEIGHT", "2"),
            ("BOARD_LETTERS", "dzxeai"),
            ("OUTPUT_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.dictionary_path, "/usr/share/dict/words");
        assert_eq!(config.board.width, 3);
        assert_eq!(config.board.height, 2);
        assert_eq!(config.board.letters.as_deref(), Some("dzxeai"));
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_width_is_an_error() {
        let err = config_from(&[("BOARD_WIDTH", "wide")]).unwrap_err();
        assert!(err.to_string().contains("BOARD_WIDTH"));
    }

    #[test]
    fn test_unknown_output_format_falls_back_to_text() {
        let config = config_from(&[("OUTPUT_FORMAT", "yaml")]).unwrap();
        assert_eq!(config.output, OutputFormat::Text);
    }
}
