use crate::cli::args::OutputFormat;
use crate::core::game::{Game, GameSet};
use std::io;
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_games(&self, games: &GameSet) -> Result<(), OutputError>;
    fn write_message(&self, message: &str) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::SenaGenError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_games(&self, games: &GameSet) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Text => {
                println!();
                println!("Generated games:");
                println!();
                for game in games {
                    println!("{}", game.to_line());
                }
            }
            OutputFormat::Json => {
                let output = serde_json::to_string_pretty(games)?;
                println!("{}", output);
            }
            OutputFormat::Table => {
                if !games.is_empty() {
                    let table_data: Vec<GameTableRow> = games
                        .iter()
                        .enumerate()
                        .map(|(index, game)| GameTableRow::new(index + 1, game))
                        .collect();
                    let table = Table::new(table_data);
                    println!("{}", table);
                }
            }
            OutputFormat::Csv => {
                println!("game,numbers");
                for (index, game) in games.iter().enumerate() {
                    println!("{},{}", index + 1, game.to_line());
                }
            }
        }
        Ok(())
    }

    fn write_message(&self, message: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "message": message,
                    "level": "info"
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                println!("{}", message);
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}

/// Table row for one game
#[derive(Tabled)]
struct GameTableRow {
    game: usize,
    numbers: String,
}

impl GameTableRow {
    fn new(game: usize, numbers: &Game) -> Self {
        Self {
            game,
            numbers: numbers.to_line(),
        }
    }
}
