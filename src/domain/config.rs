use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::{SenaGenError, SenaGenResult};

/// Date format used for default output file names (day-month-year)
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Smallest playable game size
pub const MIN_GAME_SIZE: u8 = 6;

/// Largest playable game size
pub const MAX_GAME_SIZE: u8 = 15;

/// SenaGen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenaGenConfig {
    /// Global settings
    #[serde(default)]
    pub global: GlobalConfig,
    /// Draw settings
    #[serde(default)]
    pub draw: DrawConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Draw configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Number of games generated per run
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Numbers per game
    #[serde(default = "default_size")]
    pub size: u8,
    /// Range of numbers a game draws from
    #[serde(default)]
    pub pool: NumberPool,
}

/// Inclusive range of drawable numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPool {
    #[serde(default = "default_lowest")]
    pub lowest: u8,
    #[serde(default = "default_highest")]
    pub highest: u8,
}

impl NumberPool {
    /// Count of distinct numbers available to a draw
    pub fn len(&self) -> usize {
        if self.lowest > self.highest {
            0
        } else {
            (self.highest - self.lowest) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, number: u8) -> bool {
        number >= self.lowest && number <= self.highest
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory games are written to; when unset the store resolves
    /// the `output` directory next to the install location
    #[serde(default)]
    pub directory: Option<PathBuf>,
    /// Date format embedded in default file names
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl OutputConfig {
    /// Date-derived default file name for the current run
    pub fn default_filename(&self) -> String {
        default_output_name(&self.date_format)
    }
}

/// Settings for one generation run, resolved from command line flags
/// and file configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub quantity: u32,
    pub size: u8,
    pub filename: String,
}

/// Default output file name, `output-<date>.txt` with the run's
/// current date
pub fn default_output_name(date_format: &str) -> String {
    format!("output-{}.txt", Local::now().format(date_format))
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_quantity() -> u32 {
    1
}

fn default_size() -> u8 {
    6
}

fn default_lowest() -> u8 {
    1
}

fn default_highest() -> u8 {
    60
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for SenaGenConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            draw: DrawConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            quantity: default_quantity(),
            size: default_size(),
            pool: NumberPool::default(),
        }
    }
}

impl Default for NumberPool {
    fn default() -> Self {
        Self {
            lowest: default_lowest(),
            highest: default_highest(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            date_format: default_date_format(),
        }
    }
}

impl SenaGenConfig {
    /// Check a loaded configuration before any generation runs
    pub fn validate(&self) -> SenaGenResult<()> {
        let pool = &self.draw.pool;

        if pool.lowest < 1 {
            return Err(SenaGenError::Config {
                message: "Number pool cannot start below 1".to_string(),
            });
        }

        if pool.lowest > pool.highest {
            return Err(SenaGenError::Config {
                message: format!(
                    "Number pool {}..{} is inverted",
                    pool.lowest, pool.highest
                ),
            });
        }

        if !(MIN_GAME_SIZE..=MAX_GAME_SIZE).contains(&self.draw.size) {
            return Err(SenaGenError::Config {
                message: format!(
                    "Game size {} is outside the playable range {}..{}",
                    self.draw.size, MIN_GAME_SIZE, MAX_GAME_SIZE
                ),
            });
        }

        if self.draw.size as usize > pool.len() {
            return Err(SenaGenError::Config {
                message: format!(
                    "Game size {} exceeds the {} numbers in the pool",
                    self.draw.size,
                    pool.len()
                ),
            });
        }

        if StrftimeItems::new(&self.output.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SenaGenError::Config {
                message: format!("Invalid date format '{}'", self.output.date_format),
            });
        }

        Ok(())
    }
}
