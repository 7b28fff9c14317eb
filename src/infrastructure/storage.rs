use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::game::GameSet;
use crate::domain::error::{SenaGenError, SenaGenResult};

/// Flat-file store for generated game sets
pub struct GameStore {
    output_dir: PathBuf,
}

impl GameStore {
    /// Store rooted at the `output` directory one level above the
    /// executable's directory. The directory must already exist; the
    /// store never creates it.
    pub fn new() -> SenaGenResult<Self> {
        Ok(Self {
            output_dir: Self::default_output_dir()?,
        })
    }

    /// Store rooted at an explicit directory
    pub fn with_directory(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn default_output_dir() -> SenaGenResult<PathBuf> {
        let exe = std::env::current_exe()
            .map_err(|e| SenaGenError::Output(format!("Failed to locate the executable: {}", e)))?;

        exe.parent()
            .and_then(Path::parent)
            .map(|install_root| install_root.join("output"))
            .ok_or_else(|| {
                SenaGenError::Output("Executable has no parent directory".to_string())
            })
    }

    /// Write one line per game, truncating any previous file with the
    /// same name. Returns the full path written.
    pub fn save(&self, games: &GameSet, filename: &str) -> SenaGenResult<PathBuf> {
        if filename.is_empty() {
            return Err(SenaGenError::InvalidInput(
                "Output file name cannot be empty".to_string(),
            ));
        }

        let path = self.output_dir.join(filename);
        let file = File::create(&path).map_err(|e| {
            SenaGenError::Output(format!("Failed to create {}: {}", path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        for game in games {
            writeln!(writer, "{}", game.to_line())?;
        }
        writer.flush()?;

        tracing::info!("Saved {} game(s) to {}", games.len(), path.display());
        Ok(path)
    }
}
