use crate::domain::config::SenaGenConfig;
use crate::domain::error::{SenaGenError, SenaGenResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> SenaGenResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Load configuration from files
    pub fn load(&self) -> SenaGenResult<SenaGenConfig> {
        // Start with default configuration
        let mut config = SenaGenConfig::default();

        // Load global configuration if exists
        if self.global_config_path.exists() {
            config = self.load_from_path(&self.global_config_path)?;
        }

        // Project settings shadow the global ones
        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                let project_config = self.load_from_path(project_path)?;
                config.draw = project_config.draw;
                config.output = project_config.output;
            }
        }

        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(&self, path: &Path) -> SenaGenResult<SenaGenConfig> {
        let content = fs::read_to_string(path).map_err(|e| SenaGenError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| SenaGenError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Get global configuration path
    fn get_global_config_path() -> SenaGenResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| SenaGenError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("senagen").join("config.toml"))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".senagen").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }
}
