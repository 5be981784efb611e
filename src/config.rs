use crate::error::{PanelBoardError, Result};
use panel_board_common::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 信頼度がこれ以下なら適用前に確認する
pub const DEFAULT_CONFIRM_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_difficulty: Difficulty,
    pub confirm_threshold: f64,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::Easy,
            confirm_threshold: DEFAULT_CONFIRM_THRESHOLD,
            show_progress: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PanelBoardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("panel-board").join("config.json"))
    }

    pub fn set_confirm_threshold(&mut self, threshold: f64) -> Result<()> {
        let updated = Self {
            confirm_threshold: threshold,
            ..self.clone()
        };
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.confirm_threshold) {
            return Err(PanelBoardError::Config(format!(
                "confirm_threshold は0.0〜1.0で指定してください: {}",
                self.confirm_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.confirm_threshold, 0.7);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            default_difficulty: Difficulty::Hard,
            confirm_threshold: 0.5,
            show_progress: false,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_difficulty": "expert"}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_difficulty, Difficulty::Expert);
        assert_eq!(loaded.confirm_threshold, DEFAULT_CONFIRM_THRESHOLD);
    }

    #[test]
    fn test_threshold_out_of_range() {
        let mut config = Config::default();
        assert!(config.set_confirm_threshold(1.5).is_err());
        assert!(config.set_confirm_threshold(0.9).is_ok());
    }
}
