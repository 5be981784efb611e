//! 難易度テーブル
//!
//! 難易度キーから盤面サイズと景品ラベルを引く静的テーブル。

use crate::error::{Error, Result};
use crate::types::GridSize;
use serde::{Deserialize, Serialize};

/// 景品ラベル（最難関の11ペア分）
pub const PRIZE_LABELS: [&str; 11] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 4] {
        [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    pub fn grid_size(&self) -> GridSize {
        match self {
            Difficulty::Easy => GridSize::new(3, 4, 5),
            Difficulty::Medium => GridSize::new(4, 4, 7),
            Difficulty::Hard => GridSize::new(4, 5, 9),
            Difficulty::Expert => GridSize::new(4, 6, 11),
        }
    }

    /// この難易度で使う景品ラベル
    pub fn prize_labels(&self) -> &'static [&'static str] {
        let pairs = self.grid_size().required_pairs as usize;
        &PRIZE_LABELS[..pairs]
    }
}

impl std::str::FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_table() {
        assert_eq!(Difficulty::Easy.grid_size(), GridSize::new(3, 4, 5));
        assert_eq!(Difficulty::Medium.grid_size(), GridSize::new(4, 4, 7));
        assert_eq!(Difficulty::Hard.grid_size(), GridSize::new(4, 5, 9));
        assert_eq!(Difficulty::Expert.grid_size(), GridSize::new(4, 6, 11));
    }

    #[test]
    fn test_every_grid_has_two_specials() {
        for difficulty in Difficulty::all() {
            assert_eq!(difficulty.grid_size().special_count(), 2, "{}", difficulty);
        }
    }

    #[test]
    fn test_prize_labels_per_difficulty() {
        assert_eq!(Difficulty::Easy.prize_labels(), &["A", "B", "C", "D", "E"]);
        assert_eq!(Difficulty::Expert.prize_labels().len(), 11);
        assert_eq!(Difficulty::Expert.prize_labels().last(), Some(&"K"));
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" expert ".parse::<Difficulty>().unwrap(), Difficulty::Expert);

        let err = "insane".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, Error::UnknownDifficulty(_)));
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: Difficulty = serde_json::from_str("\"expert\"").unwrap();
        assert_eq!(parsed, Difficulty::Expert);
    }
}
