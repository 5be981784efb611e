//! 盤面レイアウト
//!
//! 認識結果を行×列のラベル表に並べ直す（表示・保存用）。

use crate::types::{DetectedPanel, GridSize, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ラベルから見たパネル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Prize,
    Chance,
    Shuffle,
    Empty,
}

pub fn label_to_kind(label: &str) -> LabelKind {
    match label {
        "+" => LabelKind::Chance,
        "-" => LabelKind::Shuffle,
        "" => LabelKind::Empty,
        _ => LabelKind::Prize,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub rows: Vec<Vec<String>>,
}

impl BoardLayout {
    pub fn empty(grid: GridSize) -> Self {
        Self {
            rows: vec![vec![String::new(); grid.cols as usize]; grid.rows as usize],
        }
    }

    /// 範囲外の位置は無視し, 検出されなかったマスは空のまま
    pub fn from_panels(grid: GridSize, panels: &[DetectedPanel]) -> Self {
        let mut layout = Self::empty(grid);
        for panel in panels {
            if !grid.contains(panel.position) {
                continue;
            }
            let Position { row, col } = panel.position;
            layout.rows[row as usize][col as usize] = panel.label.clone();
        }
        layout
    }

    pub fn label(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for label in self.rows.iter().flatten().filter(|l| !l.is_empty()) {
            *counts.entry(label.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// 空マスは "."
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|label| format!("{:>3}", if label.is_empty() { "." } else { label.as_str() }))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
