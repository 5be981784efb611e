//! 認識結果の型定義
//!
//! CLIと他のホストで共有される型:
//! - GridSize: 難易度ごとの盤面サイズ
//! - DetectedPanel: 認識された1マス分のパネル
//! - RecognitionResult: エンジンの唯一の出力

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 盤面サイズと必要なペア数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSize {
    pub rows: u32,
    pub cols: u32,
    /// 正しい盤面に含まれる景品ペアの数
    pub required_pairs: u32,
}

impl GridSize {
    pub const fn new(rows: u32, cols: u32, required_pairs: u32) -> Self {
        Self {
            rows,
            cols,
            required_pairs,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// 景品ペア以外（チャンス/シャッフル）のマス数
    pub fn special_count(&self) -> usize {
        self.cell_count()
            .saturating_sub(2 * self.required_pairs as usize)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }
}

/// 8bit RGB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// 盤面上の位置（0始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// パネルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// 景品（必ず2枚1組）
    Prize,
    /// チャンス（黄色, ラベル "+"）
    Chance,
    /// シャッフル（紫, ラベル "-"）
    Shuffle,
}

impl PanelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Prize => "prize",
            PanelKind::Chance => "chance",
            PanelKind::Shuffle => "shuffle",
        }
    }
}

impl std::fmt::Display for PanelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 認識されたパネル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedPanel {
    pub position: Position,

    #[serde(rename = "type")]
    pub kind: PanelKind,

    pub label: String,

    pub confidence: f64,

    /// セルのグレースケール署名から作ったID（同じ絵柄なら同じ値）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_id: Option<String>,
}

/// 認識結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionResult {
    pub success: bool,

    pub confidence: f64,

    /// 検出できたマスの割合
    #[serde(default)]
    pub completeness: f64,

    pub panels: Vec<DetectedPanel>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    pub processing_time_ms: f64,
}

impl RecognitionResult {
    /// デコード失敗などで盤面を読めなかった場合の結果
    pub fn failure(message: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            success: false,
            confidence: 0.0,
            completeness: 0.0,
            panels: Vec::new(),
            errors: vec![message.into()],
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    /// 信頼度が閾値以下なら利用者に確認を求めるべき
    ///
    /// 失敗した結果は確認の対象外（そもそも適用できない）。
    pub fn needs_confirmation(&self, threshold: f64) -> bool {
        self.success && self.confidence <= threshold
    }

    pub fn panel_at(&self, row: u32, col: u32) -> Option<&DetectedPanel> {
        let position = Position::new(row, col);
        self.panels.iter().find(|p| p.position == position)
    }

    pub fn count_kind(&self, kind: PanelKind) -> usize {
        self.panels.iter().filter(|p| p.kind == kind).count()
    }
}
