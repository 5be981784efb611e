//! 全体信頼度
//!
//! 信頼度 = パネル信頼度の平均 × 網羅率。
//! 低くても失敗扱いにはしない（閾値判定は呼び出し側の方針）。

use crate::types::{DetectedPanel, GridSize};

/// 検出できたマスの割合 (0..=1)
pub fn completeness(panel_count: usize, grid: GridSize) -> f64 {
    let expected = grid.cell_count();
    if expected == 0 {
        return 0.0;
    }
    (panel_count as f64 / expected as f64).min(1.0)
}

pub fn average_confidence(panels: &[DetectedPanel]) -> f64 {
    if panels.is_empty() {
        return 0.0;
    }
    panels.iter().map(|p| p.confidence).sum::<f64>() / panels.len() as f64
}

/// (全体信頼度, 網羅率)
pub fn estimate(panels: &[DetectedPanel], grid: GridSize) -> (f64, f64) {
    let completeness = completeness(panels.len(), grid);
    if panels.is_empty() {
        return (0.0, completeness);
    }
    let confidence = (average_confidence(panels) * completeness).clamp(0.0, 1.0);
    (confidence, completeness)
}
