//! 認識パイプライン
//!
//! デコード → 分割 → 署名 → ペア照合 → 特殊判定/ラベル付け → 信頼度。
//! デコード以降の各段は失敗しない純粋関数。

use crate::confidence;
use crate::decode::ImageDecoder;
use crate::labels::assign_labels;
use crate::matching::greedy_match;
use crate::partition::{partition, Cell};
use crate::pixels::PixelSurface;
use crate::signature::{build_signature, CellSignature};
use crate::types::{DetectedPanel, GridSize, Position, RecognitionResult};
use std::time::{Duration, Instant};

/// デコード済みの画像から盤面のパネルを求める
pub fn detect_panels<S: PixelSurface>(surface: &S, grid: GridSize) -> Vec<DetectedPanel> {
    let cells = partition(surface, grid);
    let positions: Vec<Position> = cells.iter().map(Cell::position).collect();
    let signatures: Vec<CellSignature> = cells.iter().map(|c| build_signature(&c.pixels)).collect();
    let matching = greedy_match(&signatures, grid.required_pairs as usize);
    assign_labels(&positions, &signatures, &matching)
}

pub fn build_result(panels: Vec<DetectedPanel>, grid: GridSize, elapsed: Duration) -> RecognitionResult {
    let (confidence, completeness) = confidence::estimate(&panels, grid);

    tracing::debug!(
        "recognized {} panels, confidence {:.3}, completeness {:.3}",
        panels.len(),
        confidence,
        completeness
    );

    RecognitionResult {
        success: true,
        confidence,
        completeness,
        panels,
        errors: Vec::new(),
        processing_time_ms: elapsed.as_secs_f64() * 1000.0,
    }
}

pub fn recognize_surface<S: PixelSurface>(surface: &S, grid: GridSize) -> RecognitionResult {
    let started = Instant::now();
    let panels = detect_panels(surface, grid);
    build_result(panels, grid, started.elapsed())
}

/// バイト列から認識する。デコード失敗は結果の `errors` に入れて返す。
pub fn recognize_bytes<D: ImageDecoder>(decoder: &D, bytes: &[u8], grid: GridSize) -> RecognitionResult {
    let started = Instant::now();
    match decoder.decode(bytes) {
        Ok(surface) => {
            let panels = detect_panels(&surface, grid);
            build_result(panels, grid, started.elapsed())
        }
        Err(e) => {
            tracing::warn!("image decode failed: {}", e);
            RecognitionResult::failure(e.to_string(), started.elapsed())
        }
    }
}
