//! フォルダ内の盤面画像をまとめて認識する

use crate::error::Result;
use crate::recognizer::recognize_path;
use crate::scanner::ImageInfo;
use indicatif::{ProgressBar, ProgressStyle};
use panel_board_common::{Difficulty, RecognitionResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub file_name: String,
    pub result: RecognitionResult,
}

/// バッチ認識の結果（JSONで保存）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub generated_at: String,
    pub difficulty: Difficulty,
    pub entries: Vec<BatchEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// 成功したが確認が必要なもの
    pub low_confidence: usize,
}

impl BatchReport {
    pub fn summary(&self, threshold: f64) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.entries.len(),
            ..Default::default()
        };
        for entry in &self.entries {
            if entry.result.success {
                summary.succeeded += 1;
                if entry.result.needs_confirmation(threshold) {
                    summary.low_confidence += 1;
                }
            } else {
                summary.failed += 1;
            }
        }
        summary
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// 画像ごとに独立して並列認識する。結果はスキャン順。
pub fn recognize_batch(images: &[ImageInfo], difficulty: Difficulty, show_progress: bool) -> BatchReport {
    let progress = if show_progress {
        let pb = ProgressBar::new(images.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("  {bar:40} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let entries: Vec<BatchEntry> = images
        .par_iter()
        .map(|image| {
            let result = recognize_path(&image.path, difficulty);
            tracing::debug!(
                "{}: success={} confidence={:.3}",
                image.file_name,
                result.success,
                result.confidence
            );
            progress.inc(1);
            BatchEntry {
                file_name: image.file_name.clone(),
                result,
            }
        })
        .collect();

    progress.finish_and_clear();

    BatchReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        difficulty,
        entries,
    }
}
