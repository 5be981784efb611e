//! ファイルからの盤面認識
//!
//! 読み込みとデコードだけが待ちになり得る。分割以降は同期処理。
//! 結果は常に `RecognitionResult` で返し、エラーは `errors` に入れる。

use crate::loader::ImageCrateDecoder;
use panel_board_common::decode::ImageDecoder;
use panel_board_common::{build_result, detect_panels, recognize_bytes, Difficulty, RecognitionResult};
use std::path::Path;
use std::time::Instant;

/// 非同期版（CLIの単発認識用）
pub async fn recognize_file(path: &Path, difficulty: Difficulty) -> RecognitionResult {
    let started = Instant::now();
    let grid = difficulty.grid_size();

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("failed to read {}: {}", path.display(), e);
            return RecognitionResult::failure(
                format!("failed to read {}: {}", path.display(), e),
                started.elapsed(),
            );
        }
    };

    let decoded = tokio::task::spawn_blocking(move || ImageCrateDecoder.decode(&bytes)).await;

    match decoded {
        Ok(Ok(surface)) => {
            let panels = detect_panels(&surface, grid);
            build_result(panels, grid, started.elapsed())
        }
        Ok(Err(e)) => {
            tracing::warn!("image decode failed for {}: {}", path.display(), e);
            RecognitionResult::failure(e.to_string(), started.elapsed())
        }
        Err(e) => RecognitionResult::failure(format!("decode task failed: {}", e), started.elapsed()),
    }
}

/// 同期版（バッチのワーカースレッドから呼ぶ）
pub fn recognize_path(path: &Path, difficulty: Difficulty) -> RecognitionResult {
    let started = Instant::now();
    match std::fs::read(path) {
        Ok(bytes) => recognize_bytes(&ImageCrateDecoder, &bytes, difficulty.grid_size()),
        Err(e) => RecognitionResult::failure(
            format!("failed to read {}: {}", path.display(), e),
            started.elapsed(),
        ),
    }
}
