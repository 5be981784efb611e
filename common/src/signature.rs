//! セル署名
//!
//! 各セルを12x12グレースケールと平均色に縮約する。

use crate::pixels::PixelSurface;
use crate::types::Rgb;
use sha2::{Digest, Sha256};

/// 縮小後の一辺
pub const SIGNATURE_SIDE: u32 = 12;

/// グレースケールベクトルの長さ
pub const SIGNATURE_LEN: usize = (SIGNATURE_SIDE * SIGNATURE_SIDE) as usize;

#[derive(Debug, Clone, PartialEq)]
pub struct CellSignature {
    /// 0..1に正規化した行優先グレースケール
    pub grayscale: Vec<f64>,
    /// セル全体の平均色（支配色の近似）
    pub avg_color: Rgb,
}

impl CellSignature {
    /// 署名のハッシュ先頭16桁
    pub fn signature_id(&self) -> String {
        let mut hasher = Sha256::new();
        let quantized: Vec<u8> = self
            .grayscale
            .iter()
            .map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
            .collect();
        hasher.update(&quantized);
        hasher.update([self.avg_color.r, self.avg_color.g, self.avg_color.b]);
        let digest = hex::encode(hasher.finalize());
        digest[..16].to_string()
    }
}

pub fn build_signature<S: PixelSurface>(cell: &S) -> CellSignature {
    // 画像がグリッドより小さいとセルが空になる
    if cell.is_empty() {
        return CellSignature {
            grayscale: vec![0.0; SIGNATURE_LEN],
            avg_color: Rgb::default(),
        };
    }

    let grayscale = cell
        .resize(SIGNATURE_SIDE, SIGNATURE_SIDE)
        .to_grayscale()
        .into_iter()
        .map(|v| v / 255.0)
        .collect();

    CellSignature {
        grayscale,
        avg_color: cell.mean_rgb(),
    }
}
