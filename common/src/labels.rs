//! ラベル付け
//!
//! OCRはしないので、景品ラベルはペアの確定順（距離の昇順）に A, B, C... と振る。
//! 盤面に印刷された本当の文字とは一致しないことがある。

use crate::classify::{classify_special, special_label, SPECIAL_CONFIDENCE};
use crate::difficulty::PRIZE_LABELS;
use crate::matching::Matching;
use crate::signature::CellSignature;
use crate::types::{DetectedPanel, PanelKind, Position};

/// n番目（0始まり）に確定したペアのラベル
pub fn prize_label(index: usize) -> String {
    match PRIZE_LABELS.get(index) {
        Some(label) => label.to_string(),
        // 表より大きい盤面はアルファベットの続き, その先は番号
        None if index < 26 => char::from(b'A' + index as u8).to_string(),
        None => format!("P{}", index + 1),
    }
}

/// 照合結果をパネル列に変換する
///
/// `positions` と `signatures` はセルの列挙順で同じ長さ。
/// 景品ペアを確定順に並べ、その後に特殊パネルを列挙順に並べる。
pub fn assign_labels(
    positions: &[Position],
    signatures: &[CellSignature],
    matching: &Matching,
) -> Vec<DetectedPanel> {
    let mut panels = Vec::with_capacity(positions.len());

    for (index, pair) in matching.pairs.iter().enumerate() {
        let label = prize_label(index);
        for member in [pair.first, pair.second] {
            panels.push(DetectedPanel {
                position: positions[member],
                kind: PanelKind::Prize,
                label: label.clone(),
                confidence: pair.confidence,
                signature_id: Some(signatures[member].signature_id()),
            });
        }
    }

    for &single in &matching.singles {
        let kind = classify_special(signatures[single].avg_color);
        panels.push(DetectedPanel {
            position: positions[single],
            kind,
            label: special_label(kind).to_string(),
            confidence: SPECIAL_CONFIDENCE,
            signature_id: Some(signatures[single].signature_id()),
        });
    }

    panels
}
