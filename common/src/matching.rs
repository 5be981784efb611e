//! 景品ペアの照合
//!
//! 全セル対の距離を昇順に並べ、近い順に貪欲に確定する。
//! 最小重み完全マッチングではない（n ≤ 24 なのでこれで十分）。

use crate::signature::CellSignature;
use crate::types::Rgb;
use std::collections::BTreeSet;

const GRAYSCALE_WEIGHT: f64 = 0.75;
const COLOR_WEIGHT: f64 = 0.25;
const MIN_PAIR_CONFIDENCE: f64 = 0.4;
const CONFIDENCE_SLOPE: f64 = 2.5;

/// セル対の候補（i < j, セルの列挙順インデックス）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub i: usize,
    pub j: usize,
    pub distance: f64,
}

/// 確定したペア
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedPair {
    pub first: usize,
    pub second: usize,
    pub distance: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matching {
    /// 確定順（=距離の昇順）
    pub pairs: Vec<MatchedPair>,
    /// どのペアにも入らなかったセル（列挙順）
    pub singles: Vec<usize>,
}

/// グレースケールのRMS差 (0..1)
pub fn grayscale_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 1.0;
    }
    if a.is_empty() {
        return 0.0;
    }
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    (sum / a.len() as f64).sqrt()
}

/// 平均色のRMS差 (0..1)
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = (a.r as f64 - b.r as f64) / 255.0;
    let dg = (a.g as f64 - b.g as f64) / 255.0;
    let db = (a.b as f64 - b.b as f64) / 255.0;
    ((dr * dr + dg * dg + db * db) / 3.0).sqrt()
}

pub fn signature_distance(a: &CellSignature, b: &CellSignature) -> f64 {
    GRAYSCALE_WEIGHT * grayscale_distance(&a.grayscale, &b.grayscale)
        + COLOR_WEIGHT * color_distance(a.avg_color, b.avg_color)
}

pub fn pair_confidence(distance: f64) -> f64 {
    (1.0 - distance * CONFIDENCE_SLOPE).max(MIN_PAIR_CONFIDENCE)
}

/// 全セル対を距離の昇順で返す
///
/// 同距離は列挙順 (i, j) のまま（安定ソート）。
pub fn ranked_candidates(signatures: &[CellSignature]) -> Vec<Candidate> {
    let n = signatures.len();
    let mut candidates = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in i + 1..n {
            candidates.push(Candidate {
                i,
                j,
                distance: signature_distance(&signatures[i], &signatures[j]),
            });
        }
    }
    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    candidates
}

/// 近い順にペアを確定する。`required_pairs` 個で打ち切り。
pub fn greedy_match(signatures: &[CellSignature], required_pairs: usize) -> Matching {
    let (pairs, used) = ranked_candidates(signatures).into_iter().fold(
        (Vec::with_capacity(required_pairs), BTreeSet::new()),
        |(mut pairs, mut used), c| {
            if pairs.len() < required_pairs && !used.contains(&c.i) && !used.contains(&c.j) {
                used.insert(c.i);
                used.insert(c.j);
                pairs.push(MatchedPair {
                    first: c.i,
                    second: c.j,
                    distance: c.distance,
                    confidence: pair_confidence(c.distance),
                });
            }
            (pairs, used)
        },
    );

    let singles: Vec<usize> = (0..signatures.len()).filter(|i| !used.contains(i)).collect();

    tracing::debug!(
        "matched {} of {} required pairs, {} singles left",
        pairs.len(),
        required_pairs,
        singles.len()
    );

    Matching { pairs, singles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::SIGNATURE_LEN;

    fn solid(gray: f64, color: Rgb) -> CellSignature {
        CellSignature {
            grayscale: vec![gray; SIGNATURE_LEN],
            avg_color: color,
        }
    }

    #[test]
    fn test_distance_bounds() {
        let black = solid(0.0, Rgb::new(0, 0, 0));
        let white = solid(1.0, Rgb::new(255, 255, 255));
        assert_eq!(signature_distance(&black, &black), 0.0);
        assert!((signature_distance(&black, &white) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_grayscale_distance_length_mismatch() {
        assert_eq!(grayscale_distance(&[0.0, 1.0], &[0.0]), 1.0);
        assert_eq!(grayscale_distance(&[], &[]), 0.0);
    }

    #[test]
    fn test_pair_confidence_floor() {
        assert_eq!(pair_confidence(0.0), 1.0);
        assert!((pair_confidence(0.1) - 0.75).abs() < 1e-12);
        assert_eq!(pair_confidence(0.3), 0.4);
        assert_eq!(pair_confidence(1.0), 0.4);
    }

    #[test]
    fn test_ranked_candidates_stable_on_ties() {
        let sigs = vec![solid(0.5, Rgb::default()); 4];
        let ranked = ranked_candidates(&sigs);
        let order: Vec<(usize, usize)> = ranked.iter().map(|c| (c.i, c.j)).collect();
        assert_eq!(order, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_greedy_pairs_duplicates() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        let sigs = vec![
            solid(0.3, red),
            solid(0.1, blue),
            solid(0.9, Rgb::new(255, 255, 0)),
            solid(0.1, blue),
            solid(0.3, red),
        ];
        let matching = greedy_match(&sigs, 2);

        assert_eq!(matching.pairs.len(), 2);
        assert_eq!((matching.pairs[0].first, matching.pairs[0].second), (0, 4));
        assert_eq!((matching.pairs[1].first, matching.pairs[1].second), (1, 3));
        assert_eq!(matching.singles, vec![2]);
        assert!(matching.pairs.iter().all(|p| p.confidence == 1.0));
    }

    #[test]
    fn test_greedy_is_not_optimal_matching() {
        // 0-1 が最も近いので先に確定し, 残りの 2-3 は遠くても組まされる
        let sigs = vec![
            solid(0.50, Rgb::default()),
            solid(0.52, Rgb::default()),
            solid(0.40, Rgb::default()),
            solid(1.00, Rgb::default()),
        ];
        let matching = greedy_match(&sigs, 2);
        assert_eq!((matching.pairs[0].first, matching.pairs[0].second), (0, 1));
        assert_eq!((matching.pairs[1].first, matching.pairs[1].second), (2, 3));
        assert!(matching.singles.is_empty());
    }

    #[test]
    fn test_pair_cap() {
        let sigs = vec![solid(0.2, Rgb::default()); 10];
        let matching = greedy_match(&sigs, 3);
        assert_eq!(matching.pairs.len(), 3);
        assert_eq!(matching.singles, vec![6, 7, 8, 9]);
    }

    #[test]
    fn test_fewer_cells_than_required() {
        let sigs = vec![solid(0.2, Rgb::default()); 3];
        let matching = greedy_match(&sigs, 5);
        assert_eq!(matching.pairs.len(), 1);
        assert_eq!(matching.singles, vec![2]);

        let empty = greedy_match(&[], 5);
        assert!(empty.pairs.is_empty());
        assert!(empty.singles.is_empty());
    }
}
