//! 特殊パネル（チャンス/シャッフル）の色判定

use crate::types::{PanelKind, Rgb};

/// チャンスパネルの色相（黄）
pub const CHANCE_HUE: f64 = 55.0;
/// シャッフルパネルの色相（紫）
pub const SHUFFLE_HUE: f64 = 285.0;
/// 彩度が低いほど両方のスコアを同じだけ悪くする
const SATURATION_PENALTY: f64 = 40.0;
/// 特殊パネルの信頼度は固定
pub const SPECIAL_CONFIDENCE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// 0..360
    pub h: f64,
    /// 0..1
    pub s: f64,
    /// 0..1
    pub v: f64,
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv { h, s, v: max }
}

/// 色相環上の距離 (0..=180)
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

/// (チャンスのスコア, シャッフルのスコア)。小さいほど近い。
pub fn special_scores(color: Rgb) -> (f64, f64) {
    let hsv = rgb_to_hsv(color);
    let penalty = (1.0 - hsv.s) * SATURATION_PENALTY;
    (
        hue_distance(hsv.h, CHANCE_HUE) + penalty,
        hue_distance(hsv.h, SHUFFLE_HUE) + penalty,
    )
}

/// 余ったセルを必ずどちらかに振り分ける。同点はチャンス。
pub fn classify_special(color: Rgb) -> PanelKind {
    let (chance, shuffle) = special_scores(color);
    if chance <= shuffle {
        PanelKind::Chance
    } else {
        PanelKind::Shuffle
    }
}

pub fn special_label(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Chance => "+",
        PanelKind::Shuffle => "-",
        PanelKind::Prize => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hsv_primaries() {
        let red = rgb_to_hsv(Rgb::new(255, 0, 0));
        assert_eq!((red.h, red.s, red.v), (0.0, 1.0, 1.0));

        let green = rgb_to_hsv(Rgb::new(0, 255, 0));
        assert!((green.h - 120.0).abs() < 1e-9);

        let blue = rgb_to_hsv(Rgb::new(0, 0, 255));
        assert!((blue.h - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_rgb_to_hsv_wraps_negative_hue() {
        // r が最大で g < b → 負の色相を360で折り返す
        let magenta = rgb_to_hsv(Rgb::new(255, 0, 128));
        assert!(magenta.h > 300.0 && magenta.h < 360.0);
    }

    #[test]
    fn test_rgb_to_hsv_gray() {
        let gray = rgb_to_hsv(Rgb::new(90, 90, 90));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        let black = rgb_to_hsv(Rgb::new(0, 0, 0));
        assert_eq!(black.s, 0.0);
    }

    #[test]
    fn test_hue_distance_wraps() {
        assert_eq!(hue_distance(10.0, 350.0), 20.0);
        assert_eq!(hue_distance(55.0, 285.0), 130.0);
        assert_eq!(hue_distance(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_classify_yellow_and_purple() {
        assert_eq!(classify_special(Rgb::new(255, 255, 0)), PanelKind::Chance);
        assert_eq!(classify_special(Rgb::new(240, 200, 40)), PanelKind::Chance);
        assert_eq!(classify_special(Rgb::new(128, 0, 128)), PanelKind::Shuffle);
        assert_eq!(classify_special(Rgb::new(150, 60, 220)), PanelKind::Shuffle);
    }

    #[test]
    fn test_achromatic_goes_to_chance() {
        // 無彩色は色相0扱い: 黄まで55度, 紫まで75度
        assert_eq!(classify_special(Rgb::new(128, 128, 128)), PanelKind::Chance);
        assert_eq!(classify_special(Rgb::new(0, 0, 0)), PanelKind::Chance);
        let (chance, shuffle) = special_scores(Rgb::new(200, 200, 200));
        assert_eq!(chance, 95.0);
        assert_eq!(shuffle, 115.0);
    }

    #[test]
    fn test_special_labels() {
        assert_eq!(special_label(PanelKind::Chance), "+");
        assert_eq!(special_label(PanelKind::Shuffle), "-");
    }
}
