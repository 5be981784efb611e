//! 合成盤面の生成（動作確認用）
//!
//! レイアウト文字列は行を `/` で区切り、1文字が1マス。
//! `A`〜`K` は景品、`+` はチャンス（黄）、`-` はシャッフル（紫）、`.` は白マス。

use crate::error::{PanelBoardError, Result};
use image::{Rgba, RgbaImage};

const CHANCE_COLOR: [u8; 3] = [250, 220, 40];
const SHUFFLE_COLOR: [u8; 3] = [140, 60, 200];
const BLANK_COLOR: [u8; 3] = [255, 255, 255];

/// 景品ごとの地色
const PRIZE_COLORS: [[u8; 3]; 11] = [
    [220, 40, 40],
    [40, 160, 70],
    [40, 80, 210],
    [240, 140, 30],
    [30, 190, 190],
    [200, 60, 140],
    [120, 80, 40],
    [20, 20, 20],
    [150, 200, 60],
    [90, 90, 160],
    [230, 160, 160],
];

pub fn parse_layout(layout: &str) -> Result<Vec<Vec<char>>> {
    let rows: Vec<Vec<char>> = layout
        .trim()
        .split('/')
        .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect())
        .collect();

    let cols = rows.first().map(Vec::len).unwrap_or(0);
    if cols == 0 {
        return Err(PanelBoardError::InvalidLayout("空のレイアウト".into()));
    }
    if rows.iter().any(|row| row.len() != cols) {
        return Err(PanelBoardError::InvalidLayout(format!(
            "行の長さが揃っていません: {}",
            layout
        )));
    }
    if let Some(c) = rows.iter().flatten().find(|&&c| cell_color(c).is_none()) {
        return Err(PanelBoardError::InvalidLayout(format!("未対応のパネル: {}", c)));
    }
    Ok(rows)
}

fn cell_color(c: char) -> Option<[u8; 3]> {
    match c {
        '+' => Some(CHANCE_COLOR),
        '-' => Some(SHUFFLE_COLOR),
        '.' => Some(BLANK_COLOR),
        'A'..='K' => Some(PRIZE_COLORS[(c as u8 - b'A') as usize]),
        _ => None,
    }
}

/// 1マス `cell` px の盤面画像を描く
///
/// 景品は地色の中にラベルごとに大きさの違う暗い四角を描き、
/// グレースケールでも区別できるようにする。
pub fn render_board(layout: &str, cell: u32) -> Result<RgbaImage> {
    let rows = parse_layout(layout)?;
    let cell = cell.max(4);
    let width = rows[0].len() as u32 * cell;
    let height = rows.len() as u32 * cell;

    let image = RgbaImage::from_fn(width, height, |x, y| {
        let c = rows[(y / cell) as usize][(x / cell) as usize];
        let [r, g, b] = cell_color(c).unwrap_or(BLANK_COLOR);

        if let 'A'..='K' = c {
            let index = (c as u8 - b'A') as u32;
            let inset = cell / 8 + index * cell / 32;
            let (cx, cy) = (x % cell, y % cell);
            if cx >= inset && cx < cell - inset && cy >= inset && cy < cell - inset && cy < cell / 2 {
                return Rgba([r / 3, g / 3, b / 3, 255]);
            }
        }
        Rgba([r, g, b, 255])
    });

    Ok(image)
}
