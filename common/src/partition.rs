//! 盤面をセルに分割する
//!
//! 画像は盤面ぴったりに切り抜かれている前提。枠検出はしない。

use crate::pixels::PixelSurface;
use crate::types::{GridSize, Position};

/// 1マス分の画素
#[derive(Debug, Clone)]
pub struct Cell<S> {
    pub row: u32,
    pub col: u32,
    pub pixels: S,
}

impl<S> Cell<S> {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// セル矩形 (x, y, width, height)
///
/// 原点は `floor(width*col/cols)`、サイズは `floor(width/cols)`。
/// 端のセルが丸めで1px小さくなるのは補正しない。
pub fn cell_rect(width: u32, height: u32, grid: GridSize, row: u32, col: u32) -> (u32, u32, u32, u32) {
    let x = (width as u64 * col as u64 / grid.cols as u64) as u32;
    let y = (height as u64 * row as u64 / grid.rows as u64) as u32;
    (x, y, width / grid.cols, height / grid.rows)
}

/// 行優先で `rows*cols` 個のセルを切り出す
pub fn partition<S: PixelSurface>(surface: &S, grid: GridSize) -> Vec<Cell<S>> {
    if grid.rows == 0 || grid.cols == 0 {
        return Vec::new();
    }

    let mut cells = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let (x, y, w, h) = cell_rect(surface.width(), surface.height(), grid, row, col);
            cells.push(Cell {
                row,
                col,
                pixels: surface.region(x, y, w, h),
            });
        }
    }

    tracing::debug!(
        "partitioned {}x{} image into {} cells ({}x{})",
        surface.width(),
        surface.height(),
        cells.len(),
        grid.rows,
        grid.cols
    );
    cells
}
