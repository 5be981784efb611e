//! ピクセルバッファ
//!
//! エンジンは具体的な画像ライブラリに依存せず、`PixelSurface` だけを使う。
//! CLIでは `image` クレートの実装、その他のホストでは `RgbaBuffer` を使う。

use crate::error::{Error, Result};
use crate::types::Rgb;

/// 1ピクセルあたりのバイト数（RGBA）
pub const CHANNELS: usize = 4;

/// 輝度 (ITU-R BT.601)
pub fn luma(pixel: [u8; 4]) -> f64 {
    0.299 * pixel[0] as f64 + 0.587 * pixel[1] as f64 + 0.114 * pixel[2] as f64
}

/// エンジンが必要とする画素操作
pub trait PixelSurface: Sized {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// (x, y) のRGBA値。範囲内であること。
    fn pixel(&self, x: u32, y: u32) -> [u8; 4];

    /// 矩形の切り出し。画像の外にはみ出す部分は切り詰める。
    fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Self;

    fn resize(&self, width: u32, height: u32) -> Self;

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// 行優先のグレースケール値 (0..=255)
    fn to_grayscale(&self) -> Vec<f64> {
        let mut gray = Vec::with_capacity(self.width() as usize * self.height() as usize);
        for y in 0..self.height() {
            for x in 0..self.width() {
                gray.push(luma(self.pixel(x, y)));
            }
        }
        gray
    }

    /// 全ピクセルのRGB平均（四捨五入）。空なら黒。
    fn mean_rgb(&self) -> Rgb {
        let count = self.width() as u64 * self.height() as u64;
        if count == 0 {
            return Rgb::default();
        }

        let mut sums = [0u64; 3];
        for y in 0..self.height() {
            for x in 0..self.width() {
                let p = self.pixel(x, y);
                sums[0] += p[0] as u64;
                sums[1] += p[1] as u64;
                sums[2] += p[2] as u64;
            }
        }

        let mean = |sum: u64| (sum as f64 / count as f64).round() as u8;
        Rgb::new(mean(sums[0]), mean(sums[1]), mean(sums[2]))
    }
}

/// 行優先RGBAのプレーンなバッファ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(Error::InvalidBuffer {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Self {
        Self::from_fn(width, height, |_, _| pixel)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

impl PixelSurface for RgbaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        let x = x.min(self.width);
        let y = y.min(self.height);
        let width = width.min(self.width - x);
        let height = height.min(self.height - y);

        let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for row in y..y + height {
            let start = self.offset(x, row);
            let end = start + width as usize * CHANNELS;
            pixels.extend_from_slice(&self.pixels[start..end]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// 面積平均による縮小（拡大時は最近傍と同じ）
    fn resize(&self, width: u32, height: u32) -> Self {
        if self.is_empty() {
            return Self::filled(width, height, [0, 0, 0, 0]);
        }

        let span = |out: u32, out_len: u32, src_len: u32| {
            let start = (out as u64 * src_len as u64 / out_len as u64) as u32;
            let end = ((out as u64 + 1) * src_len as u64 / out_len as u64) as u32;
            (start, end.max(start + 1).min(src_len))
        };

        Self::from_fn(width, height, |ox, oy| {
            let (x0, x1) = span(ox, width, self.width);
            let (y0, y1) = span(oy, height, self.height);

            let mut sums = [0u64; 4];
            for y in y0..y1 {
                for x in x0..x1 {
                    let p = self.pixel(x, y);
                    for (sum, value) in sums.iter_mut().zip(p) {
                        *sum += value as u64;
                    }
                }
            }

            let count = ((x1 - x0) * (y1 - y0)) as f64;
            sums.map(|sum| (sum as f64 / count).round() as u8)
        })
    }
}
