//! 画像の読み込み
//!
//! `image` クレートでデコードし、エンジンの `PixelSurface` として渡す。

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use panel_board_common::decode::{ensure_not_empty, ImageDecoder};
use panel_board_common::{Error, PixelSurface, Result};
use regex::Regex;

/// `image::RgbaImage` をエンジンに渡すためのラッパー
#[derive(Debug, Clone)]
pub struct ImageSurface(pub RgbaImage);

impl PixelSurface for ImageSurface {
    fn width(&self) -> u32 {
        self.0.width()
    }

    fn height(&self) -> u32 {
        self.0.height()
    }

    fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.0.get_pixel(x, y).0
    }

    fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
        let x = x.min(self.width());
        let y = y.min(self.height());
        let width = width.min(self.width() - x);
        let height = height.min(self.height() - y);
        ImageSurface(imageops::crop_imm(&self.0, x, y, width, height).to_image())
    }

    fn resize(&self, width: u32, height: u32) -> Self {
        if self.is_empty() {
            return ImageSurface(RgbaImage::new(width, height));
        }
        ImageSurface(imageops::resize(&self.0, width, height, FilterType::Triangle))
    }
}

/// PNG/JPEGなど `image` クレートが扱える形式のデコーダ
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    type Surface = ImageSurface;

    fn decode(&self, bytes: &[u8]) -> Result<ImageSurface> {
        ensure_not_empty(bytes)?;
        let image = image::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
        Ok(ImageSurface(image.to_rgba8()))
    }
}

/// `data:image/png;base64,...` 形式の文字列をデコードする
pub fn decode_data_url(url: &str) -> Result<ImageSurface> {
    lazy_static::lazy_static! {
        static ref DATA_URL_RE: Regex =
            Regex::new(r"^data:image/[A-Za-z0-9.+-]+;base64,([A-Za-z0-9+/=\s]*)$").unwrap();
    }

    let caps = DATA_URL_RE
        .captures(url.trim())
        .ok_or_else(|| Error::Decode("not a base64 image data URL".to_string()))?;

    let payload: String = caps[1].chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::Decode(format!("invalid base64 payload: {}", e)))?;

    ImageCrateDecoder.decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let image = RgbaImage::from_pixel(8, 6, Rgba([10, 20, 30, 255]));
        let surface = ImageCrateDecoder.decode(&png_bytes(&image)).unwrap();
        assert_eq!(surface.width(), 8);
        assert_eq!(surface.height(), 6);
        assert_eq!(surface.pixel(7, 5), [10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = ImageCrateDecoder.decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = ImageCrateDecoder.decode(&[]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_region_and_resize() {
        let image = RgbaImage::from_fn(10, 10, |x, _| {
            if x < 5 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 255, 255, 255]) }
        });
        let surface = ImageSurface(image);

        let right = surface.region(5, 0, 5, 10);
        assert_eq!(right.pixel(0, 0), [255, 255, 255, 255]);

        let clipped = surface.region(8, 8, 10, 10);
        assert_eq!((clipped.width(), clipped.height()), (2, 2));

        let small = right.resize(12, 12);
        assert_eq!((small.width(), small.height()), (12, 12));
        assert_eq!(small.pixel(6, 6), [255, 255, 255, 255]);
    }

    #[test]
    fn test_resize_empty_surface() {
        let surface = ImageSurface(RgbaImage::new(0, 0));
        let resized = surface.resize(12, 12);
        assert_eq!(resized.width(), 12);
    }

    #[test]
    fn test_decode_data_url() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 0, 255]));
        let url = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes(&image)));
        let surface = decode_data_url(&url).unwrap();
        assert_eq!(surface.mean_rgb(), panel_board_common::Rgb::new(255, 255, 0));
    }

    #[test]
    fn test_decode_data_url_rejects_other_schemes() {
        assert!(decode_data_url("https://example.com/board.png").is_err());
        assert!(decode_data_url("data:text/plain;base64,aGVsbG8=").is_err());
        assert!(decode_data_url("data:image/png;base64,@@@").is_err());
    }
}
