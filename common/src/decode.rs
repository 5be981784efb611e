//! 画像デコードの抽象化

use crate::error::{Error, Result};
use crate::pixels::{PixelSurface, RgbaBuffer};

/// 画像バイト列をピクセルバッファに変換する
///
/// 同じバイト列からは常に同じピクセルが得られること。
pub trait ImageDecoder {
    type Surface: PixelSurface;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Surface>;
}

/// 空データはどのデコーダでも同じメッセージで弾く
pub fn ensure_not_empty(bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        return Err(Error::Decode("empty image data".to_string()));
    }
    Ok(())
}

/// 既にデコード済みのRGBAバイト列（canvasのImageData等）をそのまま受け取る
#[derive(Debug, Clone, Copy)]
pub struct RawRgbaDecoder {
    pub width: u32,
    pub height: u32,
}

impl ImageDecoder for RawRgbaDecoder {
    type Surface = RgbaBuffer;

    fn decode(&self, bytes: &[u8]) -> Result<RgbaBuffer> {
        ensure_not_empty(bytes)?;
        RgbaBuffer::new(self.width, self.height, bytes.to_vec())
            .map_err(|e| Error::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes_fail() {
        let decoder = RawRgbaDecoder { width: 1, height: 1 };
        let err = decoder.decode(&[]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_length_mismatch_is_decode_error() {
        let decoder = RawRgbaDecoder { width: 2, height: 2 };
        let err = decoder.decode(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_decode_raw_rgba() {
        let decoder = RawRgbaDecoder { width: 1, height: 2 };
        let buf = decoder.decode(&[1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
        assert_eq!(buf.width(), 1);
        assert_eq!(buf.pixel(0, 1), [4, 5, 6, 255]);
    }
}
