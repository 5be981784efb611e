//! Panel Board Common Library
//!
//! 盤面写真からパネル配置を推定する認識エンジン（CLIと他のホストで共有）

pub mod board;
pub mod classify;
pub mod confidence;
pub mod decode;
pub mod difficulty;
pub mod error;
pub mod labels;
pub mod matching;
pub mod partition;
pub mod pipeline;
pub mod pixels;
pub mod signature;
pub mod types;

pub use board::BoardLayout;
pub use decode::{ImageDecoder, RawRgbaDecoder};
pub use difficulty::Difficulty;
pub use error::{Error, Result};
pub use pipeline::{build_result, detect_panels, recognize_bytes, recognize_surface};
pub use pixels::{PixelSurface, RgbaBuffer};
pub use types::{DetectedPanel, GridSize, PanelKind, Position, RecognitionResult, Rgb};
