use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelBoardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("認識に失敗しました: {0}")]
    Recognition(String),

    #[error("レイアウトが不正です: {0}")]
    InvalidLayout(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] panel_board_common::Error),
}

pub type Result<T> = std::result::Result<T, PanelBoardError>;
