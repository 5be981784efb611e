use clap::{Parser, Subcommand};
use panel_board_common::Difficulty;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "panel-board")]
#[command(about = "盤面写真からパネル配置を読み取るツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 盤面画像を1枚認識
    Recognize {
        /// 盤面画像（盤面ぴったりに切り抜いたもの）
        #[arg(required = true)]
        image: PathBuf,

        /// 難易度 (easy/medium/hard/expert)。省略時は設定値
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// 認識結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 確認を求める信頼度の閾値（0.0-1.0）。省略時は設定値
        #[arg(long)]
        threshold: Option<f64>,

        /// 信頼度が低くても確認せずに保存
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// フォルダ内の盤面画像をまとめて認識
    Batch {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 難易度 (easy/medium/hard/expert)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// レポートJSONの出力先（デフォルト: 入力フォルダ/recognition.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 難易度ごとの盤面サイズを表示
    Difficulties,

    /// 設定を表示/編集
    Config {
        /// 既定の難易度を設定
        #[arg(long)]
        set_difficulty: Option<Difficulty>,

        /// 確認の閾値を設定
        #[arg(long)]
        set_threshold: Option<f64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
