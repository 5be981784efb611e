use clap::Parser;
use panel_board::{batch, cli, config, error, recognizer, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::{PanelBoardError, Result};
use panel_board_common::{BoardLayout, Difficulty, RecognitionResult};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_result(result: &RecognitionResult, difficulty: Difficulty) {
    let layout = BoardLayout::from_panels(difficulty.grid_size(), &result.panels);
    println!("{}\n", layout.render());

    let counts: Vec<String> = layout
        .label_counts()
        .iter()
        .map(|(label, count)| format!("{}×{}", label, count))
        .collect();
    println!("  パネル: {}", counts.join(" "));
    println!(
        "  信頼度: {:.1}%  網羅率: {:.1}%  ({:.0}ms)",
        result.confidence * 100.0,
        result.completeness * 100.0,
        result.processing_time_ms
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Recognize { image, difficulty, output, threshold, yes } => {
            println!("🧩 panel-board - 盤面認識\n");

            if !image.is_file() {
                return Err(PanelBoardError::FileNotFound(image.display().to_string()));
            }

            let difficulty = difficulty.unwrap_or(config.default_difficulty);
            let threshold = threshold.unwrap_or(config.confirm_threshold);

            // 1. 認識
            println!("[1/3] 画像を認識中... (難易度: {})", difficulty);
            let result = recognizer::recognize_file(&image, difficulty).await;
            if !result.success {
                return Err(PanelBoardError::Recognition(result.errors.join(", ")));
            }
            println!("✔ {}枚のパネルを検出\n", result.panels.len());

            // 2. 結果表示
            println!("[2/3] 認識結果");
            print_result(&result, difficulty);
            println!();

            // 3. 保存
            let Some(output) = output else {
                if result.needs_confirmation(threshold) {
                    println!("⚠ 認識精度が低い可能性があります（閾値 {:.0}%）", threshold * 100.0);
                }
                println!("✅ 完了");
                return Ok(());
            };

            if result.needs_confirmation(threshold) && !yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "認識精度が低い可能性があります（{:.1}%）。それでも保存しますか？",
                        result.confidence * 100.0
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| PanelBoardError::Prompt(e.to_string()))?;
                if !confirmed {
                    println!("保存を中止しました");
                    return Ok(());
                }
            }

            println!("[3/3] 結果を保存中...");
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&output, json)?;
            println!("✔ 結果を保存: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Batch { folder, difficulty, output } => {
            println!("🧩 panel-board - 一括認識\n");

            let difficulty = difficulty.unwrap_or(config.default_difficulty);

            // 1. 画像スキャン
            println!("[1/3] 画像をスキャン中...");
            let images = scanner::scan_folder(&folder)?;
            if images.is_empty() {
                return Err(PanelBoardError::NoImagesFound(folder.display().to_string()));
            }
            println!("✔ {}枚の画像を検出\n", images.len());

            // 2. 認識
            println!("[2/3] 認識中... (難易度: {})", difficulty);
            let report = batch::recognize_batch(&images, difficulty, config.show_progress);
            let summary = report.summary(config.confirm_threshold);
            println!(
                "✔ 成功 {} / 失敗 {} / 要確認 {}\n",
                summary.succeeded, summary.failed, summary.low_confidence
            );

            if cli.verbose {
                for entry in &report.entries {
                    println!(
                        "  {}: {:.1}%{}",
                        entry.file_name,
                        entry.result.confidence * 100.0,
                        if entry.result.success { "" } else { " (失敗)" }
                    );
                }
            }

            // 3. 保存
            println!("[3/3] レポートを保存中...");
            let output = output.unwrap_or_else(|| folder.join("recognition.json"));
            report.save(&output)?;
            println!("✔ レポートを保存: {}", output.display());

            println!("\n✅ 完了");
        }

        Commands::Difficulties => {
            println!("難易度  盤面  景品ペア  ラベル");
            for difficulty in Difficulty::all() {
                let grid = difficulty.grid_size();
                println!(
                    "  {:<7} {}x{}  {:>4}      {}",
                    difficulty.key(),
                    grid.rows,
                    grid.cols,
                    grid.required_pairs,
                    difficulty.prize_labels().join("")
                );
            }
        }

        Commands::Config { set_difficulty, set_threshold, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(difficulty) = set_difficulty {
                config.default_difficulty = difficulty;
                changed = true;
                println!("✔ 既定の難易度を {} に設定しました", difficulty);
            }

            if let Some(threshold) = set_threshold {
                config.set_confirm_threshold(threshold)?;
                changed = true;
                println!("✔ 確認の閾値を {:.2} に設定しました", threshold);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  既定の難易度: {}", config.default_difficulty);
                println!("  確認の閾値: {:.2}", config.confirm_threshold);
                println!("  進捗表示: {}", if config.show_progress { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
