use anyhow::{Context, Result};
use panel_board::synth::render_board;
use std::env;
use std::path::PathBuf;

const DEFAULT_CELL_PX: u32 = 64;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: synth_board <layout> <output.png> [cell_px]");
        eprintln!("  e.g. synth_board 'AB+C/DAEB/C-DE' easy.png");
        std::process::exit(1);
    }

    let layout = &args[1];
    let output = PathBuf::from(&args[2]);
    let cell = match args.get(3) {
        Some(value) => value
            .parse::<u32>()
            .with_context(|| format!("invalid cell size: {value}"))?,
        None => DEFAULT_CELL_PX,
    };

    let image = render_board(layout, cell).with_context(|| format!("render {layout}"))?;
    image
        .save(&output)
        .with_context(|| format!("write {}", output.display()))?;

    println!("{} ({}x{})", output.display(), image.width(), image.height());
    Ok(())
}
