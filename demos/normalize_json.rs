use std::{env, fs};

use anyhow::Context;
use pptx_normalizer::{normalize_presentation, Element};

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level.
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let json_path = env::args()
        .nth(1)
        .context("usage: normalize_json <element-tree.json>")?;

    log::info!("Loading element tree from {}...", json_path);
    let json_string = fs::read_to_string(&json_path)
        .with_context(|| format!("Unable to read {}", json_path))?;
    let tree = Element::from_json(&json_string).context("Failed to read element tree")?;

    let presentation = normalize_presentation(&tree)?;
    log::info!(
        "Normalized {} slide(s) and {} master slide(s).",
        presentation.slides.len(),
        presentation.master_slides.len()
    );

    println!("{}", serde_json::to_string_pretty(&presentation)?);
    Ok(())
}
