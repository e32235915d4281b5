//! Command-line Braille transcoder.
//!
//! Converts the positional argument (or stdin when omitted) into Unicode
//! Braille, or into JSON dot vectors with `--dots`.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use libbraille::{BrailleConfig, ConversionLog, Engine};
use libbraille_core::utils;

#[derive(Parser, Debug)]
#[command(name = "braille", about = "Transcribe text into uncontracted Braille")]
struct Args {
    /// Text to transcribe; reads stdin when omitted.
    text: Option<String>,

    /// Emit one 6-dot vector per content character as JSON instead of glyphs.
    #[arg(long)]
    dots: bool,

    /// Load a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Persist conversion history to a redb database at this path.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Do not record conversion history.
    #[arg(long)]
    no_history: bool,

    /// Print the recorded history as JSON and exit.
    #[arg(long)]
    show_history: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => BrailleConfig::load_toml(path)
            .map_err(|e| anyhow::anyhow!("load config {}: {e}", path.display()))?,
        None => BrailleConfig::default(),
    };
    if let Some(path) = &args.history {
        config.history_path = Some(path.clone());
    }

    let engine = if args.no_history {
        // capacity 1 keeps history down to a single transient record
        Engine::with_log(config.into_base(), ConversionLog::with_capacity(1))
    } else {
        Engine::from_config(config)?
    };

    if args.show_history {
        let records = engine.history().snapshot();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let raw = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };
    let input = utils::normalize(&raw);

    if args.dots {
        let patterns = engine.convert_to_dots(&input);
        println!("{}", serde_json::to_string(&patterns)?);
    } else {
        println!("{}", engine.convert_to_braille(&input));
    }

    Ok(())
}
