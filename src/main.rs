//! Bézier Path Editor (Kommandozeile).
//!
//! Führt ein Kurven-Skript (TOML) aus und gibt Steuerpunkte sowie die
//! resampelten Kurvenpunkte als JSON auf stdout aus.
//!
//! Aufruf: `bezier-path-editor <skript.toml> [optionen.toml]`

use anyhow::Context;
use bezier_path_editor::{CurveOptions, CurveScript};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Bézier Path Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let script_path = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: bezier-path-editor <skript.toml> [optionen.toml]")?;
    let options_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(CurveOptions::config_path);

    let options = CurveOptions::load_from_file(&options_path);
    let script = CurveScript::load_from_file(&script_path)?;
    let output = script
        .run(&options)
        .with_context(|| format!("Skript fehlgeschlagen: {}", script_path.display()))?;

    let json = serde_json::to_string_pretty(&output)?;
    println!("{json}");
    Ok(())
}
