//! Command-Skripte: Startzustand + Command-Liste aus TOML, Ergebnis als JSON.

use super::{CurveCommand, CurveHost};
use crate::shared::CurveOptions;
use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Beschreibung eines Skriptlaufs.
///
/// ```toml
/// origin = [10.0, 0.0, 0.0]
/// resolution = 16
/// closed = false
///
/// [[commands]]
/// op = "add_segment"
/// anchor = [13.0, 0.0, 0.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveScript {
    /// Welt-Ursprung der Kurve
    #[serde(default)]
    pub origin: Vec3,
    /// Resampling-Auflösung (sonst aus den Optionen)
    #[serde(default)]
    pub resolution: Option<usize>,
    /// Kurve nach den Commands schließen
    #[serde(default)]
    pub closed: bool,
    /// Auto-Steuerpunkte nach den Commands einschalten
    #[serde(default)]
    pub auto_set_control_points: bool,
    #[serde(default)]
    pub commands: Vec<CurveCommand>,
}

/// Ergebnis eines Skriptlaufs in Weltkoordinaten.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptOutput {
    /// Wirksame Commands (ohne No-ops), wie sie auf die Kurve angewendet wurden
    pub commands: Vec<CurveCommand>,
    pub control_points: Vec<Vec3>,
    pub points_on_curve: Vec<Vec3>,
}

impl CurveScript {
    /// Parst ein Skript aus TOML-Text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Kurven-Skript ist kein gültiges TOML")
    }

    /// Lädt ein Skript aus einer Datei.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Führt alle Commands auf einem frischen Host aus und resampelt das Ergebnis.
    pub fn run(&self, options: &CurveOptions) -> anyhow::Result<ScriptOutput> {
        let mut host = CurveHost::with_options(self.origin, options);

        for (i, command) in self.commands.iter().enumerate() {
            host.apply(command.clone())
                .with_context(|| format!("Command #{} ({})", i + 1, command.label()))?;
        }
        if self.closed {
            host.apply(CurveCommand::SetClosed { closed: true })?;
        }
        if self.auto_set_control_points {
            host.apply(CurveCommand::SetAutoSetControlPoints { enabled: true })?;
        }

        let resolution = self.resolution.unwrap_or(options.default_resolution);
        let points_on_curve: Vec<Vec3> = host.points_on_curve(resolution).collect();
        log::info!(
            "{} von {} Commands wirksam, {} Segmente, {} Punkte resampelt (Auflösung {})",
            host.command_log().len(),
            self.commands.len(),
            host.segments_count(),
            points_on_curve.len(),
            resolution
        );

        let origin = host.origin();
        let commands = host
            .command_log()
            .entries()
            .iter()
            .map(|c| c.clone().map_positions(|p| p + origin))
            .collect();

        Ok(ScriptOutput {
            commands,
            control_points: host.points(),
            points_on_curve,
        })
    }
}
