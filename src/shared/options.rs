//! Zentrale Konfiguration für Kurven-Host und Resampling.
//!
//! `CurveOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::END_POINT_TOLERANCE;
use glam::Vec3;
use serde::{Deserialize, Serialize};

// ── Resampling ──────────────────────────────────────────────────────

/// Standard-Auflösung für `calculate_points_on_curve` (Abstände über die ganze Kurve).
pub const DEFAULT_RESOLUTION: usize = 32;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl an Undo-Schritten.
pub const HISTORY_DEPTH: usize = 100;

// ── Bearbeitungsraum ────────────────────────────────────────────────

/// Raum, in dem Punkte bearbeitet werden dürfen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveMode {
    /// Freie Bearbeitung im Raum
    #[default]
    #[serde(rename = "3d")]
    Mode3D,
    /// Alle Positionen werden auf die lokale XY-Ebene (z = 0) gelegt
    #[serde(rename = "2d")]
    Mode2D,
}

impl CurveMode {
    /// Beschränkt eine lokale Position auf den Bearbeitungsraum.
    pub fn constrain(self, local: Vec3) -> Vec3 {
        match self {
            CurveMode::Mode3D => local,
            CurveMode::Mode2D => local.with_z(0.0),
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `bezier_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveOptions {
    /// Auflösung, wenn das Skript keine eigene angibt
    #[serde(default = "default_resolution")]
    pub default_resolution: usize,
    /// Abstand, ab dem der Endanker zusätzlich ausgegeben wird
    #[serde(default = "default_end_point_tolerance")]
    pub end_point_tolerance: f32,
    /// Maximale Undo-Tiefe des Hosts
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
    /// Bearbeitungsraum neuer Hosts
    #[serde(default)]
    pub curve_mode: CurveMode,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            default_resolution: DEFAULT_RESOLUTION,
            end_point_tolerance: END_POINT_TOLERANCE,
            history_depth: HISTORY_DEPTH,
            curve_mode: CurveMode::Mode3D,
        }
    }
}

/// Serde-Default für `default_resolution` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_end_point_tolerance() -> f32 {
    END_POINT_TOLERANCE
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl CurveOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_path_editor.toml")
    }
}
