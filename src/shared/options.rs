//! Zentrale Konfiguration für den Gasline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::SNAP_TOLERANCE;

// ── Element-Shapes ──────────────────────────────────────────────────

/// Kantenlänge der Quellen-Box in Canvas-Einheiten.
pub const SOURCE_SIZE: f32 = 40.0;
/// Durchmesser des Schalter-Ovals.
pub const SWITCH_DIAMETER: f32 = 40.0;
/// Kantenlänge der Verbinder-Raute.
pub const CONNECTOR_SIZE: f32 = 30.0;

// ── Interaktion ─────────────────────────────────────────────────────

/// Maximalabstand zur Linie, bis zu dem ein Klick ein Segment trifft.
pub const SEGMENT_HIT_DISTANCE: f32 = 10.0;

// ── Platzierungsraster ──────────────────────────────────────────────

/// Abstand zwischen automatisch platzierten Elementen.
pub const GRID_SPACING: f32 = 60.0;
/// Elemente pro Rasterzeile.
pub const ELEMENTS_PER_ROW: u32 = 5;

/// Zur Laufzeit änderbare Editor-Optionen.
///
/// Wird als `gasline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Achsweise Snap-Toleranz für Nachbarschaft und Endpunkt-Snapping
    pub snap_tolerance: f32,
    /// Hit-Abstand für Klicks auf Segment-Linien
    pub segment_hit_distance: f32,
    /// Rasterabstand für die automatische Platzierung neuer Elemente
    pub grid_spacing: f32,
    /// Elemente pro Rasterzeile
    pub elements_per_row: u32,
    /// Ausgangsposition neuer Quellen
    pub source_origin: Vec2,
    /// Ausgangsposition neuer Schalter
    pub switch_origin: Vec2,
    /// Ausgangsposition neuer Verbinder
    pub connector_origin: Vec2,
    /// Startpunkt neuer Pipe-Segmente
    pub pipeline_start: Vec2,
    /// Endpunkt neuer Pipe-Segmente
    pub pipeline_end: Vec2,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_tolerance: SNAP_TOLERANCE,
            segment_hit_distance: SEGMENT_HIT_DISTANCE,
            grid_spacing: GRID_SPACING,
            elements_per_row: ELEMENTS_PER_ROW,
            source_origin: Vec2::new(100.0, 100.0),
            switch_origin: Vec2::new(200.0, 100.0),
            connector_origin: Vec2::new(300.0, 100.0),
            pipeline_start: Vec2::new(400.0, 100.0),
            pipeline_end: Vec2::new(500.0, 100.0),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Fehlende oder defekte Dateien führen zu Defaults, nie zu einem Fehler.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => options,
                Err(err) => {
                    log::warn!("Optionen in {} nicht lesbar: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Standard-Speicherort neben der Binary.
    pub fn default_path() -> std::path::PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
            .unwrap_or_default()
            .join("gasline_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_core_tolerance() {
        let options = EditorOptions::default();
        assert_eq!(options.snap_tolerance, SNAP_TOLERANCE);
        assert_eq!(options.elements_per_row, 5);
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let mut options = EditorOptions::default();
        options.snap_tolerance = 12.5;
        options.source_origin = Vec2::new(50.0, 75.0);

        let serialized = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&serialized).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let parsed: EditorOptions = toml::from_str("snap_tolerance = 30.0\n").expect("parsebar");
        assert_eq!(parsed.snap_tolerance, 30.0);
        assert_eq!(parsed.grid_spacing, GRID_SPACING);
    }
}
