//! Zentrale Konfiguration für beide Visualisierungen.
//!
//! `VizOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context};
use serde::Deserialize;

// ── Fenster & Frame-Takt ────────────────────────────────────────────

/// Feste Canvas-Größe in Pixeln [Breite, Höhe].
pub const CANVAS_SIZE: [f32; 2] = [800.0, 600.0];
/// Ziel-Framerate.
pub const MAX_FPS: f32 = 60.0;
/// Zulässiger Bereich der Ziel-Framerate.
pub const FPS_RANGE: std::ops::RangeInclusive<f32> = 1.0..=1000.0;

// ── Platzierung ─────────────────────────────────────────────────────

/// Mindestabstand über den Radius hinaus, den eine Platzierung einhalten muss.
pub const PLACEMENT_MARGIN: f32 = 1.0;

// ── Text ────────────────────────────────────────────────────────────

/// Schriftgröße für Labels und Info-Zeilen.
pub const LABEL_FONT_SIZE: f32 = 12.0;
/// Versatz der Labels nach links oben.
pub const LABEL_OFFSET: f32 = 12.0;
/// Startposition der Info-Zeilen.
pub const INFO_ORIGIN: [f32; 2] = [10.0, 10.0];
/// Zeilenabstand der Info-Zeilen.
pub const INFO_LINE_HEIGHT: f32 = 16.0;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Hintergrund (Dunkelgrau).
pub const BACKGROUND_COLOR: [f32; 4] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0];
/// Label-Text (Weiß).
pub const LABEL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Info-Zeilen und Hauptgeometrie (Grün).
pub const PRIMARY_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Verbindung Mittelpunkt → Ziel (Dunkelgrün).
pub const AXIS_COLOR: [f32; 4] = [0.0, 150.0 / 255.0, 0.0, 1.0];
/// Wendekreise (Graugrün).
pub const TURNING_CIRCLE_COLOR: [f32; 4] = [60.0 / 255.0, 100.0 / 255.0, 60.0 / 255.0, 1.0];
/// Hervorgehobene Tangenten und Bögen (Gelb).
pub const HIGHLIGHT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// Startzustand und Farben der Kreistangenten-Ansicht.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TangentSceneOptions {
    /// Kreismittelpunkt beim Start
    pub circle_center: [f32; 2],
    /// Fester Kreisradius
    pub circle_radius: f32,
    /// Zielpunkt beim Start
    pub destination: [f32; 2],
    /// Farbe von Kreis, Punkten und Tangenten
    pub primary_color: [f32; 4],
    /// Farbe der Verbindung O → P
    pub axis_color: [f32; 4],
}

impl Default for TangentSceneOptions {
    fn default() -> Self {
        Self {
            circle_center: [130.0, 220.0],
            circle_radius: 70.0,
            destination: [300.0, 420.0],
            primary_color: PRIMARY_COLOR,
            axis_color: AXIS_COLOR,
        }
    }
}

/// Startzustand und Farben der Dubins-Ansicht.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DubinsSceneOptions {
    /// Pfeilposition beim Start
    pub arrow_position: [f32; 2],
    /// Fahrtrichtung beim Start in Grad (Screen-Winkel, 90 = nach unten)
    pub arrow_heading_deg: f32,
    /// Fester Wendekreisradius
    pub turning_radius: f32,
    /// Zielpunkt
    pub destination: [f32; 2],
    /// Farbe von Pfeil und Zielpunkt
    pub primary_color: [f32; 4],
    /// Farbe der Wendekreise und Radien
    pub circle_color: [f32; 4],
    /// Farbe von Tangente und Bogen
    pub highlight_color: [f32; 4],
}

impl Default for DubinsSceneOptions {
    fn default() -> Self {
        Self {
            arrow_position: [130.0, 220.0],
            arrow_heading_deg: 90.0,
            turning_radius: 50.0,
            destination: [300.0, 420.0],
            primary_color: PRIMARY_COLOR,
            circle_color: TURNING_CIRCLE_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einlesbaren Optionen.
/// Wird optional aus `tangent_viz.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct VizOptions {
    /// Ziel-Framerate
    pub max_fps: f32,
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Farbe der Punkt-Labels
    pub label_color: [f32; 4],
    /// Farbe der Info-Zeilen
    pub info_color: [f32; 4],
    /// Schriftgröße (Monospace)
    pub label_font_size: f32,
    /// Versatz der Labels nach links oben
    pub label_offset: f32,
    /// Startposition der Info-Zeilen
    pub info_origin: [f32; 2],
    /// Zeilenabstand der Info-Zeilen
    pub info_line_height: f32,
    /// Kreistangenten-Ansicht
    pub tangent: TangentSceneOptions,
    /// Dubins-Ansicht
    pub dubins: DubinsSceneOptions,
}

impl Default for VizOptions {
    fn default() -> Self {
        Self {
            max_fps: MAX_FPS,
            background_color: BACKGROUND_COLOR,
            label_color: LABEL_COLOR,
            info_color: PRIMARY_COLOR,
            label_font_size: LABEL_FONT_SIZE,
            label_offset: LABEL_OFFSET,
            info_origin: INFO_ORIGIN,
            info_line_height: INFO_LINE_HEIGHT,
            tangent: TangentSceneOptions::default(),
            dubins: DubinsSceneOptions::default(),
        }
    }
}

impl VizOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst und validiert Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content).context("TOML konnte nicht gelesen werden")?;
        opts.validate()?;
        Ok(opts)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("tangent_viz"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("tangent_viz.toml")
    }

    /// Prüft Wertebereiche und die Startplatzierung beider Ansichten.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            FPS_RANGE.contains(&self.max_fps),
            "max_fps muss in {:?} liegen (ist {})",
            FPS_RANGE,
            self.max_fps
        );
        ensure!(
            self.label_font_size.is_finite() && self.label_font_size > 0.0,
            "label_font_size muss positiv sein (ist {})",
            self.label_font_size
        );
        ensure!(
            self.info_line_height.is_finite() && self.info_line_height > 0.0,
            "info_line_height muss positiv sein (ist {})",
            self.info_line_height
        );
        ensure!(self.label_offset.is_finite(), "label_offset muss endlich sein");
        ensure_finite_point("info_origin", self.info_origin)?;

        let t = &self.tangent;
        ensure_finite_point("tangent.circle_center", t.circle_center)?;
        ensure_finite_point("tangent.destination", t.destination)?;
        ensure!(
            t.circle_radius.is_finite() && t.circle_radius > 0.0,
            "tangent.circle_radius muss positiv sein (ist {})",
            t.circle_radius
        );
        let center = glam::Vec2::from(t.circle_center);
        let destination = glam::Vec2::from(t.destination);
        ensure!(
            center.distance(destination) > t.circle_radius + PLACEMENT_MARGIN,
            "tangent.destination liegt innerhalb des Kreises"
        );

        let d = &self.dubins;
        ensure!(
            d.turning_radius.is_finite() && d.turning_radius > 0.0,
            "dubins.turning_radius muss positiv sein (ist {})",
            d.turning_radius
        );
        ensure!(d.arrow_heading_deg.is_finite(), "dubins.arrow_heading_deg muss endlich sein");
        ensure_finite_point("dubins.arrow_position", d.arrow_position)?;
        ensure_finite_point("dubins.destination", d.destination)?;

        Ok(())
    }

    /// Ziel-Dauer eines Frames. Ungültige Framerate fällt auf `MAX_FPS` zurück.
    pub fn frame_interval(&self) -> Duration {
        Duration::try_from_secs_f32(1.0 / self.max_fps)
            .unwrap_or_else(|_| Duration::from_secs_f32(1.0 / MAX_FPS))
    }
}

fn ensure_finite_point(name: &str, point: [f32; 2]) -> anyhow::Result<()> {
    ensure!(
        point.iter().all(|v| v.is_finite()),
        "{name} muss endlich sein (ist {point:?})"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        assert!(VizOptions::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults_for_missing_fields() {
        let opts = VizOptions::from_toml_str(
            r#"
            max_fps = 30.0

            [tangent]
            circle_radius = 40.0
            "#,
        )
        .expect("gültige Optionen erwartet");

        assert_relative_eq!(opts.max_fps, 30.0);
        assert_relative_eq!(opts.tangent.circle_radius, 40.0);
        assert_eq!(opts.tangent.circle_center, [130.0, 220.0]);
        assert_eq!(opts.dubins, DubinsSceneOptions::default());
    }

    #[test]
    fn test_empty_toml_equals_default() {
        let opts = VizOptions::from_toml_str("").expect("gültige Optionen erwartet");
        assert_eq!(opts, VizOptions::default());
    }

    #[test]
    fn test_destination_inside_circle_is_rejected() {
        let result = VizOptions::from_toml_str(
            r#"
            [tangent]
            circle_center = [100.0, 100.0]
            destination = [120.0, 100.0]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_radius_is_rejected() {
        assert!(VizOptions::from_toml_str("[dubins]\nturning_radius = 0.0").is_err());
        assert!(VizOptions::from_toml_str("[tangent]\ncircle_radius = -5.0").is_err());
        assert!(VizOptions::from_toml_str("max_fps = 0.0").is_err());
    }

    #[test]
    fn test_fps_outside_range_is_rejected() {
        assert!(VizOptions::from_toml_str("max_fps = 1e-30").is_err());
        assert!(VizOptions::from_toml_str("max_fps = 0.5").is_err());
        assert!(VizOptions::from_toml_str("max_fps = 1e9").is_err());
        assert!(VizOptions::from_toml_str("max_fps = nan").is_err());
        assert!(VizOptions::from_toml_str("max_fps = 1.0").is_ok());
    }

    #[test]
    fn test_frame_interval_never_panics() {
        let opts = VizOptions {
            max_fps: 1e-30,
            ..VizOptions::default()
        };
        assert_relative_eq!(opts.frame_interval().as_secs_f32(), 1.0 / 60.0, epsilon = 1e-6);
    }

    #[test]
    fn test_non_finite_positions_are_rejected() {
        for toml in [
            "[dubins]\ndestination = [nan, nan]",
            "[dubins]\narrow_position = [inf, 0.0]",
            "[tangent]\ncircle_center = [nan, 0.0]",
            "[tangent]\ndestination = [0.0, -inf]",
            "info_origin = [nan, 10.0]",
        ] {
            assert!(VizOptions::from_toml_str(toml).is_err(), "akzeptiert: {toml}");
        }
    }

    #[test]
    fn test_invalid_text_layout_is_rejected() {
        assert!(VizOptions::from_toml_str("label_font_size = 0.0").is_err());
        assert!(VizOptions::from_toml_str("label_font_size = nan").is_err());
        assert!(VizOptions::from_toml_str("info_line_height = -16.0").is_err());
        assert!(VizOptions::from_toml_str("label_offset = inf").is_err());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(VizOptions::from_toml_str("max_fps = \"schnell\"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let opts = VizOptions::load_from_file(Path::new("/nonexistent/tangent_viz.toml"));
        assert_eq!(opts, VizOptions::default());
    }

    #[test]
    fn test_frame_interval() {
        let opts = VizOptions::default();
        assert_relative_eq!(opts.frame_interval().as_secs_f32(), 1.0 / 60.0, epsilon = 1e-6);
    }

    #[test]
    fn test_config_path_file_name() {
        let path = VizOptions::config_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("tangent_viz.toml")
        );
    }
}
