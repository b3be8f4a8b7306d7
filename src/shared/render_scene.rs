//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Enthält nur Zeichenprimitive in Canvas-Koordinaten, keine egui-Typen.

use glam::Vec2;

use super::options::VizOptions;

/// Ein einzelnes Zeichenprimitiv.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Strecke
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: [f32; 4],
    },
    /// Kreisumriss
    CircleOutline {
        center: Vec2,
        radius: f32,
        width: f32,
        color: [f32; 4],
    },
    /// Gefüllter Punkt
    Dot {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Offene Polylinie (z.B. abgetasteter Bogen)
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: [f32; 4],
    },
    /// Text, `position` ist die linke obere Ecke
    Label {
        position: Vec2,
        text: String,
        color: [f32; 4],
    },
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Hintergrundfarbe
    pub background: [f32; 4],
    /// Primitive in Zeichenreihenfolge
    pub primitives: Vec<Primitive>,
    /// Info-Zeilen oben links
    pub info_lines: Vec<String>,
    /// Schriftgröße für Labels und Info-Zeilen
    pub font_size: f32,
    /// Startposition der Info-Zeilen
    pub info_origin: Vec2,
    /// Zeilenabstand der Info-Zeilen
    pub info_line_height: f32,
    /// Farbe der Info-Zeilen
    pub info_color: [f32; 4],
    label_offset: f32,
    label_color: [f32; 4],
}

impl RenderScene {
    /// Erstellt eine leere Szene mit Stil-Werten aus den Optionen.
    pub fn new(options: &VizOptions) -> Self {
        Self {
            background: options.background_color,
            primitives: Vec::new(),
            info_lines: Vec::new(),
            font_size: options.label_font_size,
            info_origin: Vec2::from(options.info_origin),
            info_line_height: options.info_line_height,
            info_color: options.info_color,
            label_offset: options.label_offset,
            label_color: options.label_color,
        }
    }

    /// Fügt eine Strecke hinzu.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            width,
            color,
        });
    }

    /// Fügt einen Kreisumriss hinzu.
    pub fn circle_outline(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.primitives.push(Primitive::CircleOutline {
            center,
            radius,
            width: 1.0,
            color,
        });
    }

    /// Fügt einen gefüllten Punkt (Radius 2) hinzu.
    pub fn dot(&mut self, center: Vec2, color: [f32; 4]) {
        self.primitives.push(Primitive::Dot {
            center,
            radius: 2.0,
            color,
        });
    }

    /// Fügt eine Polylinie hinzu. Weniger als zwei Punkte werden ignoriert.
    pub fn polyline(&mut self, points: Vec<Vec2>, width: f32, color: [f32; 4]) {
        if points.len() < 2 {
            return;
        }
        self.primitives.push(Primitive::Polyline {
            points,
            width,
            color,
        });
    }

    /// Fügt ein Label links oberhalb des Ankers hinzu.
    pub fn label(&mut self, anchor: Vec2, text: impl Into<String>) {
        self.primitives.push(Primitive::Label {
            position: anchor - Vec2::splat(self.label_offset),
            text: text.into(),
            color: self.label_color,
        });
    }

    /// Hängt eine Info-Zeile an.
    pub fn info(&mut self, text: impl Into<String>) {
        self.info_lines.push(text.into());
    }

    /// Position der Info-Zeile mit Index `index`.
    pub fn info_position(&self, index: usize) -> Vec2 {
        self.info_origin + Vec2::new(0.0, index as f32 * self.info_line_height)
    }

    /// Alle Label-Texte in Zeichenreihenfolge (für Tests und Logging).
    pub fn label_texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
