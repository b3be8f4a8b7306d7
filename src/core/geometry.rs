//! Rein-mathematische Hilfsfunktionen ohne egui-Abhängigkeit.
//!
//! Alle Koordinaten sind Screen-Koordinaten: Ursprung oben links, +Y nach unten.

use std::f32::consts::TAU;

use glam::Vec2;

use super::GeometryError;

/// Kreis aus Mittelpunkt und Radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Mittelpunkt in Screen-Koordinaten
    pub center: Vec2,
    /// Radius in Pixeln (> 0)
    pub radius: f32,
}

impl Circle {
    /// Erstellt einen neuen Kreis.
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Prüft den Radius auf `> 0` und Endlichkeit.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.radius.is_finite() && self.radius > 0.0 {
            Ok(())
        } else {
            Err(GeometryError::InvalidRadius(self.radius))
        }
    }

    /// Punkt auf dem Kreisrand unter dem gegebenen Screen-Winkel.
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + self.radius * Vec2::from_angle(angle)
    }

    /// Screen-Winkel eines Punkts relativ zum Mittelpunkt.
    pub fn angle_of(&self, point: Vec2) -> f32 {
        let v = point - self.center;
        v.y.atan2(v.x)
    }
}

/// Dreht einen Vektor um `theta` (Drehmatrix, im Screen-Raum im Uhrzeigersinn sichtbar).
pub fn rotate(v: Vec2, theta: f32) -> Vec2 {
    Vec2::from_angle(theta).rotate(v)
}

/// Normalisiert einen Winkel auf `[0, 2π)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid kann bei -ε auf genau TAU runden
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Winkel in Grad, normalisiert auf `[0, 360)`.
pub fn wrapped_degrees(angle: f32) -> f32 {
    wrap_angle(angle).to_degrees()
}

/// Richtung (Screen-Winkel) von `from` nach `to`.
///
/// Gibt einen Fehler zurück wenn beide Punkte zusammenfallen.
pub fn heading_between(from: Vec2, to: Vec2) -> Result<f32, GeometryError> {
    let v = to - from;
    if v.length_squared() == 0.0 {
        return Err(GeometryError::ZeroLengthVector);
    }
    Ok(v.y.atan2(v.x))
}

/// Formatiert einen Punkt als `(x, y)` mit gerundeten Pixelwerten.
pub fn format_point(p: Vec2) -> String {
    format!("({}, {})", p.x.round() as i32, p.y.round() as i32)
}
