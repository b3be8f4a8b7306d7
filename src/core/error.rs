//! Fehlertypen der Geometrie-Löser.

use thiserror::Error;

/// Fehler bei der Tangenten- und Wendekreis-Berechnung.
///
/// Tritt nur bei degenerierter Geometrie auf; die Eingabeschicht verhindert
/// diese Fälle im Normalbetrieb bereits beim Platzieren der Punkte.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Der Punkt liegt auf oder innerhalb des Kreises (`d <= r`).
    #[error("Punkt liegt innerhalb des Kreises (Abstand {distance:.2} <= Radius {radius:.2})")]
    PointInsideCircle { distance: f32, radius: f32 },
    /// Radius ist nicht positiv oder nicht endlich.
    #[error("Ungültiger Radius: {0}")]
    InvalidRadius(f32),
    /// Richtungsvektor hat Länge 0.
    #[error("Richtungsvektor hat Länge 0")]
    ZeroLengthVector,
}
