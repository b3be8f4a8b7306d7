//! Tangentenpunkte von einem externen Punkt an einen Kreis.
//!
//! Konstruktion: Halbwinkel `θ = acos(r/d)` zwischen `OP` und `OQ`,
//! Vektor `P−O` um `±θ` drehen, auf Länge `r` skalieren, um `O` verschieben.

use std::cmp::Ordering;

use glam::Vec2;

use super::geometry::{rotate, Circle};
use super::GeometryError;

/// Drehrichtung des Vektors `P−O` bei der Tangentenkonstruktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Drehung um `+θ` (liefert Q1)
    Positive,
    /// Drehung um `−θ` (liefert Q2)
    Negative,
}

impl Rotation {
    /// Vorzeichen als Faktor.
    pub fn sign(self) -> f32 {
        match self {
            Rotation::Positive => 1.0,
            Rotation::Negative => -1.0,
        }
    }
}

/// Ergebnis der Tangentenberechnung für beide Drehrichtungen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPoints {
    /// Tangentenpunkt bei Drehung um `+θ`
    pub q1: Vec2,
    /// Tangentenpunkt bei Drehung um `−θ`
    pub q2: Vec2,
    /// Abstand Mittelpunkt → externer Punkt
    pub distance: f32,
    /// Halbwinkel `θ` in Radiant
    pub half_angle: f32,
}

/// Halbwinkel `θ = acos(r/d)` für einen externen Punkt im Abstand `d`.
///
/// Liegt für `d > r` in `[0, π/2)`.
pub fn half_angle(radius: f32, distance: f32) -> Result<f32, GeometryError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::InvalidRadius(radius));
    }
    if distance.partial_cmp(&radius) != Some(Ordering::Greater) {
        return Err(GeometryError::PointInsideCircle { distance, radius });
    }
    Ok((radius / distance).acos())
}

/// Berechnet einen einzelnen Tangentenpunkt für die gegebene Drehrichtung.
pub fn tangent_point(
    circle: Circle,
    point: Vec2,
    rotation: Rotation,
) -> Result<Vec2, GeometryError> {
    let distance = circle.center.distance(point);
    let theta = half_angle(circle.radius, distance)?;
    Ok(construct(circle, point, distance, rotation.sign() * theta))
}

/// Berechnet beide Tangentenpunkte Q1 (`+θ`) und Q2 (`−θ`).
pub fn tangent_points(circle: Circle, point: Vec2) -> Result<TangentPoints, GeometryError> {
    let distance = circle.center.distance(point);
    let theta = half_angle(circle.radius, distance)?;

    Ok(TangentPoints {
        q1: construct(circle, point, distance, theta),
        q2: construct(circle, point, distance, -theta),
        distance,
        half_angle: theta,
    })
}

fn construct(circle: Circle, point: Vec2, distance: f32, theta: f32) -> Vec2 {
    let v = point - circle.center;
    rotate(v, theta) * (circle.radius / distance) + circle.center
}
