use glam::Vec2;

use crate::core::{tangent_points, Circle, GeometryError, TangentPoints};
use crate::shared::PLACEMENT_MARGIN;

/// Interaktionszustand der Kreistangenten-Ansicht.
#[derive(Debug, Clone, PartialEq)]
pub struct TangentScene {
    /// Kreis mit festem Radius
    pub circle: Circle,
    /// Externer Punkt P
    pub destination: Vec2,
}

impl TangentScene {
    /// Erstellt den Zustand aus Kreis und Zielpunkt.
    pub fn new(circle: Circle, destination: Vec2) -> Self {
        Self {
            circle,
            destination,
        }
    }

    /// Mindestabstand zwischen Kreismittelpunkt und Ziel.
    pub fn min_distance(&self) -> f32 {
        self.circle.radius + PLACEMENT_MARGIN
    }

    /// Darf der Kreismittelpunkt nach `pos` versetzt werden?
    pub fn can_place_center(&self, pos: Vec2) -> bool {
        pos.distance(self.destination) > self.min_distance()
    }

    /// Darf das Ziel nach `pos` versetzt werden?
    pub fn can_place_destination(&self, pos: Vec2) -> bool {
        pos.distance(self.circle.center) > self.min_distance()
    }

    /// Tangentenpunkte für den aktuellen Zustand.
    pub fn tangents(&self) -> Result<TangentPoints, GeometryError> {
        tangent_points(self.circle, self.destination)
    }
}
