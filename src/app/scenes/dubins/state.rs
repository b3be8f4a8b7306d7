use glam::Vec2;

use crate::core::{solve_dubins, wrap_angle, DubinsSolution, GeometryError, Pose};

/// Interaktionszustand der Dubins-Ansicht.
#[derive(Debug, Clone, PartialEq)]
pub struct DubinsScene {
    /// Pfeilposition und Fahrtrichtung (normalisiert auf `[0, 2π)`)
    pub pose: Pose,
    /// Fester Wendekreisradius
    pub turning_radius: f32,
    /// Zielpunkt P
    pub destination: Vec2,
}

impl DubinsScene {
    /// Erstellt den Zustand; die Fahrtrichtung wird normalisiert.
    pub fn new(pose: Pose, turning_radius: f32, destination: Vec2) -> Self {
        Self {
            pose: Pose::new(pose.position, wrap_angle(pose.heading)),
            turning_radius,
            destination,
        }
    }

    /// Wendekreise und Tangentenkonstruktionen für den aktuellen Zustand.
    pub fn solution(&self) -> Result<DubinsSolution, GeometryError> {
        solve_dubins(self.pose, self.turning_radius, self.destination)
    }
}
