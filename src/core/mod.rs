//! Core-Geometrie: Tangentenpunkte, Wendekreise und Bögen.
//!
//! Reine Funktionen ohne UI-Abhängigkeit, pro Frame aus dem aktuellen Zustand neu berechnet.

pub mod dubins;
mod error;
pub mod geometry;
pub mod tangent;

pub use dubins::{
    solve as solve_dubins, turning_circles, ArcSweep, DubinsSolution, Pose, TurnSide, TurnTangent,
    TurningCircles, DEGENERATE_MARGIN,
};
pub use error::GeometryError;
pub use geometry::{heading_between, rotate, wrap_angle, wrapped_degrees, Circle};
pub use tangent::{half_angle, tangent_point, tangent_points, Rotation, TangentPoints};
