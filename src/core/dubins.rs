//! Wendekreise und Tangentenbögen für eine gerichtete Pose (Dubins-Geometrie).
//!
//! Gezeigt werden nur die beiden Einzelkurven-Konstruktionen (links/rechts
//! abbiegen, dann geradeaus zum Ziel). Eine Auswahl des kürzesten Pfads
//! unter LSL/RSR/LSR/RSL findet nicht statt.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use super::geometry::{heading_between, wrap_angle, Circle};
use super::tangent::{tangent_point, Rotation};
use super::GeometryError;

/// Zusatzabstand zum Wendekreisradius, unterhalb dessen ein Wendekreis als degeneriert gilt.
pub const DEGENERATE_MARGIN: f32 = 2.0;

/// Position und Fahrtrichtung eines gerichteten Punkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in Screen-Koordinaten
    pub position: Vec2,
    /// Fahrtrichtung in Radiant (Screen-Winkel, +Y nach unten)
    pub heading: f32,
}

impl Pose {
    /// Erstellt eine neue Pose.
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Einheitsvektor der Fahrtrichtung.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }
}

/// Abbiegerichtung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSide {
    Left,
    Right,
}

impl TurnSide {
    /// Winkelversatz des Kreismittelpunkts gegenüber der Fahrtrichtung.
    fn center_offset(self) -> f32 {
        match self {
            TurnSide::Left => -FRAC_PI_2,
            TurnSide::Right => FRAC_PI_2,
        }
    }

    /// Drehrichtung für die Tangentenkonstruktion zum Ziel.
    fn rotation(self) -> Rotation {
        match self {
            TurnSide::Left => Rotation::Positive,
            TurnSide::Right => Rotation::Negative,
        }
    }
}

/// Linker und rechter Wendekreis einer Pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurningCircles {
    pub left: Circle,
    pub right: Circle,
}

/// Kreisbogen mit Startwinkel und vorzeichenbehaftetem Überstreichwinkel.
///
/// Negativer `sweep` läuft im Screen-Raum gegen den Uhrzeigersinn (Linkskurve),
/// positiver im Uhrzeigersinn (Rechtskurve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub circle: Circle,
    pub start_angle: f32,
    pub sweep: f32,
}

impl ArcSweep {
    /// Bogen vom Berührpunkt der Pose bis zum Tangentenpunkt mit Austrittsrichtung `exit_heading`.
    pub fn between(circle: Circle, side: TurnSide, heading: f32, exit_heading: f32) -> Self {
        match side {
            TurnSide::Left => Self {
                circle,
                start_angle: heading + FRAC_PI_2,
                sweep: -wrap_angle(heading - exit_heading),
            },
            TurnSide::Right => Self {
                circle,
                start_angle: heading - FRAC_PI_2,
                sweep: wrap_angle(exit_heading - heading),
            },
        }
    }

    /// Endwinkel des Bogens.
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep
    }

    /// Bogenlänge in Pixeln.
    pub fn length(&self) -> f32 {
        self.sweep.abs() * self.circle.radius
    }

    /// Tastet den Bogen als Polylinie ab (Start und Ende eingeschlossen).
    pub fn sample(&self, max_segment_length: f32) -> Vec<Vec2> {
        let segments = (self.length() / max_segment_length.max(f32::EPSILON))
            .ceil()
            .max(1.0) as usize;
        (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                self.circle.point_at(self.start_angle + t * self.sweep)
            })
            .collect()
    }
}

/// Tangentenkonstruktion auf einem Wendekreis in Richtung Ziel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnTangent {
    pub side: TurnSide,
    pub circle: Circle,
    /// Punkt, an dem die Kurve in die Gerade zum Ziel übergeht
    pub tangent_point: Vec2,
    /// Richtung vom Tangentenpunkt zum Ziel
    pub exit_heading: f32,
    /// Bogen von der Pose bis zum Tangentenpunkt
    pub arc: ArcSweep,
}

/// Beide Wendekreise samt (optionaler) Tangentenkonstruktion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DubinsSolution {
    pub circles: TurningCircles,
    /// `None` wenn der linke Wendekreis degeneriert ist
    pub left: Option<TurnTangent>,
    /// `None` wenn der rechte Wendekreis degeneriert ist
    pub right: Option<TurnTangent>,
}

/// Wendekreis einer Seite: Mittelpunkt im Abstand `radius` quer zur Fahrtrichtung.
pub fn turning_circle(pose: Pose, radius: f32, side: TurnSide) -> Circle {
    let offset = Vec2::from_angle(pose.heading + side.center_offset()) * radius;
    Circle::new(pose.position + offset, radius)
}

/// Linker und rechter Wendekreis.
pub fn turning_circles(pose: Pose, radius: f32) -> TurningCircles {
    TurningCircles {
        left: turning_circle(pose, radius, TurnSide::Left),
        right: turning_circle(pose, radius, TurnSide::Right),
    }
}

/// Ein Wendekreis ist degeneriert, wenn das Ziel näher als `r + 2` am Mittelpunkt liegt.
pub fn is_degenerate(circle: Circle, destination: Vec2) -> bool {
    circle.center.distance(destination) < circle.radius + DEGENERATE_MARGIN
}

/// Tangentenkonstruktion für eine Seite; `Ok(None)` bei degeneriertem Wendekreis.
pub fn turn_tangent(
    pose: Pose,
    radius: f32,
    side: TurnSide,
    destination: Vec2,
) -> Result<Option<TurnTangent>, GeometryError> {
    let circle = turning_circle(pose, radius, side);
    circle.validate()?;

    if is_degenerate(circle, destination) {
        return Ok(None);
    }

    let tangent_point = tangent_point(circle, destination, side.rotation())?;
    let exit_heading = heading_between(tangent_point, destination)?;

    Ok(Some(TurnTangent {
        side,
        circle,
        tangent_point,
        exit_heading,
        arc: ArcSweep::between(circle, side, pose.heading, exit_heading),
    }))
}

/// Berechnet beide Wendekreise und ihre Tangentenkonstruktionen zum Ziel.
pub fn solve(pose: Pose, radius: f32, destination: Vec2) -> Result<DubinsSolution, GeometryError> {
    Ok(DubinsSolution {
        circles: turning_circles(pose, radius),
        left: turn_tangent(pose, radius, TurnSide::Left, destination)?,
        right: turn_tangent(pose, radius, TurnSide::Right, destination)?,
    })
}
