//! Render-Aufbau der Dubins-Ansicht.

use std::f32::consts::PI;

use glam::Vec2;

use super::DubinsScene;
use crate::core::geometry::format_point;
use crate::core::{wrapped_degrees, Pose, TurnSide};
use crate::shared::{RenderScene, VizOptions};

/// Schaftlänge des Pfeils.
const ARROW_LENGTH: f32 = 30.0;
/// Länge der Pfeilspitzen-Striche.
const ARROW_HEAD_LENGTH: f32 = 7.0;
/// Linienstärke des Pfeils.
const ARROW_WIDTH: f32 = 3.0;
/// Maximale Segmentlänge beim Abtasten der Bögen.
const ARC_SEGMENT_LENGTH: f32 = 3.0;

/// Baut die Render-Szene: Wendekreise, Tangenten, Bögen, Pfeil und Ziel.
pub(super) fn build(scene: &DubinsScene, options: &VizOptions) -> RenderScene {
    let colors = &options.dubins;
    let mut rs = RenderScene::new(options);
    let p = scene.destination;

    match scene.solution() {
        Ok(solution) => {
            let turns = [solution.left, solution.right];

            for turn in turns.iter().flatten() {
                rs.circle_outline(turn.circle.center, turn.circle.radius, colors.circle_color);
            }
            for turn in turns.iter().flatten() {
                rs.line(turn.circle.center, p, 1.0, colors.circle_color);
            }
            for turn in turns.iter().flatten() {
                let q = turn.tangent_point;
                rs.line(turn.circle.center, q, 1.0, colors.circle_color);
                rs.line(p, q, 1.0, colors.highlight_color);
                rs.dot(q, colors.circle_color);
                rs.label(q, side_label(turn.side));
                rs.polyline(turn.arc.sample(ARC_SEGMENT_LENGTH), 1.0, colors.highlight_color);
            }
        }
        Err(e) => log::warn!("Wendekreise nicht berechenbar: {e}"),
    }

    // Pfeil
    for [from, to] in arrow_segments(scene.pose) {
        rs.line(from, to, ARROW_WIDTH, colors.primary_color);
    }
    rs.label(scene.pose.position, "O");

    // Ziel
    rs.dot(p, colors.primary_color);
    rs.label(p, "P");

    rs.info(format!(
        "Arrow: {}, {:.3}, r={:.1}",
        format_point(scene.pose.position),
        wrapped_degrees(scene.pose.heading),
        scene.turning_radius
    ));
    rs.info(format!("P: {}", format_point(p)));

    rs
}

fn side_label(side: TurnSide) -> &'static str {
    match side {
        TurnSide::Left => "LQ",
        TurnSide::Right => "RQ",
    }
}

/// Schaft und die beiden Spitzen-Striche (±135° zur Fahrtrichtung).
pub(super) fn arrow_segments(pose: Pose) -> [[Vec2; 2]; 3] {
    let tip = pose.position + Vec2::from_angle(pose.heading) * ARROW_LENGTH;
    let head_a = tip + Vec2::from_angle(pose.heading + 3.0 * PI / 4.0) * ARROW_HEAD_LENGTH;
    let head_b = tip + Vec2::from_angle(pose.heading + 5.0 * PI / 4.0) * ARROW_HEAD_LENGTH;
    [[pose.position, tip], [tip, head_a], [tip, head_b]]
}
