//! Render-Aufbau der Kreistangenten-Ansicht.

use super::TangentScene;
use crate::core::geometry::format_point;
use crate::shared::{RenderScene, VizOptions};

/// Baut die Render-Szene: Kreis, Punkte, Verbindung O→P, Radien und Tangenten.
pub(super) fn build(scene: &TangentScene, options: &VizOptions) -> RenderScene {
    let colors = &options.tangent;
    let mut rs = RenderScene::new(options);

    let center = scene.circle.center;
    let radius = scene.circle.radius;
    let p = scene.destination;

    // Kreis
    rs.dot(center, colors.primary_color);
    rs.circle_outline(center, radius, colors.primary_color);
    rs.label(center, "O");

    // Ziel
    rs.dot(p, colors.primary_color);
    rs.label(p, "P");

    rs.line(center, p, 1.0, colors.axis_color);

    rs.info(format!("O: {}, radius={:.1}", format_point(center), radius));
    rs.info(format!("P: {}", format_point(p)));

    match scene.tangents() {
        Ok(tp) => {
            for (q, name) in [(tp.q1, "Q1"), (tp.q2, "Q2")] {
                rs.line(center, q, 1.0, colors.primary_color);
                rs.line(p, q, 1.0, colors.primary_color);
                rs.dot(q, colors.primary_color);
                rs.label(q, name);
            }
            rs.info(format!(
                "Dist(O,P): {:.2}, theta: {:.2}",
                tp.distance,
                tp.half_angle.to_degrees()
            ));
            rs.info(format!(
                "Q1: {}, Q2: {}",
                format_point(tp.q1),
                format_point(tp.q2)
            ));
        }
        Err(e) => {
            rs.info(format!("Dist(O,P): {:.2}, theta: -", center.distance(p)));
            rs.info(format!("Q1/Q2: undefined ({e})"));
        }
    }

    rs
}
