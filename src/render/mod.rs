//! Rendering mit dem egui-Painter.
//!
//! Übersetzt die `RenderScene` (Canvas-Koordinaten) in egui-Shapes
//! innerhalb des Canvas-Rechtecks.

use glam::Vec2;

use crate::shared::{Primitive, RenderScene};

/// Zeichnet eine komplette Szene in `rect`.
///
/// Reihenfolge: Hintergrund, Primitive in Szenen-Reihenfolge, Info-Zeilen.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, color32(scene.background));

    let font = egui::FontId::monospace(scene.font_size);
    let to_screen = |p: Vec2| rect.min + egui::vec2(p.x, p.y);

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment(
                    [to_screen(*from), to_screen(*to)],
                    egui::Stroke::new(*width, color32(*color)),
                );
            }
            Primitive::CircleOutline {
                center,
                radius,
                width,
                color,
            } => {
                painter.circle_stroke(
                    to_screen(*center),
                    *radius,
                    egui::Stroke::new(*width, color32(*color)),
                );
            }
            Primitive::Dot {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(to_screen(*center), *radius, color32(*color));
            }
            Primitive::Polyline {
                points,
                width,
                color,
            } => {
                let screen_points = points.iter().map(|p| to_screen(*p)).collect();
                painter.add(egui::Shape::line(
                    screen_points,
                    egui::Stroke::new(*width, color32(*color)),
                ));
            }
            Primitive::Label {
                position,
                text,
                color,
            } => {
                painter.text(
                    to_screen(*position),
                    egui::Align2::LEFT_TOP,
                    text,
                    font.clone(),
                    color32(*color),
                );
            }
        }
    }

    let info_color = color32(scene.info_color);
    for (index, line) in scene.info_lines.iter().enumerate() {
        painter.text(
            to_screen(scene.info_position(index)),
            egui::Align2::LEFT_TOP,
            line,
            font.clone(),
            info_color,
        );
    }
}

/// Wandelt eine RGBA-Farbe im Bereich 0..=1 in eine egui-Farbe.
pub fn color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}
