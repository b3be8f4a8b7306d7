//! Tastendruck-Events: Platzierung per Links- und Rechtsklick.

use super::{screen_pos_to_canvas, InputState, PointerSnapshot};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet neu gedrückte Maustasten auf dem Canvas.
    pub(crate) fn handle_clicks(
        &mut self,
        pointer: &PointerSnapshot,
        canvas: egui::Rect,
        events: &mut Vec<AppIntent>,
    ) {
        let Some(pointer_pos) = pointer.pos else {
            return;
        };
        if !canvas.contains(pointer_pos) {
            return;
        }

        let pos = screen_pos_to_canvas(pointer_pos, canvas);

        if pointer.primary_pressed {
            events.push(AppIntent::PrimaryPressed { pos });
            self.primary_drag_active = true;
        }
        if pointer.secondary_pressed {
            events.push(AppIntent::SecondaryPressed { pos });
        }
    }
}
