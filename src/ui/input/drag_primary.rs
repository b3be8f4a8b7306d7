//! Gehaltene linke Taste: Zeigerposition pro Frame weiterreichen.

use super::{screen_pos_to_canvas, InputState, PointerSnapshot};
use crate::app::AppIntent;

impl InputState {
    /// Meldet die Zeigerposition solange die auf dem Canvas gedrückte linke Taste unten ist.
    ///
    /// Außerhalb des Canvas wird weiter gemeldet, bis die Taste losgelassen wird.
    pub(crate) fn handle_primary_drag(
        &mut self,
        pointer: &PointerSnapshot,
        canvas: egui::Rect,
        events: &mut Vec<AppIntent>,
    ) {
        if !pointer.primary_down {
            self.primary_drag_active = false;
            return;
        }
        if !self.primary_drag_active {
            return;
        }
        if let Some(pointer_pos) = pointer.pos {
            events.push(AppIntent::PrimaryHeld {
                pos: screen_pos_to_canvas(pointer_pos, canvas),
            });
        }
    }
}
