//! Keyboard-Shortcuts → AppIntent.

use crate::app::AppIntent;

/// Sammelt Tastatur-Intents des aktuellen Frames.
pub fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        events.push(AppIntent::ExitRequested);
    }
    events
}
