//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks`: Tastendruck links/rechts (Platzierung)
//! - `drag_primary`: gehaltene linke Taste (Richtung nachführen)

mod clicks;
mod drag_primary;

use super::keyboard;
use crate::app::AppIntent;

/// Momentaufnahme des Zeigers für einen Frame.
///
/// Entkoppelt die Intent-Ableitung vom egui-Kontext.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct PointerSnapshot {
    /// Linke Taste in diesem Frame gedrückt
    pub primary_pressed: bool,
    /// Rechte Taste in diesem Frame gedrückt
    pub secondary_pressed: bool,
    /// Linke Taste aktuell unten
    pub primary_down: bool,
    /// Zeigerposition in Screen-Koordinaten
    pub pos: Option<egui::Pos2>,
}

impl PointerSnapshot {
    /// Liest den Zeigerzustand aus dem egui-Input.
    fn from_ui(ui: &egui::Ui) -> Self {
        ui.input(|i| Self {
            primary_pressed: i.pointer.primary_pressed(),
            secondary_pressed: i.pointer.secondary_pressed(),
            primary_down: i.pointer.primary_down(),
            pos: i.pointer.interact_pos(),
        })
    }
}

/// Verwaltet den Input-Zustand für das Canvas.
#[derive(Debug, Default)]
pub struct InputState {
    /// Linke Taste wurde auf dem Canvas gedrückt und ist noch unten
    pub(crate) primary_drag_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_active: false,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Tastatur und Maus. Positionen werden
    /// relativ zur linken oberen Ecke von `response.rect` geliefert.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);
        events.extend(self.intents_from_pointer(PointerSnapshot::from_ui(ui), response.rect));
        events
    }

    /// Leitet Intents aus einer Zeiger-Momentaufnahme ab.
    ///
    /// Reihenfolge: erst Tastendruck, dann gehaltene Taste, damit ein neu
    /// platzierter Pfeil im selben Frame seine Richtung behält.
    pub(crate) fn intents_from_pointer(
        &mut self,
        pointer: PointerSnapshot,
        canvas: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        self.handle_clicks(&pointer, canvas, &mut events);
        self.handle_primary_drag(&pointer, canvas, &mut events);
        events
    }
}

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
pub(crate) fn screen_pos_to_canvas(pointer_pos: egui::Pos2, canvas: egui::Rect) -> glam::Vec2 {
    let local = pointer_pos - canvas.min;
    glam::Vec2::new(local.x, local.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn canvas() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_screen_pos_to_canvas_offsets_by_rect_min() {
        let rect = egui::Rect::from_min_size(egui::pos2(5.0, 20.0), egui::vec2(800.0, 600.0));
        let p = screen_pos_to_canvas(egui::pos2(105.0, 70.0), rect);
        assert_eq!(p, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_press_emits_pressed_then_held() {
        let mut input = InputState::new();
        let events = input.intents_from_pointer(
            PointerSnapshot {
                primary_pressed: true,
                primary_down: true,
                pos: Some(egui::pos2(40.0, 30.0)),
                ..Default::default()
            },
            canvas(),
        );

        let pos = Vec2::new(40.0, 30.0);
        assert_eq!(
            events,
            vec![
                AppIntent::PrimaryPressed { pos },
                AppIntent::PrimaryHeld { pos }
            ]
        );
        assert!(input.primary_drag_active);
    }

    #[test]
    fn test_drag_continues_until_release() {
        let mut input = InputState::new();
        input.intents_from_pointer(
            PointerSnapshot {
                primary_pressed: true,
                primary_down: true,
                pos: Some(egui::pos2(40.0, 30.0)),
                ..Default::default()
            },
            canvas(),
        );

        let events = input.intents_from_pointer(
            PointerSnapshot {
                primary_down: true,
                pos: Some(egui::pos2(90.0, 30.0)),
                ..Default::default()
            },
            canvas(),
        );
        assert_eq!(
            events,
            vec![AppIntent::PrimaryHeld {
                pos: Vec2::new(90.0, 30.0)
            }]
        );

        let events = input.intents_from_pointer(
            PointerSnapshot {
                pos: Some(egui::pos2(90.0, 30.0)),
                ..Default::default()
            },
            canvas(),
        );
        assert!(events.is_empty());
        assert!(!input.primary_drag_active);
    }

    #[test]
    fn test_secondary_press() {
        let mut input = InputState::new();
        let events = input.intents_from_pointer(
            PointerSnapshot {
                secondary_pressed: true,
                pos: Some(egui::pos2(700.0, 500.0)),
                ..Default::default()
            },
            canvas(),
        );
        assert_eq!(
            events,
            vec![AppIntent::SecondaryPressed {
                pos: Vec2::new(700.0, 500.0)
            }]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = InputState::new();
        let events = input.intents_from_pointer(
            PointerSnapshot {
                primary_pressed: true,
                secondary_pressed: true,
                primary_down: true,
                pos: Some(egui::pos2(900.0, 30.0)),
            },
            canvas(),
        );
        assert!(events.is_empty());
        assert!(!input.primary_drag_active);
    }

    #[test]
    fn test_no_pointer_no_events() {
        let mut input = InputState::new();
        let events = input.intents_from_pointer(
            PointerSnapshot {
                primary_pressed: true,
                primary_down: true,
                pos: None,
                ..Default::default()
            },
            canvas(),
        );
        assert!(events.is_empty());
    }
}
