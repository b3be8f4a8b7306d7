use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind Canvas-Koordinaten (Ursprung oben links).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärtaste (links) auf dem Canvas gedrückt
    PrimaryPressed { pos: Vec2 },
    /// Sekundärtaste (rechts) auf dem Canvas gedrückt
    SecondaryPressed { pos: Vec2 },
    /// Primärtaste wird gehalten, Zeiger steht an `pos`
    PrimaryHeld { pos: Vec2 },
    /// Anwendung beenden
    ExitRequested,
}
