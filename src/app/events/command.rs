use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Kreismittelpunkt versetzen (Kreistangenten-Ansicht)
    MoveCircleCenter { pos: Vec2 },
    /// Zielpunkt versetzen (Kreistangenten-Ansicht)
    MoveDestination { pos: Vec2 },
    /// Pfeil versetzen (Dubins-Ansicht)
    MoveArrow { pos: Vec2 },
    /// Fahrtrichtung setzen, wird auf `[0, 2π)` normalisiert (Dubins-Ansicht)
    SetHeading { heading: f32 },
    /// Anwendung beenden
    RequestExit,
}
