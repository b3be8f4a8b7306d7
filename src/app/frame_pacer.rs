//! Frame-Takt mit fester Ziel-Framerate.
//!
//! Misst die Arbeitszeit des laufenden Frames und liefert die Restzeit bis zum
//! nächsten Frame. Kein Frame-Skipping, kein Aufholen: Drift summiert sich.

use std::time::{Duration, Instant};

/// Taktgeber für die Render-Schleife.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    frame_start: Option<Instant>,
}

impl FramePacer {
    /// Erstellt einen Taktgeber mit fester Frame-Dauer.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_start: None,
        }
    }

    /// Ziel-Dauer eines Frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Markiert den Beginn eines Frames und liefert den Abstand zum vorherigen Frame-Beginn.
    pub fn begin_frame(&mut self, now: Instant) -> Duration {
        let dt = self
            .frame_start
            .map_or(Duration::ZERO, |start| now.saturating_duration_since(start));
        self.frame_start = Some(now);
        dt
    }

    /// Restzeit bis zum nächsten Frame; `Duration::ZERO` wenn der Frame länger gedauert hat.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.frame_start {
            Some(start) => self
                .interval
                .saturating_sub(now.saturating_duration_since(start)),
            None => Duration::ZERO,
        }
    }
}
