//! Application State: zentrale Datenhaltung.

use super::{CommandLog, Scene};
use crate::shared::VizOptions;

/// Hauptzustand der Anwendung, generisch über die aktive Szene.
pub struct AppState<S> {
    /// Interaktionszustand der Szene (Positionen, Fahrtrichtung)
    pub scene: S,
    /// Beim Start geladene Optionen (Farben, Startwerte, Framerate)
    pub options: VizOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl<S: Scene> AppState<S> {
    /// Erstellt den Startzustand aus den Optionen.
    pub fn new(options: VizOptions) -> Self {
        Self {
            scene: S::from_options(&options),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }
}

impl<S: Scene> Default for AppState<S> {
    fn default() -> Self {
        Self::new(VizOptions::default())
    }
}
