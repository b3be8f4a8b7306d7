//! Gemeinsame Schnittstelle der beiden Visualisierungen.

use super::{AppCommand, AppIntent};
use crate::shared::{RenderScene, VizOptions};

/// Eine interaktive Szene: Zustand, Intent-Mapping, Command-Ausführung und Render-Aufbau.
pub trait Scene {
    /// Fenstertitel und App-Name.
    const TITLE: &'static str;

    /// Erstellt den Startzustand aus den Optionen.
    fn from_options(options: &VizOptions) -> Self;

    /// Übersetzt einen Intent in Commands. Unzulässige Platzierungen ergeben keine Commands.
    fn map_intent(&self, intent: AppIntent) -> Vec<AppCommand>;

    /// Führt einen mutierenden Command aus.
    ///
    /// Fremde Commands und Platzierungen, die die Abstandsregel verletzen,
    /// liefern einen Fehler und lassen den Zustand unverändert.
    fn apply(&mut self, command: &AppCommand) -> anyhow::Result<()>;

    /// Baut die Render-Szene für den aktuellen Zustand.
    fn build_render_scene(&self, options: &VizOptions) -> RenderScene;
}
