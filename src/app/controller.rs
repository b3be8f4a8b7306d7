//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState, Scene};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Commands auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<S: Scene>(
        &mut self,
        state: &mut AppState<S>,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Szenen-Commands werden an die aktive Szene delegiert.
    pub fn handle_command<S: Scene>(
        &mut self,
        state: &mut AppState<S>,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            AppCommand::RequestExit => {
                log::info!("Beenden angefordert");
                state.should_exit = true;
            }
            other => state.scene.apply(&other)?,
        }

        Ok(())
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene<S: Scene>(&self, state: &AppState<S>) -> RenderScene {
        render_scene::build(state)
    }
}
