//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, Scene};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Szenenunabhängige Intents werden hier behandelt, der Rest an die Szene delegiert.
pub fn map_intent_to_commands<S: Scene>(
    state: &AppState<S>,
    intent: AppIntent,
) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        other => state.scene.map_intent(other),
    }
}
