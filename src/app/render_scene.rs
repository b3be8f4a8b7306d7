//! Builder für Render-Szenen aus dem AppState.

use crate::app::{AppState, Scene};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build<S: Scene>(state: &AppState<S>) -> RenderScene {
    state.scene.build_render_scene(&state.options)
}
