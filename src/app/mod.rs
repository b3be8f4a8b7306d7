//! Application-Layer: Controller, State, Events, Szenen und Frame-Takt.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod frame_pacer;
mod intent_mapping;
pub mod render_scene;
mod scene;
pub mod scenes;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szene, Optionen, Command-Log).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use frame_pacer::FramePacer;
pub use render_scene::build as build_render_scene;
pub use scene::Scene;
pub use scenes::{DubinsScene, TangentScene};
pub use state::AppState;
