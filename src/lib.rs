//! Tangent-Viz Library.
//! Geometrie, Szenen und Host der beiden Visualisierungen, exportiert für Binaries, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod host;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, DubinsScene, FramePacer, Scene,
    TangentScene,
};
pub use core::{
    solve_dubins, tangent_points, Circle, DubinsSolution, GeometryError, Pose, Rotation,
    TangentPoints, TurnSide,
};
pub use host::AppRunner;
pub use shared::{Primitive, RenderScene, VizOptions};
