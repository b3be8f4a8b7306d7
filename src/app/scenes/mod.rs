//! Die beiden Visualisierungen als `Scene`-Implementierungen.

pub mod dubins;
pub mod tangent;

pub use dubins::DubinsScene;
pub use tangent::TangentScene;
