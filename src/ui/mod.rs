//! UI-Layer mit egui: Canvas-Input und Tastatur.

pub mod input;
mod keyboard;

pub use input::InputState;
