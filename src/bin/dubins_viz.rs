//! Dubins Turning Circles: Wendekreise und Abfahrtstangenten eines Fahrzeugs.
//!
//! Linksklick setzt den Pfeil, Ziehen mit gedrückter linker Taste dreht ihn.

use tangent_viz::{AppRunner, DubinsScene};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run::<DubinsScene>()
}
