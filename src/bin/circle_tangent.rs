//! Circle Tangent: Tangentenpunkte von einem Punkt an einen Kreis.
//!
//! Linksklick verschiebt den Kreismittelpunkt, Rechtsklick den Zielpunkt.

use tangent_viz::{AppRunner, TangentScene};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run::<TangentScene>()
}
