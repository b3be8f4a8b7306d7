//! Kreistangenten-Ansicht: Kreis O, externer Punkt P, Tangentenpunkte Q1/Q2.
//!
//! Linksklick versetzt den Kreis, Rechtsklick den Zielpunkt. Beide Platzierungen
//! werden abgelehnt, wenn P dadurch nicht mehr außerhalb von `r + 1` läge.

mod render_scene;
mod state;

pub use state::TangentScene;

use glam::Vec2;

use super::super::{AppCommand, AppIntent, Scene};
use crate::core::Circle;
use crate::shared::{RenderScene, VizOptions};

impl Scene for TangentScene {
    const TITLE: &'static str = "Circle Tangent";

    fn from_options(options: &VizOptions) -> Self {
        let o = &options.tangent;
        Self::new(
            Circle::new(Vec2::from(o.circle_center), o.circle_radius),
            Vec2::from(o.destination),
        )
    }

    fn map_intent(&self, intent: AppIntent) -> Vec<AppCommand> {
        match intent {
            AppIntent::PrimaryPressed { pos } => {
                if self.can_place_center(pos) {
                    vec![AppCommand::MoveCircleCenter { pos }]
                } else {
                    log::debug!("Kreis bei {pos} abgelehnt: Ziel läge im Kreis");
                    Vec::new()
                }
            }
            AppIntent::SecondaryPressed { pos } => {
                if self.can_place_destination(pos) {
                    vec![AppCommand::MoveDestination { pos }]
                } else {
                    log::debug!("Ziel bei {pos} abgelehnt: liegt im Kreis");
                    Vec::new()
                }
            }
            AppIntent::PrimaryHeld { .. } | AppIntent::ExitRequested => Vec::new(),
        }
    }

    fn apply(&mut self, command: &AppCommand) -> anyhow::Result<()> {
        match *command {
            AppCommand::MoveCircleCenter { pos } => {
                anyhow::ensure!(
                    self.can_place_center(pos),
                    "Kreismittelpunkt {pos} zu nah am Ziel {}",
                    self.destination
                );
                self.circle.center = pos;
                log::debug!("Kreis versetzt nach {pos}");
            }
            AppCommand::MoveDestination { pos } => {
                anyhow::ensure!(
                    self.can_place_destination(pos),
                    "Ziel {pos} zu nah am Kreismittelpunkt {}",
                    self.circle.center
                );
                self.destination = pos;
                log::debug!("Ziel versetzt nach {pos}");
            }
            ref other => {
                anyhow::bail!("Command {other:?} wird in {} nicht unterstützt", Self::TITLE)
            }
        }
        Ok(())
    }

    fn build_render_scene(&self, options: &VizOptions) -> RenderScene {
        render_scene::build(self, options)
    }
}
