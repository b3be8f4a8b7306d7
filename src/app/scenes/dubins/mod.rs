//! Dubins-Ansicht: Pfeil mit Fahrtrichtung, linker/rechter Wendekreis, Tangentenbögen zum Ziel.
//!
//! Linksklick versetzt den Pfeil; solange die linke Taste gehalten wird, zeigt
//! der Pfeil zum Mauszeiger.

mod render_scene;
mod state;

pub use state::DubinsScene;

use glam::Vec2;

use super::super::{AppCommand, AppIntent, Scene};
use crate::core::{heading_between, wrap_angle, Pose};
use crate::shared::{RenderScene, VizOptions};

impl Scene for DubinsScene {
    const TITLE: &'static str = "Dubins Turning Circles";

    fn from_options(options: &VizOptions) -> Self {
        let o = &options.dubins;
        Self::new(
            Pose::new(
                Vec2::from(o.arrow_position),
                o.arrow_heading_deg.to_radians(),
            ),
            o.turning_radius,
            Vec2::from(o.destination),
        )
    }

    fn map_intent(&self, intent: AppIntent) -> Vec<AppCommand> {
        match intent {
            AppIntent::PrimaryPressed { pos } => vec![AppCommand::MoveArrow { pos }],
            AppIntent::PrimaryHeld { pos } => match heading_between(self.pose.position, pos) {
                Ok(heading) if wrap_angle(heading) != self.pose.heading => {
                    vec![AppCommand::SetHeading { heading }]
                }
                // Zeiger auf dem Pfeil oder Richtung unverändert
                _ => Vec::new(),
            },
            AppIntent::SecondaryPressed { .. } | AppIntent::ExitRequested => Vec::new(),
        }
    }

    fn apply(&mut self, command: &AppCommand) -> anyhow::Result<()> {
        match *command {
            AppCommand::MoveArrow { pos } => {
                self.pose.position = pos;
                log::debug!("Pfeil versetzt nach {pos}");
            }
            AppCommand::SetHeading { heading } => {
                anyhow::ensure!(heading.is_finite(), "Ungültige Fahrtrichtung: {heading}");
                self.pose.heading = wrap_angle(heading);
                log::debug!("Fahrtrichtung {:.3}°", self.pose.heading.to_degrees());
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
