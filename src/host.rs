//! eframe-Host: Fenster, Frame-Schleife und Verdrahtung von Input, Controller und Renderer.

use std::time::Instant;

use eframe::egui;

use crate::app::{AppController, AppIntent, AppState, FramePacer, Scene};
use crate::shared::{VizOptions, CANVAS_SIZE};
use crate::{render, ui};

/// Startet eine Visualisierung als natives Fenster.
pub struct AppRunner;

impl AppRunner {
    /// Initialisiert Logging und Optionen und blockiert bis das Fenster geschlossen wird.
    pub fn run<S: Scene + 'static>() -> Result<(), eframe::Error> {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("{} v{} startet...", S::TITLE, env!("CARGO_PKG_VERSION"));

        let config_path = VizOptions::config_path();
        let viz_options = VizOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(CANVAS_SIZE)
                .with_resizable(false)
                .with_title(S::TITLE),
            renderer: eframe::Renderer::Wgpu,
            ..Default::default()
        };

        let result = eframe::run_native(
            S::TITLE,
            options,
            Box::new(|_cc| Ok(Box::new(VizApp::<S>::new(viz_options)))),
        );
        log::info!("{} beendet", S::TITLE);
        result
    }
}

/// Haupt-Anwendungsstruktur einer Visualisierung.
struct VizApp<S> {
    state: AppState<S>,
    controller: AppController,
    input: ui::InputState,
    pacer: FramePacer,
}

impl<S: Scene> VizApp<S> {
    fn new(options: VizOptions) -> Self {
        let pacer = FramePacer::new(options.frame_interval());
        Self {
            state: AppState::new(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            pacer,
        }
    }
}

impl<S: Scene> eframe::App for VizApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pacer.begin_frame(Instant::now());

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let events = self.input.collect_canvas_events(ui, &response);
                self.process_events(events);

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(ui.painter(), rect, &scene);
            });

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ctx.request_repaint_after(self.pacer.remaining(Instant::now()));
    }
}

impl<S: Scene> VizApp<S> {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
