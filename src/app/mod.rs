use eframe::egui::{self, Align, Context, Layout, Sense, Ui};

use crate::config::PlexusConfig;
use crate::plexus::{Controller, Phase, Viewport};
use crate::theme::Theme;

mod backdrop;
mod fps;
mod scheduler;

use backdrop::{PainterCanvas, draw_vignettes};
use fps::FpsCounter;
use scheduler::RepaintScheduler;

pub struct PlexusApp {
    config: PlexusConfig,
    controller: Controller,
    scheduler: RepaintScheduler,
    mount_attempted: bool,
    show_fps: bool,
    fps: FpsCounter,
}

impl PlexusApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: PlexusConfig, theme: Theme) -> Self {
        cc.egui_ctx.set_visuals(theme.visuals());

        Self {
            controller: Controller::new(config.lattice()),
            scheduler: RepaintScheduler::new(cc.egui_ctx.clone()),
            config,
            mount_attempted: false,
            show_fps: false,
            fps: FpsCounter::default(),
        }
    }

    fn draw_top_bar(&mut self, ui: &mut Ui, theme: Theme) {
        ui.horizontal(|ui| {
            ui.heading("plexus");
            ui.separator();
            if ui
                .button(theme.toggle_label())
                .on_hover_text("Switch between the light and dark theme.")
                .clicked()
            {
                ui.ctx().set_visuals(theme.toggled().visuals());
            }
            ui.checkbox(&mut self.show_fps, "FPS Display")
                .on_hover_text("Show a live FPS readout in the header.");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(lattice_text) = self.lattice_text() {
                    ui.label(lattice_text);
                }
                if self.show_fps
                    && let Some(fps_text) = self.fps.display_text()
                {
                    ui.label(fps_text);
                }
            });
        });
    }

    fn lattice_text(&self) -> Option<String> {
        let grid = self.controller.grid()?;
        let phase = self.controller.time()?;
        Some(format!(
            "lattice: {} x {} ({} points) | phase {phase:.2}",
            grid.columns(),
            grid.rows(),
            grid.len()
        ))
    }

    fn draw_background(&mut self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let surface = Viewport::from_size(rect.size());

        if !self.mount_attempted {
            self.mount_attempted = true;
            self.controller.mount(surface, &mut self.scheduler);
        } else if self.controller.phase() == Phase::Running {
            self.controller.resize(surface);
        }

        let theme = Theme::from_dark_mode(ui.visuals().dark_mode);
        let painter = ui.painter_at(rect);
        let mut canvas = PainterCanvas::new(
            &painter,
            rect,
            theme.page_background(),
            self.config.canvas_opacity(theme),
        );
        let palette = self.config.palette(theme);

        let advanced = match self.scheduler.take_due() {
            Some(frame) => {
                self.controller
                    .on_frame(frame, palette, &mut canvas, &mut self.scheduler)
            }
            None => false,
        };
        if !advanced {
            self.controller.redraw(palette, &mut canvas);
        }

        draw_vignettes(&painter, rect, theme.page_background());
    }
}

fn current_theme(ctx: &Context) -> Theme {
    Theme::from_dark_mode(ctx.style().visuals.dark_mode)
}

impl eframe::App for PlexusApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.fps.record(ctx.input(|input| input.stable_dt));
        let theme = current_theme(ctx);
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_top_bar(ui, theme));

        // The toggle may have flipped the visuals above.
        let theme = current_theme(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme.page_background()))
            .show(ctx, |ui| self.draw_background(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.teardown(&mut self.scheduler);
    }
}
