//! `MapperApp`: the top-level egui application state.
//!
//! This module declares the `MapperApp` struct, its `Default` impl and the
//! `eframe::App` frame loop. Drawing is split across the sibling sub-modules:
//!
//! - `toolbar`: mode buttons, grid/dominance controls, legend
//! - `content`: brain canvas, tooltip and the detail panes
//! - `study`: flashcard and quiz window

pub mod content;
pub mod study;
pub mod toolbar;

use std::time::Instant;

use eframe::egui;

use neuro_mapper::config::MapperConfig;
use neuro_mapper::engine::Mapper;
use neuro_mapper::interaction::keys::shortcut;
use neuro_mapper::interaction::Action;
use neuro_mapper::registry::panes::PaneTab;
use neuro_mapper::render::Surface;

// ─── Application state ───────────────────────────────────────────────────────

pub struct MapperApp {
    pub mapper: Mapper,
    /// CPU-side pixels, reused between redraws.
    pub surface: Surface,
    pub texture: Option<egui::TextureHandle>,
    /// Surface must be re-rendered before the next paint.
    pub dirty: bool,
    pub tab: PaneTab,
    pub status: Option<String>,
    /// Where the canvas was drawn last frame.
    pub canvas_rect: Option<egui::Rect>,
    pub last_frame: Instant,
}

impl Default for MapperApp {
    fn default() -> Self {
        Self::new(MapperConfig::default())
    }
}

impl MapperApp {
    pub fn new(config: MapperConfig) -> Self {
        Self {
            mapper: Mapper::new(config),
            surface: Surface::new(0, 0),
            texture: None,
            dirty: true,
            tab: PaneTab::Overview,
            status: None,
            canvas_rect: None,
            last_frame: Instant::now(),
        }
    }

    /// Dispatch `action` and mark the surface dirty when it asks for a redraw.
    pub fn apply(&mut self, action: Action) {
        let effects = self.mapper.dispatch(action);
        if effects.redraw {
            self.dirty = true;
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let typed: Vec<char> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.chars().collect::<Vec<_>>()),
                    _ => None,
                })
                .flatten()
                .collect()
        });
        for key in typed {
            if let Some(action) = shortcut(key) {
                log::debug!("shortcut {:?} -> {:?}", key, action);
                self.apply(action);
            }
        }
    }
}

impl eframe::App for MapperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.mapper.advance_clock(dt);

        self.handle_shortcuts(ctx);

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        // Detail panes
        egui::SidePanel::right("panes")
            .default_width(340.0)
            .min_width(240.0)
            .show(ctx, |ui| {
                self.draw_panes(ui);
            });

        // Brain canvas
        let ctx_clone = ctx.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui, &ctx_clone);
        });

        self.draw_study(ctx);

        if let Some(wait) = self.mapper.next_wakeup() {
            ctx.request_repaint_after(wait);
        }
    }
}
