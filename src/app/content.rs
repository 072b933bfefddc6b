//! Brain canvas and detail panes.
//!
//! The canvas is a texture uploaded from the CPU surface whenever the
//! mapper asks for a redraw. Pointer position over the canvas is fed back
//! to the mapper each frame; the tooltip is painted on top of the texture.

use eframe::egui;

use neuro_mapper::interaction::pointer::place_tooltip;
use neuro_mapper::interaction::Action;
use neuro_mapper::registry::panes::PaneTab;

use super::MapperApp;
use crate::ui::render_pane_body;

const TOOLTIP_PADDING: egui::Vec2 = egui::vec2(6.0, 4.0);

impl MapperApp {
    fn upload_surface(&mut self, ctx: &egui::Context) {
        let scale = self.mapper.config().scale;
        self.mapper.render_into(&mut self.surface, scale);
        let image = egui::ColorImage::from_rgba_unmultiplied(self.surface.size(), &self.surface.pixels);
        match self.texture {
            Some(ref mut tex) => tex.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("brain_map", image, egui::TextureOptions::NEAREST));
            }
        }
        self.dirty = false;
    }

    /// Draw the brain map, scaled to fit the panel with its aspect ratio kept.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if self.dirty || self.texture.is_none() {
            self.upload_surface(ctx);
        }

        let (lw, lh) = self.mapper.config().grid.surface_size();
        let avail = ui.available_size();
        let fit = (avail.x / lw as f32).min(avail.y / lh as f32).max(0.1);
        let size = egui::vec2(lw as f32 * fit, lh as f32 * fit);

        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click().union(egui::Sense::hover()));

        if self.canvas_rect.is_some_and(|r| r != rect) {
            self.apply(Action::Resized);
        }
        self.canvas_rect = Some(rect);

        // Pointer tracking
        match response.hover_pos() {
            Some(pos) => {
                if self.mapper.pointer_moved(pos, rect).redraw {
                    self.dirty = true;
                }
            }
            None if self.mapper.state().hovered.is_some() => self.apply(Action::PointerLeft),
            None => {}
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if self.mapper.clicked(pos, rect).redraw {
                    self.dirty = true;
                }
            }
        }

        // Hover/pin changes this frame are shown next frame.
        if self.dirty {
            ctx.request_repaint();
        }

        if let Some(ref tex) = self.texture {
            ui.painter().image(
                tex.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        if let Some(tip) = self.mapper.state().tooltip {
            let painter = ui.painter_at(rect);
            let galley = painter.layout_no_wrap(
                tip.text.to_string(),
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
            let box_size = galley.size() + TOOLTIP_PADDING * 2.0;
            let config = self.mapper.config();
            let pos = place_tooltip(
                tip.anchor,
                box_size,
                rect,
                egui::Vec2::from(config.tooltip_offset),
                config.tooltip_margin,
            );
            let bg = egui::Rect::from_min_size(pos, box_size);
            painter.rect_filled(bg, 4.0, egui::Color32::from_rgba_unmultiplied(10, 12, 20, 225));
            painter.rect_stroke(bg, 4.0, egui::Stroke::new(1.0, egui::Color32::from_gray(90)));
            painter.galley(pos + TOOLTIP_PADDING, galley, egui::Color32::WHITE);
        }
    }

    /// Right-hand panel: title, tab strip and the selected pane.
    pub fn draw_panes(&mut self, ui: &mut egui::Ui) {
        let panes = &self.mapper.state().panes;
        ui.add_space(4.0);
        match panes.title {
            Some(ref title) => ui.heading(title),
            None => ui.heading("Details"),
        };
        ui.separator();

        ui.horizontal(|ui| {
            for tab in PaneTab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.title());
            }
        });
        ui.separator();

        let panes = &self.mapper.state().panes;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                render_pane_body(ui, panes.body(self.tab));
            });
    }
}
