//! Toolbar rendering for `MapperApp`.
//!
//! Draws the mode selector, grid toggle, language-dominance picker, reset,
//! study and snapshot buttons, and the colour legend for the active mode.

use eframe::egui;

use neuro_mapper::interaction::keys::SHORTCUTS;
use neuro_mapper::interaction::Action;
use neuro_mapper::territory::{Dominance, Mode};

use super::MapperApp;
use crate::ui::{color_swatch, truncate_str};

impl MapperApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Mode selector
            let current = self.mapper.state().mode;
            for mode in Mode::ALL {
                if ui.selectable_label(current == mode, mode.title()).clicked() && current != mode {
                    self.apply(Action::SelectMode(mode));
                }
            }

            ui.separator();

            let mut show_grid = self.mapper.state().show_grid;
            if ui.checkbox(&mut show_grid, "Grid lines").changed() {
                self.apply(Action::SetGrid(show_grid));
            }

            // Language dominance
            let prev = self.mapper.state().dominance;
            let mut dominance = prev;
            egui::ComboBox::from_id_salt("dominance")
                .selected_text(match dominance {
                    Dominance::Left => "Language: Left",
                    Dominance::Right => "Language: Right",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut dominance, Dominance::Left, "Left-dominant");
                    ui.selectable_value(&mut dominance, Dominance::Right, "Right-dominant");
                });
            if dominance != prev {
                self.apply(Action::SetDominance(dominance));
            }

            ui.separator();

            if ui.button("Reset").clicked() {
                self.apply(Action::Reset);
            }

            let study_open = self.mapper.study().is_open();
            if ui.selectable_label(study_open, "Study").clicked() {
                self.apply(Action::ToggleStudy);
            }

            #[cfg(feature = "snapshot")]
            if ui.button("Save PNG").clicked() {
                self.save_snapshot();
            }

            if let Some(ref status) = self.status {
                ui.separator();
                ui.label(egui::RichText::new(truncate_str(status, 60)).weak());
            }
        });

        // Legend
        ui.horizontal_wrapped(|ui| {
            ui.add_space(4.0);
            let mode = self.mapper.state().mode;
            for (label, color) in self.mapper.palette(mode).legend() {
                color_swatch(ui, (*color).into());
                ui.label(*label);
                ui.add_space(6.0);
            }
        });

        ui.horizontal(|ui| {
            ui.add_space(4.0);
            let hint = SHORTCUTS
                .iter()
                .map(|(k, what)| format!("{} {}", k, what))
                .collect::<Vec<_>>()
                .join(" · ");
            ui.label(egui::RichText::new(hint).small().weak());
        });
        ui.add_space(2.0);
    }

    #[cfg(feature = "snapshot")]
    fn save_snapshot(&mut self) {
        use neuro_mapper::render::render;
        use neuro_mapper::snapshot::save_png;

        let mode = self.mapper.state().mode;
        let surface = render(&self.mapper.render_params(self.mapper.config().scale));
        let path = format!("neuro-map-{}.png", mode.name());
        self.status = Some(match save_png(&surface, &path) {
            Ok(()) => format!("Saved {}", path),
            Err(e) => {
                log::warn!("snapshot failed: {}", e);
                e.to_string()
            }
        });
    }
}
