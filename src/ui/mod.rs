//! Small egui helpers shared by the panels and the study window.

use eframe::egui;

use neuro_mapper::registry::panes::{PaneBody, DASH};

// ─── Pane rendering ───────────────────────────────────────────────────────────

/// Bulleted list, or a dash when there is nothing to show.
pub fn render_bullets(ui: &mut egui::Ui, items: &[&str]) {
    if items.is_empty() {
        ui.label(DASH);
        return;
    }
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label("  \u{2022}");
            ui.label(*item);
        });
    }
}

pub fn render_pane_body(ui: &mut egui::Ui, body: &PaneBody) {
    match body {
        PaneBody::Message(text) => {
            ui.label(egui::RichText::new(text).weak());
        }
        PaneBody::List(items) => render_bullets(ui, items),
    }
}

/// Filled square used by the legend.
pub fn color_swatch(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
