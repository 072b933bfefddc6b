use eframe::egui;

mod app;
mod ui;

use app::MapperApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1360.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Pixel Neuroanatomy Mapper",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(MapperApp::default()))
        }),
    ) {
        log::error!("eframe exited with error: {}", e);
    }
}
