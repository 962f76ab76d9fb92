use eframe::egui;
use thumblab::gui::ThumblabApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("thumblab")
            .with_inner_size([560.0, 760.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native("thumblab", options, Box::new(|cc| Ok(Box::new(ThumblabApp::new(cc)))))
}
