use eframe::egui::{
    self,
    containers,
};

pub enum TopBarAction {
    OpenStoreSettings,
}

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, store_connected: bool) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Store Settings").clicked() {
                        action = Some(TopBarAction::OpenStoreSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, store_connected);
                });
            });
        });

        action
    }

    fn show_status_indicators(ui: &mut egui::Ui, store_connected: bool) {
        let (color, tooltip) = if store_connected {
            (egui::Color32::from_rgb(0, 200, 0), "Connected to the record store")
        } else {
            (egui::Color32::from_rgb(200, 80, 80), "Record store is not responding")
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
            ui.small("store").on_hover_text(tooltip);
        });
    }
}
