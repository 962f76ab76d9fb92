use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

/// Where the record store lives and how far its index space goes. Saved
/// to settings.json so a relocated store survives a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub base_url: String,
    pub dataset_size: usize,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:8000/".to_string(), dataset_size: 299 }
    }
}

pub struct StoreSettingsModal {
    open: bool,
    draft: StoreSettings,
    original: StoreSettings,
}

impl StoreSettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: StoreSettings::default(), original: StoreSettings::default() }
    }

    pub fn open_settings(&mut self, current: StoreSettings) {
        self.draft = current.clone();
        self.original = current;
        self.open = true;
    }

    /// Returns the new settings once the user hits save.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<StoreSettings> {
        if !self.open {
            return None;
        }

        let mut result: Option<StoreSettings> = None;

        let modal = egui::Modal::new(egui::Id::new("store_settings_modal")).show(ctx, |ui| {
            ui.set_width(360.0);

            ui.heading("Record Store Settings");
            ui.add_space(10.0);

            self.ui_base_url(ui);
            ui.add_space(5.0);
            self.ui_dataset_size(ui);
            ui.add_space(10.0);

            ui.separator();

            let is_dirty = self.draft != self.original;
            let is_valid = is_valid_base_url(&self.draft.base_url);

            ui.horizontal(|ui| {
                if is_dirty {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                } else {
                    ui.colored_label(egui::Color32::TRANSPARENT, "⚠");
                    ui.label("");
                }
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let save_clicked = ui
                    .add_enabled(is_dirty && is_valid, egui::Button::new("Save Settings"))
                    .clicked();
                let cancel_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Cancel")).clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    self.original = self.draft.clone();
                    result = Some(self.draft.clone());
                    ui.close();
                } else if cancel_clicked {
                    self.draft = self.original.clone();
                } else if reset_clicked {
                    self.draft = StoreSettings::default();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }

    fn ui_base_url(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Store address:");
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.base_url)
                    .hint_text("http://127.0.0.1:8000/")
                    .desired_width(220.0),
            );
        });

        if !is_valid_base_url(&self.draft.base_url) {
            ui.colored_label(egui::Color32::RED, "⚠ Address must start with http:// or https://");
        }
    }

    fn ui_dataset_size(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Last record index:");
            ui.add(
                egui::DragValue::new(&mut self.draft.dataset_size).speed(1.0).range(0..=999_999),
            );
        });
    }
}

fn is_valid_base_url(base_url: &str) -> bool {
    base_url.starts_with("http://") || base_url.starts_with("https://")
}

impl Default for StoreSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_store() {
        let settings = StoreSettings::default();
        assert_eq!(settings.base_url, "http://127.0.0.1:8000/");
        assert_eq!(settings.dataset_size, 299);
    }

    #[test]
    fn base_url_validation_requires_a_scheme() {
        assert!(is_valid_base_url("http://127.0.0.1:8000/"));
        assert!(is_valid_base_url("https://labels.internal/"));
        assert!(!is_valid_base_url("127.0.0.1:8000"));
        assert!(!is_valid_base_url(""));
    }
}
