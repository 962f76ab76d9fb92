mod modals;

use eframe::egui;
use modals::Modals;

use super::{
    label_form::LabelForm,
    message_overlay::MessageOverlay,
    settings_modal::StoreSettings,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        session::{
            LoadedRecord,
            Session,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
        ThumblabError,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct ThumblabApp {
    // Session
    session: Session,
    form: LabelForm,
    jump_index: usize,
    loading: bool,

    // Configuration
    settings: StoreSettings,

    // UI State
    theme: Theme,
    message_overlay: MessageOverlay,

    // Modals
    modals: Modals,

    // External Services
    store_connected: bool,
    last_store_check: Option<std::time::Instant>,
    task_manager: TaskManager,
}

impl ThumblabApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings = load_json_or_default::<StoreSettings>("settings.json");
        let session = Session::new(settings.dataset_size);
        let task_manager = TaskManager::new();

        let mut app = Self {
            // Session
            session,
            form: LabelForm::new(),
            jump_index: 0,
            loading: false,

            // Configuration
            settings,

            // UI State
            theme: Theme::default(),
            message_overlay: MessageOverlay::new(),

            // Modals
            modals: Modals::default(),

            // External Services
            store_connected: false,
            last_store_check: None,
            task_manager,
        };

        set_theme(&cc.egui_ctx, app.theme.clone());

        // The workflow opens on the first record, like reloading the page.
        app.start_navigation(0);

        app
    }
}

impl eframe::App for ThumblabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        self.update_store_status();
        self.handle_arrow_keys(ctx);

        if let Some(action) = TopBar::show(ctx, self.store_connected) {
            match action {
                TopBarAction::OpenStoreSettings => {
                    self.modals.store_settings.open_settings(self.settings.clone());
                }
            }
        }

        self.draw_record_panel(ctx);

        self.message_overlay.show(ctx, &self.theme);
        self.modals.error.show(ctx);

        if let Some(settings) = self.modals.store_settings.show(ctx) {
            self.apply_settings(settings);
        }
    }
}

impl ThumblabApp {
    /// Plan a navigation to `target` and hand it to the task layer. Out of
    /// range targets are dropped with a log line; the buttons and the
    /// index field keep them from being requested in the first place.
    fn start_navigation(&mut self, target: usize) {
        match self.session.begin_navigation(target, &self.form) {
            Ok(navigation) => {
                self.loading = true;
                self.task_manager.navigate(self.settings.base_url.clone(), navigation);
            }
            Err(error) => {
                println!("[Session] {}", error);
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::StoreConnection(connected) => {
                self.store_connected = connected;
            }

            TaskResult::SaveFinished { index, result } => {
                if let Err(error) = result {
                    eprintln!("[Store] Write for record {} failed: {}", index, error);
                    self.modals.error.show_error(
                        "Save Failed",
                        format!("Record {} was not written back to the store.", index),
                        Some(error.to_string()),
                    );
                }
            }

            TaskResult::Navigated { seq, index, result } => match result {
                Ok(record) => {
                    if self.session.apply_fetched(seq, LoadedRecord { index, record }) {
                        if let Some(loaded) = self.session.current() {
                            self.form.load(&loaded.record);
                            self.jump_index = loaded.index;
                        }
                        self.loading = false;
                        self.message_overlay.clear_message();
                    }
                }
                Err(error) => {
                    if self.session.fetch_failed(seq) {
                        self.loading = false;
                        self.message_overlay.clear_message();

                        let (title, message) = describe_fetch_error(&error, index);
                        self.modals.error.show_error(title, message, Some(error.to_string()));
                    }
                }
            },
        }
    }

    fn draw_record_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let loaded = self.session.current().map(|loaded| {
                (
                    loaded.index,
                    loaded.record.title.clone(),
                    loaded.record.url.clone(),
                    loaded.record.reviewed,
                )
            });

            match loaded {
                Some((index, title, url, reviewed)) => {
                    ui.horizontal(|ui| {
                        ui.label(self.theme.bold(&format!(
                            "Thumbnail {} of {}",
                            index,
                            self.session.dataset_size()
                        )));

                        if reviewed {
                            ui.label(
                                egui::RichText::new("reviewed").color(self.theme.green()).small(),
                            );
                        }
                    });

                    ui.label(self.theme.heading(&title));
                    ui.add_space(5.0);

                    ui.add(
                        egui::Image::from_uri(url).max_height(320.0).maintain_aspect_ratio(true),
                    );

                    ui.add_space(10.0);
                    self.form.show(ui);

                    ui.add_space(10.0);
                    ui.separator();
                    self.draw_navigation(ui, Some(index));
                }
                None => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        if self.loading {
                            ui.add(egui::Spinner::new());
                            ui.label("Loading record...");
                        } else {
                            ui.label("No record loaded.");
                            ui.label(
                                egui::RichText::new("Pick an index below to try again.")
                                    .color(self.theme.comment()),
                            );
                        }
                    });
                    ui.add_space(40.0);
                    ui.separator();
                    self.draw_navigation(ui, None);
                }
            }
        });
    }

    fn draw_navigation(&mut self, ui: &mut egui::Ui, at: Option<usize>) {
        let last_index = self.session.dataset_size();

        ui.horizontal(|ui| {
            if let Some(index) = at {
                if ui.add_enabled(index > 0, egui::Button::new("< Prev")).clicked() {
                    self.start_navigation(index - 1);
                }

                if ui.add_enabled(index < last_index, egui::Button::new("Next >")).clicked() {
                    self.start_navigation(index + 1);
                }

                ui.separator();
            }

            ui.label("Go to");
            ui.add(egui::DragValue::new(&mut self.jump_index).speed(1.0).range(0..=last_index));

            if ui.button("Load").clicked() {
                self.start_navigation(self.jump_index);
            }

            if self.loading {
                ui.add(egui::Spinner::new());
            }
        });
    }

    fn handle_arrow_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (left, right) = ctx.input(|input| {
            (input.key_pressed(egui::Key::ArrowLeft), input.key_pressed(egui::Key::ArrowRight))
        });

        if let Some(index) = self.session.current().map(|loaded| loaded.index) {
            if left && index > 0 {
                self.start_navigation(index - 1);
            } else if right && index < self.session.dataset_size() {
                self.start_navigation(index + 1);
            }
        }
    }

    fn update_store_status(&mut self) {
        let now = std::time::Instant::now();
        let should_check = match self.last_store_check {
            None => true,
            Some(last_check) => now.duration_since(last_check).as_secs() >= 5,
        };

        if should_check {
            self.task_manager.check_store_connection(self.settings.base_url.clone());
            self.last_store_check = Some(now);
        }
    }

    fn apply_settings(&mut self, settings: StoreSettings) {
        self.settings = settings;
        self.session.set_dataset_size(self.settings.dataset_size);
        self.jump_index = self.jump_index.min(self.settings.dataset_size);
        self.save_settings();

        // Re-probe right away so the status dot reflects the new address.
        self.task_manager.check_store_connection(self.settings.base_url.clone());
        self.last_store_check = Some(std::time::Instant::now());
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, "settings.json") {
            eprintln!("[Settings] Failed to save settings: {}", e);
        }
    }
}

/// Turn a fetch failure into modal copy. Each error kind keeps its own
/// title so an unreachable store reads differently from a missing record.
fn describe_fetch_error(error: &ThumblabError, index: usize) -> (String, String) {
    match error {
        ThumblabError::Status { status: 404, .. } => (
            "Record Not Found".to_string(),
            format!("The store has no record at index {}.", index),
        ),
        ThumblabError::Status { status, .. } => (
            "Store Error".to_string(),
            format!("The store rejected the request for record {} with HTTP {}.", index, status),
        ),
        ThumblabError::Network(_) => (
            "Store Unreachable".to_string(),
            format!("Could not reach the record store to load record {}. Is it running?", index),
        ),
        ThumblabError::Decode(_) => (
            "Malformed Record".to_string(),
            format!("The payload for record {} does not look like a thumbnail record.", index),
        ),
        ThumblabError::OutOfBounds { .. } => (
            "Navigation Error".to_string(),
            format!("Record {} is outside the dataset.", index),
        ),
    }
}
