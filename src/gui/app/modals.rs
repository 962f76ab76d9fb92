use crate::gui::{
    error_modal::ErrorModal,
    settings_modal::StoreSettingsModal,
};

pub struct Modals {
    pub error: ErrorModal,
    pub store_settings: StoreSettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { error: ErrorModal::new(), store_settings: StoreSettingsModal::new() }
    }
}
