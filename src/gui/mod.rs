pub mod app;
pub mod error_modal;
pub mod label_form;
pub mod message_overlay;
pub mod settings_modal;
pub mod theme;
pub mod top_bar;

pub use app::ThumblabApp;
