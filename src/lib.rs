pub mod core;
pub mod gui;
pub mod persistence;
pub mod store;

pub use crate::{
    core::{
        Thumbnail,
        ThumblabError,
        FACE_OPTIONS,
    },
    gui::ThumblabApp,
};
