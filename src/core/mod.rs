pub mod binder;
pub mod errors;
pub mod models;
pub mod session;
pub mod tasks;

pub use errors::ThumblabError;
pub use models::{
    Thumbnail,
    FACE_OPTIONS,
};
pub use session::{
    LoadedRecord,
    Navigation,
    Session,
};
