use crate::core::{
    models::Thumbnail,
    ThumblabError,
};

/// Completions delivered back to the GUI thread. Every background thread
/// reports through one of these; the frame loop drains them each update.
#[derive(Debug, Clone)]
pub enum TaskResult {
    StoreConnection(bool),

    /// The write-back half of a navigation finished. `index` is the slot
    /// the outgoing record was written to.
    SaveFinished { index: usize, result: Result<(), ThumblabError> },

    /// The fetch half of a navigation finished. `seq` ties the completion
    /// back to the navigation that requested it.
    Navigated { seq: u64, index: usize, result: Result<Thumbnail, ThumblabError> },
}
