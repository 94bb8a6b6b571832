use serde::{Deserialize, Serialize};

/// One row of the attachment table. Immutable after parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u32,
    pub thread_id: u32,
    pub post_id: u32,
    /// Original upload filename, shown to readers.
    pub filename: String,
    /// Path of the stored file relative to the attachments directory.
    pub stored_path: String,
    pub is_image: bool,
}
