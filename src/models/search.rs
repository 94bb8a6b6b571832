use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Client-side search index, written as `search_index.json`.
///
/// Built by re-parsing the generated HTML, not the catalog: the indexer and
/// the page generator only agree on the fixed CSS class names, so the index
/// reflects exactly what ended up on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndex {
    /// thread page filename -> document.
    pub threads: BTreeMap<String, ThreadDocument>,
    /// forum page filename -> document.
    pub forums: BTreeMap<String, ForumDocument>,
    /// RFC 3339 stamp of when the index was built.
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadDocument {
    pub file: String,
    pub title: String,
    pub posts: Vec<PostDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDocument {
    pub author: String,
    pub date: String,
    /// Plain-text post content, tags removed and whitespace normalized.
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumDocument {
    pub file: String,
    pub title: String,
    pub threads: Vec<ThreadReference>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadReference {
    pub link: String,
    pub title: String,
    pub meta: String,
}
