use serde::{Deserialize, Serialize};

/// Whether a row in the forum table is a top-level category or an actual board.
///
/// The dump stores this as a string column (`'group'` / `'forum'`); categories
/// only exist to group boards on the index page and never contain posts
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForumKind {
    Category,
    Forum,
}

impl ForumKind {
    /// Map the dump's type column onto a kind. Unknown values are treated as
    /// boards so their content is never dropped.
    pub fn from_column(value: &str) -> Self {
        if value.eq_ignore_ascii_case("group") { Self::Category } else { Self::Forum }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForumStatus {
    Active,
    Inactive,
}

/// One row of the forum table. Immutable after parse; forms a two-level tree
/// (category -> forum) via `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forum {
    pub id: u32,
    pub parent_id: u32,
    pub kind: ForumKind,
    pub name: String,
    pub status: ForumStatus,
    pub display_order: i64,
}
