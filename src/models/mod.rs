//! Data models for the forum archive.
//!
//! This module defines the data structures used throughout the converter:
//!
//! - [`Forum`] - Board / category rows from the forum table
//! - [`Post`] - Rows from the post table, with derived subjects for empty ones
//! - [`Attachment`] - Rows from the attachment table
//! - [`Catalog`] - Owning container, populated once at parse time and
//!   read-only during page generation
//! - [`SearchIndex`] - JSON search document built from the generated HTML
//!
//! All entities are created once per parsed row and never mutated afterwards.

pub mod attachment;
pub mod catalog;
pub mod forum;
pub mod post;
pub mod search;

pub use attachment::Attachment;
pub use catalog::Catalog;
pub use forum::{Forum, ForumKind, ForumStatus};
pub use post::{Post, derive_subject};
pub use search::{ForumDocument, PostDocument, SearchIndex, ThreadDocument, ThreadReference};
