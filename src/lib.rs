//! Forum Archiver - Convert a forum SQL dump into a static, searchable website
//!
//! This library turns an exported relational dump of a discussion-forum
//! database into a self-contained static HTML site plus a client-side search
//! index. It supports:
//!
//! - Parsing loosely-structured SQL INSERT statements (forums, posts,
//!   attachments) with quote-aware literal scanning and anchor-based
//!   resynchronization for post bodies
//! - Rendering BBCode post bodies into safe HTML
//! - Generating browsable index, forum and thread pages
//! - Building a JSON search index by re-parsing the generated HTML
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use forum_archiver::parsers::parse_dump;
//! use forum_archiver::site::generate_site;
//!
//! let content = std::fs::read_to_string("forum_dump.sql")?;
//! let catalog = parse_dump(&content);
//! generate_site(&catalog, Path::new("website"), Path::new("attachments"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod render;
pub mod site;

// Re-export commonly used types
pub use indexer::{build_search_index, write_search_index};
pub use models::{Attachment, Catalog, Forum, Post, SearchIndex};
pub use parsers::parse_dump;
pub use render::render_bbcode;
pub use site::generate_site;
