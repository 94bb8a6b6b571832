//! Client-side search index generation.
//!
//! # Error Handling Strategy
//!
//! - **File-level failures**: Pages that cannot be read are logged as warnings
//!   and skipped, so one bad file never prevents indexing the rest.
//! - **Structure tolerance**: Missing elements inside a page (no `h1`, no
//!   posts) produce empty fields, not errors; the parser works from class
//!   names alone and degrades gracefully.
//! - **Summary reporting**: Counts of indexed and skipped files are printed,
//!   giving users visibility into index completeness.

pub mod builder;
pub mod scrape;

pub use builder::{build_search_index, write_search_index};
pub use scrape::{parse_forum_document, parse_thread_document};
