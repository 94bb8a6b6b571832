//! Search index builder.
//!
//! Scans a generated site directory for `thread_*.html` and `forum_*.html`
//! files, re-parses each into a search document, and writes the combined
//! index as pretty-printed JSON. Unreadable files are warned about and
//! skipped; only a missing or unreadable site directory is fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::indexer::scrape::{parse_forum_document, parse_thread_document};
use crate::models::SearchIndex;

pub const INDEX_FILENAME: &str = "search_index.json";

/// Build the search index from a generated site directory.
pub fn build_search_index(site_dir: &Path) -> Result<SearchIndex> {
    let mut thread_files = Vec::new();
    let mut forum_files = Vec::new();

    let entries = fs::read_dir(site_dir)
        .with_context(|| format!("Failed to read site directory {}", site_dir.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", site_dir.display()))?;
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        if name.starts_with("thread_") {
            thread_files.push(name);
        } else if name.starts_with("forum_") {
            forum_files.push(name);
        }
    }
    thread_files.sort();
    forum_files.sort();

    let mut threads = BTreeMap::new();
    let mut forums = BTreeMap::new();
    let mut skipped = 0;

    for name in &thread_files {
        match fs::read_to_string(site_dir.join(name)) {
            Ok(html) => {
                threads.insert(name.clone(), parse_thread_document(name, &html));
            }
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", name, e);
                skipped += 1;
            }
        }
    }
    for name in &forum_files {
        match fs::read_to_string(site_dir.join(name)) {
            Ok(html) => {
                forums.insert(name.clone(), parse_forum_document(name, &html));
            }
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", name, e);
                skipped += 1;
            }
        }
    }

    eprintln!(
        "Indexed {} threads and {} forums ({} files skipped)",
        threads.len(),
        forums.len(),
        skipped
    );

    Ok(SearchIndex { threads, forums, generated_at: Utc::now().to_rfc3339() })
}

/// Build the index and write it to `<site>/search_index.json`.
pub fn write_search_index(site_dir: &Path) -> Result<()> {
    let index = build_search_index(site_dir)?;
    let json = serde_json::to_string_pretty(&index).context("Failed to serialize search index")?;

    let path = site_dir.join(INDEX_FILENAME);
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    eprintln!("Search index written to {}", path.display());
    Ok(())
}
