//! Writing the static site to disk.
//!
//! All the HTML is built by the pure constructors in `site::pages`; this
//! module only creates directories and writes files. I/O failures here are
//! the one class of error that aborts a run, and they carry path context.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Catalog, ForumKind};
use crate::site::assets::{STYLESHEET, copy_attachments};
use crate::site::pages::{forum_page, index_page, thread_page};

/// Generate the whole static site from a parsed catalog.
///
/// Writes `style.css`, `index.html`, one `forum_<id>.html` per board, one
/// `thread_<id>.html` per thread, and copies the attachment files.
pub fn generate_site(catalog: &Catalog, output_dir: &Path, attachments_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    copy_attachments(attachments_dir, output_dir)?;

    write_page(output_dir, "style.css", STYLESHEET)?;
    write_page(output_dir, "index.html", &index_page(catalog))?;

    let mut page_count = 2;
    for forum in catalog.forums.values().filter(|f| f.kind == ForumKind::Forum) {
        write_page(output_dir, &format!("forum_{}.html", forum.id), &forum_page(catalog, forum))?;
        page_count += 1;
    }

    for (thread_id, posts) in catalog.threads() {
        write_page(output_dir, &format!("thread_{}.html", thread_id), &thread_page(catalog, &posts))?;
        page_count += 1;
    }

    eprintln!("Generated {} files in {}", page_count, output_dir.display());
    Ok(())
}

fn write_page(output_dir: &Path, filename: &str, content: &str) -> Result<()> {
    let path = output_dir.join(filename);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}
