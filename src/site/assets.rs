//! Static assets: the embedded stylesheet and the attachment file copier.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Stylesheet for every generated page, written to `style.css`.
///
/// The class names referenced here are part of the contract shared with the
/// search indexer; see `site::pages`.
pub const STYLESHEET: &str = r#"body {
    font-family: "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    margin: 0;
    padding: 20px;
    background-color: #f5f5f5;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    background-color: white;
    padding: 20px;
    border-radius: 8px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
}

h1, h2, h3 {
    color: #0066cc;
    border-bottom: 2px solid #0066cc;
    padding-bottom: 10px;
}

.forum-list, .thread-list {
    list-style: none;
    padding: 0;
}

.forum-item {
    margin: 10px 0;
    padding: 15px;
    background-color: #f8f9fa;
    border-radius: 5px;
    border-left: 4px solid #0066cc;
}

.forum-item a {
    text-decoration: none;
    color: #0066cc;
    font-weight: bold;
}

.forum-item a:hover {
    text-decoration: underline;
}

.thread-item {
    margin: 10px 0;
    padding: 10px;
    background-color: #f8f9fa;
    border-radius: 5px;
}

.thread-title {
    font-weight: bold;
    color: #0066cc;
}

.thread-meta {
    color: #666;
    font-size: 0.9em;
    margin-top: 5px;
}

.post {
    margin: 20px 0;
    padding: 15px;
    background-color: #fafafa;
    border-radius: 5px;
    border-left: 3px solid #28a745;
}

.post.first-post {
    border-left-color: #0066cc;
    background-color: #f0f8ff;
}

.post-header {
    background-color: #e9ecef;
    padding: 10px;
    border-radius: 5px 5px 0 0;
    margin: -15px -15px 15px -15px;
}

.post-author {
    font-weight: bold;
    color: #495057;
}

.post-date {
    color: #6c757d;
    font-size: 0.9em;
    float: right;
}

.post-content {
    margin-top: 10px;
    line-height: 1.6;
}

.post-content img {
    max-width: 100%;
    height: auto;
    border-radius: 5px;
}

blockquote {
    border-left: 4px solid #ccc;
    margin: 10px 0;
    padding: 10px 20px;
    background-color: #f9f9f9;
    font-style: italic;
}

.attachment {
    margin: 10px 0;
    padding: 10px;
    background-color: #e9ecef;
    border-radius: 5px;
    border: 1px solid #dee2e6;
}

.attachment.image {
    text-align: center;
}

.attachment a {
    color: #0066cc;
    text-decoration: none;
}

.navigation {
    margin: 20px 0;
    padding: 10px;
    background-color: #e9ecef;
    border-radius: 5px;
}

.navigation a {
    color: #0066cc;
    text-decoration: none;
    margin-right: 15px;
}

.youtube-container {
    position: relative;
    width: 100%;
    height: 0;
    padding-bottom: 56.25%; /* 16:9 */
    margin: 10px 0;
}

.youtube-container iframe {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
}

pre {
    background-color: #f8f9fa;
    border: 1px solid #dee2e6;
    border-radius: 5px;
    padding: 10px;
    overflow-x: auto;
}

.stats {
    margin-top: 20px;
    padding: 10px;
    background-color: #e7f3ff;
    border-radius: 5px;
    color: #0066cc;
}
"#;

/// Copy the attachment files into `<output>/attachments`, replacing any
/// previous copy. A missing source directory is only a warning: the site is
/// still generated, attachment links will just dangle.
pub fn copy_attachments(attachments_dir: &Path, output_dir: &Path) -> Result<()> {
    if !attachments_dir.exists() {
        eprintln!(
            "Warning: attachments directory {} not found, skipping copy",
            attachments_dir.display()
        );
        return Ok(());
    }

    let destination = output_dir.join("attachments");
    if destination.exists() {
        fs::remove_dir_all(&destination).with_context(|| {
            format!("Failed to remove previous attachments copy at {}", destination.display())
        })?;
    }
    copy_dir_recursive(attachments_dir, &destination)?;

    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .with_context(|| format!("Failed to create directory {}", dst.display()))?;

    for entry in
        fs::read_dir(src).with_context(|| format!("Failed to read directory {}", src.display()))?
    {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", src.display()))?;
        let target = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Failed to copy {} to {}", entry.path().display(), target.display())
            })?;
        }
    }

    Ok(())
}
