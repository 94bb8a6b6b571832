//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for assembling a SQL dump file on disk.
pub struct DumpBuilder {
    statements: Vec<String>,
}

impl DumpBuilder {
    pub fn new() -> Self {
        Self { statements: Vec::new() }
    }

    /// Append a raw INSERT statement (terminating `;` added).
    pub fn with_statement(mut self, table: &str, values: &str) -> Self {
        self.statements.push(format!("INSERT INTO `{}` VALUES {};", table, values));
        self
    }

    pub fn build(&self) -> String {
        let mut dump = String::from("-- forum dump fixture\n");
        for statement in &self.statements {
            dump.push_str(statement);
            dump.push('\n');
        }
        dump
    }

    /// Write the dump into `dir` and return its path.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("forum_dump.sql");
        fs::write(&path, self.build()).expect("Failed to write dump fixture");
        path
    }
}

impl Default for DumpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A small but representative dump: one category, two boards, two threads,
/// an attachment, an empty subject, and a body with tricky bytes.
pub fn sample_dump() -> DumpBuilder {
    DumpBuilder::new()
        .with_statement(
            "cdb_forums",
            "(1, 0, 'group', 'Community', 1, 1), \
             (2, 1, 'forum', 'General', 1, 1), \
             (3, 1, 'forum', 'Off Topic', 1, 2)",
        )
        .with_statement(
            "cdb_posts",
            "(101, 2, 900, 1, 'Alice', 10, 'Welcome', 1600000000, 'Hello [b]world[/b]'), \
             (102, 2, 900, 0, 'Bob', 11, '', 1600000100, 'See [attach]42[/attach] here')",
        )
        .with_statement(
            "cdb_posts",
            "(103, 3, 901, 1, 'Carol', 12, 'Tricky', 1600000200, 'contains ); more text')",
        )
        .with_statement(
            "cdb_attachments",
            "(42, 900, 102, 0, 0, 0, 'photo.jpg', 0, 0, 0, 'forum/photo_stored.jpg', 0, 1)",
        )
}

/// Create a temp dir holding the sample dump and an attachments tree.
pub fn sample_workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let dump_path = sample_dump().write_to(dir.path());

    let attachments_dir = dir.path().join("attachments");
    fs::create_dir_all(attachments_dir.join("forum")).expect("Failed to create attachments dir");
    fs::write(attachments_dir.join("forum/photo_stored.jpg"), b"jpeg bytes")
        .expect("Failed to write attachment fixture");

    (dir, dump_path, attachments_dir)
}
