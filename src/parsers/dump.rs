//! Positional extraction of typed records from a dump.
//!
//! Each extraction step defines a minimum field count; shorter records are
//! skipped with a diagnostic and the parse continues. Numeric fields that
//! fail to parse default to zero. Nothing here is fatal: a corrupted subset
//! of records must never prevent generation of the rest of the site.

use crate::models::{
    Attachment, Catalog, Forum, ForumKind, ForumStatus, Post, derive_subject,
};
use crate::parsers::statements::statement_values;
use crate::parsers::values::{parse_values, parse_values_anchored};

const FORUM_TABLE: &str = "cdb_forums";
const POST_TABLE: &str = "cdb_posts";
const ATTACHMENT_TABLE: &str = "cdb_attachments";

const FORUM_MIN_FIELDS: usize = 4;
const POST_MIN_FIELDS: usize = 9;
const ATTACHMENT_MIN_FIELDS: usize = 11;

/// Parse a whole dump into a read-only catalog.
///
/// Runs the three extraction passes, groups posts into threads, and prints a
/// summary. Malformed records are skipped with warnings; this function never
/// fails.
pub fn parse_dump(content: &str) -> Catalog {
    let mut catalog = Catalog::new();

    extract_forums(content, &mut catalog);
    extract_posts(content, &mut catalog);
    extract_attachments(content, &mut catalog);
    catalog.organize_threads();

    eprintln!(
        "Parsed dump: {} forums, {} posts, {} attachments, {} threads",
        catalog.forums.len(),
        catalog.posts.len(),
        catalog.attachments.len(),
        catalog.thread_count()
    );

    catalog
}

/// Extract forum / category rows.
///
/// Layout: id, parent_id, kind, name, then optionally status and
/// display_order. Forum names have their escaped newline tokens removed
/// entirely (a name split across lines is a data-entry accident).
pub fn extract_forums(content: &str, catalog: &mut Catalog) {
    for body in statement_values(content, FORUM_TABLE) {
        for record in parse_values(body) {
            if record.len() < FORUM_MIN_FIELDS {
                eprintln!(
                    "Warning: skipping forum record with {} fields (expected at least {})",
                    record.len(),
                    FORUM_MIN_FIELDS
                );
                continue;
            }

            let id = field_u32(&record[0]);
            let status =
                if record.get(4).map_or(1, |s| field_i64(s)) == 0 {
                    ForumStatus::Inactive
                } else {
                    ForumStatus::Active
                };
            let forum = Forum {
                id,
                parent_id: field_u32(&record[1]),
                kind: ForumKind::from_column(&record[2]),
                name: strip_newline_escapes(&record[3]),
                status,
                display_order: record.get(5).map_or(0, |s| field_i64(s)),
            };
            catalog.forums.insert(id, forum);
        }
    }
}

/// Extract post rows using the anchored record scanner.
///
/// Layout: id, forum_id, thread_id, first, author, author_id, subject,
/// dateline, message. An empty subject is replaced with a derived placeholder
/// so every post stays addressable in listings and search.
pub fn extract_posts(content: &str, catalog: &mut Catalog) {
    for body in statement_values(content, POST_TABLE) {
        for record in parse_values_anchored(body) {
            if record.len() < POST_MIN_FIELDS {
                eprintln!(
                    "Warning: skipping post record with {} fields (expected at least {})",
                    record.len(),
                    POST_MIN_FIELDS
                );
                continue;
            }

            let id = field_u32(&record[0]);
            let body_raw = decode_newline_escapes(&record[8]);
            let subject = decode_newline_escapes(&record[6]);
            let subject = if subject.trim().is_empty() {
                derive_subject(&body_raw, id)
            } else {
                subject
            };

            catalog.posts.push(Post {
                id,
                forum_id: field_u32(&record[1]),
                thread_id: field_u32(&record[2]),
                is_first_in_thread: field_i64(&record[3]) != 0,
                author: record[4].clone(),
                author_id: field_u32(&record[5]),
                subject,
                timestamp: field_i64(&record[7]),
                body_raw,
            });
        }
    }
}

/// Extract attachment rows.
///
/// Layout: id, thread_id, post_id, .., filename (6), .., stored path (10),
/// .., is_image flag (12, when present).
pub fn extract_attachments(content: &str, catalog: &mut Catalog) {
    for body in statement_values(content, ATTACHMENT_TABLE) {
        for record in parse_values(body) {
            if record.len() < ATTACHMENT_MIN_FIELDS {
                eprintln!(
                    "Warning: skipping attachment record with {} fields (expected at least {})",
                    record.len(),
                    ATTACHMENT_MIN_FIELDS
                );
                continue;
            }

            let id = field_u32(&record[0]);
            catalog.attachments.insert(
                id,
                Attachment {
                    id,
                    thread_id: field_u32(&record[1]),
                    post_id: field_u32(&record[2]),
                    filename: record[6].clone(),
                    stored_path: record[10].clone(),
                    is_image: record.get(12).map_or(0, |s| field_i64(s)) != 0,
                },
            );
        }
    }
}

/// Best-effort numeric field: non-numeric values default to zero.
fn field_u32(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

fn field_i64(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Decode the dump's escaped newline tokens (`\r\n`, `\n`) to real newlines.
fn decode_newline_escapes(raw: &str) -> String {
    raw.replace("\\r\\n", "\n").replace("\\n", "\n")
}

/// Remove escaped newline tokens entirely (used for forum names).
fn strip_newline_escapes(raw: &str) -> String {
    raw.replace("\\r\\n", "").replace("\\n", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\
INSERT INTO `cdb_forums` VALUES (1, 0, 'group', 'Community', 1, 1), (2, 1, 'forum', 'General\\r\\nChat', 1, 2);
INSERT INTO `cdb_posts` VALUES (101, 2, 900, 1, 'Alice', 10, 'Welcome', 1600000000, 'Hello [b]world[/b]'), (102, 2, 900, 0, 'Bob', 11, '', 1600000100, 'First reply\\nsecond line');
INSERT INTO `cdb_attachments` VALUES (42, 900, 102, 0, 0, 0, 'photo.jpg', 0, 0, 0, 'forum/photo_stored.jpg', 0, 1);
";

    #[test]
    fn test_parse_dump_full() {
        let catalog = parse_dump(DUMP);
        assert_eq!(catalog.forums.len(), 2);
        assert_eq!(catalog.posts.len(), 2);
        assert_eq!(catalog.attachments.len(), 1);
        assert_eq!(catalog.thread_count(), 1);
    }

    #[test]
    fn test_forum_fields() {
        let mut catalog = Catalog::new();
        extract_forums(DUMP, &mut catalog);

        let community = &catalog.forums[&1];
        assert_eq!(community.kind, ForumKind::Category);
        assert_eq!(community.name, "Community");

        let general = &catalog.forums[&2];
        assert_eq!(general.kind, ForumKind::Forum);
        assert_eq!(general.parent_id, 1);
        // Escaped newlines are removed from names, not decoded
        assert_eq!(general.name, "GeneralChat");
        assert_eq!(general.display_order, 2);
        assert_eq!(general.status, ForumStatus::Active);
    }

    #[test]
    fn test_forum_short_record_skipped() {
        let mut catalog = Catalog::new();
        extract_forums("INSERT INTO `cdb_forums` VALUES (1, 0, 'forum');", &mut catalog);
        assert!(catalog.forums.is_empty());
    }

    #[test]
    fn test_post_fields_and_newline_decoding() {
        let mut catalog = Catalog::new();
        extract_posts(DUMP, &mut catalog);

        let first = &catalog.posts[0];
        assert_eq!(first.id, 101);
        assert_eq!(first.forum_id, 2);
        assert_eq!(first.thread_id, 900);
        assert!(first.is_first_in_thread);
        assert_eq!(first.author, "Alice");
        assert_eq!(first.author_id, 10);
        assert_eq!(first.subject, "Welcome");
        assert_eq!(first.timestamp, 1_600_000_000);
        assert_eq!(first.body_raw, "Hello [b]world[/b]");

        let reply = &catalog.posts[1];
        assert!(!reply.is_first_in_thread);
        assert_eq!(reply.body_raw, "First reply\nsecond line");
    }

    #[test]
    fn test_empty_subject_gets_derived_placeholder() {
        let mut catalog = Catalog::new();
        extract_posts(DUMP, &mut catalog);

        let reply = &catalog.posts[1];
        assert!(!reply.subject.is_empty());
        assert!(reply.subject.contains("First reply"));
    }

    #[test]
    fn test_non_numeric_field_defaults_to_zero() {
        let mut catalog = Catalog::new();
        extract_posts(
            "INSERT INTO `cdb_posts` VALUES (7, 2, 900, 0, 'Eve', oops, '', 1600000000, 'x');",
            &mut catalog,
        );
        assert_eq!(catalog.posts.len(), 1);
        assert_eq!(catalog.posts[0].author_id, 0);
    }

    #[test]
    fn test_attachment_fields() {
        let mut catalog = Catalog::new();
        extract_attachments(DUMP, &mut catalog);

        let att = &catalog.attachments[&42];
        assert_eq!(att.thread_id, 900);
        assert_eq!(att.post_id, 102);
        assert_eq!(att.filename, "photo.jpg");
        assert_eq!(att.stored_path, "forum/photo_stored.jpg");
        assert!(att.is_image);
    }

    #[test]
    fn test_attachment_without_image_flag_defaults_to_file() {
        let mut catalog = Catalog::new();
        extract_attachments(
            "INSERT INTO `cdb_attachments` VALUES (9, 1, 2, 0, 0, 0, 'doc.pdf', 0, 0, 0, 'forum/doc.pdf');",
            &mut catalog,
        );
        assert!(!catalog.attachments[&9].is_image);
    }

    #[test]
    fn test_split_post_statements_with_statement_boundary_bytes_in_body() {
        // Second statement's body contains the bytes `); more text` inside a
        // quoted literal; both records must come through intact
        let sql = "\
INSERT INTO `cdb_posts` VALUES (1, 2, 10, 1, 'A', 1, 'T', 1600000000, 'plain body');
INSERT INTO `cdb_posts` VALUES (2, 2, 10, 0, 'B', 2, '', 1600000100, 'tricky ); more text here');
";
        let mut catalog = Catalog::new();
        extract_posts(sql, &mut catalog);

        assert_eq!(catalog.posts.len(), 2);
        assert_eq!(catalog.posts[1].id, 2);
        assert_eq!(catalog.posts[1].author, "B");
        assert_eq!(catalog.posts[1].body_raw, "tricky ); more text here");
    }
}
