/// End-to-end integration tests for the forum archiver
///
/// These tests verify complete workflows: dump parsing → site generation →
/// search index building
mod common;

use std::fs;

use common::{DumpBuilder, sample_dump, sample_workspace};
use forum_archiver::indexer::build_search_index;
use forum_archiver::parsers::parse_dump;
use forum_archiver::site::generate_site;

#[test]
fn test_e2e_parse_dump_catalog_shape() {
    let dump = sample_dump().build();
    let catalog = parse_dump(&dump);

    assert_eq!(catalog.forums.len(), 3);
    assert_eq!(catalog.posts.len(), 3);
    assert_eq!(catalog.attachments.len(), 1);
    assert_eq!(catalog.thread_count(), 2);

    // Thread 900 is ordered by ascending post id with the originator first
    let thread = catalog.thread_posts(900);
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].id, 101);
    assert!(thread[0].is_first_in_thread);

    // The reply's empty subject was replaced with a derived placeholder
    assert!(!thread[1].subject.is_empty());
    assert!(thread[1].subject.contains("See"));
}

#[test]
fn test_e2e_statement_boundary_bytes_inside_body() {
    let dump = sample_dump().build();
    let catalog = parse_dump(&dump);

    // The second posts statement carries `); more text` inside a quoted body
    let tricky = catalog.posts.iter().find(|p| p.id == 103).unwrap();
    assert_eq!(tricky.author, "Carol");
    assert_eq!(tricky.body_raw, "contains ); more text");
}

#[test]
fn test_e2e_generate_site_and_copy_attachments() {
    let (dir, dump_path, attachments_dir) = sample_workspace();
    let output = dir.path().join("website");

    let content = fs::read_to_string(&dump_path).unwrap();
    let catalog = parse_dump(&content);
    generate_site(&catalog, &output, &attachments_dir).unwrap();

    assert!(output.join("index.html").exists());
    assert!(output.join("style.css").exists());
    assert!(output.join("forum_2.html").exists());
    assert!(output.join("forum_3.html").exists());
    assert!(output.join("thread_900.html").exists());
    assert!(output.join("thread_901.html").exists());
    assert!(output.join("attachments/forum/photo_stored.jpg").exists());

    let thread = fs::read_to_string(output.join("thread_900.html")).unwrap();
    assert!(thread.contains("Hello <strong>world</strong>"));
    // The attachment reference resolved to an inline image block
    assert!(thread.contains(r#"<div class="attachment image">"#));
    assert!(thread.contains("attachments/forum/photo_stored.jpg"));
}

#[test]
fn test_e2e_search_index_round_trip() {
    let (dir, dump_path, attachments_dir) = sample_workspace();
    let output = dir.path().join("website");

    let content = fs::read_to_string(&dump_path).unwrap();
    let catalog = parse_dump(&content);
    generate_site(&catalog, &output, &attachments_dir).unwrap();

    let index = build_search_index(&output).unwrap();

    assert_eq!(index.threads.len(), 2);
    assert_eq!(index.forums.len(), 2);

    let welcome = &index.threads["thread_900.html"];
    assert_eq!(welcome.title, "Welcome");
    assert_eq!(welcome.posts[0].author, "Alice");
    assert!(welcome.posts[0].content.contains("Hello world"));

    let general = &index.forums["forum_2.html"];
    assert_eq!(general.title, "General");
    assert_eq!(general.threads.len(), 1);
    assert_eq!(general.threads[0].link, "thread_900.html");
    assert_eq!(general.threads[0].title, "Welcome");
}

#[test]
fn test_e2e_unresolved_attachment_reference_is_visible() {
    let dump = DumpBuilder::new()
        .with_statement("cdb_forums", "(1, 0, 'forum', 'Solo', 1, 1)")
        .with_statement(
            "cdb_posts",
            "(1, 1, 10, 1, 'Dana', 1, 'Lost file', 1600000000, 'gone: [attach]777[/attach]')",
        )
        .build();

    let catalog = parse_dump(&dump);
    let dir = tempfile::TempDir::new().unwrap();
    generate_site(&catalog, dir.path(), &dir.path().join("none")).unwrap();

    let thread = fs::read_to_string(dir.path().join("thread_10.html")).unwrap();
    assert!(thread.contains("[attachment 777 not found]"));
}

#[test]
fn test_e2e_corrupted_records_do_not_block_the_rest() {
    let dump = DumpBuilder::new()
        .with_statement("cdb_forums", "(1, 0, 'forum', 'Board', 1, 1), (2, 0)")
        .with_statement(
            "cdb_posts",
            "(1, 1, 10, 1), \
             (2, 1, 10, 1, 'Eve', 2, 'Fine', 1600000000, 'survives')",
        )
        .build();

    let catalog = parse_dump(&dump);

    // Short records are skipped; the valid ones still come through
    assert_eq!(catalog.forums.len(), 1);
    assert_eq!(catalog.posts.len(), 1);
    assert_eq!(catalog.posts[0].id, 2);
}

#[test]
fn test_e2e_doubled_quotes_survive_to_rendered_page() {
    let dump = DumpBuilder::new()
        .with_statement("cdb_forums", "(1, 0, 'forum', 'Board', 1, 1)")
        .with_statement(
            "cdb_posts",
            "(1, 1, 10, 1, 'Eve', 2, 'Quotes', 1600000000, 'it''s [b]great[/b]')",
        )
        .build();

    let catalog = parse_dump(&dump);
    assert_eq!(catalog.posts[0].body_raw, "it's [b]great[/b]");

    let dir = tempfile::TempDir::new().unwrap();
    generate_site(&catalog, dir.path(), &dir.path().join("none")).unwrap();

    let thread = fs::read_to_string(dir.path().join("thread_10.html")).unwrap();
    // The quote is escaped for HTML, the markup is rendered
    assert!(thread.contains("it&#x27;s <strong>great</strong>"));
}
