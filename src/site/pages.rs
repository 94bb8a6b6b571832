//! Page construction: pure functions from the catalog to HTML strings.
//!
//! The CSS class names used here (`container`, `post`, `first-post`,
//! `post-author`, `post-date`, `post-content`, `thread-item`, `thread-title`,
//! `thread-meta`, ...) are load-bearing: the search indexer re-parses the
//! generated files by these exact markers and has no access to the original
//! structured records. Changing a class name here breaks the index.

use chrono::DateTime;

use crate::models::{Catalog, Forum, ForumKind, Post};
use crate::render::{escape_html, render_bbcode};

const SITE_TITLE: &str = "Forum Archive";

/// Format a dateline (unix seconds) for display.
pub fn format_dateline(timestamp: i64, format: &str) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_else(|| "unknown date".to_string())
}

/// Threads of one forum, newest first by the originating post's dateline.
struct ThreadSummary<'a> {
    thread_id: u32,
    first_post: &'a Post,
    reply_count: usize,
}

fn forum_threads(catalog: &Catalog, forum_id: u32) -> Vec<ThreadSummary<'_>> {
    let mut threads: Vec<ThreadSummary<'_>> = catalog
        .threads()
        .filter_map(|(thread_id, posts)| {
            let first_post = *posts.first()?;
            (first_post.forum_id == forum_id).then(|| ThreadSummary {
                thread_id,
                first_post,
                reply_count: posts.len() - 1,
            })
        })
        .collect();
    threads.sort_by_key(|t| std::cmp::Reverse(t.first_post.timestamp));
    threads
}

fn forum_post_count(catalog: &Catalog, forum_id: u32) -> usize {
    catalog.posts.iter().filter(|p| p.forum_id == forum_id).count()
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"style.css\">\n\
         </head>\n\
         <body>\n\
         <div class=\"container\">\n{body}</div>\n\
         </body>\n\
         </html>\n"
    )
}

fn forum_list_item(catalog: &Catalog, forum: &Forum) -> String {
    let thread_count = forum_threads(catalog, forum.id).len();
    let post_count = forum_post_count(catalog, forum.id);
    format!(
        "<li class=\"forum-item\">\n\
         <a href=\"forum_{}.html\">{}</a>\n\
         <div class=\"thread-meta\">{} threads | {} posts</div>\n\
         </li>\n",
        forum.id,
        escape_html(&forum.name),
        thread_count,
        post_count
    )
}

/// Build the main index page: per-category forum lists plus totals.
pub fn index_page(catalog: &Catalog) -> String {
    let mut body = format!(
        "<h1>{}</h1>\n\
         <p>A static archive of the forum. Browse the boards below.</p>\n\
         <div class=\"stats\">📊 {} boards | {} posts | {} attachments</div>\n",
        SITE_TITLE,
        catalog.forums.values().filter(|f| f.kind == ForumKind::Forum).count(),
        catalog.posts.len(),
        catalog.attachments.len()
    );

    let mut categories: Vec<&Forum> =
        catalog.forums.values().filter(|f| f.kind == ForumKind::Category).collect();
    categories.sort_by_key(|c| (c.display_order, c.id));

    let mut listed = std::collections::HashSet::new();
    for category in categories {
        let mut children: Vec<&Forum> = catalog
            .forums
            .values()
            .filter(|f| f.kind == ForumKind::Forum && f.parent_id == category.id)
            .collect();
        if children.is_empty() {
            continue;
        }
        children.sort_by_key(|f| (f.display_order, f.id));

        body.push_str(&format!("<h2>{}</h2>\n<ul class=\"forum-list\">\n", escape_html(&category.name)));
        for forum in children {
            listed.insert(forum.id);
            body.push_str(&forum_list_item(catalog, forum));
        }
        body.push_str("</ul>\n");
    }

    // Boards whose parent is not a known category still get listed
    let mut orphans: Vec<&Forum> = catalog
        .forums
        .values()
        .filter(|f| f.kind == ForumKind::Forum && !listed.contains(&f.id))
        .collect();
    if !orphans.is_empty() {
        orphans.sort_by_key(|f| (f.display_order, f.id));
        body.push_str("<h2>Other boards</h2>\n<ul class=\"forum-list\">\n");
        for forum in orphans {
            body.push_str(&forum_list_item(catalog, forum));
        }
        body.push_str("</ul>\n");
    }

    page_shell(SITE_TITLE, &body)
}

/// Build one forum page: thread list, newest first.
pub fn forum_page(catalog: &Catalog, forum: &Forum) -> String {
    let threads = forum_threads(catalog, forum.id);
    let mut body = format!(
        "<div class=\"navigation\">\n\
         <a href=\"index.html\">🏠 Index</a>\n\
         </div>\n\
         <h1>📁 {}</h1>\n\
         <p>{} threads, {} posts</p>\n\
         <ul class=\"thread-list\">\n",
        escape_html(&forum.name),
        threads.len(),
        forum_post_count(catalog, forum.id)
    );

    for thread in &threads {
        body.push_str(&format!(
            "<li class=\"thread-item\">\n\
             <div class=\"thread-title\">\n\
             <a href=\"thread_{}.html\">{}</a>\n\
             </div>\n\
             <div class=\"thread-meta\">👤 {} | 🕐 {} | 💬 {} replies</div>\n\
             </li>\n",
            thread.thread_id,
            escape_html(&thread.first_post.subject),
            escape_html(&thread.first_post.author),
            format_dateline(thread.first_post.timestamp, "%Y-%m-%d %H:%M"),
            thread.reply_count
        ));
    }
    body.push_str("</ul>\n");

    page_shell(&format!("{} - {}", escape_html(&forum.name), SITE_TITLE), &body)
}

/// Build one thread page: every post in ascending id order, first post
/// highlighted, bodies rendered from BBCode.
pub fn thread_page(catalog: &Catalog, posts: &[&Post]) -> String {
    let Some(first_post) = posts.first() else {
        return page_shell(SITE_TITLE, "");
    };
    let forum_name = catalog
        .forums
        .get(&first_post.forum_id)
        .map(|f| f.name.as_str())
        .unwrap_or("Unknown board");

    let mut body = format!(
        "<div class=\"navigation\">\n\
         <a href=\"index.html\">🏠 Index</a>\n\
         <a href=\"forum_{}.html\">📁 {}</a>\n\
         </div>\n\
         <h1>{}</h1>\n",
        first_post.forum_id,
        escape_html(forum_name),
        escape_html(&first_post.subject)
    );

    for (i, post) in posts.iter().enumerate() {
        let post_class = if i == 0 { "post first-post" } else { "post" };
        body.push_str(&format!(
            "<div class=\"{}\">\n\
             <div class=\"post-header\">\n\
             <span class=\"post-author\">👤 {}</span>\n\
             <span class=\"post-date\">🕐 {}</span>\n\
             <div style=\"clear: both;\"></div>\n\
             </div>\n\
             <div class=\"post-content\">\n{}\n</div>\n\
             </div>\n",
            post_class,
            escape_html(&post.author),
            format_dateline(post.timestamp, "%Y-%m-%d %H:%M:%S"),
            render_bbcode(&post.body_raw, &catalog.attachments)
        ));
    }

    page_shell(&format!("{} - {}", escape_html(&first_post.subject), SITE_TITLE), &body)
}
