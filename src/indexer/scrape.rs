//! Re-parsing generated pages into search documents.
//!
//! The indexer deliberately works from the HTML files on disk, not from the
//! catalog: it sees exactly what a reader's browser sees. It selects by the
//! fixed CSS class names shared with `site::pages` and strips the decorative
//! emoji prefixes the pages add to author, date and board labels.

use scraper::{ElementRef, Html, Selector};

use crate::models::{ForumDocument, PostDocument, ThreadDocument, ThreadReference};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid selector")
}

/// Plain text of an element: tags removed, whitespace normalized.
fn element_text(element: ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_label(text: &str, prefix: &str) -> String {
    text.trim_start_matches(prefix).trim().to_string()
}

/// Extract the searchable data of one thread page.
pub fn parse_thread_document(file_name: &str, html: &str) -> ThreadDocument {
    let document = Html::parse_document(html);
    let h1 = selector("h1");
    let post_sel = selector("div.post");
    let author_sel = selector("span.post-author");
    let date_sel = selector("span.post-date");
    let content_sel = selector("div.post-content");

    let title = document.select(&h1).next().map(element_text).unwrap_or_default();

    let posts = document
        .select(&post_sel)
        .map(|post| PostDocument {
            author: post
                .select(&author_sel)
                .next()
                .map(|el| strip_label(&element_text(el), "👤"))
                .unwrap_or_default(),
            date: post
                .select(&date_sel)
                .next()
                .map(|el| strip_label(&element_text(el), "🕐"))
                .unwrap_or_default(),
            content: post.select(&content_sel).next().map(element_text).unwrap_or_default(),
        })
        .collect();

    ThreadDocument { file: file_name.to_string(), title, posts }
}

/// Extract the thread listing of one forum page.
pub fn parse_forum_document(file_name: &str, html: &str) -> ForumDocument {
    let document = Html::parse_document(html);
    let h1 = selector("h1");
    let item_sel = selector("li.thread-item");
    let title_link_sel = selector("div.thread-title a");
    let meta_sel = selector("div.thread-meta");

    let title = document
        .select(&h1)
        .next()
        .map(|el| strip_label(&element_text(el), "📁"))
        .unwrap_or_default();

    let threads = document
        .select(&item_sel)
        .filter_map(|item| {
            let link = item.select(&title_link_sel).next()?;
            Some(ThreadReference {
                link: link.value().attr("href").unwrap_or_default().to_string(),
                title: element_text(link),
                meta: item.select(&meta_sel).next().map(element_text).unwrap_or_default(),
            })
        })
        .collect();

    ForumDocument { file: file_name.to_string(), title, threads }
}
