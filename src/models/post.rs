use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Longest subject derived from a body preview, in characters.
const PREVIEW_CHARS: usize = 48;

static MARKUP_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\[\]]*\]").unwrap());

/// One row of the post table. Immutable after parse.
///
/// `subject` is never empty: rows with an empty subject column get a derived
/// placeholder at ingestion time (see [`derive_subject`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub forum_id: u32,
    pub thread_id: u32,
    pub is_first_in_thread: bool,
    pub author: String,
    pub author_id: u32,
    pub subject: String,
    /// Unix timestamp (the dump's `dateline` column).
    pub timestamp: i64,
    /// Raw BBCode body, exactly as stored in the dump (newlines decoded).
    pub body_raw: String,
}

/// Derive a display subject for a post whose subject column is empty.
///
/// Empty subjects are common (every reply has one), so instead of a generic
/// "untitled" label we use a truncated preview of the body with markup tags
/// stripped, which keeps the subject useful for browsing and search. A post
/// with an empty body falls back to a synthetic id-based label.
pub fn derive_subject(body_raw: &str, post_id: u32) -> String {
    let stripped = MARKUP_TAG_RE.replace_all(body_raw, "");
    let preview: String = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if preview.is_empty() {
        return format!("Post #{}", post_id);
    }

    if preview.chars().count() <= PREVIEW_CHARS {
        preview
    } else {
        let truncated: String = preview.chars().take(PREVIEW_CHARS).collect();
        format!("{}…", truncated.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_subject_uses_body_preview() {
        let subject = derive_subject("Hello [b]world[/b]", 101);
        assert_eq!(subject, "Hello world");
    }

    #[test]
    fn test_derive_subject_truncates_long_bodies() {
        let body = "word ".repeat(40);
        let subject = derive_subject(&body, 1);
        assert!(subject.ends_with('…'));
        assert!(subject.chars().count() <= PREVIEW_CHARS + 1);
    }

    #[test]
    fn test_derive_subject_truncates_on_char_boundary() {
        // Multi-byte characters must not be split mid-codepoint
        let body = "討論區".repeat(30);
        let subject = derive_subject(&body, 1);
        assert!(subject.ends_with('…'));
    }

    #[test]
    fn test_derive_subject_empty_body_falls_back_to_id() {
        assert_eq!(derive_subject("", 7), "Post #7");
        assert_eq!(derive_subject("[img][/img]", 7), "Post #7");
    }

    #[test]
    fn test_derive_subject_collapses_whitespace() {
        assert_eq!(derive_subject("a\n\n  b", 1), "a b");
    }
}
