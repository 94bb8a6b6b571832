//! BBCode to HTML rendering.
//!
//! The renderer maps one raw post body to one HTML fragment. The whole input
//! is HTML-escaped first; every substitution rule operates on the escaped
//! text, so no raw angle bracket or ampersand from user content ever reaches
//! the output, including inside attributes built by the rules.
//!
//! Rules are evaluated in a fixed order, and the order is load-bearing: the
//! serif-variant italic and the clamped small-size rules must run before
//! their generic counterparts, otherwise the generic pattern wins.
//!
//! Malformed or unmatched tags are simply left as literal escaped text; the
//! renderer never fails, it degrades to plain text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::Attachment;
use crate::render::html::escape_html;

/// Font sizes of 1-2 render unreadably small; they are clamped up to this
/// minimum. A deliberate visual-quality override, not a literal rendering.
const MIN_FONT_SIZE_PX: u32 = 8;

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid BBCode rule pattern")
}

/// The font wrapper is stripped rather than rendered (unsupported attribute).
static FONT_RE: LazyLock<Regex> = LazyLock::new(|| rule(r"(?is)\[font=[^\[\]]*\](.*?)\[/font\]"));

static ATTACH_RE: LazyLock<Regex> = LazyLock::new(|| rule(r"(?is)\[attach\](\d+)\[/attach\]"));

/// Ordered tag substitution rules. Patterns are case-insensitive, non-greedy,
/// and span newlines.
static TAG_RULES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    vec![
        (rule(r"(?is)\[b\](.*?)\[/b\]"), "<strong>${1}</strong>".to_string()),
        // Serif-variant italic, before the generic italic rule
        (rule(r"(?is)\[i=s\](.*?)\[/i\]"), r#"<em class="serif">${1}</em>"#.to_string()),
        (rule(r"(?is)\[i\](.*?)\[/i\]"), "<em>${1}</em>".to_string()),
        (rule(r"(?is)\[u\](.*?)\[/u\]"), "<u>${1}</u>".to_string()),
        (
            rule(r"(?is)\[color=(.*?)\](.*?)\[/color\]"),
            r#"<span style="color: ${1}">${2}</span>"#.to_string(),
        ),
        // Clamped small sizes, before the generic numeric size rule
        (
            rule(r"(?is)\[size=[12]\](.*?)\[/size\]"),
            format!(r#"<span style="font-size: {}px">${{1}}</span>"#, MIN_FONT_SIZE_PX),
        ),
        (
            rule(r"(?is)\[size=(\d+)\](.*?)\[/size\]"),
            r#"<span style="font-size: ${1}px">${2}</span>"#.to_string(),
        ),
        (
            rule(r"(?is)\[url=(.*?)\](.*?)\[/url\]"),
            r#"<a href="${1}" target="_blank">${2}</a>"#.to_string(),
        ),
        (
            rule(r"(?is)\[url\](.*?)\[/url\]"),
            r#"<a href="${1}" target="_blank">${1}</a>"#.to_string(),
        ),
        (
            rule(r"(?is)\[img\](.*?)\[/img\]"),
            r#"<img src="${1}" alt="Image" style="max-width: 100%;">"#.to_string(),
        ),
        (
            rule(r"(?is)\[youtube\](.*?)\[/youtube\]"),
            concat!(
                r#"<div class="youtube-container">"#,
                r#"<iframe width="560" height="315" "#,
                r#"src="https://www.youtube.com/embed/${1}" "#,
                r#"frameborder="0" allowfullscreen></iframe></div>"#
            )
            .to_string(),
        ),
        (rule(r"(?is)\[quote\](.*?)\[/quote\]"), "<blockquote>${1}</blockquote>".to_string()),
        (rule(r"(?is)\[code\](.*?)\[/code\]"), "<pre><code>${1}</code></pre>".to_string()),
    ]
});

/// Render one raw post body into an HTML fragment.
///
/// Pure function over the body and the read-only attachment table: same
/// input, same output. Steps, in order: escape, strip font wrapper, apply
/// the tag rule table, resolve attachment references, convert newlines to
/// `<br>` (last, so multi-line content inside quote and code blocks still
/// gets line breaks).
pub fn render_bbcode(body: &str, attachments: &HashMap<u32, Attachment>) -> String {
    if body.is_empty() {
        return String::new();
    }

    let mut text = escape_html(body);
    text = FONT_RE.replace_all(&text, "${1}").into_owned();

    for (pattern, replacement) in TAG_RULES.iter() {
        text = pattern.replace_all(&text, replacement.as_str()).into_owned();
    }

    text = ATTACH_RE
        .replace_all(&text, |caps: &Captures| {
            let id: u32 = caps[1].parse().unwrap_or(0);
            replace_attachment(id, attachments)
        })
        .into_owned();

    text.replace('\n', "<br>")
}

/// Build the HTML block for one `[attach]` reference.
///
/// An unknown id produces a visible placeholder carrying the id; a reference
/// is never silently dropped.
fn replace_attachment(id: u32, attachments: &HashMap<u32, Attachment>) -> String {
    let Some(attachment) = attachments.get(&id) else {
        return format!("[attachment {} not found]", id);
    };

    let filename = escape_html(&attachment.filename);
    let filepath = format!("attachments/{}", escape_html(&attachment.stored_path));

    if attachment.is_image {
        format!(
            r#"<div class="attachment image"><img src="{filepath}" alt="{filename}" style="max-width: 100%;"><br><small>Attachment: {filename}</small></div>"#
        )
    } else {
        format!(
            r#"<div class="attachment file"><a href="{filepath}" download="{filename}">{filename}</a></div>"#
        )
    }
}
