//! Locating per-table INSERT statements inside a dump.
//!
//! A dump may split one logical table across several INSERT statements at
//! different offsets, and field values may contain `;` (or whole `);`
//! sequences) inside quoted literals, so "find the next semicolon" is unsafe.
//! The rule used here: a statement runs to the start of the next INSERT
//! statement (for any table), and its terminating boundary is the **last
//! unquoted `;`** in that stretch, or end of input for the final one.

use std::sync::LazyLock;

use regex::Regex;

const INSERT_MARKER: &str = "INSERT INTO `";

static VALUES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bVALUES\b\s*").unwrap());

/// Extract the VALUES body of every INSERT statement for `table`.
///
/// Returns one slice per statement, covering everything between the `VALUES`
/// keyword and the statement's true terminating boundary. Statements without
/// a VALUES clause are skipped.
pub fn statement_values<'a>(content: &'a str, table: &str) -> Vec<&'a str> {
    let marker = format!("{}{}`", INSERT_MARKER, table);
    let starts = marker_offsets(content, &marker);
    let all_starts = marker_offsets(content, INSERT_MARKER);

    let mut bodies = Vec::with_capacity(starts.len());
    for &start in &starts {
        // Bound the statement at the next INSERT for any table; a quoted `;`
        // inside a field never terminates it
        let segment_end = all_starts
            .iter()
            .copied()
            .find(|&offset| offset > start)
            .unwrap_or(content.len());
        let segment = &content[start..segment_end];

        let Some(values) = VALUES_RE.find(segment) else {
            continue;
        };
        let body = &segment[values.end()..];

        let body = match last_unquoted_semicolon(body) {
            Some(idx) => &body[..idx],
            None => body,
        };
        bodies.push(body);
    }

    bodies
}

/// Byte offsets of every occurrence of `marker` in `content`.
fn marker_offsets(content: &str, marker: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut from = 0;
    while let Some(pos) = content[from..].find(marker) {
        offsets.push(from + pos);
        from += pos + marker.len();
    }
    offsets
}

/// Position of the last `;` that is not inside a quoted literal.
fn last_unquoted_semicolon(text: &str) -> Option<usize> {
    let mut in_quote = false;
    let mut quote_char = '\0';
    let mut last = None;

    for (idx, ch) in text.char_indices() {
        if in_quote {
            // A doubled quote closes and immediately reopens, which nets out
            if ch == quote_char {
                in_quote = false;
            }
        } else if ch == '\'' || ch == '"' {
            in_quote = true;
            quote_char = ch;
        } else if ch == ';' {
            last = Some(idx);
        }
    }

    last
}
