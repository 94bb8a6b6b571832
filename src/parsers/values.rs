//! Quote-aware scanner for SQL `VALUES (...), (...), ...` literal lists.
//!
//! Produces an ordered sequence of records, each an ordered sequence of
//! decoded field strings. The scanner understands just enough of the literal
//! syntax to survive real dumps:
//!
//! - single- and double-quoted string literals
//! - doubled-quote escaping (`''` inside a quoted literal is one literal
//!   quote character, not end-of-string)
//! - unquoted numeric / bare literals
//! - commas, parentheses, `);` sequences and newlines inside quoted values,
//!   which must stay in the field and never act as structure

use std::sync::LazyLock;

use regex::Regex;

/// Record-start anchor for the post table: `(<integer>,`.
static RECORD_ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\s*(\d+)\s*,").unwrap());

/// Parse a VALUES literal list into records.
///
/// Single-pass character scan. Outside quotes: `(` opens a fresh record
/// (discarding any partial state, which makes the scanner self-correcting on
/// malformed input), `,` closes the current field, `)` closes the field and
/// emits the record, whitespace is dropped. A quote character toggles quoting
/// unless doubled; inside quotes every character is appended verbatim.
///
/// A completely empty unquoted leading field is recorded as `"0"`: in the
/// source tables an absent leading key is never truly absent, it is a
/// defaulted numeric.
pub fn parse_values(values_text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quote = false;
    let mut quote_char = '\0';

    let mut chars = values_text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quote {
            if ch == quote_char {
                if chars.peek() == Some(&quote_char) {
                    // Doubled quote: one literal quote character, stay quoted
                    field.push(ch);
                    chars.next();
                } else {
                    in_quote = false;
                    // Quoted fields are kept even when empty (empty subjects)
                    record.push(std::mem::take(&mut field));
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '\'' | '"' => {
                in_quote = true;
                quote_char = ch;
            }
            ',' => {
                if field.is_empty() {
                    if record.is_empty() {
                        record.push("0".to_string());
                    }
                } else {
                    record.push(std::mem::take(&mut field));
                }
            }
            '(' => {
                record.clear();
                field.clear();
            }
            ')' => {
                if !field.is_empty() {
                    record.push(std::mem::take(&mut field));
                }
                if !record.is_empty() {
                    records.push(std::mem::take(&mut record));
                }
            }
            c if c.is_whitespace() => {}
            c => field.push(c),
        }
    }

    records
}

/// Parse a post-table VALUES list, anchoring record boundaries on `(<integer>,`.
///
/// Post bodies may legitimately contain unbalanced parenthesis characters (or
/// even broken quoting) inside quoted text, which would desynchronize a purely
/// paren-balanced scan. Anchoring on the record-start marker resynchronizes at
/// every record: each record runs from its anchor to the next anchor (or end
/// of input), field 0 is the anchor's captured integer, and the remaining
/// fields come from the quote-aware field scanner. The record is emitted even
/// if its chunk never reaches a closing parenthesis.
pub fn parse_values_anchored(values_text: &str) -> Vec<Vec<String>> {
    let anchors: Vec<(usize, usize, &str)> = RECORD_ANCHOR_RE
        .captures_iter(values_text)
        .map(|caps| {
            let whole = caps.get(0).expect("anchor match");
            (whole.start(), whole.end(), caps.get(1).expect("anchor id").as_str())
        })
        .collect();

    let mut records = Vec::with_capacity(anchors.len());
    for (i, &(_, body_start, id)) in anchors.iter().enumerate() {
        let chunk_end = anchors.get(i + 1).map_or(values_text.len(), |next| next.0);
        let chunk = &values_text[body_start..chunk_end];

        let mut record = vec![id.to_string()];
        record.extend(scan_record_fields(chunk));
        records.push(record);
    }

    records
}

/// Scan the fields of one record chunk (everything after its anchor) until an
/// unquoted `)` or the end of the chunk, flushing any trailing partial field.
fn scan_record_fields(chunk: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quote = false;
    let mut quote_char = '\0';

    let mut chars = chunk.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quote {
            if ch == quote_char {
                if chars.peek() == Some(&quote_char) {
                    field.push(ch);
                    chars.next();
                } else {
                    in_quote = false;
                    fields.push(std::mem::take(&mut field));
                }
            } else {
                field.push(ch);
            }
            continue;
        }

        match ch {
            '\'' | '"' => {
                in_quote = true;
                quote_char = ch;
            }
            ',' => {
                if !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                }
            }
            ')' => {
                if !field.is_empty() {
                    fields.push(std::mem::take(&mut field));
                }
                return fields;
            }
            c if c.is_whitespace() => {}
            c => field.push(c),
        }
    }

    // Chunk ended mid-record (next anchor resynchronizes); keep what we have
    if !field.is_empty() {
        fields.push(field);
    }
    fields
}
