//! Parser for the markdown subset the analysis model is asked to use.
//!
//! Recognised:
//! - `**bold**` → [`Inline::Bold`]
//! - `*italic*` → [`Inline::Italic`]
//! - a line starting with `- ` → [`Span::ListItem`]
//! - `\n` → [`Span::LineBreak`]
//!
//! Emphasis never crosses a line. A marker with no closing partner, or with
//! nothing between the markers, stays in the text literally and marks the
//! parse as degraded.

use serde::Serialize;

/// Inline content of a line or list item. Emphasis runs nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Span {
    Inline(Inline),
    ListItem(Vec<Inline>),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub spans: Vec<Span>,
    /// Set when some emphasis marker could not be paired.
    pub degraded: bool,
}

pub fn parse(text: &str) -> Parsed {
    let mut spans = Vec::new();
    let mut degraded = false;

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            spans.push(Span::LineBreak);
        }
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(item) = line.strip_prefix("- ") {
            spans.push(Span::ListItem(parse_inline(item, &mut degraded)));
        } else {
            spans.extend(
                parse_inline(line, &mut degraded)
                    .into_iter()
                    .map(Span::Inline),
            );
        }
    }

    Parsed { spans, degraded }
}

/// Split one line into text, bold and italic runs.
///
/// `**` is always considered before `*`, so a double marker is never read as
/// two single ones. The contents of a run are parsed again, which lets
/// `**a *b* c**` and `*a **b** c*` nest.
fn parse_inline(text: &str, degraded: &mut bool) -> Vec<Inline> {
    let mut runs = Vec::new();
    let mut plain = String::new();
    let mut remaining = text;

    while let Some(start) = remaining.find('*') {
        plain.push_str(&remaining[..start]);
        let marker = &remaining[start..];

        if let Some(after_open) = marker.strip_prefix("**") {
            match find_bold_close(after_open) {
                Some(end) if end > 0 => {
                    flush(&mut plain, &mut runs);
                    runs.push(Inline::Bold(parse_inline(&after_open[..end], degraded)));
                    remaining = &after_open[end + 2..];
                }
                _ => {
                    *degraded = true;
                    plain.push_str("**");
                    remaining = after_open;
                }
            }
        } else {
            let after_open = &marker[1..];
            match find_italic_close(after_open) {
                Some(end) if end > 0 => {
                    flush(&mut plain, &mut runs);
                    runs.push(Inline::Italic(parse_inline(&after_open[..end], degraded)));
                    remaining = &after_open[end + 1..];
                }
                _ => {
                    *degraded = true;
                    plain.push('*');
                    remaining = after_open;
                }
            }
        }
    }

    plain.push_str(remaining);
    flush(&mut plain, &mut runs);
    runs
}

/// Byte offset of the `**` closing a bold run, skipping over italic runs
/// inside it. An italic opener whose run would swallow every remaining `**`
/// is read as a literal `*`.
fn find_bold_close(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'*' {
            if bytes.get(i + 1) == Some(&b'*') {
                return Some(i);
            }
            if let Some(end) = find_italic_close(&s[i + 1..]) {
                let after = i + 1 + end + 1;
                if s[after..].contains("**") {
                    i = after;
                    continue;
                }
            }
        }
        i += 1;
    }
    None
}

/// Byte offset of the `*` closing an italic run, skipping over bold pairs
/// inside it.
///
/// A `**` with no partner does not close the run unless a third `*` follows,
/// as in `*muito alto***` at the end of a bold run.
fn find_italic_close(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) != Some(&b'*') {
            return Some(i);
        }
        match s[i + 2..].find("**") {
            Some(end) => i += 2 + end + 2,
            None if bytes.get(i + 2) == Some(&b'*') => return Some(i),
            None => i += 2,
        }
    }
    None
}

fn flush(plain: &mut String, runs: &mut Vec<Inline>) {
    if !plain.is_empty() {
        runs.push(Inline::Text(std::mem::take(plain)));
    }
}
