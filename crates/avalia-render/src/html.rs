use tracing::debug;

use crate::markup::{self, Inline, Span};
use crate::styles::RenderStyles;

/// Render a model reply to HTML with the default styles.
pub fn render(text: &str) -> String {
    render_with(text, &RenderStyles::default())
}

/// Render a model reply to HTML.
///
/// All reply text is escaped; the only tags in the output are the ones
/// produced here (`strong`, `em`, `ul`, `li`, `br`).
pub fn render_with(text: &str, styles: &RenderStyles) -> String {
    let parsed = markup::parse(text);
    if parsed.degraded {
        debug!(len = text.len(), "reply has unpaired emphasis markers, kept literally");
    }
    spans_to_html(&parsed.spans, styles)
}

/// Map parsed spans to HTML.
///
/// Consecutive list items share one `<ul>`. A line break between two list
/// items is absorbed by the list; every other line break becomes `<br />`.
pub fn spans_to_html(spans: &[Span], styles: &RenderStyles) -> String {
    let mut out = String::new();
    let mut in_list = false;

    for (i, span) in spans.iter().enumerate() {
        match span {
            Span::ListItem(runs) => {
                if !in_list {
                    open_tag(&mut out, "ul", styles.list_class.as_deref());
                    in_list = true;
                }
                open_tag(&mut out, "li", styles.list_item_class.as_deref());
                for run in runs {
                    push_inline(&mut out, run);
                }
                out.push_str("</li>");
            }
            Span::LineBreak => {
                let prev_is_item = i
                    .checked_sub(1)
                    .and_then(|p| spans.get(p))
                    .is_some_and(|s| matches!(s, Span::ListItem(_)));
                let next_is_item = matches!(spans.get(i + 1), Some(Span::ListItem(_)));
                if prev_is_item && next_is_item {
                    continue;
                }
                close_list(&mut out, &mut in_list);
                out.push_str("<br />");
            }
            Span::Inline(run) => {
                close_list(&mut out, &mut in_list);
                push_inline(&mut out, run);
            }
        }
    }

    close_list(&mut out, &mut in_list);
    out
}

fn push_inline(out: &mut String, run: &Inline) {
    match run {
        Inline::Text(text) => escape_into(out, text),
        Inline::Bold(runs) => push_wrapped(out, "strong", runs),
        Inline::Italic(runs) => push_wrapped(out, "em", runs),
    }
}

fn push_wrapped(out: &mut String, tag: &str, runs: &[Inline]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for run in runs {
        push_inline(out, run);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn open_tag(out: &mut String, tag: &str, class: Option<&str>) {
    out.push('<');
    out.push_str(tag);
    if let Some(class) = class {
        out.push_str(" class=\"");
        escape_into(out, class);
        out.push('"');
    }
    out.push('>');
}

fn close_list(out: &mut String, in_list: &mut bool) {
    if *in_list {
        out.push_str("</ul>");
        *in_list = false;
    }
}

/// Escape text for use in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
