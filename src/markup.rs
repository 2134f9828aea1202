//! Card content markup
//!
//! Card content is stored as a restricted markup dialect: `**bold**`,
//! `*italic*`, `[ ]`/`[x]` checkboxes, and plain newlines. Two renderers
//! consume it:
//!
//! - the edit path transcodes markup <-> contenteditable HTML and must
//!   round-trip exactly, checkbox state included;
//! - the read-only path ([`render_content_html`]) runs the richer
//!   pulldown-cmark pipeline with syntax-highlighted code blocks.

use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::sync::OnceLock;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use wasm_bindgen::JsCast;

const CHECKBOX_CHECKED: &str = r#"<input type="checkbox" checked="checked">"#;
const CHECKBOX_UNCHECKED: &str = r#"<input type="checkbox">"#;

// ========================
// Edit-path transcoding
// ========================

/// Markup -> HTML for a contenteditable editor. Inverse of
/// [`editable_to_markup`] on well-formed input; unbalanced emphasis markers
/// are closed at the end so the fragment stays well formed.
pub fn markup_to_editable(src: &str) -> String {
    let mut out = String::new();
    let mut bold = false;
    let mut italic = false;
    let mut rest = src;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("**") {
            out.push_str(if bold { "</b>" } else { "<b>" });
            bold = !bold;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('*') {
            out.push_str(if italic { "</i>" } else { "<i>" });
            italic = !italic;
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("[x]") {
            out.push_str(CHECKBOX_CHECKED);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("[ ]") {
            out.push_str(CHECKBOX_UNCHECKED);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('\n') {
            out.push_str("<br>");
            rest = tail;
        } else {
            let ch = rest.chars().next().unwrap();
            push_escaped(&mut out, ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    if italic {
        out.push_str("</i>");
    }
    if bold {
        out.push_str("</b>");
    }
    out
}

/// Editor HTML back to markup. Understands the tags the editor produces
/// plus the `div`/`p` line wrappers contenteditable inserts on Enter;
/// anything else outside the restricted dialect is dropped.
pub fn editable_to_markup(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;
    while let Some(lt) = rest.find('<') {
        out.push_str(&unescape_html(&rest[..lt]));
        rest = &rest[lt..];
        let Some(gt) = rest.find('>') else {
            out.push_str(&unescape_html(rest));
            return out;
        };
        let tag = rest[1..gt].trim().to_ascii_lowercase();
        rest = &rest[gt + 1..];
        let closing = tag.starts_with('/');
        let name = tag
            .trim_start_matches('/')
            .trim_end_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_string();
        match name.as_str() {
            "b" | "strong" => out.push_str("**"),
            "i" | "em" => out.push('*'),
            "br" => out.push('\n'),
            // contenteditable wraps each further line in a div (or p)
            "div" | "p" => {
                if !closing && !out.is_empty() {
                    out.push('\n');
                }
            }
            "input" => out.push_str(if tag.contains("checked") { "[x]" } else { "[ ]" }),
            _ => {}
        }
    }
    out.push_str(&unescape_html(rest));
    out
}

/// Flip the nth checkbox token (0-based, document order). None if there is
/// no such checkbox.
pub fn toggle_checkbox(src: &str, nth: usize) -> Option<String> {
    let mut out = String::with_capacity(src.len());
    let mut seen = 0usize;
    let mut toggled = false;
    let mut i = 0;
    while i < src.len() {
        let rest = &src[i..];
        if rest.starts_with("[x]") || rest.starts_with("[ ]") {
            if seen == nth {
                out.push_str(if rest.starts_with("[x]") { "[ ]" } else { "[x]" });
                toggled = true;
            } else {
                out.push_str(&rest[..3]);
            }
            seen += 1;
            i += 3;
        } else {
            let ch = rest.chars().next().unwrap();
            out.push(ch);
            i += ch.len_utf8();
        }
    }
    toggled.then_some(out)
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(ch),
    }
}

fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

// ========================
// Read-only rendering
// ========================

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> &'static Theme {
    THEME_SET
        .get_or_init(ThemeSet::load_defaults)
        .themes
        .get("InspiredGitHub")
        .expect("Theme not found")
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Render content for the read-only card views. Checkboxes stay live
/// (toggling one syncs the content without entering edit mode).
pub fn render_content_html(src: &str) -> String {
    // The editor dialect writes bare checkbox lines; prefix them so the
    // parser sees task list items.
    let prepared: String = src
        .lines()
        .map(|line| {
            if line.starts_with("[x] ") || line.starts_with("[ ] ") {
                format!("- {line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    let parser = Parser::new_ext(&prepared, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
}

/// Swap task-list markers for real checkboxes and run code blocks through
/// the highlighter.
fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) => Some(l.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }
                Event::TaskListMarker(checked) => {
                    let html = if checked { CHECKBOX_CHECKED } else { CHECKBOX_UNCHECKED };
                    events.push(Event::Html(CowStr::from(html)));
                }
                // single newlines in card content are real line breaks
                Event::SoftBreak => events.push(Event::HardBreak),
                other => events.push(other),
            },

            State::InCodeBlock { ref mut lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let theme = get_theme();

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme).unwrap_or_else(|_| {
        let mut escaped = String::new();
        for ch in code.chars() {
            push_escaped(&mut escaped, ch);
        }
        format!("<pre><code>{escaped}</code></pre>")
    })
}

// ========================
// DOM helpers for the editor
// ========================

/// Copy the live checked state of every checkbox under `root` into its
/// serialized attribute, so innerHTML reflects what the user sees.
pub fn sync_checkbox_attrs(root: &web_sys::Element) {
    let Ok(inputs) = root.query_selector_all("input[type='checkbox']") else {
        return;
    };
    for i in 0..inputs.length() {
        let Some(node) = inputs.item(i) else { continue };
        let Ok(input) = node.dyn_into::<web_sys::HtmlInputElement>() else { continue };
        if input.checked() {
            let _ = input.set_attribute("checked", "checked");
        } else {
            let _ = input.remove_attribute("checked");
        }
    }
}

/// Document-order index of `target` among the checkboxes under `root`.
pub fn checkbox_index_of(root: &web_sys::Element, target: &web_sys::Element) -> Option<usize> {
    let inputs = root.query_selector_all("input[type='checkbox']").ok()?;
    for i in 0..inputs.length() {
        if let Some(node) = inputs.item(i) {
            if node.is_same_node(Some(target.unchecked_ref())) {
                return Some(i as usize);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_bold_and_checked_checkbox() {
        let src = "**bold** [x] done";
        let html = markup_to_editable(src);
        assert_eq!(
            html,
            r#"<b>bold</b> <input type="checkbox" checked="checked"> done"#
        );
        assert_eq!(editable_to_markup(&html), src);
    }

    #[test]
    fn round_trip_italic_lines_and_unchecked() {
        let src = "*note*\n[ ] todo\nplain & <angled>";
        assert_eq!(editable_to_markup(&markup_to_editable(src)), src);
    }

    #[test]
    fn escaping_survives_both_directions() {
        let src = "a < b & \"c\"";
        let html = markup_to_editable(src);
        assert!(!html.contains('<') || html.contains("&lt;"));
        assert_eq!(editable_to_markup(&html), src);
    }

    #[test]
    fn contenteditable_div_wrappers_become_newlines() {
        assert_eq!(editable_to_markup("line1<div>line2</div>"), "line1\nline2");
        assert_eq!(editable_to_markup("<div>only</div>"), "only");
    }

    #[test]
    fn unknown_tags_are_dropped() {
        assert_eq!(editable_to_markup("a<span style=\"x\">b</span>c"), "abc");
    }

    #[test]
    fn unbalanced_bold_is_normalized_not_lost() {
        let html = markup_to_editable("**open");
        assert_eq!(html, "<b>open</b>");
        assert_eq!(editable_to_markup(&html), "**open**");
    }

    #[test]
    fn toggle_flips_the_right_checkbox() {
        let src = "[ ] a\n[x] b\n[ ] c";
        assert_eq!(toggle_checkbox(src, 0).as_deref(), Some("[x] a\n[x] b\n[ ] c"));
        assert_eq!(toggle_checkbox(src, 1).as_deref(), Some("[ ] a\n[ ] b\n[ ] c"));
        assert_eq!(toggle_checkbox(src, 3), None);
    }

    #[test]
    fn rendered_content_keeps_checkbox_state() {
        let html = render_content_html("[x] done\n[ ] later");
        assert!(html.contains(r#"checked="checked""#));
        assert_eq!(html.matches("type=\"checkbox\"").count(), 2);
    }

    #[test]
    fn rendered_content_highlights_code_blocks() {
        let html = render_content_html("```rust\nlet x = 1;\n```");
        assert!(html.contains("<pre"));
        assert!(!html.contains("```"));
    }
}
