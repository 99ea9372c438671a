//! Inline Markdown
//!
//! News and note entries may carry light inline Markdown (emphasis, links,
//! strikethrough). Each entry stays one line: block syntax is never
//! interpreted. Rendered with pulldown-cmark, with these changes:
//! - leading block markers (`#`, `>`, `- `, `12. `, fences) are kept as text
//! - raw HTML is shown as text
//! - images are dropped (the site has its own image blocks)
//! - links outside http / https / tel / `#` render as plain text
//! - external links open in a new tab

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render one entry to inline HTML (no block elements)
pub fn parse_markdown_inline(text: &str) -> String {
    let source = escape_block_markers(text);
    let parser = Parser::new_ext(&source, get_options());
    let events = transform_events(parser);
    let mut html = String::new();
    push_html(&mut html, events.into_iter());
    html.trim().to_string()
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Flatten to one line and backslash-escape anything that would open a block
fn escape_block_markers(text: &str) -> String {
    let line = text.replace(['\r', '\n'], " ");
    let line = line.trim_start();

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        let mut chars = rest.chars();
        if matches!(chars.next(), Some('.') | Some(')'))
            && chars.next().map_or(true, char::is_whitespace)
        {
            return format!("{}\\{}", &line[..digits], rest);
        }
        return line.to_string();
    }

    let mut chars = line.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    let needs_escape = match first {
        '#' | '>' => true,
        '-' | '+' | '*' | '_' => {
            chars.next().map_or(true, char::is_whitespace)
                || line.chars().all(|c| c == first || c.is_whitespace())
        }
        '`' | '~' => line.starts_with("```") || line.starts_with("~~~"),
        _ => false,
    };
    if needs_escape {
        format!("\\{}", line)
    } else {
        line.to_string()
    }
}

enum State {
    Normal,
    InImage { dropped_depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;
    // Whether each open link was emitted as an anchor
    let mut links: Vec<bool> = Vec::new();

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::Start(Tag::Image { .. }) => {
                    state = State::InImage { dropped_depth: 0 };
                }
                Event::Start(Tag::Link { dest_url, .. }) => {
                    let allowed = is_allowed_link(&dest_url);
                    if allowed {
                        events.push(Event::Html(CowStr::from(link_open(&dest_url))));
                    }
                    links.push(allowed);
                }
                Event::End(TagEnd::Link) => {
                    if links.pop().unwrap_or(false) {
                        events.push(Event::Html(CowStr::from("</a>")));
                    }
                }
                Event::Start(Tag::Emphasis | Tag::Strong | Tag::Strikethrough)
                | Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough) => {
                    events.push(event)
                }
                // Block structure is flattened; its text is kept
                Event::Start(_) | Event::End(_) | Event::Rule => {}
                other => events.push(other),
            },

            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn is_allowed_link(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    is_external(&lower) || lower.starts_with("tel:") || lower.starts_with('#')
}

fn link_open(dest: &str) -> String {
    let href = escape_html(dest);
    if is_external(dest) {
        format!(r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#, href)
    } else {
        format!(r#"<a href="{}">"#, href)
    }
}

fn is_external(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
