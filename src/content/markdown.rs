//! Plain-text extraction from markdown bodies

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

const MORE_MARKER: &str = "<!-- more -->";

/// Derive a plain-text excerpt from a markdown body.
///
/// Uses everything before `<!-- more -->` when the marker is present,
/// otherwise the first paragraph. The result is cut at a word boundary
/// to at most `max_chars` characters, with "..." appended when cut.
pub fn derive_excerpt(body: &str, max_chars: usize) -> String {
    let text = match body.find(MORE_MARKER) {
        Some(pos) => plain_text(&body[..pos]),
        None => first_paragraph(body),
    };
    truncate_words(&text, max_chars)
}

/// Render markdown to plain text, one space between blocks
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new_ext(markdown, Options::empty()) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak | Event::End(_) => out.push(' '),
            _ => {}
        }
    }
    collapse_whitespace(&out)
}

fn first_paragraph(markdown: &str) -> String {
    let mut out = String::new();
    let mut in_paragraph = false;

    for event in Parser::new_ext(markdown, Options::empty()) {
        match event {
            Event::Start(Tag::Paragraph) => in_paragraph = true,
            Event::End(TagEnd::Paragraph) if !out.trim().is_empty() => break,
            Event::End(TagEnd::Paragraph) => in_paragraph = false,
            Event::Text(text) | Event::Code(text) if in_paragraph => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak if in_paragraph => out.push(' '),
            _ => {}
        }
    }

    collapse_whitespace(&out)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(' ') {
        Some(pos) if pos > 0 => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}...", cut.trim_end())
}
