//! Front-matter parsing
//!
//! A document may start with a YAML metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: "Hello: World"
//! date: 2024-01-15
//! tags: [rust, blog]
//! authors:
//!   - alice
//!   - bob
//! ---
//! Body text.
//! ```
//!
//! Only flat mappings are understood: every value must be a scalar or a
//! list of scalars. Numbers and booleans are kept as their text.

use serde_yaml::Value;

use super::post::{MetaValue, Metadata};
use crate::error::FrontMatterError;

const DELIMITER: &str = "---";

/// A document split into its metadata block and body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub metadata: Metadata,
    pub body: String,
}

impl FrontMatter {
    /// Split `raw` into metadata and body.
    ///
    /// Never fails: a document without a complete block is all body, and a
    /// malformed block is logged and treated as body as well.
    pub fn parse(raw: &str) -> Self {
        let (front_matter, error) = Self::split(raw);
        if let Some(e) = error {
            tracing::warn!("Failed to parse front-matter, treating as content: {}", e);
        }
        front_matter
    }

    /// Same as [`FrontMatter::parse`], but hands back the error a malformed
    /// block was dropped for instead of logging it.
    pub fn split(raw: &str) -> (Self, Option<FrontMatterError>) {
        let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();

        if !is_delimiter(lines[0]) {
            return (Self::body_only(raw), None);
        }

        let Some(end) = lines[1..].iter().position(|l| is_delimiter(l)).map(|i| i + 1) else {
            return (Self::body_only(raw), None);
        };

        match parse_block(&lines[1..end].join("\n")) {
            Ok(metadata) => {
                let body = lines[end + 1..].join("\n").trim().to_string();
                (Self { metadata, body }, None)
            }
            Err(e) => (Self::body_only(raw), Some(e)),
        }
    }

    /// Serialize metadata and body back into a document `parse` accepts
    pub fn render(metadata: &Metadata, body: &str) -> Result<String, serde_yaml::Error> {
        let mut out = String::from("---\n");
        if !metadata.is_empty() {
            out.push_str(&serde_yaml::to_string(metadata)?);
        }
        out.push_str("---\n");
        out.push_str(body);
        Ok(out)
    }

    fn body_only(raw: &str) -> Self {
        Self {
            metadata: Metadata::new(),
            body: raw.to_string(),
        }
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Parse the text between the delimiters
fn parse_block(block: &str) -> Result<Metadata, FrontMatterError> {
    let blank = block.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if blank {
        return Ok(Metadata::new());
    }

    let mapping = match serde_yaml::from_str::<Value>(block)? {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(Metadata::new()),
        _ => return Err(FrontMatterError::NotMapping),
    };

    let mut metadata = Metadata::new();
    for (key, value) in mapping {
        let key = scalar_text(&key).ok_or_else(|| FrontMatterError::Key(format!("{:?}", key)))?;
        let value = meta_value(&key, value)?;
        metadata.insert(key, value);
    }
    Ok(metadata)
}

fn meta_value(key: &str, value: Value) -> Result<MetaValue, FrontMatterError> {
    let unsupported = |reason| FrontMatterError::Unsupported {
        key: key.to_string(),
        reason,
    };

    match value {
        Value::Null => Ok(MetaValue::Text(String::new())),
        Value::Sequence(items) => items
            .iter()
            .map(|item| scalar_text(item).ok_or_else(|| unsupported("list items must be scalars")))
            .collect::<Result<Vec<_>, _>>()
            .map(MetaValue::List),
        Value::Mapping(_) => Err(unsupported("nested mappings are not supported")),
        other => scalar_text(&other)
            .map(MetaValue::Text)
            .ok_or_else(|| unsupported("tagged values are not supported")),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> MetaValue {
        MetaValue::Text(s.to_string())
    }

    fn list(items: &[&str]) -> MetaValue {
        MetaValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_parse_scalar_frontmatter() {
        let content = "---\ntitle: Hello World\nslug: hello-world\ndate: 2024-01-15\n---\n\nThis is the content.\n";

        let fm = FrontMatter::parse(content);
        assert_eq!(fm.metadata.get("title"), Some(&text("Hello World")));
        assert_eq!(fm.metadata.get("slug"), Some(&text("hello-world")));
        assert_eq!(fm.metadata.get("date"), Some(&text("2024-01-15")));
        assert_eq!(fm.body, "This is the content.");
    }

    #[test]
    fn test_quoted_values_are_unwrapped() {
        let content = "---\ntitle: \"Deploying to AWS: part 1\"\nauthor: 'Lucas'\n---\nBody";

        let fm = FrontMatter::parse(content);
        assert_eq!(fm.metadata["title"], text("Deploying to AWS: part 1"));
        assert_eq!(fm.metadata["author"], text("Lucas"));
    }

    #[test]
    fn test_quoting_rules() {
        let content = r#"---
tags: ["a, b", c]
title: 'It''s AWS'
subtitle: "Hello" # draft
---
Body"#;

        let fm = FrontMatter::parse(content);
        assert_eq!(fm.metadata["tags"], list(&["a, b", "c"]));
        assert_eq!(fm.metadata["title"], text("It's AWS"));
        assert_eq!(fm.metadata["subtitle"], text("Hello"));
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let fm = FrontMatter::parse("---\ndate: 2024-01-15T10:30:00\n---\n");
        assert_eq!(fm.metadata["date"], text("2024-01-15T10:30:00"));
    }

    #[test]
    fn test_inline_and_block_lists() {
        let content = r#"---
tags: [aws, "cloud", devops]
authors:
  - alice
  - "bob"
empty: []
---
Body"#;

        let fm = FrontMatter::parse(content);
        assert_eq!(fm.metadata["tags"], list(&["aws", "cloud", "devops"]));
        assert_eq!(fm.metadata["authors"], list(&["alice", "bob"]));
        assert_eq!(fm.metadata["empty"], list(&[]));
    }

    #[test]
    fn test_non_string_scalars_become_text() {
        let fm = FrontMatter::parse("---\nyear: 2024\ndraft: false\nexcerpt:\nids: [1, 2]\n---\n");
        assert_eq!(fm.metadata["year"], text("2024"));
        assert_eq!(fm.metadata["draft"], text("false"));
        assert_eq!(fm.metadata["excerpt"], text(""));
        assert_eq!(fm.metadata["ids"], list(&["1", "2"]));
    }

    #[test]
    fn test_keys_keep_document_order() {
        let fm = FrontMatter::parse("---\nslug: s\ntitle: t\nauthor: a\n---\n");
        let keys: Vec<&str> = fm.metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, ["slug", "title", "author"]);
    }

    #[test]
    fn test_no_frontmatter_is_verbatim_body() {
        let content = "# Just markdown\r\n\r\nNo metadata here.";
        let fm = FrontMatter::parse(content);
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, content);
    }

    #[test]
    fn test_delimiter_not_on_first_line() {
        let content = "\n---\ntitle: x\n---\nbody";
        let fm = FrontMatter::parse(content);
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, content);
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let content = "---\ntitle: Never closed\nbody";
        let fm = FrontMatter::parse(content);
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, content);
    }

    #[test]
    fn test_empty_block() {
        let fm = FrontMatter::parse("---\n---\nBody");
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, "Body");

        let fm = FrontMatter::parse("---\n# nothing yet\n\n---\nBody");
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, "Body");
    }

    #[test]
    fn test_crlf_and_cr_line_endings() {
        let crlf = FrontMatter::parse("---\r\ntitle: Windows\r\n---\r\nBody\r\n");
        assert_eq!(crlf.metadata["title"], text("Windows"));
        assert_eq!(crlf.body, "Body");

        let cr = FrontMatter::parse("---\rtitle: Classic Mac\r---\rBody");
        assert_eq!(cr.metadata["title"], text("Classic Mac"));
        assert_eq!(cr.body, "Body");
    }

    #[test]
    fn test_malformed_block_keeps_raw_text() {
        let content = "---\r\ntitle: ok\r\nthis line is prose\r\n---\r\nBody";
        let (fm, error) = FrontMatter::split(content);
        assert!(matches!(error, Some(FrontMatterError::Yaml(_))));
        assert!(fm.metadata.is_empty());
        assert_eq!(fm.body, content);
        assert_eq!(FrontMatter::parse(content), fm);
    }

    #[test]
    fn test_nested_mapping_is_rejected() {
        let (fm, error) = FrontMatter::split("---\nauthor:\n  name: x\n---\nBody");
        match error {
            Some(FrontMatterError::Unsupported { key, .. }) => assert_eq!(key, "author"),
            other => panic!("expected an unsupported value, got {:?}", other),
        }
        assert!(fm.metadata.is_empty());
    }

    #[test]
    fn test_list_of_mappings_is_rejected() {
        let (_, error) = FrontMatter::split("---\nlinks:\n  - url: x\n---\nBody");
        assert!(matches!(error, Some(FrontMatterError::Unsupported { .. })));
    }

    #[test]
    fn test_block_must_be_a_mapping() {
        let (_, error) = FrontMatter::split("---\n- just\n- a list\n---\nBody");
        assert!(matches!(error, Some(FrontMatterError::NotMapping)));
    }

    #[test]
    fn test_well_formed_block_reports_no_error() {
        let (_, error) = FrontMatter::split("---\ntitle: x\n---\nBody");
        assert!(error.is_none());
    }

    #[test]
    fn test_render_then_parse_keeps_body_and_metadata() {
        let mut metadata = Metadata::new();
        metadata.insert("title".into(), text("Intro: \"quoted\" words"));
        metadata.insert("slug".into(), text("intro"));
        metadata.insert("note".into(), text("draft #2 # not a comment"));
        metadata.insert("year".into(), text("2024"));
        metadata.insert("excerpt".into(), text(""));
        metadata.insert("tags".into(), list(&["a, b", "c", "[x]"]));
        metadata.insert("none".into(), list(&[]));
        let body = "\nFirst paragraph.\n\n---\n\nAfter a rule.\n";

        let rendered = FrontMatter::render(&metadata, body).unwrap();
        let (fm, error) = FrontMatter::split(&rendered);
        assert!(error.is_none(), "{:?}", error);
        assert_eq!(fm.body.trim(), body.trim());
        assert_eq!(fm.metadata, metadata);
    }

    #[test]
    fn test_render_empty_metadata() {
        let rendered = FrontMatter::render(&Metadata::new(), "Body").unwrap();
        assert_eq!(rendered, "---\n---\nBody");
        assert_eq!(FrontMatter::parse(&rendered).body, "Body");
    }
}
