//! Structured, block-based representation of formatted article content.
//!
//! Post and changelog bodies are stored as JSON in the content store. The wire
//! shape follows the usual headless-CMS convention (`_type` discriminators,
//! `style` tags, `children` spans, mark keys resolved through `markDefs`); it
//! is decoded here into exhaustive enums so that a new block kind is a
//! compile-time gap in every consumer instead of a silent no-render.
//!
//! Decoding individual blocks is total: missing text becomes the empty
//! string, unknown styles degrade to paragraphs and unknown block types are
//! dropped. Only a body that is not valid JSON at all is reported upward.

use serde::Deserialize;

use crate::domain::types::{HeadingLevel, ReadTimeMinutes, TypeConstraintError};

/// Words-per-minute figure behind the read-time estimate shown on post cards.
const READING_WORDS_PER_MINUTE: usize = 200;

/// An ordered sequence of typed content blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RichTextDocument {
    pub blocks: Vec<Block>,
}

/// One top-level content block.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph { spans: Vec<Span> },
    Heading { level: HeadingLevel, spans: Vec<Span> },
    Quote { spans: Vec<Span> },
    ListItem { kind: ListKind, spans: Vec<Span> },
    Image { url: String, alt: String },
    Code { language: Option<String>, code: String },
}

/// List rendering requested by a list-item block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Number,
}

/// An inline run of text with its formatting marks.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub marks: Vec<Mark>,
}

/// Inline emphasis applied to a span.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Strong,
    Emphasis,
    Code,
    Link(String),
}

#[derive(Deserialize)]
struct WireBlock {
    #[serde(rename = "_type", default)]
    kind: String,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    children: Vec<WireChild>,
    #[serde(rename = "listItem", default)]
    list_item: Option<String>,
    #[serde(rename = "markDefs", default)]
    mark_defs: Vec<WireMarkDef>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    alt: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

#[derive(Deserialize)]
struct WireChild {
    #[serde(rename = "_type", default)]
    kind: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    marks: Vec<String>,
}

#[derive(Deserialize)]
struct WireMarkDef {
    #[serde(rename = "_key", default)]
    key: String,
    #[serde(rename = "_type", default)]
    kind: String,
    #[serde(default)]
    href: Option<String>,
}

impl RichTextDocument {
    /// Decodes a stored JSON body into typed blocks.
    ///
    /// Individual malformed blocks are tolerated; only a body that fails to
    /// parse as a JSON array is an error.
    pub fn from_json(body: &str) -> Result<Self, TypeConstraintError> {
        let wire: Vec<WireBlock> = serde_json::from_str(body)
            .map_err(|e| TypeConstraintError::InvalidValue(format!("rich text body: {e}")))?;
        Ok(Self {
            blocks: wire.into_iter().filter_map(Block::from_wire).collect(),
        })
    }

    /// Concatenated text of every span in the document, in order.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for block in &self.blocks {
            let spans = match block {
                Block::Paragraph { spans }
                | Block::Heading { spans, .. }
                | Block::Quote { spans }
                | Block::ListItem { spans, .. } => spans.as_slice(),
                Block::Image { .. } => &[],
                Block::Code { code, .. } => {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(code);
                    continue;
                }
            };
            if !text.is_empty() && !spans.is_empty() {
                text.push(' ');
            }
            for span in spans {
                text.push_str(&span.text);
            }
        }
        text
    }

    /// Read-time estimate for the whole document, never below one minute.
    pub fn estimate_read_time(&self) -> ReadTimeMinutes {
        let words = self.plain_text().split_whitespace().count();
        let minutes = words.div_ceil(READING_WORDS_PER_MINUTE).max(1);
        ReadTimeMinutes::new(minutes as i32).expect("clamped to at least one minute")
    }
}

/// Concatenates the text of a span sequence, ignoring marks.
pub fn spans_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

impl Block {
    fn from_wire(wire: WireBlock) -> Option<Self> {
        match wire.kind.as_str() {
            "block" => {
                let spans = wire
                    .children
                    .iter()
                    .filter(|c| c.kind == "span")
                    .map(|c| Span {
                        text: c.text.clone(),
                        marks: c
                            .marks
                            .iter()
                            .filter_map(|m| Mark::resolve(m, &wire.mark_defs))
                            .collect(),
                    })
                    .collect();
                if let Some(list) = wire.list_item.as_deref() {
                    let kind = match list {
                        "number" => ListKind::Number,
                        _ => ListKind::Bullet,
                    };
                    return Some(Self::ListItem { kind, spans });
                }
                match wire.style.as_deref() {
                    Some("h2") => Some(Self::Heading {
                        level: HeadingLevel::H2,
                        spans,
                    }),
                    Some("h3") => Some(Self::Heading {
                        level: HeadingLevel::H3,
                        spans,
                    }),
                    Some("blockquote") => Some(Self::Quote { spans }),
                    // "normal" and any style this renderer does not know
                    // about fall back to a plain paragraph.
                    _ => Some(Self::Paragraph { spans }),
                }
            }
            "image" => Some(Self::Image {
                url: wire.url.unwrap_or_default(),
                alt: wire.alt.unwrap_or_default(),
            }),
            "code" => Some(Self::Code {
                language: wire.language.filter(|l| !l.is_empty()),
                code: wire.code.unwrap_or_default(),
            }),
            _ => None,
        }
    }
}

impl Mark {
    fn resolve(mark: &str, defs: &[WireMarkDef]) -> Option<Self> {
        match mark {
            "strong" => Some(Self::Strong),
            "em" => Some(Self::Emphasis),
            "code" => Some(Self::Code),
            key => defs
                .iter()
                .find(|d| d.key == key && d.kind == "link")
                .and_then(|d| d.href.clone())
                .map(Self::Link),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_styles_into_typed_blocks() {
        let body = r#"[
            {"_type":"block","style":"h2","children":[{"_type":"span","text":"Install"}]},
            {"_type":"block","style":"normal","children":[{"_type":"span","text":"Run it."}]},
            {"_type":"block","style":"blockquote","children":[{"_type":"span","text":"Neat."}]},
            {"_type":"code","language":"rust","code":"fn main() {}"}
        ]"#;
        let doc = RichTextDocument::from_json(body).unwrap();

        assert_eq!(doc.blocks.len(), 4);
        assert!(matches!(
            doc.blocks[0],
            Block::Heading {
                level: HeadingLevel::H2,
                ..
            }
        ));
        assert!(matches!(doc.blocks[1], Block::Paragraph { .. }));
        assert!(matches!(doc.blocks[2], Block::Quote { .. }));
        assert!(matches!(doc.blocks[3], Block::Code { .. }));
    }

    #[test]
    fn unknown_style_degrades_to_paragraph() {
        let body = r#"[{"_type":"block","style":"h6","children":[{"_type":"span","text":"x"}]}]"#;
        let doc = RichTextDocument::from_json(body).unwrap();
        assert!(matches!(doc.blocks[0], Block::Paragraph { .. }));
    }

    #[test]
    fn unknown_block_type_is_skipped() {
        let body = r#"[{"_type":"video","url":"https://example.com/v.mp4"}]"#;
        let doc = RichTextDocument::from_json(body).unwrap();
        assert!(doc.blocks.is_empty());
    }

    #[test]
    fn missing_children_yields_empty_spans() {
        let body = r#"[{"_type":"block","style":"h2"}]"#;
        let doc = RichTextDocument::from_json(body).unwrap();
        match &doc.blocks[0] {
            Block::Heading { spans, .. } => assert!(spans.is_empty()),
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn non_span_children_contribute_no_text() {
        let body = r#"[{"_type":"block","style":"h2","children":[
            {"_type":"span","text":"Getting "},
            {"_type":"inlineImage","text":"ignored"},
            {"_type":"span","text":"started"}
        ]}]"#;
        let doc = RichTextDocument::from_json(body).unwrap();
        match &doc.blocks[0] {
            Block::Heading { spans, .. } => assert_eq!(spans_text(spans), "Getting started"),
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[test]
    fn resolves_link_marks_through_mark_defs() {
        let body = r#"[{"_type":"block","style":"normal",
            "markDefs":[{"_key":"l1","_type":"link","href":"https://yander.app"}],
            "children":[{"_type":"span","text":"site","marks":["l1","strong"]}]}]"#;
        let doc = RichTextDocument::from_json(body).unwrap();
        match &doc.blocks[0] {
            Block::Paragraph { spans } => {
                assert_eq!(
                    spans[0].marks,
                    vec![Mark::Link("https://yander.app".to_string()), Mark::Strong]
                );
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn list_items_keep_their_kind() {
        let body = r#"[
            {"_type":"block","listItem":"bullet","children":[{"_type":"span","text":"a"}]},
            {"_type":"block","listItem":"number","children":[{"_type":"span","text":"b"}]}
        ]"#;
        let doc = RichTextDocument::from_json(body).unwrap();
        assert!(matches!(
            doc.blocks[0],
            Block::ListItem {
                kind: ListKind::Bullet,
                ..
            }
        ));
        assert!(matches!(
            doc.blocks[1],
            Block::ListItem {
                kind: ListKind::Number,
                ..
            }
        ));
    }

    #[test]
    fn read_time_never_drops_below_one_minute() {
        let doc = RichTextDocument::from_json(
            r#"[{"_type":"block","children":[{"_type":"span","text":"short"}]}]"#,
        )
        .unwrap();
        assert_eq!(doc.estimate_read_time().get(), 1);
    }

    #[test]
    fn rejects_bodies_that_are_not_json_arrays() {
        assert!(RichTextDocument::from_json("not json").is_err());
    }
}
