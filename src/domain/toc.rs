//! Table-of-contents extraction from rich-text documents.
//!
//! One pass over the top-level block sequence collects every level-2 and
//! level-3 heading into a navigable outline. Heading ids come from
//! [`HeadingSlugger`], which the HTML renderer shares — anchors silently fail
//! to scroll the moment the two disagree on an id.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::richtext::{Block, RichTextDocument, spans_text};
use crate::domain::types::{HeadingLevel, Slug, slugify};

/// One entry in the document outline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeadingEntry {
    pub id: Slug,
    pub text: String,
    pub level: HeadingLevel,
}

/// Assigns unique, fragment-safe ids to headings in document order.
///
/// Repeated heading text gets `-2`, `-3`, ... suffixes; headings whose text
/// slugifies to nothing fall back to `section`. The extractor and the
/// renderer must each walk the document with their own slugger instance so
/// both see the same collision sequence.
#[derive(Debug, Default)]
pub struct HeadingSlugger {
    seen: HashMap<String, usize>,
}

impl HeadingSlugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for the next heading with the given display text.
    pub fn slug_for(&mut self, text: &str) -> Slug {
        let base = match slugify(text) {
            s if s.is_empty() => "section".to_string(),
            s => s,
        };
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            Slug::from_raw(base)
        } else {
            Slug::from_raw(format!("{base}-{count}"))
        }
    }
}

/// Derives the outline for a document; empty when it has no headings.
pub fn extract_headings(document: &RichTextDocument) -> Vec<HeadingEntry> {
    let mut slugger = HeadingSlugger::new();
    let mut entries = Vec::new();
    for block in &document.blocks {
        match block {
            Block::Heading { level, spans } => {
                let text = spans_text(spans);
                entries.push(HeadingEntry {
                    id: slugger.slug_for(&text),
                    text,
                    level: *level,
                });
            }
            Block::Paragraph { .. }
            | Block::Quote { .. }
            | Block::ListItem { .. }
            | Block::Image { .. }
            | Block::Code { .. } => {}
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> RichTextDocument {
        RichTextDocument::from_json(body).unwrap()
    }

    #[test]
    fn derives_fragment_safe_ids() {
        let doc = doc(
            r#"[{"_type":"block","style":"h2","children":[{"_type":"span","text":"Getting Started: Step 1!"}]}]"#,
        );
        let entries = extract_headings(&doc);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_str(), "getting-started-step-1");
        assert_eq!(entries[0].level, HeadingLevel::H2);
    }

    #[test]
    fn skips_non_heading_blocks_in_document_order() {
        let doc = doc(
            r#"[
                {"_type":"block","style":"normal","children":[{"_type":"span","text":"intro"}]},
                {"_type":"block","style":"h2","children":[{"_type":"span","text":"First"}]},
                {"_type":"block","style":"h2","children":[{"_type":"span","text":"Second"}]}
            ]"#,
        );
        let entries = extract_headings(&doc);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "First");
        assert_eq!(entries[1].text, "Second");
    }

    #[test]
    fn includes_h3_headings() {
        let doc = doc(
            r#"[
                {"_type":"block","style":"h2","children":[{"_type":"span","text":"Setup"}]},
                {"_type":"block","style":"h3","children":[{"_type":"span","text":"Requirements"}]}
            ]"#,
        );
        let entries = extract_headings(&doc);
        assert_eq!(entries[1].level, HeadingLevel::H3);
        assert_eq!(entries[1].id.as_str(), "requirements");
    }

    #[test]
    fn suffixes_duplicate_heading_text() {
        let doc = doc(
            r#"[
                {"_type":"block","style":"h2","children":[{"_type":"span","text":"Usage"}]},
                {"_type":"block","style":"h2","children":[{"_type":"span","text":"Usage"}]},
                {"_type":"block","style":"h2","children":[{"_type":"span","text":"Usage"}]}
            ]"#,
        );
        let entries = extract_headings(&doc);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["usage", "usage-2", "usage-3"]);
    }

    #[test]
    fn punctuation_only_heading_falls_back_to_section() {
        let doc = doc(r#"[{"_type":"block","style":"h2","children":[{"_type":"span","text":"???"}]}]"#);
        let entries = extract_headings(&doc);
        assert_eq!(entries[0].id.as_str(), "section");
    }

    #[test]
    fn no_headings_means_empty_outline() {
        let doc =
            doc(r#"[{"_type":"block","style":"normal","children":[{"_type":"span","text":"x"}]}]"#);
        assert!(extract_headings(&doc).is_empty());
    }
}
