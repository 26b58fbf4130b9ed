//! Rich-text to HTML rendering for article and changelog bodies.
//!
//! The match over [`Block`] and [`Mark`] is deliberately exhaustive: adding a
//! block kind without teaching the renderer about it must fail to compile.
//! Heading ids are assigned with the same [`HeadingSlugger`] walk the TOC
//! extractor performs, so outline anchors always land.

use std::fmt::Write;

use tera::escape_html;

use crate::domain::richtext::{Block, ListKind, Mark, RichTextDocument, Span, spans_text};
use crate::domain::toc::HeadingSlugger;
use crate::domain::types::HeadingLevel;

/// Renders a document body to an HTML fragment.
pub fn render_document(document: &RichTextDocument) -> String {
    let mut slugger = HeadingSlugger::new();
    let mut html = String::new();
    let mut open_list: Option<ListKind> = None;

    for block in &document.blocks {
        // Consecutive list items of one kind share a single list element.
        if let Block::ListItem { kind, .. } = block {
            match open_list {
                Some(open) if open == *kind => {}
                Some(open) => {
                    html.push_str(close_list_tag(open));
                    html.push_str(open_list_tag(*kind));
                    open_list = Some(*kind);
                }
                None => {
                    html.push_str(open_list_tag(*kind));
                    open_list = Some(*kind);
                }
            }
        } else if let Some(open) = open_list.take() {
            html.push_str(close_list_tag(open));
        }

        match block {
            Block::Paragraph { spans } => {
                let _ = write!(html, "<p>{}</p>", render_spans(spans));
            }
            Block::Heading { level, spans } => {
                let id = slugger.slug_for(&spans_text(spans));
                let tag = match level {
                    HeadingLevel::H2 => "h2",
                    HeadingLevel::H3 => "h3",
                };
                let _ = write!(html, "<{tag} id=\"{id}\">{}</{tag}>", render_spans(spans));
            }
            Block::Quote { spans } => {
                let _ = write!(html, "<blockquote><p>{}</p></blockquote>", render_spans(spans));
            }
            Block::ListItem { kind: _, spans } => {
                let _ = write!(html, "<li>{}</li>", render_spans(spans));
            }
            Block::Image { url, alt } => {
                if !url.is_empty() {
                    let _ = write!(
                        html,
                        "<figure><img src=\"{}\" alt=\"{}\"></figure>",
                        escape_html(url),
                        escape_html(alt)
                    );
                }
            }
            Block::Code { language, code } => {
                match language {
                    Some(language) => {
                        let _ = write!(
                            html,
                            "<pre><code class=\"language-{}\">{}</code></pre>",
                            escape_html(language),
                            escape_html(code)
                        );
                    }
                    None => {
                        let _ = write!(html, "<pre><code>{}</code></pre>", escape_html(code));
                    }
                }
            }
        }
    }

    if let Some(open) = open_list {
        html.push_str(close_list_tag(open));
    }

    html
}

fn open_list_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Bullet => "<ul>",
        ListKind::Number => "<ol>",
    }
}

fn close_list_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Bullet => "</ul>",
        ListKind::Number => "</ol>",
    }
}

fn render_spans(spans: &[Span]) -> String {
    let mut html = String::new();
    for span in spans {
        let mut rendered = escape_html(&span.text);
        for mark in &span.marks {
            rendered = match mark {
                Mark::Strong => format!("<strong>{rendered}</strong>"),
                Mark::Emphasis => format!("<em>{rendered}</em>"),
                Mark::Code => format!("<code>{rendered}</code>"),
                Mark::Link(href) => {
                    format!("<a href=\"{}\">{rendered}</a>", escape_html(href))
                }
            };
        }
        html.push_str(&rendered);
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::toc::extract_headings;

    fn doc(body: &str) -> RichTextDocument {
        RichTextDocument::from_json(body).unwrap()
    }

    #[test]
    fn renders_headings_with_toc_matching_ids() {
        let doc = doc(
            r#"[
                {"_type":"block","style":"h2","children":[{"_type":"span","text":"Usage"}]},
                {"_type":"block","style":"h2","children":[{"_type":"span","text":"Usage"}]}
            ]"#,
        );
        let html = render_document(&doc);
        for entry in extract_headings(&doc) {
            assert!(
                html.contains(&format!("id=\"{}\"", entry.id)),
                "missing anchor for {}",
                entry.id
            );
        }
        assert!(html.contains("<h2 id=\"usage\">Usage</h2>"));
        assert!(html.contains("<h2 id=\"usage-2\">Usage</h2>"));
    }

    #[test]
    fn escapes_text_content() {
        let doc = doc(
            r#"[{"_type":"block","style":"normal","children":[{"_type":"span","text":"1 < 2 & 3"}]}]"#,
        );
        assert_eq!(render_document(&doc), "<p>1 &lt; 2 &amp; 3</p>");
    }

    #[test]
    fn groups_consecutive_list_items() {
        let doc = doc(
            r#"[
                {"_type":"block","listItem":"bullet","children":[{"_type":"span","text":"a"}]},
                {"_type":"block","listItem":"bullet","children":[{"_type":"span","text":"b"}]},
                {"_type":"block","listItem":"number","children":[{"_type":"span","text":"c"}]},
                {"_type":"block","style":"normal","children":[{"_type":"span","text":"done"}]}
            ]"#,
        );
        assert_eq!(
            render_document(&doc),
            "<ul><li>a</li><li>b</li></ul><ol><li>c</li></ol><p>done</p>"
        );
    }

    #[test]
    fn renders_marks_and_links() {
        let doc = doc(
            r#"[{"_type":"block","style":"normal",
                "markDefs":[{"_key":"l1","_type":"link","href":"https://yander.app?a=1&b=2"}],
                "children":[
                    {"_type":"span","text":"bold","marks":["strong"]},
                    {"_type":"span","text":" site","marks":["l1"]}
                ]}]"#,
        );
        assert_eq!(
            render_document(&doc),
            "<p><strong>bold</strong><a href=\"https://yander.app?a=1&amp;b=2\"> site</a></p>"
        );
    }

    #[test]
    fn skips_images_without_a_source() {
        let doc = doc(r#"[{"_type":"image","alt":"lost"}]"#);
        assert_eq!(render_document(&doc), "");
    }

    #[test]
    fn renders_code_blocks_with_language_class() {
        let doc = doc(r#"[{"_type":"code","language":"rust","code":"let x = 1 < 2;"}]"#);
        assert_eq!(
            render_document(&doc),
            "<pre><code class=\"language-rust\">let x = 1 &lt; 2;</code></pre>"
        );
    }

    #[test]
    fn unterminated_list_is_closed_at_document_end() {
        let doc = doc(r#"[{"_type":"block","listItem":"bullet","children":[{"_type":"span","text":"a"}]}]"#);
        assert_eq!(render_document(&doc), "<ul><li>a</li></ul>");
    }
}
