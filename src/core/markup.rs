//! Converts the renderer's HTML-flavoured markup into plain text plus style
//! annotations, the shape chat transports deliver rich text in.

use crate::domain::model::{StyleAnnotation, StyleKind};
use scraper::{ElementRef, Html, Node};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichText {
    pub text: String,
    pub annotations: Vec<StyleAnnotation>,
}

fn style_for(name: &str) -> Option<StyleKind> {
    match name {
        "b" | "strong" => Some(StyleKind::Bold),
        "i" | "em" => Some(StyleKind::Italic),
        "u" | "ins" => Some(StyleKind::Underline),
        "s" | "strike" | "del" => Some(StyleKind::Strikethrough),
        "code" => Some(StyleKind::Code),
        "pre" => Some(StyleKind::Pre),
        "a" => Some(StyleKind::TextLink),
        _ => None,
    }
}

/// Parse markup as an HTML fragment. Entities (named and numeric) are
/// decoded, unknown tags vanish but keep their content, and unclosed tags
/// run to the end of their parent. Offsets and lengths count UTF-16 units.
pub fn parse(markup: &str) -> RichText {
    let fragment = Html::parse_fragment(markup);
    let mut out = RichText::default();
    let mut units = 0usize;
    walk(fragment.root_element(), &mut out, &mut units);
    out
}

fn walk(element: ElementRef<'_>, out: &mut RichText, units: &mut usize) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.text.push_str(text);
                *units += text.encode_utf16().count();
            }
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let opened = open(child, out, *units);
                walk(child, out, units);
                if let Some(index) = opened {
                    let annotation = &mut out.annotations[index];
                    annotation.length = *units - annotation.offset;
                }
            }
            _ => {}
        }
    }
}

fn open(element: ElementRef<'_>, out: &mut RichText, units: usize) -> Option<usize> {
    let value = element.value();
    let kind = style_for(value.name())?;
    let url = match kind {
        // a link without a target is plain text
        StyleKind::TextLink => Some(value.attr("href")?.to_string()),
        _ => None,
    };
    out.annotations.push(StyleAnnotation {
        kind,
        offset: units,
        length: 0,
        url,
    });
    Some(out.annotations.len() - 1)
}
