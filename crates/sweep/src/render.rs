// ABOUTME: Document serializer that applies the collapse overlay.
// ABOUTME: Emits the parsed tree back to HTML with collapsed cells styled out of layout flow.

use std::collections::HashSet;

use ego_tree::NodeId;
use scraper::Html;

/// Inline style that removes an element from layout flow. Collapse, not mere
/// invisibility: surrounding items must re-flow into the freed space.
pub(crate) const COLLAPSED_STYLE: &str = "display:none;height:0;margin:0;padding:0";

/// Serializes the document, overlaying the collapse style onto every node in
/// `collapsed`. The tree itself is never mutated; the overlay is applied at
/// write-out time.
pub(crate) fn render_with_overlay(doc: &Html, collapsed: &HashSet<NodeId>) -> String {
    let mut out = String::new();
    for child in doc.tree.root().children() {
        serialize_node(child, collapsed, false, &mut out);
    }
    out
}

fn serialize_node(
    node: ego_tree::NodeRef<scraper::Node>,
    collapsed: &HashSet<NodeId>,
    raw_text: bool,
    out: &mut String,
) {
    match node.value() {
        scraper::Node::Text(t) => {
            if raw_text {
                out.push_str(&**t);
            } else {
                out.push_str(&escape_text(t));
            }
        }
        scraper::Node::Element(el) => {
            let name = el.name();
            out.push('<');
            out.push_str(name);

            let collapse_here = collapsed.contains(&node.id());
            let mut wrote_style = false;
            for (k, v) in el.attrs() {
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                if collapse_here && k == "style" {
                    out.push_str(&escape_attr(&merge_style(v)));
                    wrote_style = true;
                } else {
                    out.push_str(&escape_attr(v));
                }
                out.push('"');
            }
            if collapse_here && !wrote_style {
                out.push_str(" style=\"");
                out.push_str(COLLAPSED_STYLE);
                out.push('"');
            }

            if is_void_element(name) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            let raw_children = is_raw_text_element(name);
            for child in node.children() {
                serialize_node(child, collapsed, raw_children, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        scraper::Node::Comment(c) => {
            out.push_str("<!--");
            out.push_str(&**c);
            out.push_str("-->");
        }
        scraper::Node::Doctype(d) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(d.name());
            out.push('>');
        }
        _ => {}
    }
}

/// Appends the overlay to an existing style value. A value that already
/// carries the overlay is left alone so re-collapsing never stacks it.
fn merge_style(existing: &str) -> String {
    if existing.contains(COLLAPSED_STYLE) {
        return existing.to_string();
    }
    let trimmed = existing.trim_end();
    if trimmed.is_empty() {
        return COLLAPSED_STYLE.to_string();
    }
    if trimmed.ends_with(';') {
        format!("{}{}", trimmed, COLLAPSED_STYLE)
    } else {
        format!("{};{}", trimmed, COLLAPSED_STYLE)
    }
}

/// Escape text content
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;")
}

/// Escape attribute value
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Check if tag is a raw-text element. The parser never entity-decodes text
/// inside these, so it must serialize verbatim.
fn is_raw_text_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "script" | "style" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
    )
}

/// Check if tag is void element
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
