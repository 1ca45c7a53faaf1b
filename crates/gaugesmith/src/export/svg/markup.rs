//! Canonical SVG serialization of a node tree.
//!
//! The `svg` crate writes documents without indentation, so layer output is
//! serialized here: an XML declaration, two spaces of indentation per level,
//! one element per line, self-closing empty elements and inline text.

use gaugesmith_core::node::Node;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "  ";

/// Serializes a node tree into a standalone SVG document.
///
/// ```
/// # use gaugesmith::export::svg::to_markup;
/// # use gaugesmith_core::node::Node;
/// let root = Node::new("svg").add(Node::new("text").set("x", 10).with_text("a < b"));
///
/// assert_eq!(
///     to_markup(&root),
///     "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
///      <svg>\n  <text x=\"10\">a &lt; b</text>\n</svg>\n"
/// );
/// ```
pub fn to_markup(root: &Node) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    push_indent(out, depth);
    out.push('<');
    out.push_str(node.tag());
    for (name, value) in node.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        push_escaped(out, value, true);
        out.push('"');
    }

    if node.is_empty() {
        out.push_str("/>\n");
        return;
    }

    out.push('>');
    if node.children().is_empty() {
        if let Some(text) = node.text() {
            push_escaped(out, text, false);
        }
    } else {
        out.push('\n');
        if let Some(text) = node.text() {
            push_indent(out, depth + 1);
            push_escaped(out, text, false);
            out.push('\n');
        }
        for child in node.children() {
            write_node(out, child, depth + 1);
        }
        push_indent(out, depth);
    }
    out.push_str("</");
    out.push_str(node.tag());
    out.push_str(">\n");
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Escapes markup characters. Quotes are escaped inside attribute values only.
fn push_escaped(out: &mut String, value: &str, attribute: bool) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
