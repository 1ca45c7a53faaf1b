//! Composition of a layer into its SVG document tree.

use log::{debug, trace};

use gaugesmith_core::{
    draw::Drawable,
    node::Node,
    semantic::{Layer, Shadow},
};

/// Namespace declared on every document root.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Id of the shadow filter referenced by the wrapper group.
const SHADOW_FILTER_ID: &str = "shadow";

/// Composes a layer into a standalone `svg` root node.
///
/// Operations are rendered in declared order, so later operations paint
/// over earlier ones. With a shadow, the root holds one `defs` element with
/// the filter followed by a single `g` that references it and contains every
/// rendered operation.
pub fn compose_layer(layer: &Layer) -> Node {
    let canvas = layer.canvas();
    let size = layer.size();

    let nodes: Vec<Node> = layer
        .operations()
        .iter()
        .enumerate()
        .map(|(position, operation)| {
            let node = operation.render(&canvas);
            trace!(
                layer = layer.name(),
                position,
                kind = operation.kind(),
                tag = node.tag();
                "Operation rendered"
            );
            node
        })
        .collect();

    let root = Node::new("svg")
        .set("xmlns", SVG_NAMESPACE)
        .set("width", size.width())
        .set("height", size.height())
        .set(
            "viewBox",
            format!("0 0 {} {}", size.width(), size.height()),
        )
        .set("style", "background:none");

    match layer.shadow() {
        Some(shadow) => {
            debug!(
                layer = layer.name(),
                size = shadow.size(),
                x = shadow.x(),
                y = shadow.y();
                "Adding shadow filter"
            );
            root.add(Node::new("defs").add(shadow_filter(shadow)))
                .add(
                    Node::new("g")
                        .set("filter", format!("url(#{SHADOW_FILTER_ID})"))
                        .add_all(nodes),
                )
        }
        None => root.add_all(nodes),
    }
}

/// Builds the drop shadow filter.
///
/// The source alpha is blurred by `size`, offset by `(x, y)`, tinted with a
/// half transparent black flood and merged under the original graphic.
fn shadow_filter(shadow: Shadow) -> Node {
    Node::new("filter")
        .set("id", SHADOW_FILTER_ID)
        .set("x", "-20%")
        .set("y", "-20%")
        .set("width", "140%")
        .set("height", "140%")
        .add(
            Node::new("feGaussianBlur")
                .set("in", "SourceAlpha")
                .set("stdDeviation", shadow.size())
                .set("result", "blur"),
        )
        .add(
            Node::new("feOffset")
                .set("in", "blur")
                .set("dx", shadow.x())
                .set("dy", shadow.y())
                .set("result", "offset"),
        )
        .add(
            Node::new("feFlood")
                .set("flood-color", "rgba(0,0,0,0.5)")
                .set("result", "color"),
        )
        .add(
            Node::new("feComposite")
                .set("in", "color")
                .set("in2", "offset")
                .set("operator", "in")
                .set("result", "shadow"),
        )
        .add(
            Node::new("feMerge")
                .add(Node::new("feMergeNode").set("in", "shadow"))
                .add(Node::new("feMergeNode").set("in", "SourceGraphic")),
        )
}
