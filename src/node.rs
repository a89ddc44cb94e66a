use std::path::Path;

use crate::error::IconError;
use crate::icon::{IconFile, IconRenderer};

/// The capability a diagram library provides: create a node that displays an
/// image from disk, captioned with a label. Implement this for whatever
/// builder or context your diagram library uses and [auto_node] takes care
/// of deciding what image and caption each node gets.
pub trait NodeFactory {
    type Node;

    /// Create a node displaying the given image, captioned with the label
    fn custom_node(&mut self, label: &str, image: &Path) -> Self::Node;
}

/// A diagram node paired with the generated icon file backing it, if one was
/// generated. Dropping this drops the icon file with it, so keep the
/// [IconNode] alive until the diagram has been rendered out.
pub struct IconNode<N> {
    node: N,
    icon: Option<IconFile>,
}

impl<N> IconNode<N> {
    /// The node the factory produced
    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut N {
        &mut self.node
    }

    /// Whether the node's image was generated from its label rather than
    /// supplied by the caller
    pub fn generated_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Split into the node and the generated icon handle, if any, leaving
    /// the caller in charge of how long the icon file lives
    pub fn into_parts(self) -> (N, Option<IconFile>) {
        (self.node, self.icon)
    }
}

/// Create a diagram node for a label, generating its icon when the caller
/// does not supply one.
///
/// When `icon` is given the node displays that image and keeps its label as
/// the caption. Otherwise the label is rendered into a generated icon and
/// the node's caption is left empty, since the image already displays the
/// text; the returned [IconNode] owns the generated file.
///
/// ```no_run
/// use std::path::{Path, PathBuf};
///
/// use icon_gen::{auto_node, IconRenderer, NodeFactory};
///
/// // a factory that just records what the diagram would show
/// struct Catalogue(Vec<(String, PathBuf)>);
///
/// impl NodeFactory for Catalogue {
///     type Node = usize;
///
///     fn custom_node(&mut self, label: &str, image: &Path) -> usize {
///         self.0.push((label.to_string(), image.to_path_buf()));
///         self.0.len() - 1
///     }
/// }
///
/// let renderer = IconRenderer::new()?;
/// let mut catalogue = Catalogue(Vec::new());
///
/// let node = auto_node(&mut catalogue, &renderer, "Message Queue", None, true)?;
/// assert!(node.generated_icon());
/// # Ok::<(), icon_gen::IconError>(())
/// ```
pub fn auto_node<F: NodeFactory>(
    factory: &mut F,
    renderer: &IconRenderer,
    label: &str,
    icon: Option<&Path>,
    border: bool,
) -> Result<IconNode<F::Node>, IconError> {
    match icon {
        Some(image) => {
            let node = factory.custom_node(label, image);
            Ok(IconNode { node, icon: None })
        }
        None => {
            let generated = renderer.render(label, border)?;
            let node = factory.custom_node("", generated.path());
            Ok(IconNode {
                node,
                icon: Some(generated),
            })
        }
    }
}
