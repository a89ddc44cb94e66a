use std::path::{Path, PathBuf};

use icon_gen::{auto_node, Font, IconRenderer, NodeFactory};

/// Stands in for a diagram library: records every node it is asked to make.
struct RecordingFactory {
    nodes: Vec<(String, PathBuf)>,
}

impl RecordingFactory {
    fn new() -> RecordingFactory {
        RecordingFactory { nodes: Vec::new() }
    }
}

impl NodeFactory for RecordingFactory {
    type Node = usize;

    fn custom_node(&mut self, label: &str, image: &Path) -> usize {
        self.nodes.push((label.to_string(), image.to_path_buf()));
        self.nodes.len() - 1
    }
}

fn test_renderer() -> IconRenderer {
    let font = Font::load(include_bytes!("../assets/DejaVuSans.ttf").to_vec())
        .expect("bundled font parses");
    IconRenderer::with_font(font)
}

#[test]
fn generated_node_gets_an_empty_caption() {
    let renderer = test_renderer();
    let mut factory = RecordingFactory::new();

    let node = auto_node(&mut factory, &renderer, "Message Queue", None, true)
        .expect("node builds");

    assert!(node.generated_icon());
    let (label, image) = &factory.nodes[*node.node()];
    // the image already displays the text, so the caption is blanked
    assert_eq!(label, "");
    assert!(image.exists());
}

#[test]
fn supplied_icon_keeps_the_caption() {
    let renderer = test_renderer();
    let mut factory = RecordingFactory::new();
    let supplied = Path::new("diagrams/queue.png");

    let node = auto_node(&mut factory, &renderer, "Message Queue", Some(supplied), true)
        .expect("node builds");

    assert!(!node.generated_icon());
    let (label, image) = &factory.nodes[*node.node()];
    assert_eq!(label, "Message Queue");
    assert_eq!(image, supplied);
}

#[test]
fn generated_icon_lives_as_long_as_the_node() {
    let renderer = test_renderer();
    let mut factory = RecordingFactory::new();

    let node = auto_node(&mut factory, &renderer, "Message Queue", None, false)
        .expect("node builds");

    let image = factory.nodes[*node.node()].1.clone();
    assert!(image.exists());

    drop(node);
    assert!(!image.exists());
}

#[test]
fn into_parts_hands_over_the_icon_handle() {
    let renderer = test_renderer();
    let mut factory = RecordingFactory::new();

    let node = auto_node(&mut factory, &renderer, "Message Queue", None, true)
        .expect("node builds");

    let (index, icon) = node.into_parts();
    assert_eq!(index, 0);

    let icon = icon.expect("icon was generated");
    let path = icon.path().to_path_buf();
    assert!(path.exists());

    drop(icon);
    assert!(!path.exists());
}

#[test]
fn node_mut_reaches_the_factory_node() {
    let renderer = test_renderer();
    let mut factory = RecordingFactory::new();

    let mut node = auto_node(&mut factory, &renderer, "Message Queue", None, true)
        .expect("node builds");

    *node.node_mut() = 7;
    assert_eq!(*node.node(), 7);
}
