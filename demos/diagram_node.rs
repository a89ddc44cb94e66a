use std::path::{Path, PathBuf};

use icon_gen::auto_node;
use icon_gen::Font;
use icon_gen::IconRenderer;
use icon_gen::NodeFactory;

/// A stand-in for a diagram library: it numbers nodes and remembers what
/// each one displays.
struct Diagram {
    nodes: Vec<(String, PathBuf)>,
}

impl NodeFactory for Diagram {
    type Node = usize;

    fn custom_node(&mut self, label: &str, image: &Path) -> usize {
        self.nodes.push((label.to_string(), image.to_path_buf()));
        self.nodes.len() - 1
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let dejavu = include_bytes!("../assets/DejaVuSans.ttf");
    let dejavu = Font::load(dejavu.to_vec()).expect("can load font");
    let renderer = IconRenderer::with_font(dejavu);

    let mut diagram = Diagram { nodes: Vec::new() };

    // a node with nothing supplied gets a generated icon, and its caption
    // moves into the image
    let queue = auto_node(&mut diagram, &renderer, "Message Queue", None, true)
        .expect("can build node");
    println!("queue icon generated: {}", queue.generated_icon());

    // render an icon up front and hand it to a second node as if it were a
    // caller-supplied image; that node keeps its caption
    let badge = renderer.render("shared badge", true).expect("can render icon");
    let badge_path = badge.keep().expect("can keep icon");
    let cache = auto_node(&mut diagram, &renderer, "Cache", Some(badge_path.as_path()), true)
        .expect("can build node");
    println!("cache icon generated: {}", cache.generated_icon());

    for (index, (label, image)) in diagram.nodes.iter().enumerate() {
        println!("node {index}: label={label:?} image={}", image.display());
    }

    // generated icons disappear with their nodes
    let queue_icon = diagram.nodes[*queue.node()].1.clone();
    drop(queue);
    println!("queue icon removed on drop: {}", !queue_icon.exists());

    // the kept badge is ours to clean up
    std::fs::remove_file(badge_path).expect("can remove badge");
}
