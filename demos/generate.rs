use icon_gen::Font;
use icon_gen::IconRenderer;

fn main() {
    // show the renderer's debug output (font resolution, written files)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // use the bundled font so the demo renders the same everywhere; call
    // IconRenderer::new() instead to draw with the system's Arial
    let dejavu = include_bytes!("../assets/DejaVuSans.ttf");
    let dejavu = Font::load(dejavu.to_vec()).expect("can load font");
    let renderer = IconRenderer::with_font(dejavu);
    println!("rendering with {}", renderer.font().name());

    // labels that exercise single-line fits, wrapping, and hyphenation
    let mut labels = vec![
        "Cache".to_string(),
        "API Gateway".to_string(),
        "Authentication Service".to_string(),
    ];

    // and a nonsense label long enough to need both
    labels.push(lipsum::lipsum(6));

    for label in labels {
        let icon = renderer.render(&label, true).expect("can render icon");

        // keep the files around to be looked at; normally dropping the
        // handle deletes them
        let path = icon.keep().expect("can keep icon");
        println!("{label:?} -> {}", path.display());
    }
}
