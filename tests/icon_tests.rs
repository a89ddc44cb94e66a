use std::fs;

use icon_gen::{Font, IconError, IconRenderer};

fn test_renderer() -> IconRenderer {
    let font = Font::load(include_bytes!("../assets/DejaVuSans.ttf").to_vec())
        .expect("bundled font parses");
    IconRenderer::with_font(font)
}

#[test]
fn rendered_icon_is_a_square_transparent_png() {
    let renderer = test_renderer();
    let icon = renderer.render("Cache", true).expect("icon renders");

    assert!(icon.path().exists());

    let img = image::open(icon.path()).expect("png decodes");
    assert_eq!(img.width(), 420);
    assert_eq!(img.height(), 420);

    let rgba = img.as_rgba8().expect("png decodes as 8-bit rgba");
    // the corners sit outside the rounded border arc and stay transparent
    assert_eq!(rgba.get_pixel(0, 0)[3], 0x00);
    assert_eq!(rgba.get_pixel(419, 0)[3], 0x00);
    assert_eq!(rgba.get_pixel(0, 419)[3], 0x00);
    assert_eq!(rgba.get_pixel(419, 419)[3], 0x00);
}

#[test]
fn border_pixels_hug_the_edge_midpoints() {
    let renderer = test_renderer();
    let icon = renderer.render("Cache", true).expect("icon renders");

    let img = image::open(icon.path()).expect("png decodes");
    let rgba = img.as_rgba8().expect("rgba");

    for (x, y) in [(210, 0), (210, 419), (0, 210), (419, 210)] {
        let px = rgba.get_pixel(x, y);
        assert_eq!(px[3], 0xff, "border missing at ({x}, {y})");
        assert_eq!((px[0], px[1], px[2]), (0, 0, 0), "border not black at ({x}, {y})");
    }
}

#[test]
fn borderless_icon_leaves_the_edges_clear() {
    let renderer = test_renderer();
    let icon = renderer.render("Cache", false).expect("icon renders");

    let img = image::open(icon.path()).expect("png decodes");
    let rgba = img.as_rgba8().expect("rgba");

    for (x, y) in [(210, 0), (210, 419), (0, 210), (419, 210)] {
        assert_eq!(rgba.get_pixel(x, y)[3], 0x00, "unexpected ink at ({x}, {y})");
    }
}

#[test]
fn label_ink_lands_in_the_middle_of_the_canvas() {
    let renderer = test_renderer();
    let icon = renderer.render("Cache", false).expect("icon renders");

    let img = image::open(icon.path()).expect("png decodes");
    let rgba = img.as_rgba8().expect("rgba");

    let central_ink = rgba
        .enumerate_pixels()
        .filter(|(x, y, p)| (140..280).contains(x) && (140..280).contains(y) && p[3] > 0)
        .count();
    assert!(central_ink > 0, "no text ink in the central region");

    // without a border, every inked pixel belongs to the label and sits
    // well inside the margins
    for (x, y, p) in rgba.enumerate_pixels() {
        if p[3] > 0 {
            assert!((20..400).contains(&x), "ink at the edge: x={x}");
            assert!((20..400).contains(&y), "ink at the edge: y={y}");
        }
    }
}

#[test]
fn long_label_wraps_onto_multiple_lines() {
    let renderer = test_renderer();
    let icon = renderer
        .render("Relational Database Service", false)
        .expect("icon renders");

    let img = image::open(icon.path()).expect("png decodes");
    let rgba = img.as_rgba8().expect("rgba");

    let mut min_y = u32::MAX;
    let mut max_y = 0;
    for (_, y, p) in rgba.enumerate_pixels() {
        if p[3] > 0 {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
    }

    // three stacked lines span far more height than a single line of 54px
    // text ever could
    assert!(max_y - min_y > 100, "ink spans only {} rows", max_y - min_y);
}

#[test]
fn phys_chunk_records_300_dpi() {
    let renderer = test_renderer();
    let icon = renderer.render("Cache", true).expect("icon renders");

    let decoder = png::Decoder::new(fs::File::open(icon.path()).expect("file opens"));
    let reader = decoder.read_info().expect("png header parses");
    let info = reader.info();

    assert_eq!(info.width, 420);
    assert_eq!(info.height, 420);
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);

    // 300dpi in pixels per metre
    let dims = info.pixel_dims.expect("pHYs chunk present");
    assert_eq!(dims.xppu, 11811);
    assert_eq!(dims.yppu, 11811);
    assert_eq!(dims.unit, png::Unit::Meter);
}

#[test]
fn dropping_the_handle_removes_the_file() {
    let renderer = test_renderer();
    let icon = renderer.render("Cache", true).expect("icon renders");

    let path = icon.path().to_path_buf();
    assert!(path.exists());

    drop(icon);
    assert!(!path.exists());
}

#[test]
fn keep_persists_the_file() {
    let renderer = test_renderer();
    let icon = renderer.render("Cache", true).expect("icon renders");

    let path = icon.keep().expect("file persists");
    assert!(path.exists());

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn empty_label_is_rejected_before_any_file_is_created() {
    let renderer = test_renderer();

    assert!(matches!(
        renderer.render("", true),
        Err(IconError::InvalidLabel)
    ));
    assert!(matches!(
        renderer.render(" \t\n ", false),
        Err(IconError::InvalidLabel)
    ));
}

#[test]
fn each_render_gets_its_own_file() {
    let renderer = test_renderer();
    let first = renderer.render("Cache", true).expect("icon renders");
    let second = renderer.render("Cache", true).expect("icon renders");

    assert_ne!(first.path(), second.path());
    assert!(first.path().exists());
    assert!(second.path().exists());
}
