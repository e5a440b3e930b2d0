use super::*;
use crate::render::scene::TextAnchor;

fn space() -> PlotSpace {
    PlotSpace {
        x_range: [0.0, 10.0],
        y_range: [-3.0, 3.0],
        width: 100.0,
        height: 60.0,
    }
}

fn label(text: &str) -> TextLabel {
    TextLabel {
        text: text.to_owned(),
        x: 5.0,
        y: 0.0,
        anchor: TextAnchor::End,
        size_px: 12.0,
        color: [255, 255, 255],
        alpha: 0.5,
    }
}

#[test]
fn escapes_markup_in_text_and_family() {
    assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");

    let overlay = TextOverlay::with_fontdb("A & B", usvg::fontdb::Database::new());
    let svg = overlay.svg_document(&[label("<T>")], &space());
    assert!(svg.contains("&lt;T&gt;"));
    assert!(svg.contains(r#"font-family="A &amp; B""#));
    assert!(svg.contains(r#"text-anchor="end""#));
    assert!(svg.contains(r#"x="50.00" y="30.00""#));
}

#[test]
fn svg_document_parses() {
    let overlay = TextOverlay::with_fontdb("sans-serif", usvg::fontdb::Database::new());
    let svg = overlay.svg_document(&[label("Temp: 20.5°C")], &space());
    usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
}

#[test]
fn draw_without_fonts_leaves_pixels_untouched() {
    let overlay = TextOverlay::with_fontdb("sans-serif", usvg::fontdb::Database::new());
    assert_eq!(overlay.font_faces(), 0);

    let mut dst = vec![7u8; 100 * 60 * 4];
    overlay
        .draw(&[label("hello")], &space(), &mut dst, 100, 60)
        .unwrap();
    assert!(dst.iter().all(|&b| b == 7));
}

#[test]
fn draw_rejects_size_mismatch() {
    let overlay = TextOverlay::with_fontdb("sans-serif", usvg::fontdb::Database::new());
    let mut dst = vec![0u8; 16];
    assert!(
        overlay
            .draw(&[label("x")], &space(), &mut dst, 100, 60)
            .is_err()
    );
}
