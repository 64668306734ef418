use sycx::domain::{DisplayFormat, Layout, Section, Summary};
use sycx::infrastructure::rendering::PdfRenderer;
use sycx::presentation::config::RenderingSettings;

fn renderer() -> PdfRenderer {
    PdfRenderer::new(&RenderingSettings {
        font_path: None,
        primary_color: "#1F3A5F".to_string(),
        header_color: "#2E6DA4".to_string(),
    })
}

fn summary(layout: Layout) -> Summary {
    Summary::new(
        "Cells are the basic unit of life.\n\nThey divide by mitosis.".to_string(),
        Some("Cells".to_string()),
        DisplayFormat::new(layout),
    )
}

#[test]
fn given_each_layout_when_rendering_then_returns_pdf_bytes() {
    let layouts = vec![
        Layout::Paragraph,
        Layout::BulletPoints {
            points: vec!["Cells are alive".to_string(), "Cells divide".to_string()],
        },
        Layout::Sections {
            sections: vec![Section {
                title: "Overview".to_string(),
                content: "Cells are the basic unit of life.".to_string(),
            }],
        },
    ];

    for layout in layouts {
        let name = layout.as_str();
        let pdf = renderer().render("Cells", &summary(layout), None).unwrap();
        assert!(pdf.starts_with(b"%PDF"), "{name} did not render a PDF");
    }
}

#[test]
fn given_long_summary_when_rendering_then_spills_onto_more_pages() {
    let text = "Mitochondria produce most of the energy a cell needs. ".repeat(400);
    let long = Summary::new(text, None, DisplayFormat::paragraph());
    let short = summary(Layout::Paragraph);

    let long_pdf = renderer().render("Long", &long, None).unwrap();
    let short_pdf = renderer().render("Short", &short, None).unwrap();

    assert!(long_pdf.starts_with(b"%PDF"));
    assert!(long_pdf.len() > short_pdf.len());
}

#[test]
fn given_undecodable_header_image_when_rendering_then_image_is_skipped() {
    let pdf = renderer()
        .render("Cells", &summary(Layout::Paragraph), Some(b"not an image"))
        .unwrap();

    assert!(pdf.starts_with(b"%PDF"));
}

#[test]
fn given_missing_font_file_and_bad_colour_when_creating_then_falls_back_to_defaults() {
    let renderer = PdfRenderer::new(&RenderingSettings {
        font_path: Some("/nonexistent/font.ttf".to_string()),
        primary_color: "blue".to_string(),
        header_color: "#2E6DA4".to_string(),
    });

    let pdf = renderer
        .render("Title \u{2014} with dash", &summary(Layout::Paragraph), None)
        .unwrap();

    assert!(pdf.starts_with(b"%PDF"));
}
