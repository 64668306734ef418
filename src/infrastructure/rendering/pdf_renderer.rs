use std::io::Cursor;

use printpdf::image_crate::{self, DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Rgb,
};

use crate::domain::{Layout, Summary};
use crate::presentation::config::RenderingSettings;

use super::text_layout::{chars_per_line, latin1_safe, parse_hex_color, wrap_text};

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 25.4;
const TITLE_SIZE: f32 = 24.0;
const HEADER_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const BODY_LEADING: f32 = 16.0;
const BULLET_INDENT: f32 = 7.0;
const IMAGE_BOX_WIDTH: f32 = 152.4;
const IMAGE_BOX_HEIGHT: f32 = 101.6;
const IMAGE_DPI: f32 = 300.0;
const MM_PER_PT: f32 = 0.3528;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("font: {0}")]
    Font(String),
    #[error("pdf: {0}")]
    Pdf(String),
}

/// Lays a summary out on US-Letter pages.
pub struct PdfRenderer {
    primary_color: (f32, f32, f32),
    header_color: (f32, f32, f32),
    font_data: Option<Vec<u8>>,
}

impl PdfRenderer {
    pub fn new(settings: &RenderingSettings) -> Self {
        let font_data = settings.font_path.as_deref().and_then(|path| {
            match std::fs::read(path) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::warn!(path, error = %e, "Custom font not found, using Helvetica");
                    None
                }
            }
        });

        Self {
            primary_color: color_or_black(&settings.primary_color),
            header_color: color_or_black(&settings.header_color),
            font_data,
        }
    }

    pub fn render(
        &self,
        title: &str,
        summary: &Summary,
        header_image: Option<&[u8]>,
    ) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            latin1_safe(title),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );

        let (regular, bold) = match &self.font_data {
            Some(data) => {
                let font = doc
                    .add_external_font(Cursor::new(data.as_slice()))
                    .map_err(|e| RenderError::Font(e.to_string()))?;
                (font.clone(), font)
            }
            None => (
                doc.add_builtin_font(BuiltinFont::Helvetica)
                    .map_err(|e| RenderError::Font(e.to_string()))?,
                doc.add_builtin_font(BuiltinFont::HelveticaBold)
                    .map_err(|e| RenderError::Font(e.to_string()))?,
            ),
        };

        let layer = doc.get_page(page).get_layer(layer);
        let mut writer = PageWriter {
            doc: &doc,
            layer,
            cursor: PAGE_HEIGHT - MARGIN,
            regular,
            bold,
            unicode: self.font_data.is_some(),
        };

        writer.block(title, TITLE_SIZE, 0.0, true, self.primary_color);
        writer.space(8.0);

        if let Some(image) = header_image.and_then(decode_image) {
            writer.image(image);
            writer.space(6.0);
        }

        let black = (0.0, 0.0, 0.0);
        match &summary.display_format.layout {
            Layout::BulletPoints { points } => {
                let bullet = if writer.unicode { "\u{2022}" } else { "-" };
                for point in points.iter().filter(|p| !p.trim().is_empty()) {
                    writer.block(
                        &format!("{bullet} {}", point.trim()),
                        BODY_SIZE,
                        BULLET_INDENT,
                        false,
                        black,
                    );
                    writer.space(2.5);
                }
            }
            Layout::Sections { sections } => {
                for section in sections {
                    if !section.title.trim().is_empty() {
                        writer.block(&section.title, HEADER_SIZE, 0.0, true, self.header_color);
                        writer.space(2.5);
                    }
                    writer.block(&section.content, BODY_SIZE, 0.0, false, black);
                    writer.space(4.0);
                }
            }
            Layout::Paragraph => {
                for paragraph in summary.text.split("\n\n") {
                    writer.block(paragraph, BODY_SIZE, 0.0, false, black);
                    writer.space(4.0);
                }
            }
        }

        doc.save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}

struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    cursor: f32,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    unicode: bool,
}

impl PageWriter<'_> {
    fn space(&mut self, mm: f32) {
        self.cursor -= mm;
    }

    fn ensure(&mut self, height: f32) {
        if self.cursor - height < MARGIN {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.cursor = PAGE_HEIGHT - MARGIN;
        }
    }

    fn block(&mut self, text: &str, size: f32, indent: f32, bold: bool, color: (f32, f32, f32)) {
        let text = if self.unicode {
            text.to_string()
        } else {
            latin1_safe(text)
        };
        let leading = if size > BODY_SIZE {
            size * 1.25 * MM_PER_PT
        } else {
            BODY_LEADING * MM_PER_PT
        };
        let width = PAGE_WIDTH - 2.0 * MARGIN - indent;
        let font = if bold {
            self.bold.clone()
        } else {
            self.regular.clone()
        };

        for line in wrap_text(&text, chars_per_line(width, size)) {
            self.ensure(leading);
            self.cursor -= leading;
            self.layer
                .set_fill_color(Color::Rgb(Rgb::new(color.0, color.1, color.2, None)));
            self.layer
                .use_text(line, size, Mm(MARGIN + indent), Mm(self.cursor), &font);
        }
    }

    fn image(&mut self, image: DynamicImage) {
        let (px_w, px_h) = image.dimensions();
        let native_w = px_w as f32 / IMAGE_DPI * 25.4;
        let native_h = px_h as f32 / IMAGE_DPI * 25.4;
        let scale = (IMAGE_BOX_WIDTH / native_w).min(IMAGE_BOX_HEIGHT / native_h);
        let height = native_h * scale;

        self.ensure(height);
        self.cursor -= height;

        let offset = (PAGE_WIDTH - native_w * scale) / 2.0;
        Image::from_dynamic_image(&image).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(offset)),
                translate_y: Some(Mm(self.cursor)),
                scale_x: Some(scale),
                scale_y: Some(scale),
                dpi: Some(IMAGE_DPI),
                ..Default::default()
            },
        );
    }
}

fn decode_image(bytes: &[u8]) -> Option<DynamicImage> {
    match image_crate::load_from_memory(bytes) {
        Ok(image) if image.width() > 0 && image.height() > 0 => {
            Some(DynamicImage::ImageRgb8(image.to_rgb8()))
        }
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(error = %e, "Header image could not be decoded; skipping");
            None
        }
    }
}

fn color_or_black(hex: &str) -> (f32, f32, f32) {
    parse_hex_color(hex).unwrap_or_else(|| {
        tracing::warn!(color = hex, "Invalid colour, using black");
        (0.0, 0.0, 0.0)
    })
}
