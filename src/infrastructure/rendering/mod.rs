mod pdf_renderer;
mod text_layout;

pub use pdf_renderer::{PdfRenderer, RenderError};
pub use text_layout::{chars_per_line, latin1_safe, parse_hex_color, wrap_text};
