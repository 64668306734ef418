mod composite_file_loader;
mod legacy_office_adapter;
mod ooxml_adapter;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use legacy_office_adapter::LegacyOfficeAdapter;
pub use ooxml_adapter::{OoxmlAdapter, extract_package_text, unescape_xml};
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::{PlainTextAdapter, strip_markdown};
pub use text_sanitizer::sanitize_extracted_text;
