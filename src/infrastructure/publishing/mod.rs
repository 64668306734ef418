mod pdf_publisher;

pub use pdf_publisher::PdfPublisher;
