use sycx::application::ports::{FileLoader, FileLoaderError};
use sycx::domain::{ContentType, Document};
use sycx::infrastructure::text_processing::PdfAdapter;

fn document(name: &str, content_type: ContentType) -> Document {
    Document::new(name.to_string(), content_type, 0)
}

#[tokio::test]
async fn given_non_pdf_document_when_extracting_then_returns_unsupported_content_type() {
    let adapter = PdfAdapter::default();

    let result = adapter
        .extract_text(b"plain", &document("a.txt", ContentType::Text))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}

#[tokio::test]
async fn given_corrupt_pdf_bytes_when_extracting_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new(5);

    let result = adapter
        .extract_text(b"not a pdf at all", &document("a.pdf", ContentType::Pdf))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}
