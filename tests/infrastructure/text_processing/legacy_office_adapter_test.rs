use sycx::application::ports::{FileLoader, FileLoaderError};
use sycx::domain::{ContentType, Document};
use sycx::infrastructure::text_processing::LegacyOfficeAdapter;

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

#[tokio::test]
async fn given_binary_doc_with_utf16_text_when_extracting_then_recovers_text() {
    let mut data = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    data.extend(utf16le("Quarterly revenue grew strongly"));
    data.extend([0xFF, 0xFF, 0x01, 0x02]);
    let document = Document::new("report.doc".to_string(), ContentType::Doc, data.len() as u64);

    let text = LegacyOfficeAdapter.extract_text(&data, &document).await.unwrap();

    assert!(text.contains("Quarterly revenue grew strongly"));
}

#[tokio::test]
async fn given_binary_noise_when_extracting_then_returns_no_text_found() {
    let data = vec![0x01, 0x02, 0xFF, 0x03, 0x9A, 0x00, 0x00, 0x7F];
    let document = Document::new("noise.xls".to_string(), ContentType::Xls, data.len() as u64);

    let result = LegacyOfficeAdapter.extract_text(&data, &document).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}
