use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::legacy_office_adapter::LegacyOfficeAdapter;
use super::ooxml_adapter::OoxmlAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

/// Dispatches extraction to the adapter registered for the document's
/// content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Every text-bearing format the intake accepts. Images are left out:
    /// they go to a vision model as-is.
    pub fn standard(pdf_max_pages: usize) -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new(pdf_max_pages));
        let ooxml: Arc<dyn FileLoader> = Arc::new(OoxmlAdapter);
        let legacy: Arc<dyn FileLoader> = Arc::new(LegacyOfficeAdapter);
        let plain: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);

        Self::new(vec![
            (ContentType::Pdf, pdf),
            (ContentType::Docx, Arc::clone(&ooxml)),
            (ContentType::Pptx, Arc::clone(&ooxml)),
            (ContentType::Xlsx, ooxml),
            (ContentType::Doc, Arc::clone(&legacy)),
            (ContentType::Xls, Arc::clone(&legacy)),
            (ContentType::Ppt, legacy),
            (ContentType::Text, Arc::clone(&plain)),
            (ContentType::Markdown, plain),
        ])
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.adapters.contains_key(&content_type)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.content_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
