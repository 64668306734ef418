use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

static MD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s{0,3}#{1,6}\s+").unwrap());
static MD_LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:[-*+]|\d+[.)])\s+").unwrap());
static MD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[([^\]]*)\]\([^)]*\)").unwrap());
static MD_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\*{1,3}|_{2,3}|`+|~~)").unwrap());

/// Loads `.txt` and `.md` uploads (and operator-added plain-text extensions).
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if !matches!(
            document.content_type,
            ContentType::Text | ContentType::Markdown
        ) {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
        let raw = std::str::from_utf8(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;

        let text = if document.content_type == ContentType::Markdown {
            sanitize_extracted_text(&strip_markdown(raw))
        } else {
            sanitize_extracted_text(raw)
        };

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}

pub fn strip_markdown(markdown: &str) -> String {
    let text = MD_HEADING.replace_all(markdown, "");
    let text = MD_LIST_MARKER.replace_all(&text, "");
    let text = MD_LINK.replace_all(&text, "$1");
    MD_EMPHASIS.replace_all(&text, "").into_owned()
}
