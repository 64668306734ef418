use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

const MIN_RUN_CHARS: usize = 4;

/// Best-effort text recovery for the binary Office formats (`.doc`, `.xls`,
/// `.ppt`). Scans the compound file for printable UTF-16LE and 8-bit runs and
/// keeps whichever encoding yields more text. Formatting and ordering are not
/// guaranteed.
pub struct LegacyOfficeAdapter;

#[async_trait]
impl FileLoader for LegacyOfficeAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if !matches!(
            document.content_type,
            ContentType::Doc | ContentType::Xls | ContentType::Ppt
        ) {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let wide = utf16_runs(data);
        let narrow = ascii_runs(data);
        let raw = if wide.len() >= narrow.len() {
            wide
        } else {
            narrow
        };

        let text = sanitize_extracted_text(&raw);
        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        tracing::debug!(chars = text.len(), "Legacy Office text recovered");
        Ok(text)
    }
}

fn is_text_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) || b == b'\t' || b == b'\r' || b == b'\n'
}

fn utf16_runs(data: &[u8]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    for pair in data.chunks_exact(2) {
        if pair[1] == 0 && is_text_byte(pair[0]) {
            run.push(pair[0] as char);
        } else {
            flush_run(&mut run, &mut out);
        }
    }
    flush_run(&mut run, &mut out);
    out
}

fn ascii_runs(data: &[u8]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    for &b in data {
        if is_text_byte(b) {
            run.push(b as char);
        } else {
            flush_run(&mut run, &mut out);
        }
    }
    flush_run(&mut run, &mut out);
    out
}

/// Keeps a run when it is long enough and mostly letters or spaces.
fn flush_run(run: &mut String, out: &mut String) {
    let chars = run.trim().chars().count();
    if chars >= MIN_RUN_CHARS {
        let wordy = run
            .chars()
            .filter(|c| c.is_alphabetic() || c.is_whitespace())
            .count();
        if wordy * 2 >= run.chars().count() {
            out.push_str(run.trim());
            out.push('\n');
        }
    }
    run.clear();
}
