use std::io::{Cursor, Read};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

static DOCX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|</w:p>|<w:tab/>|<w:br/>|<w:cr/>").unwrap()
});
static DRAWING_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a:t(?:\s[^>]*)?>([^<]*)</a:t>|</a:p>|<a:br/>").unwrap());
static SHARED_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<si>(.*?)</si>|<si/>").unwrap());
static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<t(?:\s[^>]*)?>([^<]*)</t>").unwrap());
static SHEET_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<row\b[^>]*?(?:/>|>(.*?)</row>)").unwrap());
static SHEET_CELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<c\b([^>]*?)(?:/>|>(.*?)</c>)"#).unwrap());
static CELL_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bt="([^"]*)""#).unwrap());
static CELL_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<v>([^<]*)</v>").unwrap());
static PART_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\.xml$").unwrap());

/// Reads text out of Office Open XML packages: `.docx`, `.pptx` and `.xlsx`.
pub struct OoxmlAdapter;

#[async_trait]
impl FileLoader for OoxmlAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let content_type = document.content_type;
        if !matches!(
            content_type,
            ContentType::Docx | ContentType::Pptx | ContentType::Xlsx
        ) {
            return Err(FileLoaderError::UnsupportedContentType(
                content_type.as_mime().to_string(),
            ));
        }

        let data = data.to_vec();
        let raw = tokio::task::spawn_blocking(move || extract_package_text(&data, content_type))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = sanitize_extracted_text(&raw);
        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        tracing::debug!(chars = text.len(), "OOXML text extraction complete");
        Ok(text)
    }
}

/// Synchronous extraction over an in-memory package.
pub fn extract_package_text(
    data: &[u8],
    content_type: ContentType,
) -> Result<String, FileLoaderError> {
    let mut archive = ZipArchive::new(Cursor::new(data))
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("not a valid package: {e}")))?;

    match content_type {
        ContentType::Docx => {
            let xml = read_part(&mut archive, "word/document.xml")?;
            Ok(collect_runs(&DOCX_TOKEN, &xml, "</w:p>"))
        }
        ContentType::Pptx => {
            let slides = numbered_parts(&archive, "ppt/slides/slide");
            let mut out = Vec::with_capacity(slides.len());
            for name in slides {
                let xml = read_part(&mut archive, &name)?;
                out.push(collect_runs(&DRAWING_TOKEN, &xml, "</a:p>"));
            }
            Ok(out.join("\n\n"))
        }
        ContentType::Xlsx => {
            let shared = match read_part(&mut archive, "xl/sharedStrings.xml") {
                Ok(xml) => shared_strings(&xml),
                Err(_) => Vec::new(),
            };
            let sheets = numbered_parts(&archive, "xl/worksheets/sheet");
            let mut out = Vec::with_capacity(sheets.len());
            for name in sheets {
                let xml = read_part(&mut archive, &name)?;
                out.push(sheet_text(&xml, &shared));
            }
            Ok(out.join("\n\n"))
        }
        other => Err(FileLoaderError::UnsupportedContentType(
            other.as_mime().to_string(),
        )),
    }
}

fn read_part(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<String, FileLoaderError> {
    let mut file = archive
        .by_name(name)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("missing part {name}: {e}")))?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("unreadable part {name}: {e}")))?;
    Ok(xml)
}

/// Part names like `{prefix}12.xml`, ordered by their number.
fn numbered_parts(archive: &ZipArchive<Cursor<&[u8]>>, prefix: &str) -> Vec<String> {
    let mut parts: Vec<(u32, String)> = archive
        .file_names()
        .filter(|name| name.starts_with(prefix) && name[prefix.len()..].ends_with(".xml"))
        .filter(|name| !name[prefix.len()..].contains('/'))
        .filter_map(|name| {
            let number = PART_NUMBER.captures(name)?.get(1)?.as_str().parse().ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    parts.sort();
    parts.into_iter().map(|(_, name)| name).collect()
}

fn collect_runs(token: &Regex, xml: &str, paragraph_end: &str) -> String {
    let mut out = String::new();
    for caps in token.captures_iter(xml) {
        match caps.get(1) {
            Some(text) => out.push_str(&unescape_xml(text.as_str())),
            None => match &caps[0] {
                end if end == paragraph_end => out.push('\n'),
                "<w:tab/>" => out.push('\t'),
                _ => out.push('\n'),
            },
        }
    }
    out
}

fn shared_strings(xml: &str) -> Vec<String> {
    SHARED_STRING
        .captures_iter(xml)
        .map(|caps| {
            caps.get(1)
                .map(|item| {
                    TEXT_RUN
                        .captures_iter(item.as_str())
                        .map(|run| unescape_xml(&run[1]))
                        .collect::<String>()
                })
                .unwrap_or_default()
        })
        .collect()
}

fn sheet_text(xml: &str, shared: &[String]) -> String {
    let mut lines = Vec::new();
    for row in SHEET_ROW.captures_iter(xml) {
        let Some(body) = row.get(1) else { continue };
        let cells: Vec<String> = SHEET_CELL
            .captures_iter(body.as_str())
            .filter_map(|cell| {
                let attributes = cell.get(1).map_or("", |m| m.as_str());
                let inner = cell.get(2).map_or("", |m| m.as_str());
                cell_value(attributes, inner, shared)
            })
            .filter(|v| !v.trim().is_empty())
            .collect();
        if !cells.is_empty() {
            lines.push(cells.join(" "));
        }
    }
    lines.join("\n")
}

fn cell_value(attributes: &str, inner: &str, shared: &[String]) -> Option<String> {
    let cell_type = CELL_TYPE
        .captures(attributes)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str());

    match cell_type {
        "s" => {
            let index: usize = CELL_VALUE.captures(inner)?[1].trim().parse().ok()?;
            shared.get(index).cloned()
        }
        "inlineStr" => Some(
            TEXT_RUN
                .captures_iter(inner)
                .map(|run| unescape_xml(&run[1]))
                .collect(),
        ),
        _ => CELL_VALUE
            .captures(inner)
            .map(|value| unescape_xml(&value[1])),
    }
}

/// Resolves the predefined XML entities and numeric character references.
pub fn unescape_xml(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find(';') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let entity = &after[..end];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| entity.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };

        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &after[end + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
