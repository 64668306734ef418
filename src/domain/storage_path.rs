use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::document_id::DocumentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// `{folder}/{document_id}/{slug}.pdf`, where the slug is derived from the title.
    pub fn for_summary(folder: &str, document_id: &DocumentId, title: &str) -> Self {
        let folder = folder.trim_matches('/');
        let file = format!("{}.pdf", slugify(title));
        if folder.is_empty() {
            Self(format!("{}/{}", document_id.as_uuid(), file))
        } else {
            Self(format!("{}/{}/{}", folder, document_id.as_uuid(), file))
        }
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accents are folded away ("Über" becomes "Uber"); other letters are kept.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.trim().nfkd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_alphanumeric() || ch == '-' {
            slug.push(ch);
        } else if (ch.is_whitespace() || ch == '_') && !slug.ends_with('_') {
            slug.push('_');
        }
    }

    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "summary".to_string()
    } else {
        slug.chars().take(80).collect()
    }
}
