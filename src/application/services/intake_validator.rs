use std::collections::BTreeSet;

use crate::domain::{ContentType, SummaryDepth};

/// Checks an upload before any external service is called.
#[derive(Debug, Clone)]
pub struct IntakeValidator {
    allowed: BTreeSet<String>,
}

/// An upload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedUpload {
    pub extension: String,
    pub content_type: ContentType,
    pub depth: SummaryDepth,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("No file provided")]
    NoFile,
    #[error("No file selected: filename is empty")]
    EmptyFilename,
    #[error("Unsupported file type. Allowed types: {}", .allowed.join(", "))]
    UnsupportedType {
        extension: Option<String>,
        allowed: Vec<String>,
    },
    #[error("summary_depth must be between 0.0 and 4.0, got {0}")]
    DepthOutOfRange(f64),
    #[error("summary_depth must be a number, got {0:?}")]
    InvalidDepth(String),
}

impl Default for IntakeValidator {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl IntakeValidator {
    /// Default allow-list plus `extra_extensions` (case and leading dots ignored).
    pub fn new<I, S>(extra_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allowed: BTreeSet<String> = ContentType::DEFAULT_EXTENSIONS
            .iter()
            .map(|e| e.to_string())
            .collect();

        for extension in extra_extensions {
            let normalized = extension
                .as_ref()
                .trim()
                .trim_start_matches('.')
                .to_ascii_lowercase();
            if !normalized.is_empty() {
                allowed.insert(normalized);
            }
        }

        Self { allowed }
    }

    /// Sorted allow-list.
    pub fn allowed_extensions(&self) -> Vec<String> {
        self.allowed.iter().cloned().collect()
    }

    /// Parses the raw `summary_depth` form value. Missing or blank means "use
    /// the default".
    pub fn parse_depth(raw: Option<&str>) -> Result<Option<f64>, ValidationError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ValidationError::InvalidDepth(value.to_string())),
        }
    }

    pub fn validate(
        &self,
        filename: Option<&str>,
        summary_depth: Option<f64>,
        content_present: bool,
    ) -> Result<ValidatedUpload, ValidationError> {
        if !content_present {
            return Err(ValidationError::NoFile);
        }

        let filename = filename.map(str::trim).unwrap_or_default();
        if filename.is_empty() {
            return Err(ValidationError::EmptyFilename);
        }

        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty());

        let Some(extension) = extension.filter(|ext| self.allowed.contains(ext)) else {
            return Err(ValidationError::UnsupportedType {
                extension: filename
                    .rsplit_once('.')
                    .map(|(_, ext)| ext.to_ascii_lowercase()),
                allowed: self.allowed_extensions(),
            });
        };

        let raw_depth = summary_depth.unwrap_or(SummaryDepth::DEFAULT);
        let depth =
            SummaryDepth::new(raw_depth).ok_or(ValidationError::DepthOutOfRange(raw_depth))?;

        let content_type = ContentType::from_extension(&extension).unwrap_or(ContentType::Text);

        Ok(ValidatedUpload {
            extension,
            content_type,
            depth,
        })
    }
}
