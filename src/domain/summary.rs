use super::display_format::DisplayFormat;

/// What the summarizer hands back: the text, a suggested title and a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub text: String,
    pub title: Option<String>,
    pub display_format: DisplayFormat,
}

impl Summary {
    pub fn new(text: String, title: Option<String>, display_format: DisplayFormat) -> Self {
        Self {
            text,
            title: title.filter(|t| !t.trim().is_empty()),
            display_format,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
