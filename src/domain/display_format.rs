use serde::{Deserialize, Serialize};

const SECTION_TRIGGERS: [&str; 3] = ["first", "second", "finally"];
const SECTION_MARKERS: [&str; 5] = ["first", "second", "finally", "moreover", "furthermore"];

/// How a summary is laid out on the page, plus the query used to find a
/// header image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFormat {
    #[serde(flatten)]
    pub layout: Layout,
    #[serde(default)]
    pub image_query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layout {
    Paragraph,
    BulletPoints { points: Vec<String> },
    Sections { sections: Vec<Section> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Paragraph => "paragraph",
            Layout::BulletPoints { .. } => "bullet_points",
            Layout::Sections { .. } => "sections",
        }
    }

    fn default_image_query(&self) -> &'static str {
        match self {
            Layout::Paragraph => "education learning",
            Layout::BulletPoints { .. } => "education notes",
            Layout::Sections { .. } => "education presentation",
        }
    }
}

impl DisplayFormat {
    pub fn new(layout: Layout) -> Self {
        let image_query = layout.default_image_query().to_string();
        Self {
            layout,
            image_query,
        }
    }

    pub fn paragraph() -> Self {
        Self::new(Layout::Paragraph)
    }

    /// A layout is usable when it has something to render.
    pub fn is_usable(&self) -> bool {
        match &self.layout {
            Layout::Paragraph => true,
            Layout::BulletPoints { points } => points.iter().any(|p| !p.trim().is_empty()),
            Layout::Sections { sections } => sections
                .iter()
                .any(|s| !s.title.trim().is_empty() || !s.content.trim().is_empty()),
        }
    }

    /// Fills in a blank image query with the layout's default.
    pub fn with_default_image_query(mut self) -> Self {
        if self.image_query.trim().is_empty() {
            self.image_query = self.layout.default_image_query().to_string();
        }
        self
    }
}

/// Heuristic layout for a summary: many sentences with ordinal cue words
/// become sections, short or choppy text becomes bullets, the rest stays a
/// paragraph.
pub fn suggest_display_format(summary: &str) -> DisplayFormat {
    let fragments: Vec<&str> = summary.split('.').collect();
    let word_count = summary.split_whitespace().count();
    let lower = summary.to_lowercase();

    if fragments.len() > 10 && SECTION_TRIGGERS.iter().any(|k| lower.contains(k)) {
        return DisplayFormat::new(Layout::Sections {
            sections: extract_sections(&fragments),
        });
    }

    if fragments.len() < 5 || word_count / fragments.len() < 10 {
        let points = fragments
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        return DisplayFormat::new(Layout::BulletPoints { points });
    }

    DisplayFormat::paragraph()
}

fn extract_sections(fragments: &[&str]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section {
        title: "Overview".to_string(),
        content: String::new(),
    };

    for fragment in fragments.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let lower = fragment.to_lowercase();
        if SECTION_MARKERS.iter().any(|k| lower.contains(k)) {
            if !current.content.is_empty() {
                sections.push(current);
            }
            current = Section {
                title: fragment.to_string(),
                content: String::new(),
            };
        } else {
            if !current.content.is_empty() {
                current.content.push(' ');
            }
            current.content.push_str(fragment);
            current.content.push('.');
        }
    }

    if !current.content.is_empty() {
        sections.push(current);
    }

    sections
}
