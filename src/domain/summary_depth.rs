use std::fmt;

/// How much of the source survives into the summary, from 0.0 (minimal) to
/// 4.0 (comprehensive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryDepth(f64);

/// Target summary length as a fraction of the source word count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRatio {
    pub max: f64,
    pub min: f64,
}

const LEVELS: [(f64, LengthRatio); 5] = [
    (0.0, LengthRatio { max: 0.05, min: 0.02 }),
    (1.0, LengthRatio { max: 0.15, min: 0.05 }),
    (2.0, LengthRatio { max: 0.30, min: 0.10 }),
    (3.0, LengthRatio { max: 0.40, min: 0.20 }),
    (4.0, LengthRatio { max: 0.60, min: 0.30 }),
];

impl SummaryDepth {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 4.0;
    pub const DEFAULT: f64 = 2.0;

    /// Returns `None` when the value is outside `[MIN, MAX]` or NaN.
    pub fn new(value: f64) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Snaps to the nearest configured level.
    pub fn length_ratio(&self) -> LengthRatio {
        LEVELS
            .iter()
            .min_by(|(a, _), (b, _)| (a - self.0).abs().total_cmp(&(b - self.0).abs()))
            .map(|(_, ratio)| *ratio)
            .unwrap_or(LEVELS[2].1)
    }

    /// `(max_words, min_words)` for a source of `source_words` words.
    pub fn word_budget(&self, source_words: usize) -> (usize, usize) {
        let ratio = self.length_ratio();
        let max = (source_words as f64 * ratio.max) as usize;
        let min = (source_words as f64 * ratio.min) as usize;
        (max, min)
    }

    pub fn label(&self) -> &'static str {
        match self.length_ratio().max {
            m if m <= 0.05 => "minimal",
            m if m <= 0.15 => "short",
            m if m <= 0.30 => "medium",
            m if m <= 0.40 => "standard",
            _ => "comprehensive",
        }
    }
}

impl Default for SummaryDepth {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for SummaryDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
