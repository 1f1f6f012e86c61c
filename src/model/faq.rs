//! FAQ domain types.
//!
//! A deck is loaded once at startup; entries are never created or
//! destroyed afterwards. Only UI state (open/visible) changes at runtime,
//! and that state lives in `crate::state`, not here.

use serde::{Deserialize, Serialize};

/// Category used when an entry carries no explicit category.
pub const DEFAULT_CATEGORY: &str = "General";

/// Sentinel category token meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

// ===== CategoryToken =====

/// Label used to group FAQ entries for filtering.
///
/// Matching is exact and case-sensitive, except for the reserved `"all"`
/// sentinel which matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryToken(String);

impl CategoryToken {
    /// Wrap a raw category label.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The reserved sentinel meaning no filtering.
    pub fn all() -> Self {
        Self(ALL_CATEGORIES.to_string())
    }

    /// Whether this token is the `"all"` sentinel.
    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORIES
    }

    /// The raw label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== FaqEntry =====

/// One question/answer pair.
///
/// The smart constructor enforces non-blank question and answer; records
/// failing that are skipped at load time rather than rejected as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    index: usize,
    question: String,
    answer: String,
    category: Option<CategoryToken>,
}

impl FaqEntry {
    /// Build an entry, returning `None` when question or answer is blank.
    pub fn new(
        index: usize,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Option<CategoryToken>,
    ) -> Option<Self> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() || answer.trim().is_empty() {
            return None;
        }
        Some(Self {
            index,
            question,
            answer,
            category,
        })
    }

    /// Stable ordinal assigned at load time.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The entry's category, if it carries one.
    pub fn category(&self) -> Option<&CategoryToken> {
        self.category.as_ref()
    }

    /// Category label with the `"General"` default applied.
    pub fn category_or_default(&self) -> &str {
        self.category
            .as_ref()
            .map(CategoryToken::as_str)
            .unwrap_or(DEFAULT_CATEGORY)
    }
}

// ===== Deck =====

/// The loaded FAQ dataset: entries in document order plus slides.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    title: String,
    entries: Vec<FaqEntry>,
    slides: Vec<crate::model::Slide>,
}

impl Deck {
    /// Assemble a deck from already-validated parts.
    pub fn new(title: impl Into<String>, entries: Vec<FaqEntry>, slides: Vec<crate::model::Slide>) -> Self {
        Self {
            title: title.into(),
            entries,
            slides,
        }
    }

    /// Deck title, shown in the header and used for the export slug.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// FAQ entries in document order.
    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Number of FAQ entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the deck holds no FAQ entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Announcement slides in document order.
    pub fn slides(&self) -> &[crate::model::Slide] {
        &self.slides
    }

    /// Distinct category labels in first-appearance order.
    ///
    /// Used to build the category control row; an empty result means the
    /// deck carries no categories and the control row is not shown.
    pub fn categories(&self) -> Vec<CategoryToken> {
        let mut seen = Vec::new();
        for entry in &self.entries {
            if let Some(cat) = entry.category() {
                if !seen.contains(cat) {
                    seen.push(cat.clone());
                }
            }
        }
        seen
    }

    /// File name the export artifact is offered under.
    pub fn export_file_name(&self) -> String {
        let slug: String = self
            .title
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        let slug = slug.trim_matches('-');
        if slug.is_empty() {
            "faq-data.json".to_string()
        } else {
            format!("{slug}-faq.json")
        }
    }
}

// ===== FaqStats =====

/// Aggregate open/closed counts over the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqStats {
    /// Total number of entries.
    pub total: usize,
    /// Entries currently open.
    pub open: usize,
    /// Entries currently closed.
    pub closed: usize,
}

// ===== ExportRecord =====

/// One record of the downloadable export artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Question text.
    pub question: String,
    /// Answer text.
    pub answer: String,
    /// Category label, with the default applied.
    pub category: String,
}

impl From<&FaqEntry> for ExportRecord {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            question: entry.question().to_string(),
            answer: entry.answer().to_string(),
            category: entry.category_or_default().to_string(),
        }
    }
}
