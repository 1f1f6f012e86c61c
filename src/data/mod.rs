//! Deck file loading and export.
//!
//! The deck is a JSON document:
//!
//! ```json
//! {
//!   "title": "Programming Club",
//!   "faq": [ { "question": "...", "answer": "...", "category": "general" } ],
//!   "slides": [ { "title": "...", "body": "..." } ]
//! }
//! ```
//!
//! Records with a blank question or answer are skipped with a warning —
//! they are treated as "not present", not as load failures. A deck whose
//! records are all skipped is an error (there is nothing to browse).

use crate::model::{CategoryToken, DataError, Deck, ExportError, ExportRecord, FaqEntry, Slide};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Raw on-disk shape of the deck file.
#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    title: String,
    #[serde(default)]
    faq: Vec<RawEntry>,
    #[serde(default)]
    slides: Vec<Slide>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    question: String,
    #[serde(default)]
    answer: String,
    #[serde(default)]
    category: Option<String>,
}

/// Load and validate a deck from `path`.
pub fn load_deck(path: &Path) -> Result<Deck, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path)?;
    let file: DeckFile = serde_json::from_str(&raw).map_err(|e| DataError::InvalidDeck {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let deck = deck_from_file(file);
    if deck.is_empty() {
        return Err(DataError::EmptyDeck {
            path: path.to_path_buf(),
        });
    }

    info!(
        entries = deck.len(),
        slides = deck.slides().len(),
        title = deck.title(),
        "Deck loaded"
    );
    Ok(deck)
}

/// Assign stable indices, skipping unusable records.
fn deck_from_file(file: DeckFile) -> Deck {
    let mut entries = Vec::with_capacity(file.faq.len());
    for (position, raw) in file.faq.into_iter().enumerate() {
        let category = raw.category.map(CategoryToken::new);
        match FaqEntry::new(entries.len(), raw.question, raw.answer, category) {
            Some(entry) => entries.push(entry),
            None => {
                warn!(position, "Skipping FAQ record with blank question or answer");
            }
        }
    }
    Deck::new(file.title, entries, file.slides)
}

/// Write the export artifact into the given directory.
///
/// Records appear in document order, one per entry, with the category
/// defaulting to `"General"`. Returns the path written.
pub fn export_deck(deck: &Deck, dir: &Path) -> Result<std::path::PathBuf, ExportError> {
    let records: Vec<ExportRecord> = deck.entries().iter().map(ExportRecord::from).collect();
    let body = serde_json::to_string_pretty(&records)?;

    let path = dir.join(deck.export_file_name());
    std::fs::write(&path, body).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), records = records.len(), "Deck exported");
    Ok(path)
}
