//! Announcement slide domain type.

use serde::{Deserialize, Serialize};

/// One slide of the announcements slideshow.
///
/// Slides are a fixed sequence loaded with the deck; an empty sequence
/// disables the slideshow screen entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide headline.
    pub title: String,
    /// Slide body text; may be empty.
    #[serde(default)]
    pub body: String,
}

impl Slide {
    /// Build a slide from its parts.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
