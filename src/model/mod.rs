//! Domain model (pure data).

pub mod error;
pub mod faq;
pub mod key_action;
pub mod slide;
pub mod validate;

pub use error::{AppError, DataError, ExportError};
pub use faq::{
    CategoryToken, Deck, ExportRecord, FaqEntry, FaqStats, ALL_CATEGORIES, DEFAULT_CATEGORY,
};
pub use key_action::KeyAction;
pub use slide::Slide;
