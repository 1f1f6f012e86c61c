//! Programming Club TUI (clubtui)
//!
//! Terminal browser for a club's FAQ deck: searchable accordion,
//! membership and contact forms, and an announcements slideshow.
//!
//! Pure Core / Impure Shell architecture: all state transitions live in
//! `state` and are testable without a terminal; `view` owns rendering
//! and the event loop.

pub mod analytics;
pub mod config;
pub mod data;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
