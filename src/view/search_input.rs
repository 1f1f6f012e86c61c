//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
/// Renders the search bar while typing or while a search is active.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
}

impl<'a> SearchInput<'a> {
    /// Widget over the current search state.
    pub fn new(search_state: &'a SearchState) -> Self {
        Self { search_state }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search_state {
            SearchState::Typing { query, cursor } => {
                // Split query into before/cursor/after for the block cursor
                let before: String = query.chars().take(*cursor).collect();
                let after_chars: Vec<char> = query.chars().skip(*cursor).collect();

                let (cursor_char, after_text) = match after_chars.split_first() {
                    Some((ch, rest)) => (ch.to_string(), rest.iter().collect::<String>()),
                    None => (" ".to_string(), String::new()),
                };

                let spans = vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(after_text),
                ];

                let paragraph = Paragraph::new(Line::from(spans)).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Search FAQs")
                        .style(Style::default().bg(Color::DarkGray)),
                );
                paragraph.render(area, buf);
            }
            SearchState::Active { query, .. } => {
                let paragraph = Paragraph::new(Line::from(query.as_str().to_string())).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Search (active)")
                        .style(Style::default().bg(Color::Blue)),
                );
                paragraph.render(area, buf);
            }
            SearchState::Inactive => {
                // No search input to show
            }
        }
    }
}
