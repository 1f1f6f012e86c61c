//! FAQ accordion pane.
//!
//! Builds the visible entry list as styled lines: question headers with
//! open/closed markers, wrapped answer text under open entries, and
//! search-match highlighting. Line building is pure and separately
//! testable; only the final paragraph render touches the frame.

use crate::state::{AppState, EntryHighlights, MatchSpan, SearchState};
use crate::view::constants::ANSWER_INDENT;
use crate::view::styles::FaqStyles;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Marker shown before a closed question.
const CLOSED_MARKER: &str = "▸ ";
/// Marker shown before an open question.
const OPEN_MARKER: &str = "▾ ";

// ===== FaqListing =====

/// The rendered line model of the FAQ list.
///
/// `entry_rows` maps each deck index to its line range within `lines`,
/// `None` for hidden entries. Used for click hit-testing and
/// scroll-into-view.
pub struct FaqListing {
    /// Styled lines in render order.
    pub lines: Vec<Line<'static>>,
    /// Per deck index: `(start, end)` line range, `None` when hidden.
    pub entry_rows: Vec<Option<(usize, usize)>>,
}

impl FaqListing {
    /// Deck index of the entry occupying the given line, if any.
    pub fn entry_at_line(&self, line: usize) -> Option<usize> {
        self.entry_rows
            .iter()
            .position(|range| range.is_some_and(|(start, end)| (start..end).contains(&line)))
    }
}

/// Build the line model for the current state at the given text width.
pub fn build_faq_listing(state: &AppState, styles: &FaqStyles, width: u16) -> FaqListing {
    let empty = EntryHighlights::default();
    let highlights = match &state.search {
        SearchState::Active { outcome, .. } => Some(&outcome.highlights),
        _ => None,
    };

    let mut lines = Vec::new();
    let mut entry_rows = vec![None; state.deck().len()];

    for entry in state.deck().entries() {
        let index = entry.index();
        if !state.visibility.is_visible(index) {
            continue;
        }
        let start = lines.len();
        let entry_highlights = highlights
            .and_then(|h| h.get(index))
            .unwrap_or(&empty);

        let open = state.accordion.is_open(index);
        let marker = if open { OPEN_MARKER } else { CLOSED_MARKER };
        let question_style = if open {
            styles.question_open
        } else {
            styles.question
        };

        let mut spans = vec![Span::styled(marker.to_string(), question_style)];
        spans.extend(highlighted_spans(
            entry.question(),
            &entry_highlights.question,
            question_style,
            styles.highlight,
        ));
        let mut header = Line::from(spans);
        if index == state.selected {
            header = header.style(styles.selected);
        }
        lines.push(header);

        if open {
            let answer_spans = highlighted_spans(
                entry.answer(),
                &entry_highlights.answer,
                styles.answer,
                styles.highlight,
            );
            let answer_width = width.saturating_sub(ANSWER_INDENT).max(1);
            for wrapped in wrap_spans(answer_spans, answer_width as usize) {
                let mut line_spans = vec![Span::raw(" ".repeat(ANSWER_INDENT as usize))];
                line_spans.extend(wrapped);
                lines.push(Line::from(line_spans));
            }
        }

        lines.push(Line::default());
        entry_rows[index] = Some((start, lines.len()));
    }

    FaqListing { lines, entry_rows }
}

/// Split `text` into styled spans, applying the highlight style over the
/// given byte ranges and the base style elsewhere.
///
/// Spans are assumed sorted and non-overlapping, as produced by search
/// execution.
pub fn highlighted_spans(
    text: &str,
    matches: &[MatchSpan],
    base: Style,
    highlight: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut pos = 0;
    for m in matches {
        if m.start > pos {
            spans.push(Span::styled(text[pos..m.start].to_string(), base));
        }
        spans.push(Span::styled(text[m.start..m.end].to_string(), highlight));
        pos = m.end;
    }
    if pos < text.len() {
        spans.push(Span::styled(text[pos..].to_string(), base));
    }
    spans
}

/// Greedy character wrap of styled spans into lines of at most `width`
/// display columns. Styles survive wrapping since spans are split, not
/// merged.
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Vec<Span<'static>>> {
    let mut result: Vec<Vec<Span<'static>>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    for span in spans {
        let style = span.style;
        let mut chunk = String::new();
        let mut chunk_width = 0usize;
        for ch in span.content.chars() {
            let cw = ch.width().unwrap_or(0);
            if current_width + chunk_width + cw > width {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                result.push(std::mem::take(&mut current));
                current_width = 0;
                chunk_width = 0;
            }
            chunk.push(ch);
            chunk_width += cw;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, style));
            current_width += chunk_width;
        }
    }

    if !current.is_empty() || result.is_empty() {
        result.push(current);
    }
    result
}

/// Scroll offset that brings the entry's lines into the viewport,
/// scrolling as little as possible.
pub fn scroll_to_entry(listing: &FaqListing, offset: usize, viewport: usize, index: usize) -> usize {
    let Some(Some((start, end))) = listing.entry_rows.get(index) else {
        return offset;
    };
    if *start < offset {
        return *start;
    }
    let visible_end = offset + viewport;
    if *end > visible_end {
        // Show as much of the entry as fits, keeping its header visible
        return (*end).saturating_sub(viewport).min(*start);
    }
    offset
}

/// Render the FAQ list into the given area.
pub fn render_faq_list(frame: &mut Frame, area: Rect, listing: &FaqListing, scroll: usize) {
    let paragraph = Paragraph::new(listing.lines.clone())
        .block(Block::default().borders(Borders::ALL).title("FAQ"))
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "faq_pane_tests.rs"]
mod tests;
