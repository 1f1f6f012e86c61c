//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod faq_pane;
mod form_pane;
mod help;
mod layout;
mod search_input;
mod slideshow_pane;
mod styles;

pub use faq_pane::{build_faq_listing, FaqListing};
pub use help::render_help_overlay;
pub use layout::{render_layout, ViewGeometry};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, FaqStyles};

use crate::analytics::{AnalyticsSink, TracingSink};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::data;
use crate::model::{AppError, Deck, ExportError, KeyAction};
use crate::state::{search_input_handler, AppState, Screen, SearchState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// Timer interval driving debounce, slideshow, and form timers.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Export failure
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Configuration carried from CLI/config resolution into the TUI.
///
/// Separation of concerns: CLI parsing happens in main.rs (impure),
/// domain state lives in `AppState` (pure), this struct bridges the gap.
pub struct CliArgs {
    /// Initial search term, applied before the first render.
    pub search: Option<String>,
    /// Initial category filter.
    pub category: Option<String>,
    /// Disable colored output.
    pub no_color: bool,
    /// Slideshow auto-advance interval in seconds.
    pub slide_interval_secs: u64,
    /// Directory the export artifact is written to.
    pub export_dir: PathBuf,
}

impl CliArgs {
    /// Combine the resolved configuration with the CLI-only arguments.
    pub fn from_config(
        config: &ResolvedConfig,
        search: Option<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            search,
            category,
            no_color: config.no_color,
            slide_interval_secs: config.slide_interval_secs,
            export_dir: config.export_dir.clone(),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    key_bindings: KeyBindings,
    styles: FaqStyles,
    analytics: Box<dyn AnalyticsSink>,
    export_dir: PathBuf,
    /// Geometry of the last render (for mouse hit-testing)
    geometry: ViewGeometry,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse
    /// capture.
    pub fn new(deck: Deck, args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        stdout.execute(crossterm::event::EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, deck, args))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app over an already-created terminal.
    ///
    /// Used directly by tests with `TestBackend`; `new` wraps this for
    /// the real terminal.
    pub fn with_terminal(terminal: Terminal<B>, deck: Deck, args: CliArgs) -> Self {
        let interval = Duration::from_secs(args.slide_interval_secs.max(1));
        let mut state = AppState::new(deck, interval, Instant::now());

        if let Some(category) = args.category {
            state.filter_by_category(crate::model::CategoryToken::new(category));
        }
        if let Some(term) = args.search {
            state.run_search(&term);
        }

        Self {
            terminal,
            state,
            key_bindings: KeyBindings::default(),
            styles: FaqStyles::new(ColorConfig::from_env_and_args(args.no_color)),
            analytics: Box::new(TracingSink),
            export_dir: args.export_dir,
            geometry: ViewGeometry::default(),
        }
    }

    /// The application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access to the application state.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Mutable access to the terminal, for test assertions.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C).
    /// Event-driven: redraws on user input and on timer events that
    /// changed visible state; idle polling consumes minimal CPU.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Initial render - ensures screen has content immediately
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(()); // User quit
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse, Instant::now());
                        self.draw()?;
                    }
                    Event::FocusLost => {
                        if let Some(show) = &mut self.state.slideshow {
                            show.set_hidden(true, Instant::now());
                        }
                        self.draw()?;
                    }
                    Event::FocusGained => {
                        if let Some(show) = &mut self.state.slideshow {
                            show.set_hidden(false, Instant::now());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        // Relayout happens on draw; geometry is rebuilt
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.state.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }

    /// Render the current state and capture geometry for hit-testing.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &mut self.state;
        let styles = &self.styles;
        let mut geometry = ViewGeometry::default();
        self.terminal.draw(|frame| {
            geometry = render_layout(frame, state, styles);
            if state.help_visible {
                render_help_overlay(frame);
            }
        })?;
        self.geometry = geometry;
        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay captures keys while visible
        if self.state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        // Text entry contexts consume printable keys before binding dispatch
        if self.state.screen == Screen::Faq {
            if let SearchState::Typing { .. } = &self.state.search {
                if self.handle_search_typing_key(key, now) {
                    return false;
                }
            }
        }
        if matches!(self.state.screen, Screen::Membership | Screen::Contact)
            && self.handle_form_key(key, now)
        {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false; // Unknown key, ignore
        };
        self.dispatch(action, now)
    }

    /// Key handling while the search input is active.
    /// Returns true when the key was consumed.
    fn handle_search_typing_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let consumed = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.search =
                    search_input_handler::handle_char_input(self.state.search.clone(), ch);
                self.schedule_from_typing(now);
                true
            }
            KeyCode::Backspace => {
                self.state.search =
                    search_input_handler::handle_backspace(self.state.search.clone());
                self.schedule_from_typing(now);
                true
            }
            KeyCode::Left => {
                self.state.search =
                    search_input_handler::handle_cursor_left(self.state.search.clone());
                true
            }
            KeyCode::Right => {
                self.state.search =
                    search_input_handler::handle_cursor_right(self.state.search.clone());
                true
            }
            KeyCode::Enter => {
                // Submit immediately, skipping the remaining quiet period
                if let SearchState::Typing { query, .. } = self.state.search.clone() {
                    self.state.run_search(&query);
                }
                true
            }
            KeyCode::Esc => {
                self.state.clear_search();
                true
            }
            _ => false,
        };
        consumed
    }

    /// Restart the debounce for the query currently being typed.
    fn schedule_from_typing(&mut self, now: Instant) {
        if let SearchState::Typing { query, .. } = &self.state.search {
            self.state.schedule_search(query.clone(), now);
        }
    }

    /// Key handling on form screens. Returns true when consumed.
    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let form = match self.state.screen {
            Screen::Membership => &mut self.state.membership,
            Screen::Contact => &mut self.state.contact,
            _ => return false,
        };
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.submit(now);
                true
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(ch);
                true
            }
            KeyCode::Backspace => {
                form.backspace();
                true
            }
            KeyCode::Tab | KeyCode::Down => {
                form.focus_next();
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focus_prev();
                true
            }
            KeyCode::Enter => {
                form.submit(now);
                true
            }
            KeyCode::Esc => {
                self.state.screen = Screen::Faq;
                true
            }
            _ => false,
        }
    }

    /// Dispatch a bound action. Returns true if app should quit.
    fn dispatch(&mut self, action: KeyAction, now: Instant) -> bool {
        let on_faq = self.state.screen == Screen::Faq;
        match action {
            KeyAction::SelectNext if on_faq => self.state.select_next(),
            KeyAction::SelectPrev if on_faq => self.state.select_prev(),
            KeyAction::ToggleEntry if on_faq => {
                if let Some(event) = self.state.toggle_selected(now) {
                    self.analytics.report(&event);
                }
            }
            KeyAction::ExpandAll if on_faq => self.state.expand_all(),
            KeyAction::CollapseAll if on_faq => self.state.collapse_all(),
            KeyAction::SelectNext
            | KeyAction::SelectPrev
            | KeyAction::ToggleEntry
            | KeyAction::ExpandAll
            | KeyAction::CollapseAll => {}
            KeyAction::StartSearch => {
                self.state.screen = Screen::Faq;
                self.state.search =
                    search_input_handler::activate_search_input(self.state.search.clone());
            }
            KeyAction::CancelSearch | KeyAction::ClearSearch => self.state.clear_search(),
            KeyAction::NextCategory => self.state.cycle_category(true),
            KeyAction::PrevCategory => self.state.cycle_category(false),
            KeyAction::ScreenFaq => self.state.screen = Screen::Faq,
            KeyAction::ScreenMembership => self.state.screen = Screen::Membership,
            KeyAction::ScreenContact => self.state.screen = Screen::Contact,
            KeyAction::ScreenSlides => self.state.screen = Screen::Slides,
            KeyAction::NextField | KeyAction::PrevField | KeyAction::SubmitForm => {
                // Only meaningful on form screens, which consume keys
                // before dispatch
            }
            KeyAction::NextSlide => {
                if self.state.screen == Screen::Slides {
                    if let Some(show) = &mut self.state.slideshow {
                        show.next_slide();
                    }
                }
            }
            KeyAction::PrevSlide => {
                if self.state.screen == Screen::Slides {
                    if let Some(show) = &mut self.state.slideshow {
                        show.prev_slide();
                    }
                }
            }
            KeyAction::ExportDeck => self.export(),
            KeyAction::Help => self.state.help_visible = !self.state.help_visible,
            KeyAction::Quit => return true,
        }
        false
    }

    /// Write the export artifact and surface the outcome on the status
    /// line.
    fn export(&mut self) {
        match data::export_deck(self.state.deck(), &self.export_dir) {
            Ok(path) => {
                self.state.status = Some(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                warn!(error = %e, "Export failed");
                self.state.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    /// Handle a mouse event: hover tracking for the slideshow, clicks
    /// on FAQ entries, position dots, and slideshow halves.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(area) = self.geometry.slideshow_area {
                    let inside = contains(area, mouse.column, mouse.row);
                    if let Some(show) = &mut self.state.slideshow {
                        show.set_hovered(inside, now);
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, now);
            }
            MouseEventKind::ScrollUp => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_sub(1);
            }
            MouseEventKind::ScrollDown => {
                self.state.scroll_offset = self.state.scroll_offset.saturating_add(1);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        if let (Some(area), Some(listing)) =
            (self.geometry.faq_list_area, &self.geometry.faq_listing)
        {
            if contains(area, column, row) {
                let line = (row - area.y) as usize + self.state.scroll_offset;
                if let Some(index) = listing.entry_at_line(line) {
                    debug!(index, "FAQ entry clicked");
                    self.state.selected = index;
                    if let Some(event) = self.state.toggle_selected(now) {
                        self.analytics.report(&event);
                    }
                }
                return;
            }
        }

        if let Some(area) = self.geometry.slideshow_area {
            if contains(area, column, row) {
                if let Some(show) = &mut self.state.slideshow {
                    if let Some(index) =
                        slideshow_pane::dot_at(area, show.len(), column, row)
                    {
                        // A position dot jumps straight to that slide
                        show.go_to_slide(index);
                    } else if column < area.x + area.width / 2 {
                        show.prev_slide();
                    } else {
                        show.next_slide();
                    }
                }
            }
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

/// Initialize and run the TUI application with a loaded deck.
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on
/// exit. Logging must be initialized by the caller.
pub fn run_with_deck(deck: Deck, args: CliArgs) -> Result<(), TuiError> {
    let mut app = TuiApp::new(deck, args)?;
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, focus change, and leaves alternate
/// screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(crossterm::event::DisableFocusChange)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
