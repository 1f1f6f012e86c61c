//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `crate::config::KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Entry selection (FAQ screen)
    /// Move selection to the next FAQ entry. Default: j/↓
    SelectNext,
    /// Move selection to the previous FAQ entry. Default: k/↑
    SelectPrev,
    /// Toggle the selected entry open/closed. Default: Enter/Space
    ToggleEntry,
    /// Open every entry. Default: E
    ExpandAll,
    /// Close every entry. Default: C
    CollapseAll,

    // Search
    /// Activate the search input. Default: //Ctrl+f
    StartSearch,
    /// Cancel search input and clear results. Default: Esc
    CancelSearch,
    /// Explicitly clear an active search. Default: x
    ClearSearch,

    // Category filter
    /// Select the next category control (wraps, `all` first). Default: ]
    NextCategory,
    /// Select the previous category control. Default: [
    PrevCategory,

    // Screens
    /// Switch to the FAQ screen. Default: 1
    ScreenFaq,
    /// Switch to the membership form screen. Default: 2
    ScreenMembership,
    /// Switch to the contact form screen. Default: 3
    ScreenContact,
    /// Switch to the announcements slideshow. Default: 4
    ScreenSlides,

    // Forms
    /// Move focus to the next form field (blur-validates the current one). Default: Tab/↓
    NextField,
    /// Move focus to the previous form field. Default: Shift+Tab/↑
    PrevField,
    /// Submit the focused form. Default: Enter/Ctrl+s
    SubmitForm,

    // Slideshow
    /// Advance one slide. Default: →/l
    NextSlide,
    /// Go back one slide. Default: ←/h
    PrevSlide,

    // Application
    /// Write the export artifact. Default: e
    ExportDeck,
    /// Show the keyboard help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
