//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `config::KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // List navigation
    /// Move selection up one card. Default: k/↑
    SelectPrev,
    /// Move selection down one card. Default: j/↓
    SelectNext,
    /// Toggle expand/collapse of the selected card. Default: Enter/Space
    ToggleExpand,

    // Pagination
    /// Go to the previous page. Disabled on page 1. Default: [/←
    PrevPage,
    /// Go to the next page. Disabled on the last page. Default: ]/→
    NextPage,
    /// Jump to the first page. Default: g
    FirstPage,
    /// Jump to the last page. Default: G
    LastPage,
    /// Cycle items-per-page through the preset choices; resets to page 1.
    /// Default: L
    CycleLimit,

    // Filtering
    /// Start typing a search term. Default: /
    StartSearch,
    /// Switch focus between the card list and the facet sidebar. Default: Tab
    CycleFocus,
    /// Toggle the highlighted facet (category or tag). Default: Space (facets)
    ToggleFacet,
    /// Clear search term, category and tags at once. Default: x
    ClearFilters,

    // Admin tabs
    /// Switch to the Q&A tab. Default: 1
    TabQna,
    /// Switch to the Notes tab (admin only). Default: 2
    TabNotes,
    /// Switch to the Accounts tab (admin only). Default: 3
    TabAccounts,

    // CRUD
    /// Open the create form for the active tab. Default: n
    New,
    /// Open the edit form for the selected Q&A record. Default: e
    Edit,
    /// Ask to delete the selected item. Default: d
    Delete,
    /// Refetch the active tab's data. Default: r
    Refresh,

    // Session
    /// Open the login screen (browse mode). Default: a
    Login,
    /// Log out and return to browse mode. Default: Q
    Logout,

    // Application
    /// Show the keybinding help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+C
    Quit,
}
