//! Context-sensitive key hints.

/// The UI context that determines which shortcuts apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Browsing a table.
    Table,
    /// Typing into the search bar.
    Search,
    /// Viewing the detail panel of a row.
    Detail,
}

/// Short hint text for the help bar.
///
/// Keys are wrapped in brackets so the help bar can style them.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Table => {
            "[j/k] move  [h/l] column  [s] sort  [/] search  [n/p] page  [+/-] size  [Enter] open  [Tab] next tab  [q] quit"
        }
        KeyContext::Search => "[type] filter  [Enter] keep  [Esc] clear  [Ctrl+w] word  [Ctrl+u] erase",
        KeyContext::Detail => "[Esc] close  [q] quit",
    }
}
