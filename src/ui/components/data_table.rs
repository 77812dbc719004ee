//! Interactive data table component.
//!
//! Wraps a [`TableView`] with a search bar, a row cursor and a column cursor,
//! and renders it as a ratatui table with a page footer.
//!
//! Keys:
//! - `j`/`k`, arrows: move the row cursor (`g`/`G`, Home/End: first/last)
//! - `h`/`l`, arrows: move the column cursor
//! - `s`: toggle sort on the column under the cursor
//! - `/`: search (searchable tables only), `Esc` clears it
//! - `n`/`p`, PageDown/PageUp: next/previous page
//! - `+`/`-`: larger/smaller page size
//! - `Enter`: activate the selected row
//!
//! The `h`/`j`/`k`/`l`/`g`/`G` letter keys can be switched off with
//! [`DataTable::with_vim_keys`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tracing::trace;

use crate::table::{TableRow, TableView};
use crate::ui::theme::theme;

use super::search_bar::{highlight_line, render_search_bar, SearchEvent, SearchInput};

/// Page sizes offered by `+`/`-`.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Interactive table over rows of type `T`.
pub struct DataTable<T> {
    view: TableView<T>,
    search: SearchInput,
    /// Cursor position within the displayed page.
    selected: usize,
    /// Index of the column under the column cursor.
    focused_column: usize,
    /// Whether `h`/`j`/`k`/`l`/`g`/`G` act as arrow keys.
    vim_keys: bool,
}

impl<T: TableRow> DataTable<T> {
    /// Create a component over an existing view.
    pub fn new(view: TableView<T>) -> Self {
        Self {
            view,
            search: SearchInput::new(),
            selected: 0,
            focused_column: 0,
            vim_keys: true,
        }
    }

    /// Enable or disable vim-style navigation keys.
    pub fn with_vim_keys(mut self, enabled: bool) -> Self {
        self.vim_keys = enabled;
        self
    }

    /// The underlying view.
    pub fn view(&self) -> &TableView<T> {
        &self.view
    }

    /// Mutable access to the underlying view.
    ///
    /// The row cursor is clamped again on the next key or render.
    pub fn view_mut(&mut self) -> &mut TableView<T> {
        &mut self.view
    }

    /// The search bar state.
    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    /// Whether the search bar is capturing keys.
    pub fn is_searching(&self) -> bool {
        self.search.is_open()
    }

    /// Cursor position within the displayed page.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The row under the cursor.
    pub fn selected_row(&self) -> Option<&T> {
        self.view.page_rows().get(self.selected).copied()
    }

    /// Key of the column under the column cursor.
    pub fn focused_column(&self) -> Option<&'static str> {
        self.view.columns().get(self.focused_column).map(|c| c.key)
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the key was consumed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if self.search.is_open() {
            return self.handle_search_input(key);
        }

        let code = if self.vim_keys && !key.modifiers.contains(KeyModifiers::CONTROL) {
            vim_to_arrow(key.code)
        } else {
            key.code
        };

        let consumed = match (code, key.modifiers) {
            (KeyCode::Down, _) => {
                self.move_selection(1);
                true
            }
            (KeyCode::Up, _) => {
                self.move_selection(-1);
                true
            }
            (KeyCode::Home, _) => {
                self.selected = 0;
                true
            }
            (KeyCode::End, _) => {
                self.selected = self.view.page_len().saturating_sub(1);
                true
            }
            (KeyCode::Left, _) => {
                self.focused_column = self.focused_column.saturating_sub(1);
                true
            }
            (KeyCode::Right, _) => {
                let last = self.view.columns().len().saturating_sub(1);
                self.focused_column = (self.focused_column + 1).min(last);
                true
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) => {
                if let Some(column) = self.focused_column() {
                    if self.view.toggle_sort(column) {
                        self.selected = 0;
                    }
                }
                true
            }
            (KeyCode::Char('/'), KeyModifiers::NONE) if self.view.is_searchable() => {
                self.search.open();
                true
            }
            (KeyCode::Esc, _) if !self.search.is_blank() => {
                self.search.dismiss();
                self.apply_filter();
                true
            }
            (KeyCode::Char('n'), KeyModifiers::NONE) | (KeyCode::PageDown, _) => {
                self.change_page(1);
                true
            }
            (KeyCode::Char('p'), KeyModifiers::NONE) | (KeyCode::PageUp, _) => {
                self.change_page(-1);
                true
            }
            (KeyCode::Char('+'), _) => {
                self.change_page_size(true);
                true
            }
            (KeyCode::Char('-'), _) => {
                self.change_page_size(false);
                true
            }
            (KeyCode::Enter, _) => {
                self.view.activate(self.selected);
                true
            }
            _ => false,
        };

        self.clamp_selection();
        consumed
    }

    fn handle_search_input(&mut self, key: KeyEvent) -> bool {
        match self.search.handle_key(key) {
            Some(SearchEvent::Edited) | Some(SearchEvent::Dismissed) => {
                self.apply_filter();
                true
            }
            Some(SearchEvent::Kept) => true,
            // Everything else is swallowed while typing.
            None => true,
        }
    }

    fn apply_filter(&mut self) {
        self.view.set_filter_text(self.search.text());
        self.selected = 0;
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.view.page_len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    fn change_page(&mut self, delta: isize) {
        let Some(info) = self.view.page_info() else {
            return;
        };
        let target = info.page.saturating_add_signed(delta);
        if target < 1 || target > info.page_count || target == info.page {
            return;
        }
        trace!(from = info.page, to = target, "Changing page");
        self.view.request_page(target);
        self.selected = 0;
    }

    fn change_page_size(&mut self, larger: bool) {
        let Some(info) = self.view.page_info() else {
            return;
        };
        let next = if larger {
            PAGE_SIZE_OPTIONS.iter().copied().find(|&s| s > info.page_size)
        } else {
            PAGE_SIZE_OPTIONS.iter().rev().copied().find(|&s| s < info.page_size)
        };
        if let Some(size) = next {
            self.view.request_page_size(size);
            self.selected = 0;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.view.page_len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Render the component.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        self.clamp_selection();

        let show_search = self.search.is_open() || !self.search.is_blank();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(u16::from(show_search)),
            ])
            .split(area);

        self.render_table(frame, chunks[0], focused);
        self.render_footer(frame, chunks[1]);
        if show_search {
            render_search_bar(frame, chunks[2], &self.search, self.view.derived_len());
        }
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let sort = self.view.sort();
        let query = if self.view.is_searchable() {
            self.view.filter_text()
        } else {
            ""
        };

        let header_cells = self.view.columns().iter().enumerate().map(|(i, column)| {
            let mut label = column.header.clone();
            if sort.is_active(column.key) {
                label.push(' ');
                label.push_str(sort.direction.arrow());
            }
            let mut style = t.header_style();
            if focused && i == self.focused_column {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Cell::from(label).style(style)
        });
        let header = Row::new(header_cells).height(1);

        let rows = self.view.page_rows().into_iter().map(|row| {
            let cells = self
                .view
                .columns()
                .iter()
                .map(|column| Cell::from(highlight_line(column.render_cell(row), query)));
            Row::new(cells)
        });

        let widths: Vec<Constraint> = self.view.columns().iter().map(|c| c.width).collect();

        let border_style = if focused {
            Style::default().fg(t.border_focused)
        } else {
            t.muted_style()
        };
        let title = match self.view.title() {
            Some(title) => format!(" {} ({}) ", title, self.view.derived_len()),
            None => format!(" {} rows ", self.view.derived_len()),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(t.selected_style())
            .highlight_symbol("▶ ");

        if self.view.page_len() == 0 {
            let message = if self.view.filter_text().is_empty() {
                "No rows"
            } else {
                "No rows match the search"
            };
            frame.render_widget(table, area);
            let inner = Rect {
                x: area.x + 2,
                y: area.y + 2,
                width: area.width.saturating_sub(4),
                height: 1.min(area.height.saturating_sub(3)),
            };
            frame.render_widget(Paragraph::new(message).style(t.muted_style()), inner);
            return;
        }

        let mut state = TableState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut spans = Vec::new();
        if let Some(info) = self.view.page_info() {
            spans.push(Span::styled(info.summary(), t.muted_style()));
            spans.push(Span::raw("  "));
            let prev = if info.has_previous() { "‹ prev" } else { "     " };
            let next = if info.has_next() { "next ›" } else { "" };
            spans.push(Span::styled(prev, t.muted_style()));
            spans.push(Span::raw(format!(" Page {} of {} ", info.page, info.page_count)));
            spans.push(Span::styled(next, t.muted_style()));
            spans.push(Span::styled(
                format!("  {} per page", info.page_size),
                t.muted_style(),
            ));
        } else {
            spans.push(Span::styled(
                format!("{} of {} rows", self.view.derived_len(), self.view.rows().len()),
                t.muted_style(),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Map vim navigation letters onto the equivalent arrow keys.
fn vim_to_arrow(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char('j') => KeyCode::Down,
        KeyCode::Char('k') => KeyCode::Up,
        KeyCode::Char('h') => KeyCode::Left,
        KeyCode::Char('l') => KeyCode::Right,
        KeyCode::Char('g') => KeyCode::Home,
        KeyCode::Char('G') => KeyCode::End,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::table::{CellValue, Column, RowId, SortDirection, TableOptions};

    #[derive(Debug, Clone)]
    struct Item {
        id: i64,
        name: String,
    }

    impl TableRow for Item {
        fn id(&self) -> RowId {
            RowId::Int(self.id)
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "id" => CellValue::Int(self.id),
                "name" => self.name.as_str().into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn items(n: i64) -> Vec<Item> {
        (1..=n)
            .map(|id| Item {
                id,
                name: format!("item {}", id),
            })
            .collect()
    }

    fn columns() -> Vec<Column<Item>> {
        vec![
            Column::new("id", "ID").sortable(),
            Column::new("name", "Name").sortable(),
        ]
    }

    fn table(n: i64, options: TableOptions<Item>) -> DataTable<Item> {
        DataTable::new(TableView::new(items(n), columns(), options).unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(table: &mut DataTable<Item>, text: &str) {
        for c in text.chars() {
            table.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut table = table(3, TableOptions::default());
        table.handle_input(key(KeyCode::Char('k')));
        assert_eq!(table.selected(), 0);
        for _ in 0..5 {
            table.handle_input(key(KeyCode::Char('j')));
        }
        assert_eq!(table.selected(), 2);
        table.handle_input(key(KeyCode::Char('g')));
        assert_eq!(table.selected(), 0);
        table.handle_input(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(table.selected(), 2);
    }

    #[test]
    fn test_sort_on_focused_column() {
        let mut table = table(3, TableOptions::default());
        table.handle_input(key(KeyCode::Char('s')));
        assert_eq!(table.view().sort().column, Some("id"));

        table.handle_input(key(KeyCode::Char('s')));
        assert_eq!(table.view().sort().direction, SortDirection::Descending);
        assert_eq!(table.selected_row().map(|r| r.id), Some(3));

        table.handle_input(key(KeyCode::Char('l')));
        assert_eq!(table.focused_column(), Some("name"));
        table.handle_input(key(KeyCode::Char('l')));
        assert_eq!(table.focused_column(), Some("name"));
        table.handle_input(key(KeyCode::Char('s')));
        assert_eq!(table.view().sort().column, Some("name"));
        assert_eq!(table.view().sort().direction, SortDirection::Ascending);
    }

    #[test]
    fn test_search_filters_while_typing() {
        let mut table = table(12, TableOptions::default().searchable());
        table.handle_input(key(KeyCode::Char('/')));
        assert!(table.is_searching());

        type_text(&mut table, "1");
        // ids and names 1, 10, 11, 12
        assert_eq!(table.view().derived_len(), 4);

        type_text(&mut table, "1");
        assert_eq!(table.view().derived_len(), 1);

        table.handle_input(key(KeyCode::Backspace));
        assert_eq!(table.view().derived_len(), 4);

        table.handle_input(key(KeyCode::Enter));
        assert!(!table.is_searching());
        assert_eq!(table.view().filter_text(), "1");

        // 'j' navigates again once search mode is left
        table.handle_input(key(KeyCode::Char('j')));
        assert_eq!(table.selected(), 1);

        table.handle_input(key(KeyCode::Esc));
        assert_eq!(table.view().filter_text(), "");
        assert_eq!(table.view().derived_len(), 12);
    }

    #[test]
    fn test_search_disabled_when_not_searchable() {
        let mut table = table(3, TableOptions::default());
        assert!(!table.handle_input(key(KeyCode::Char('/'))));
        assert!(!table.is_searching());
    }

    #[test]
    fn test_paging_keys() {
        let mut table = table(12, TableOptions::default().page_size(5));
        table.handle_input(key(KeyCode::Char('j')));
        table.handle_input(key(KeyCode::Char('n')));
        assert_eq!(table.view().state().page, 2);
        assert_eq!(table.selected(), 0);

        table.handle_input(key(KeyCode::Char('n')));
        table.handle_input(key(KeyCode::Char('n')));
        assert_eq!(table.view().state().page, 3);
        assert_eq!(table.view().page_len(), 2);

        table.handle_input(key(KeyCode::PageUp));
        assert_eq!(table.view().state().page, 2);
    }

    #[test]
    fn test_page_size_keys() {
        let mut table = table(12, TableOptions::default().page_size(5));
        table.handle_input(key(KeyCode::Char('+')));
        assert_eq!(table.view().page_info().unwrap().page_size, 10);
        table.handle_input(key(KeyCode::Char('+')));
        table.handle_input(key(KeyCode::Char('+')));
        table.handle_input(key(KeyCode::Char('+')));
        assert_eq!(table.view().page_info().unwrap().page_size, 50);
        table.handle_input(key(KeyCode::Char('-')));
        assert_eq!(table.view().page_info().unwrap().page_size, 20);
    }

    #[test]
    fn test_paging_keys_ignored_without_pagination() {
        let mut table = table(12, TableOptions::default());
        table.handle_input(key(KeyCode::Char('n')));
        table.handle_input(key(KeyCode::Char('+')));
        assert_eq!(table.view().page_info(), None);
        assert_eq!(table.view().page_len(), 12);
    }

    #[test]
    fn test_enter_activates_selected_row() {
        let activated = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&activated);
        let mut table = table(
            12,
            TableOptions::default()
                .page_size(5)
                .on_row_activate(move |row: &Item| sink.borrow_mut().push(row.id)),
        );
        table.handle_input(key(KeyCode::Char('n')));
        table.handle_input(key(KeyCode::Char('j')));
        table.handle_input(key(KeyCode::Enter));
        assert_eq!(*activated.borrow(), vec![7]);
    }

    #[test]
    fn test_selection_clamped_when_filter_shrinks_page() {
        let mut table = table(12, TableOptions::default().searchable());
        table.handle_input(key(KeyCode::Char('G')));
        assert_eq!(table.selected(), 11);
        table.handle_input(key(KeyCode::Char('/')));
        type_text(&mut table, "item 1");
        assert_eq!(table.selected(), 0);
        assert_eq!(table.selected_row().map(|r| r.id), Some(1));
    }

    #[test]
    fn test_vim_keys_disabled() {
        let mut table = table(3, TableOptions::default()).with_vim_keys(false);
        assert!(!table.handle_input(key(KeyCode::Char('j'))));
        assert_eq!(table.selected(), 0);
        table.handle_input(key(KeyCode::Down));
        assert_eq!(table.selected(), 1);
    }

    #[test]
    fn test_unknown_key_not_consumed() {
        let mut table = table(3, TableOptions::default());
        assert!(!table.handle_input(key(KeyCode::Char('q'))));
    }
}
