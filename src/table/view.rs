//! The tabular view: rows, columns and per-instance view state.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use super::column::{Column, TableRow};
use super::derive::derive_indices;
use super::pagination::{clamp_page, page_range, ExternalPagination, PageInfo};
use super::sort::SortState;
use super::value::RowId;
use super::TableError;

/// Callback receiving an activated row.
pub type RowHandler<T> = Box<dyn FnMut(&T)>;

/// Options for a [`TableView`].
pub struct TableOptions<T> {
    /// Optional title shown above the table.
    pub title: Option<String>,
    /// Whether the filter text is applied.
    pub searchable: bool,
    /// Rows per page for local pagination. `None` shows every row.
    pub page_size: Option<usize>,
    /// Caller-owned pagination. Disables local slicing when set.
    pub pagination: Option<ExternalPagination>,
    /// Called when a row is activated.
    pub on_row_activate: Option<RowHandler<T>>,
}

impl<T> Default for TableOptions<T> {
    fn default() -> Self {
        Self {
            title: None,
            searchable: false,
            page_size: None,
            pagination: None,
            on_row_activate: None,
        }
    }
}

impl<T> TableOptions<T> {
    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable free-text filtering.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Paginate locally with the given page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Use caller-owned pagination.
    pub fn external_pagination(mut self, pagination: ExternalPagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Set the row activation handler.
    pub fn on_row_activate<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        self.on_row_activate = Some(Box::new(handler));
        self
    }
}

/// Filter, sort and local page state of one view instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Active filter text.
    pub filter: String,
    /// Active sort.
    pub sort: SortState,
    /// 1-based local page.
    pub page: usize,
}

/// A filtered, sorted and optionally paginated view over a set of rows.
///
/// The rows are never reordered. The view keeps an index projection that is
/// recomputed after every state change.
pub struct TableView<T> {
    rows: Vec<T>,
    columns: Vec<Column<T>>,
    options: TableOptions<T>,
    state: ViewState,
    /// Filtered and sorted row indices, before pagination.
    derived: Vec<usize>,
}

impl<T: TableRow> TableView<T> {
    /// Create a view over `rows`.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if there are no columns, if two columns share
    /// a key, or if a page size is zero.
    pub fn new(
        rows: Vec<T>,
        columns: Vec<Column<T>>,
        options: TableOptions<T>,
    ) -> Result<Self, TableError> {
        validate_columns(&columns)?;
        if options.page_size == Some(0)
            || options.pagination.as_ref().is_some_and(|p| p.page_size == 0)
        {
            return Err(TableError::InvalidPageSize);
        }

        let mut view = Self {
            rows,
            columns,
            options,
            state: ViewState {
                page: 1,
                ..ViewState::default()
            },
            derived: Vec::new(),
        };
        view.warn_duplicate_ids();
        view.refresh();
        Ok(view)
    }

    /// All rows in input order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Replace the rows, keeping filter and sort. Resets the local page.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.state.page = 1;
        self.warn_duplicate_ids();
        self.refresh();
    }

    /// Column descriptors in display order.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Look up a column by key.
    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// The table title.
    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    /// Whether filtering is enabled.
    pub fn is_searchable(&self) -> bool {
        self.options.searchable
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The active filter text.
    pub fn filter_text(&self) -> &str {
        &self.state.filter
    }

    /// Replace the filter text and recompute the displayed rows.
    ///
    /// An empty string clears the filter. The text is kept but not applied
    /// when the view is not searchable.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.state.filter {
            return;
        }
        trace!(filter = %text, "Filter text changed");
        self.state.filter = text;
        self.state.page = 1;
        self.refresh();
    }

    /// The active sort.
    pub fn sort(&self) -> &SortState {
        &self.state.sort
    }

    /// Toggle sorting on the column `key`.
    ///
    /// Returns `false` without changing anything if the column does not exist
    /// or is not sortable.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.key == key) else {
            debug!(key, "Ignoring sort on unknown column");
            return false;
        };
        if !column.sortable {
            trace!(key, "Ignoring sort on unsortable column");
            return false;
        }

        self.state.sort.toggle(column.key);
        debug!(
            key,
            direction = ?self.state.sort.direction,
            "Sort changed"
        );
        self.state.page = 1;
        self.refresh();
        true
    }

    /// Request a page.
    ///
    /// With external pagination this only calls the caller's handler. With
    /// local pagination the page is clamped into range and displayed.
    pub fn request_page(&mut self, page: usize) {
        if let Some(pagination) = self.options.pagination.as_mut() {
            debug!(page, "Relaying page request");
            pagination.request_page(page);
            return;
        }
        if let Some(page_size) = self.options.page_size {
            self.state.page = clamp_page(page, self.derived.len(), page_size);
            trace!(page = self.state.page, "Local page changed");
        }
    }

    /// Request a page size.
    ///
    /// With external pagination this only calls the caller's handler. With
    /// local pagination the size is applied and the view returns to page 1.
    /// A size of zero is ignored.
    pub fn request_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            warn!("Ignoring request for page size 0");
            return;
        }
        if let Some(pagination) = self.options.pagination.as_mut() {
            debug!(page_size, "Relaying page size request");
            pagination.request_page_size(page_size);
            return;
        }
        self.options.page_size = Some(page_size);
        self.state.page = 1;
        trace!(page_size, "Local page size changed");
    }

    /// Record the page loaded by the caller's data source.
    ///
    /// Has no effect without external pagination.
    pub fn set_external_page(&mut self, page: usize, page_size: usize, total: usize) {
        if let Some(pagination) = self.options.pagination.as_mut() {
            pagination.page = page;
            pagination.page_size = page_size.max(1);
            pagination.total = total;
        }
    }

    /// Activate the row at `position` in the displayed page.
    ///
    /// Calls the row handler and returns the row. The view state does not
    /// change.
    pub fn activate(&mut self, position: usize) -> Option<&T> {
        let index = self.page_indices().get(position).copied()?;
        let row = &self.rows[index];
        debug!(id = %row.id(), "Row activated");
        if let Some(handler) = self.options.on_row_activate.as_mut() {
            handler(row);
        }
        Some(row)
    }

    /// Filtered and sorted rows, before pagination.
    pub fn derived_rows(&self) -> Vec<&T> {
        self.derived.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Number of rows after filtering.
    pub fn derived_len(&self) -> usize {
        self.derived.len()
    }

    /// Rows on the displayed page.
    pub fn page_rows(&self) -> Vec<&T> {
        self.page_indices().iter().map(|&i| &self.rows[i]).collect()
    }

    /// Number of rows on the displayed page.
    pub fn page_len(&self) -> usize {
        self.page_indices().len()
    }

    /// Page information, if the view is paginated.
    pub fn page_info(&self) -> Option<PageInfo> {
        if let Some(pagination) = &self.options.pagination {
            return Some(pagination.info());
        }
        self.options
            .page_size
            .map(|size| PageInfo::new(self.state.page, size, self.derived.len()))
    }

    /// Identifiers that occur more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<RowId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for row in &self.rows {
            let id = row.id();
            if !seen.insert(id.clone()) && reported.insert(id.clone()) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    fn page_indices(&self) -> &[usize] {
        match (self.options.page_size, &self.options.pagination) {
            (Some(size), None) => {
                &self.derived[page_range(self.derived.len(), self.state.page, size)]
            }
            _ => &self.derived,
        }
    }

    fn refresh(&mut self) {
        let query = if self.options.searchable {
            self.state.filter.as_str()
        } else {
            ""
        };
        self.derived = derive_indices(&self.rows, &self.columns, query, &self.state.sort);
        trace!(
            total = self.rows.len(),
            shown = self.derived.len(),
            "Recomputed table projection"
        );
    }

    fn warn_duplicate_ids(&self) {
        let duplicates = self.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(
                count = duplicates.len(),
                first = %duplicates[0],
                "Table rows contain duplicate ids"
            );
        }
    }
}

fn validate_columns<T>(columns: &[Column<T>]) -> Result<(), TableError> {
    if columns.is_empty() {
        return Err(TableError::NoColumns);
    }
    let mut keys = HashSet::new();
    for column in columns {
        if !keys.insert(column.key) {
            return Err(TableError::DuplicateColumn(column.key.to_string()));
        }
    }
    Ok(())
}
