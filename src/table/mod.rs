//! Generic tabular view with search, sort and pagination.
//!
//! A [`TableView`] takes rows implementing [`TableRow`] and a list of
//! [`Column`] descriptors, and derives the displayed rows in a fixed order:
//! filter, then sort, then (local) paginate. State changes are synchronous
//! and recompute the projection before returning.

mod column;
pub mod derive;
mod pagination;
mod sort;
mod value;
mod view;

use thiserror::Error;

pub use column::{CellRenderer, Column, TableRow};
pub use pagination::{clamp_page, page_count, page_range, ExternalPagination, PageHandler, PageInfo};
pub use sort::{SortDirection, SortState};
pub use value::{parse_date_millis, CellValue, RowId};
pub use view::{RowHandler, TableOptions, TableView, ViewState};

/// Errors from invalid table configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The column list is empty.
    #[error("table must have at least one column")]
    NoColumns,

    /// Two columns share the same key.
    #[error("duplicate column key '{0}'")]
    DuplicateColumn(String),

    /// A page size of zero was given.
    #[error("page size must be at least 1")]
    InvalidPageSize,
}
