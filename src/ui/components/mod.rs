//! Reusable UI components.

mod data_table;
mod help_bar;
mod search_bar;
mod status_chip;

pub use data_table::{DataTable, PAGE_SIZE_OPTIONS};
pub use help_bar::render_context_help;
pub use search_bar::{highlight_line, render_search_bar, SearchEvent, SearchInput};
pub use status_chip::{status_chip, status_chip_line, status_label, ChipVariant};
