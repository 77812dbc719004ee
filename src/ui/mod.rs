//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the data table component and
//! its helpers, the row detail popup, and the theme.

pub mod components;
pub mod theme;
mod views;

pub use components::{render_context_help, DataTable, SearchInput};
pub use theme::{init_theme, theme, Theme};
pub use views::{DetailAction, DetailField, DetailView};
