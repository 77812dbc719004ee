//! confdeck: a terminal dashboard for conference planning data.
//!
//! Every dataset goes through one generic tabular view ([`table::TableView`])
//! that filters, sorts and paginates rows without reordering them.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod fixtures;
pub mod logging;
pub mod table;
pub mod ui;
