//! Application views (screens).

mod detail;

pub use detail::{DetailAction, DetailField, DetailView};
