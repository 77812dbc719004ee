//! Column descriptors.

use std::fmt;

use ratatui::{layout::Constraint, text::Line};

use super::value::{CellValue, RowId};

/// Access to the fields of a row record.
///
/// The table never interprets a row beyond its identifier and the values
/// returned for column keys.
pub trait TableRow {
    /// Stable unique identifier of this row.
    fn id(&self) -> RowId;

    /// The raw value stored under `key`.
    ///
    /// Unknown keys return [`CellValue::Empty`].
    fn cell(&self, key: &str) -> CellValue;
}

/// Custom cell renderer: receives the raw value and the whole row.
pub type CellRenderer<T> = Box<dyn Fn(&CellValue, &T) -> Line<'static>>;

/// Describes how one field of a row is labelled, sorted and rendered.
pub struct Column<T> {
    /// Field key passed to [`TableRow::cell`].
    pub key: &'static str,
    /// Header label.
    pub header: String,
    /// Whether the column can be sorted.
    pub sortable: bool,
    /// Optional custom renderer.
    pub render: Option<CellRenderer<T>>,
    /// Layout constraint for the column.
    pub width: Constraint,
}

impl<T> Column<T> {
    /// Create a new column with default flags (not sortable, fill width).
    pub fn new(key: &'static str, header: impl Into<String>) -> Self {
        Self {
            key,
            header: header.into(),
            sortable: false,
            render: None,
            width: Constraint::Fill(1),
        }
    }

    /// Mark the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the layout constraint.
    pub fn width(mut self, width: Constraint) -> Self {
        self.width = width;
        self
    }

    /// Set a custom renderer.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&CellValue, &T) -> Line<'static> + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Render the cell for `row`.
    ///
    /// Uses the custom renderer if one is set, otherwise the value's display
    /// string.
    pub fn render_cell(&self, row: &T) -> Line<'static>
    where
        T: TableRow,
    {
        let value = row.cell(self.key);
        match &self.render {
            Some(render) => render(&value, row),
            None => Line::from(value.to_string()),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .field("width", &self.width)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        id: i64,
        name: &'static str,
    }

    impl TableRow for Person {
        fn id(&self) -> RowId {
            RowId::Int(self.id)
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "id" => CellValue::Int(self.id),
                "name" => self.name.into(),
                _ => CellValue::Empty,
            }
        }
    }

    #[test]
    fn test_column_defaults() {
        let column: Column<Person> = Column::new("name", "Name");
        assert!(!column.sortable);
        assert!(column.render.is_none());
        assert_eq!(column.width, Constraint::Fill(1));
    }

    #[test]
    fn test_column_builder() {
        let column: Column<Person> = Column::new("id", "ID")
            .sortable()
            .width(Constraint::Length(4));
        assert!(column.sortable);
        assert_eq!(column.width, Constraint::Length(4));
    }

    #[test]
    fn test_render_cell_default() {
        let column: Column<Person> = Column::new("name", "Name");
        let row = Person { id: 1, name: "Zeta" };
        assert_eq!(column.render_cell(&row).to_string(), "Zeta");
    }

    #[test]
    fn test_render_cell_unknown_key_is_empty() {
        let column: Column<Person> = Column::new("missing", "Missing");
        let row = Person { id: 1, name: "Zeta" };
        assert_eq!(column.render_cell(&row).to_string(), "");
    }

    #[test]
    fn test_render_cell_custom() {
        let column: Column<Person> = Column::new("name", "Name")
            .render(|value, row: &Person| Line::from(format!("#{} {}", row.id, value)));
        let row = Person { id: 3, name: "Mid" };
        assert_eq!(column.render_cell(&row).to_string(), "#3 Mid");
    }
}
