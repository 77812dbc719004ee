//! Sort state.

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// The active sort column and direction.
///
/// With no column, rows keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    /// Key of the active sort column.
    pub column: Option<&'static str>,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Toggle sorting on `key`.
    ///
    /// Flips the direction if `key` is already active, otherwise makes it the
    /// active column in ascending order.
    pub fn toggle(&mut self, key: &'static str) {
        if self.column == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Check if `key` is the active sort column.
    pub fn is_active(&self, key: &str) -> bool {
        self.column == Some(key)
    }
}
