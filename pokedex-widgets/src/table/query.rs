//! Table query state.

/// A sortable column of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Pokémon name.
    Name,
    /// Height, numeric.
    Height,
    /// Weight, numeric.
    Weight,
    /// Comma-joined type names.
    Types,
}

impl Column {
    /// Display label for the column header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Pokémon Name",
            Self::Height => "Height",
            Self::Weight => "Weight",
            Self::Types => "Types",
        }
    }

    /// Returns `true` if the column holds numeric values.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Height | Self::Weight)
    }

    /// All columns, in display order.
    pub fn all() -> [Column; 4] {
        [Self::Name, Self::Height, Self::Weight, Self::Types]
    }
}

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Page size choices offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// The tuple of search/filter/sort/page parameters governing the next fetch.
///
/// This is the single source of truth for what the table fetches. The page
/// index resets to 0 whenever the search term, type filter, or page size
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    search: String,
    type_filter: Option<String>,
    order_by: Column,
    order: Direction,
    page: usize,
    page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            type_filter: None,
            order_by: Column::Name,
            order: Direction::Ascending,
            page: 0,
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl TableQuery {
    /// Creates the default query: no search, no filter, name ascending,
    /// first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active search term, if non-empty.
    pub fn search_term(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Returns `true` while a non-empty search takes precedence over paging.
    pub fn is_search_active(&self) -> bool {
        self.search_term().is_some()
    }

    /// The active type filter, if any.
    pub fn type_filter(&self) -> Option<&str> {
        self.type_filter.as_deref()
    }

    /// The column rows are ordered by.
    pub fn order_by(&self) -> Column {
        self.order_by
    }

    /// The current sort direction.
    pub fn order(&self) -> Direction {
        self.order
    }

    /// Zero-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Offset of the current page into the catalog.
    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }

    /// Sets the search term and resets the page index.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 0;
    }

    /// Clears the search term, reverting to paged fetching.
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.page = 0;
    }

    /// Sets or clears the type filter and resets the page index.
    ///
    /// An empty filter string means "all types".
    pub fn set_type_filter(&mut self, filter: Option<String>) {
        self.type_filter = filter.filter(|f| !f.trim().is_empty());
        self.page = 0;
    }

    /// Requests ordering on a column.
    ///
    /// Sorting the already-active column toggles its direction; a new column
    /// starts ascending.
    pub fn sort_on(&mut self, column: Column) {
        if self.order_by == column {
            self.order = self.order.toggled();
        } else {
            self.order_by = column;
            self.order = Direction::Ascending;
        }
    }

    /// Sets the zero-based page index.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Sets the page size and resets the page index.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }
}
