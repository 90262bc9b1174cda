use crate::errors::{ExplorerError, Result};

/// One trip record, cells ordered like [`TripTable::headers`].
pub type Row = Vec<String>;

/// In-memory trip log: named columns over string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripTable {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl TripTable {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        self.column_index(name).map(|index| Column {
            rows: &self.rows,
            index,
        })
    }

    /// Like [`TripTable::column`] but reports absence as an error.
    pub fn require_column(&self, name: &str) -> Result<Column<'_>> {
        self.column(name)
            .ok_or_else(|| ExplorerError::MissingColumn(name.to_string()))
    }
}

/// Borrowed view over a single named column.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    rows: &'a [Row],
    index: usize,
}

impl<'a> Column<'a> {
    /// Cell of row `row`; short rows read as empty.
    pub fn get(self, row: usize) -> Option<&'a str> {
        self.rows
            .get(row)
            .map(|cells| cells.get(self.index).map(String::as_str).unwrap_or(""))
    }

    /// Every cell in row order, empty cells included.
    pub fn values(self) -> impl Iterator<Item = &'a str> + 'a {
        let index = self.index;
        self.rows
            .iter()
            .map(move |cells| cells.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Cells that are not blank.
    pub fn present(self) -> impl Iterator<Item = &'a str> + 'a {
        self.values().map(str::trim).filter(|value| !value.is_empty())
    }
}
