use serde::{Deserialize, Serialize};

/// One metric family: a canonical category plus one value per period.
///
/// `None` marks a period the source genuinely does not report (e.g. a
/// metric introduced mid-series). Range inference skips missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub category: String,
    pub values: Vec<Option<i64>>,
}

impl TableRow {
    pub fn new(category: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        Self { category: category.into(), values }
    }
}

/// The normalized statistics table: canonical categories in source order,
/// all sharing one period axis.
///
/// Built once at startup by the ingestion pipeline and never mutated
/// afterwards, so it can be shared freely across interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    periods: Vec<String>,
    rows: Vec<TableRow>,
}

impl DataTable {
    /// Assemble a table. Each row is padded or truncated to one value per
    /// period so every series shares the same x-domain.
    pub fn new(periods: Vec<String>, mut rows: Vec<TableRow>) -> Self {
        let width = periods.len();
        for row in &mut rows {
            row.values.resize(width, None);
        }
        Self { periods, rows }
    }

    /// Period identifiers in fixed left-to-right chronological order.
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// All rows in source insertion order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Rows whose category contains `needle` as a literal substring,
    /// in insertion order. Case- and accent-sensitive: this is the
    /// mechanism that lets one short key fan out to every related row.
    pub fn matching<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a TableRow> {
        self.rows.iter().filter(move |row| row.category.contains(needle))
    }

    /// Exact-category lookup.
    pub fn get(&self, category: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.category == category)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
