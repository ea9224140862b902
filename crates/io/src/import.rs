// CSV import: decode, parse, normalize, coerce, assemble

use std::path::Path;

use anjviz_core::table::{DataTable, TableRow};

use crate::cell::RawCell;
use crate::coerce;
use crate::normalize;
use crate::source::SourceConfig;

/// Any failure while building the table. All variants are fatal at
/// startup: there is no degraded mode, the table is required before any
/// interaction can be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// Transport or filesystem failure.
    Read(String),
    /// CSV structure failure.
    Csv(String),
    /// The first header field is not the expected label column.
    MissingLabelColumn { expected: String, found: String },
    /// The source has no header row at all.
    EmptySource,
    /// A textual cell is not representable as an integer after stripping.
    MalformedCell {
        category: String,
        period: String,
        value: String,
    },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Read(msg) => write!(f, "failed to read source: {}", msg),
            ImportError::Csv(msg) => write!(f, "failed to parse source CSV: {}", msg),
            ImportError::MissingLabelColumn { expected, found } => write!(
                f,
                "first column is {:?}, expected label column {:?}",
                found, expected
            ),
            ImportError::EmptySource => write!(f, "source has no header row"),
            ImportError::MalformedCell { category, period, value } => write!(
                f,
                "cell {:?} ({} / {}) is not a number",
                value, category, period
            ),
        }
    }
}

impl std::error::Error for ImportError {}

/// Read and normalize the table from a local file.
pub fn read_table_file(path: &Path, config: &SourceConfig) -> Result<DataTable, ImportError> {
    let bytes = std::fs::read(path).map_err(|e| ImportError::Read(e.to_string()))?;
    read_table_bytes(&bytes, config)
}

/// Read and normalize the table from raw bytes.
///
/// The source declares Windows-1252, so the bytes are always decoded as
/// such — no sniffing. Decoding cannot fail (every byte sequence is valid
/// Windows-1252), so all failures past this point are structural.
pub fn read_table_bytes(bytes: &[u8], config: &SourceConfig) -> Result<DataTable, ImportError> {
    let (content, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    parse_table(&content, config)
}

fn parse_table(content: &str, config: &SourceConfig) -> Result<DataTable, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let header = match records.next() {
        Some(result) => result.map_err(|e| ImportError::Csv(e.to_string()))?,
        None => return Err(ImportError::EmptySource),
    };

    let label_field = header.get(0).unwrap_or("").trim();
    if label_field != config.label_header {
        return Err(ImportError::MissingLabelColumn {
            expected: config.label_header.clone(),
            found: label_field.to_string(),
        });
    }

    let periods: Vec<String> = header
        .iter()
        .skip(1)
        .map(|h| h.replace(&config.period_prefix, "").trim().to_string())
        .collect();

    let mut rows: Vec<TableRow> = Vec::new();
    for result in records {
        let record = result.map_err(|e| ImportError::Csv(e.to_string()))?;

        // Rows without a label carry no category and are dropped
        let label = record.get(0).unwrap_or("").trim();
        if label.is_empty() {
            continue;
        }

        let category = normalize::canonicalize(label);

        let mut values: Vec<Option<i64>> = Vec::with_capacity(periods.len());
        for (idx, period) in periods.iter().enumerate() {
            let cell = RawCell::from_field(record.get(idx + 1).unwrap_or(""));
            let value = coerce::coerce(&cell).map_err(|e| ImportError::MalformedCell {
                category: category.clone(),
                period: period.clone(),
                value: e.0,
            })?;
            values.push(value);
        }

        rows.push(TableRow::new(category, values));
    }

    Ok(DataTable::new(periods, rows))
}
