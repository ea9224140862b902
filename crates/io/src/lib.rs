// Ingestion pipeline: raw CSV -> normalized, numeric DataTable

pub mod cell;
pub mod coerce;
pub mod import;
pub mod normalize;
pub mod source;

pub use import::{read_table_bytes, read_table_file, ImportError};
pub use source::SourceConfig;
