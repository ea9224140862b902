//! Cell coercion: every cell of the source table must end up numeric (or
//! genuinely missing) before any chart math runs. Percent suffixes and
//! space-grouped thousands are formatting, not data, and are stripped.

use crate::cell::RawCell;

/// A textual cell that is not representable as an integer after
/// stripping. Carries the raw text; the importer attaches category and
/// period before surfacing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedValue(pub String);

/// Coerce one cell.
///
/// Already-numeric cells pass through unchanged (re-running the coercer
/// is a no-op), empty cells become `None`, textual cells lose one
/// trailing `%` and all interior spaces and must then parse as an
/// integer.
pub fn coerce(cell: &RawCell) -> Result<Option<i64>, MalformedValue> {
    match cell {
        RawCell::Empty => Ok(None),
        RawCell::Number(n) => Ok(Some(*n)),
        RawCell::Text(s) => {
            let stripped = s.strip_suffix('%').unwrap_or(s).replace(' ', "");
            stripped
                .parse::<i64>()
                .map(Some)
                .map_err(|_| MalformedValue(s.clone()))
        }
    }
}
