//! Selection resolution: turn 0-N selected metric keys into a chart
//! specification (or a rejection).
//!
//! Pure function of the selection and the table — no reactive callbacks,
//! no ambient state. The caller (a UI event loop, a CLI, a test) invokes
//! it on every selection change and hands the result to a renderer.

use anjviz_core::chart::{ChartSpec, Series, LEGEND_TITLE, X_AXIS_TITLE};
use anjviz_core::table::DataTable;
use anjviz_core::taxonomy;
use anjviz_core::wrap::{wrap, WRAP_WIDTH};

/// Maximum number of metric families one chart can overlay.
pub const MAX_SELECTED: usize = 2;

/// Defensive failures. Neither occurs when selections come from the
/// taxonomy-constrained control and the table is the real source table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Selected key is not part of the taxonomy.
    UnknownKey(String),
    /// A valid key matched no row of the table; a chart with zero series
    /// would break the renderer contract.
    NoMatch(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnknownKey(key) => write!(f, "unknown metric key: {:?}", key),
            ResolveError::NoMatch(key) => write!(f, "no category matches key: {:?}", key),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolve the current selection against the table.
///
/// - empty selection -> [`ChartSpec::Empty`] (keep the last chart)
/// - more than [`MAX_SELECTED`] keys -> [`ChartSpec::Rejected`] (keep the
///   last chart, show the notice; never truncate the selection)
/// - one key -> single-axis chart, one series per matched row
/// - two keys -> dual-axis overlay, first key on the primary axis
///
/// Deterministic: matched rows follow table insertion order, so the same
/// selection and table always produce a structurally identical spec.
pub fn resolve(selection: &[String], table: &DataTable) -> Result<ChartSpec, ResolveError> {
    if selection.is_empty() {
        return Ok(ChartSpec::Empty);
    }
    if selection.len() > MAX_SELECTED {
        return Ok(ChartSpec::Rejected);
    }

    let mut labels = Vec::with_capacity(selection.len());
    for key in selection {
        let label = taxonomy::label(key).ok_or_else(|| ResolveError::UnknownKey(key.clone()))?;
        labels.push(label);
    }

    if let [key] = selection {
        single_axis(key, labels[0], table)
    } else {
        dual_axis(
            (selection[0].as_str(), labels[0]),
            (selection[1].as_str(), labels[1]),
            table,
        )
    }
}

/// One series per row whose category contains `key`, legend names wrapped
/// for display.
fn matched_series(key: &str, table: &DataTable) -> Vec<Series> {
    table
        .matching(key)
        .map(|row| Series {
            name: wrap(&row.category, WRAP_WIDTH),
            values: row.values.clone(),
        })
        .collect()
}

fn single_axis(key: &str, label: &str, table: &DataTable) -> Result<ChartSpec, ResolveError> {
    let series = matched_series(key, table);
    if series.is_empty() {
        return Err(ResolveError::NoMatch(key.to_string()));
    }

    // Percentage metrics get a fixed headroom range; everything else
    // auto-scales. ceil(max * 1.1) in integer math: f64 multiplication
    // overshoots for some maxima (50 * 1.1 == 55.000...01, which would
    // push the bound to 56).
    let range_hint = if taxonomy::is_percentage(label) {
        series
            .iter()
            .flat_map(|s| s.values.iter().flatten())
            .max()
            .map(|max| {
                // Signed div_ceil is unstable; for a positive divisor,
                // ceil(n / 10) == n.div_euclid(10) + (n.rem_euclid(10) != 0).
                let scaled = max * 11;
                let bound = scaled.div_euclid(10) + i64::from(scaled.rem_euclid(10) != 0);
                (0.0, bound as f64)
            })
    } else {
        None
    };

    Ok(ChartSpec::SingleAxis {
        title: label.to_string(),
        x_label: X_AXIS_TITLE.to_string(),
        y_label: String::new(),
        legend_title: LEGEND_TITLE.to_string(),
        range_hint,
        periods: table.periods().to_vec(),
        series,
    })
}

fn dual_axis(
    (key_a, label_a): (&str, &str),
    (key_b, label_b): (&str, &str),
    table: &DataTable,
) -> Result<ChartSpec, ResolveError> {
    let left_series = matched_series(key_a, table);
    if left_series.is_empty() {
        return Err(ResolveError::NoMatch(key_a.to_string()));
    }
    let right_series = matched_series(key_b, table);
    if right_series.is_empty() {
        return Err(ResolveError::NoMatch(key_b.to_string()));
    }

    // No range inference here, even for percentage metrics. The observed
    // behavior applies the headroom range only to single-key charts;
    // preserved until product intent says otherwise.
    Ok(ChartSpec::DualAxis {
        title: format!("{} VS {}", label_a, label_b),
        x_label: X_AXIS_TITLE.to_string(),
        legend_title: LEGEND_TITLE.to_string(),
        left_label: label_a.to_string(),
        right_label: label_b.to_string(),
        periods: table.periods().to_vec(),
        left_series,
        right_series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anjviz_core::table::TableRow;

    fn fixture() -> DataTable {
        DataTable::new(
            vec!["31/12/2010".into(), "31/12/2011".into(), "31/12/2012".into()],
            vec![
                TableRow::new("Nombre total d'agréments", vec![Some(48), Some(46), Some(40)]),
                TableRow::new("Nombre d'agréments Poker", vec![Some(20), Some(24), Some(23)]),
                TableRow::new("Mises Paris sportifs", vec![Some(448), Some(592), Some(697)]),
                TableRow::new("Mises Poker", vec![Some(1_500), Some(1_800), None]),
                TableRow::new(
                    "Part des mises sur smartphones et tablettes",
                    vec![Some(10), Some(20), Some(37)],
                ),
                TableRow::new("PBJ Paris sportifs", vec![Some(115), Some(140), Some(162)]),
            ],
        )
    }

    fn select(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_resolves_to_empty() {
        assert_eq!(resolve(&[], &fixture()), Ok(ChartSpec::Empty));
    }

    #[test]
    fn test_three_keys_are_rejected_not_truncated() {
        let spec = resolve(&select(&["Mises", "PBJ", "agréments"]), &fixture()).unwrap();
        assert_eq!(spec, ChartSpec::Rejected);
        assert!(spec.is_rejected());
    }

    #[test]
    fn test_rejection_wins_over_key_validation() {
        // An oversized selection is rejected before keys are looked at
        let spec = resolve(&select(&["Mises", "PBJ", "roulette"]), &fixture()).unwrap();
        assert_eq!(spec, ChartSpec::Rejected);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        assert_eq!(
            resolve(&select(&["roulette"]), &fixture()),
            Err(ResolveError::UnknownKey("roulette".to_string()))
        );
    }

    #[test]
    fn test_single_key_fans_out_to_all_containing_rows() {
        let spec = resolve(&select(&["agréments"]), &fixture()).unwrap();
        match spec {
            ChartSpec::SingleAxis { title, periods, series, range_hint, .. } => {
                assert_eq!(title, "Nombre d'agréments");
                assert_eq!(series.len(), 2, "both agreement rows must match");
                assert_eq!(series[0].name, "Nombre total d'agréments");
                assert_eq!(series[1].name, "Nombre d'agréments Poker");
                assert_eq!(periods.len(), 3);
                assert_eq!(range_hint, None, "count metric auto-scales");
            }
            other => panic!("expected SingleAxis, got {other:?}"),
        }
    }

    #[test]
    fn test_percentage_range_hint_is_ceil_of_max_plus_headroom() {
        let spec = resolve(&select(&["smartphones"]), &fixture()).unwrap();
        match spec {
            ChartSpec::SingleAxis { range_hint, .. } => {
                // max 37, *1.1 = 40.7, ceil -> 41
                assert_eq!(range_hint, Some((0.0, 41.0)));
            }
            other => panic!("expected SingleAxis, got {other:?}"),
        }
    }

    #[test]
    fn test_range_hint_is_exact_at_maxima_where_floats_overshoot() {
        // 50 * 1.1 is 55.000...01 in f64; the bound must still be 55
        for (max, expected) in [(50, 55.0), (90, 99.0), (100, 110.0), (37, 41.0)] {
            let table = DataTable::new(
                vec!["2010".into()],
                vec![TableRow::new("Part femmes Paris sportifs", vec![Some(max)])],
            );
            let spec = resolve(&select(&["Part femmes"]), &table).unwrap();
            match spec {
                ChartSpec::SingleAxis { range_hint, .. } => {
                    assert_eq!(
                        range_hint,
                        Some((0.0, expected)),
                        "wrong bound for max = {max}"
                    );
                }
                other => panic!("expected SingleAxis, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_axis_and_legend_titles_are_carried_in_the_spec() {
        match resolve(&select(&["Mises"]), &fixture()).unwrap() {
            ChartSpec::SingleAxis { x_label, y_label, legend_title, .. } => {
                assert_eq!(x_label, X_AXIS_TITLE);
                assert_eq!(y_label, "");
                assert_eq!(legend_title, LEGEND_TITLE);
            }
            other => panic!("expected SingleAxis, got {other:?}"),
        }
        match resolve(&select(&["Mises", "PBJ"]), &fixture()).unwrap() {
            ChartSpec::DualAxis { x_label, legend_title, .. } => {
                assert_eq!(x_label, "Date de relevé");
                assert_eq!(legend_title, "Légende");
            }
            other => panic!("expected DualAxis, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_values_do_not_break_range_inference() {
        let table = DataTable::new(
            vec!["2010".into(), "2011".into()],
            vec![TableRow::new(
                "Part femmes Paris sportifs",
                vec![None, Some(10)],
            )],
        );
        let spec = resolve(&select(&["Part femmes"]), &table).unwrap();
        match spec {
            ChartSpec::SingleAxis { range_hint, .. } => {
                assert_eq!(range_hint, Some((0.0, 11.0)));
            }
            other => panic!("expected SingleAxis, got {other:?}"),
        }
    }

    #[test]
    fn test_long_legend_names_are_wrapped() {
        let spec = resolve(&select(&["smartphones"]), &fixture()).unwrap();
        match spec {
            ChartSpec::SingleAxis { series, .. } => {
                assert_eq!(
                    series[0].name,
                    "Part des mises sur smartphones<br>et tablettes"
                );
            }
            other => panic!("expected SingleAxis, got {other:?}"),
        }
    }

    #[test]
    fn test_dual_key_overlay_assigns_axes_in_selection_order() {
        let spec = resolve(&select(&["Mises", "PBJ"]), &fixture()).unwrap();
        match spec {
            ChartSpec::DualAxis {
                title,
                left_label,
                right_label,
                periods,
                left_series,
                right_series,
                ..
            } => {
                assert_eq!(
                    title,
                    "Mises totales annuelles (en M€) VS Produit but des jeux (chiffre d'affaires, en M€)"
                );
                assert_eq!(left_label, "Mises totales annuelles (en M€)");
                assert_eq!(right_label, "Produit but des jeux (chiffre d'affaires, en M€)");
                assert_eq!(periods.len(), 3);
                assert!(left_series.iter().all(|s| s.name.contains("Mises")));
                assert!(right_series.iter().all(|s| s.name.contains("PBJ")));
                assert_eq!(left_series.len(), 2);
                assert_eq!(right_series.len(), 1);
            }
            other => panic!("expected DualAxis, got {other:?}"),
        }
    }

    #[test]
    fn test_dual_key_never_infers_ranges() {
        // Asymmetry preserved from observed behavior: a percentage metric
        // that would get a range hint alone gets none in an overlay.
        let spec = resolve(&select(&["smartphones", "Mises"]), &fixture()).unwrap();
        assert!(matches!(spec, ChartSpec::DualAxis { .. }));
    }

    #[test]
    fn test_valid_key_without_rows_is_no_match() {
        assert_eq!(
            resolve(&select(&["marketing"]), &fixture()),
            Err(ResolveError::NoMatch("marketing".to_string()))
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let table = fixture();
        let selection = select(&["Mises", "agréments"]);
        assert_eq!(
            resolve(&selection, &table).unwrap(),
            resolve(&selection, &table).unwrap()
        );
    }
}
