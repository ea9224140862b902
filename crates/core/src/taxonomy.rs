//! Fixed mapping from short metric keys to descriptive labels.
//!
//! This is the single source of truth for what a user can select: the
//! selection control offers exactly these keys, in this order, and the
//! resolver rejects anything else. Keys double as the substrings matched
//! against canonical categories, so they are chosen to fan out to every
//! related row ("Mises" matches the per-game stake totals, etc.).

/// Reference deployment taxonomy. Order is the display order.
///
/// "Produit but des jeux" is how the published dataset spells it; kept
/// verbatim since titles are compared literally downstream.
pub const TAXONOMY: &[(&str, &str)] = &[
    ("agréments", "Nombre d'agréments"),
    ("Nombre CJA", "Nombre de comptes joueurs actifs"),
    ("Mises", "Mises totales annuelles (en M€)"),
    ("smartphones", "Part de mises sur smartphones et tablettes (en %)"),
    ("Part femmes", "Part de mises faites par des femmes (en %)"),
    ("PBJ", "Produit but des jeux (chiffre d'affaires, en M€)"),
    ("Part mises", "Part des mises par sport (en %)"),
    ("marketing", "Budget marketing médias (en M€)"),
];

/// Descriptive label for a metric key, if the key is part of the taxonomy.
pub fn label(key: &str) -> Option<&'static str> {
    TAXONOMY
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

/// All metric keys in display order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    TAXONOMY.iter().map(|(key, _)| *key)
}

/// A percent marker in the label flags a percentage-unit metric, which
/// gets an explicit y-range instead of auto-scaling.
pub fn is_percentage(label: &str) -> bool {
    label.contains('%')
}
