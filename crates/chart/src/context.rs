//! Context text: one authored markdown sentence per selected metric key,
//! rendered as quote blocks above the chart.

/// Authored notes, resolved by first match in declaration order. The
/// texts are editorial content, not derived from taxonomy labels.
const CONTEXT_NOTES: &[(&str, &str)] = &[
    (
        "agréments",
        "Nombre d'entités ayant l'[agrément ANJ](https://anj.fr/offre-de-jeu-et-marche/operateurs-agrees), pour chaque type.",
    ),
    (
        "Nombre CJA",
        "Nombre de comptes joueurs actifs à date, pour chaque type.",
    ),
    (
        "Mises",
        "Mises annuelles des joueurs en millions d'euros, pour chaque type.",
    ),
    (
        "smartphones",
        "Pourcentage de mises faites sur smartphones et tablettes (par opposition aux mises effectuées sur ordinateurs) sur l'année, pour chaque type.",
    ),
    (
        "Part femmes",
        "Pourcentage de mises faites par des femmes sur l'année, pour chaque type.",
    ),
    (
        "PBJ",
        "Produit brut des jeux sur l'année en millions d'euros, équivalent au chiffre d'affaires des entreprises, pour chaque type.",
    ),
    (
        "Part mises",
        "Pourcentage de mises par sport sur l'année (pour les sports les plus populaires).",
    ),
    // Shadowed: first match wins, so this entry is unreachable behind the
    // one above. Shipped that way in the reference deployment — the text
    // was clearly written for another key, and "marketing" consequently
    // has no note. Kept verbatim rather than guessing the intended key.
    (
        "Part mises",
        "Budget marketing médias annuel en millions d'euros.",
    ),
];

/// Quote prefix for each segment.
const QUOTE: &str = "> ";

fn note(key: &str) -> Option<&'static str> {
    CONTEXT_NOTES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// Build the context markdown for a selection: one quote-prefixed segment
/// per key that has a note, in selection order, separated by blank lines.
/// Keys without a note contribute nothing — selection validity is the
/// caller's concern, not this function's.
pub fn build_context(selection: &[String]) -> String {
    let notes: Vec<&str> = selection.iter().filter_map(|key| note(key)).collect();
    if notes.is_empty() {
        return String::new();
    }
    format!("{}{}", QUOTE, notes.join(&format!("\n\n{}", QUOTE)))
}
