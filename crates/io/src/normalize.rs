//! Label normalization.
//!
//! The published table spells the same category differently across
//! reporting periods (quarter-4 abbreviations, a curly-apostrophe
//! variant, share rows that would collide once abbreviations expand).
//! Each raw label is rewritten into its canonical category by an explicit
//! rule list processed in declaration order — ordering matters because
//! rule 1 disambiguates labels that rule 3's expansions would otherwise
//! make collide.

/// One deterministic label rewrite.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Replace `from` with `to`, but only in labels that also contain
    /// `guard`.
    ReplaceIfContains {
        guard: &'static str,
        from: &'static str,
        to: &'static str,
    },
    /// Replace the whole label when it equals `from` exactly.
    ExactRename {
        from: &'static str,
        to: &'static str,
    },
    /// Unconditional substring expansion.
    Expand {
        from: &'static str,
        to: &'static str,
    },
}

const RULES: &[Rule] = &[
    // Origin-of-stakes share rows ("Part mises ... T4") must not collide
    // with the per-sport share rows once the sport markers below expand.
    Rule::ReplaceIfContains {
        guard: "T4",
        from: "Part mises",
        to: "Part des mises sur",
    },
    // The raw label uses U+2019; the canonical spelling uses a straight
    // apostrophe plus "total" to stay distinct from the per-game
    // agreement rows, which also contain "agréments".
    Rule::ExactRename {
        from: "Nombre d\u{2019}agréments",
        to: "Nombre total d'agréments",
    },
    Rule::Expand { from: "PS T4", to: "Paris sportifs" },
    Rule::Expand { from: "PO T4", to: "Poker" },
    Rule::Expand { from: "PH T4", to: "Paris hippiques" },
    Rule::Expand { from: "de comptes joueurs actifs", to: "CJA" },
];

/// Rewrite a raw row label into its canonical category.
///
/// Deterministic, and the identity for labels no rule touches.
pub fn canonicalize(label: &str) -> String {
    let mut out = label.to_string();
    for rule in RULES {
        out = match *rule {
            Rule::ReplaceIfContains { guard, from, to } => {
                if out.contains(guard) && out.contains(from) {
                    out.replace(from, to)
                } else {
                    out
                }
            }
            Rule::ExactRename { from, to } => {
                if out == from {
                    to.to_string()
                } else {
                    out
                }
            }
            Rule::Expand { from, to } => out.replace(from, to),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarterly_share_relabeled() {
        assert_eq!(
            canonicalize("Part mises PS T4"),
            "Part des mises sur Paris sportifs"
        );
        assert_eq!(
            canonicalize("Part mises PH T4"),
            "Part des mises sur Paris hippiques"
        );
    }

    #[test]
    fn test_share_without_quarter_marker_untouched_by_rule_one() {
        // Per-sport share rows carry no T4 marker and keep their phrase
        assert_eq!(canonicalize("Part mises Football"), "Part mises Football");
    }

    #[test]
    fn test_agreements_exact_rename() {
        assert_eq!(
            canonicalize("Nombre d\u{2019}agréments"),
            "Nombre total d'agréments"
        );
        // Containment is not enough; the rename is exact-match only
        assert_eq!(
            canonicalize("Nombre d\u{2019}agréments PO T4"),
            "Nombre d\u{2019}agréments Poker"
        );
    }

    #[test]
    fn test_abbreviation_expansion() {
        assert_eq!(canonicalize("Mises PS T4"), "Mises Paris sportifs");
        assert_eq!(canonicalize("Mises PO T4"), "Mises Poker");
        assert_eq!(canonicalize("Mises PH T4"), "Mises Paris hippiques");
        assert_eq!(
            canonicalize("Nombre de comptes joueurs actifs PO T4"),
            "Nombre CJA Poker"
        );
    }

    #[test]
    fn test_unmatched_label_passes_through() {
        assert_eq!(canonicalize("Budget marketing médias"), "Budget marketing médias");
    }

    #[test]
    fn test_share_rewrite_never_reintroduces_sport_markers() {
        // Rule 1's output must not still carry a raw marker that rule 3
        // would rewrite a second time into something unintended.
        for sport in ["PS T4", "PO T4", "PH T4"] {
            let raw = format!("Part mises {sport}");
            let canonical = canonicalize(&raw);
            assert!(
                !canonical.contains("T4"),
                "rewrite left a raw quarter marker in {canonical:?}"
            );
            assert!(canonical.starts_with("Part des mises sur "));
        }
    }

    #[test]
    fn test_canonicalize_is_deterministic() {
        let label = "Part mises PS T4";
        assert_eq!(canonicalize(label), canonicalize(label));
    }
}
