// Source table configuration
// Fixed deployment parameters, not user input

use std::path::Path;

use serde::{Deserialize, Serialize};

/// HTTP locator of the published CSV (data.gouv.fr, ANJ open data,
/// online gambling market 2010-2022).
pub const DEFAULT_SOURCE_URL: &str = "https://static.data.gouv.fr/resources/donnees-sur-le-marche-des-jeux-en-ligne-paris-sportifs-hippiques-et-poker-de-2010-a-2022/20230921-134726/anj-donnees-marche-jeux-en-ligne-20102022.csv";

/// Where and how to read the source table.
///
/// The defaults describe the reference deployment; a JSON file with the
/// same fields can override them for mirrors or offline snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// HTTP locator of the published CSV.
    pub url: String,
    /// Field delimiter.
    pub delimiter: char,
    /// Header of the row-label column (must be the first column).
    pub label_header: String,
    /// Prefix stripped from period headers ("Au 31/12/2010" -> "31/12/2010").
    pub period_prefix: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            delimiter: ';',
            label_header: "Catégorie/Année".to_string(),
            period_prefix: "Au ".to_string(),
        }
    }
}

impl SourceConfig {
    /// Load a config override from a JSON file. Missing fields fall back
    /// to the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }
}
