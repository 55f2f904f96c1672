//! Phase catalog and game tunables.
//!
//! The catalog is the static, ordered list of construction phases with
//! their classification patterns. Play order is a separate, fixed
//! sequence carried by [`GameConfig`] — catalog order drives the
//! classifier, `GameConfig::order` drives the quiz.

use regex::Regex;

/// Default filename for the session CSV export.
pub const CSV_EXPORT_FILENAME: &str = "resultats_obj_game.csv";

/// Default filename for the mapping document export.
pub const MAPPING_EXPORT_FILENAME: &str = "mapping_phases.json";

// ============================================================================
// Phase definitions
// ============================================================================

/// An immutable phase definition.
///
/// `pattern` is only ever consulted by the classifier; the game engine
/// cares about `key` and `label`.
#[derive(Debug, Clone)]
pub struct PhaseSpec {
    /// Unique slug identifying the phase (e.g. `"fondations"`).
    pub key: String,
    /// Display text (e.g. `"Fondations"`).
    pub label: String,
    /// Case-insensitive name-matching rule used by the classifier.
    pub pattern: Regex,
}

impl PhaseSpec {
    /// Creates a phase definition, compiling `pattern` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a [`regex::Error`] if the pattern does not compile.
    pub fn new(key: &str, label: &str, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            key: key.to_string(),
            label: label.to_string(),
            pattern: Regex::new(&format!("(?i){pattern}"))?,
        })
    }
}

/// Static ordered list of phase definitions.
///
/// Declaration order here is classification order (first match wins),
/// not play order.
#[derive(Debug, Clone)]
pub struct PhaseCatalog {
    phases: Vec<PhaseSpec>,
}

impl PhaseCatalog {
    /// Builds a catalog from a list of phase definitions.
    #[must_use]
    pub const fn new(phases: Vec<PhaseSpec>) -> Self {
        Self { phases }
    }

    /// The standard six-phase construction catalog.
    #[must_use]
    pub fn standard() -> Self {
        let specs = [
            ("terrassement", "Terrassement", "(terrain|site|ground|earth|soil|topo)"),
            ("fondations", "Fondations", "(footing|foundation|semelle|longrine|socle|pied)"),
            (
                "superstructure",
                "Superstructure",
                "(wall|mur|beam|poutre|column|poteau|structure|frame)",
            ),
            ("planchers", "Planchers", "(slab|floor|plancher|dalle)"),
            (
                "menuiseries",
                "Menuiseries",
                "(window|fenetre|door|porte|chassis|menuiserie)",
            ),
            ("toiture", "Toiture", "(roof|toit|tuile|chevron|panne)"),
        ];

        let phases = specs
            .iter()
            .map(|(key, label, pattern)| {
                PhaseSpec::new(key, label, pattern).expect("built-in phase pattern is valid")
            })
            .collect();

        Self { phases }
    }

    /// Looks up a phase definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PhaseSpec> {
        self.phases.iter().find(|p| p.key == key)
    }

    /// Display label for a phase key, falling back to the key itself.
    #[must_use]
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map_or(key, |p| p.label.as_str())
    }

    /// Iterates phase definitions in catalog (classification) order.
    pub fn iter(&self) -> impl Iterator<Item = &PhaseSpec> {
        self.phases.iter()
    }

    /// Number of phases in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

impl Default for PhaseCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Game tunables
// ============================================================================

/// Compile-time game tunables.
///
/// These are defaults, not runtime configuration: embedders construct
/// one and hand it to the engine.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Total session time in seconds.
    pub duration_secs: i64,
    /// Points awarded for a correct pick.
    pub points_correct: i64,
    /// Points applied for an incorrect pick (negative).
    pub points_wrong: i64,
    /// Maximum number of targets drawn per phase.
    pub targets_per_phase: usize,
    /// Fixed play order of phase keys, independent of catalog order.
    pub order: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: 6 * 60,
            points_correct: 10,
            points_wrong: -5,
            targets_per_phase: 5,
            order: [
                "terrassement",
                "fondations",
                "superstructure",
                "planchers",
                "menuiseries",
                "toiture",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_six_phases() {
        let catalog = PhaseCatalog::standard();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn patterns_match_case_insensitively() {
        let catalog = PhaseCatalog::standard();
        let roof = catalog.get("toiture").unwrap();
        assert!(roof.pattern.is_match("Roof_Panel_01"));
        assert!(roof.pattern.is_match("TUILE_sud"));
        assert!(!roof.pattern.is_match("Wall_07"));
    }

    #[test]
    fn get_unknown_key_is_none() {
        let catalog = PhaseCatalog::standard();
        assert!(catalog.get("demolition").is_none());
    }

    #[test]
    fn label_falls_back_to_key() {
        let catalog = PhaseCatalog::standard();
        assert_eq!(catalog.label("fondations"), "Fondations");
        assert_eq!(catalog.label("inconnu"), "inconnu");
    }

    #[test]
    fn default_config_matches_game_table() {
        let config = GameConfig::default();
        assert_eq!(config.duration_secs, 360);
        assert_eq!(config.points_correct, 10);
        assert_eq!(config.points_wrong, -5);
        assert_eq!(config.targets_per_phase, 5);
        assert_eq!(config.order.len(), 6);
        assert_eq!(config.order[0], "terrassement");
        assert_eq!(config.order[5], "toiture");
    }

    #[test]
    fn catalog_order_matches_play_order_by_default() {
        // Not a requirement, but the standard catalog and default config
        // happen to agree — the quiz relies only on config.order.
        let catalog = PhaseCatalog::standard();
        let config = GameConfig::default();
        let catalog_keys: Vec<_> = catalog.iter().map(|p| p.key.clone()).collect();
        assert_eq!(catalog_keys, config.order);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(PhaseSpec::new("bad", "Bad", "([unclosed").is_err());
    }
}
