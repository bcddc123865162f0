//! The emotion wheel: a closed three-level feeling taxonomy.
//!
//! The wheel has exactly 6 primaries × 6 secondaries × 6 tertiaries = 216
//! leaves. Tables are compiled in ([`tables`]) and loaded once into an
//! immutable [`EmotionWheel`]; loading fails fast if the tables are not
//! structurally exact. Selection code only ever draws candidates from the
//! wheel's child lookups, so a path outside the hierarchy cannot be
//! constructed in normal operation.

mod tables;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

use tables::WHEEL;

/// Number of primary feeling families.
pub const PRIMARY_COUNT: usize = 6;

/// Number of secondary children under each primary.
pub const SECONDARY_COUNT: usize = 6;

/// Number of tertiary children under each secondary.
pub const TERTIARY_COUNT: usize = 6;

/// Total number of tertiary leaves in the wheel.
pub const LEAF_COUNT: usize = PRIMARY_COUNT * SECONDARY_COUNT * TERTIARY_COUNT;

/// The six primary feeling families.
///
/// Feeling-wheel style cores: three broadly positive families (Joyful,
/// Powerful, Peaceful) and three broadly negative ones (Sad, Mad, Scared).
/// The Powerful family holds the strength/resilience branches that the
/// rerank rules promote on concession patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primary {
    Joyful,
    Powerful,
    Peaceful,
    Sad,
    Mad,
    Scared,
}

impl Primary {
    /// All primaries in canonical (classifier output) order.
    pub const ALL: [Primary; PRIMARY_COUNT] = [
        Primary::Joyful,
        Primary::Powerful,
        Primary::Peaceful,
        Primary::Sad,
        Primary::Mad,
        Primary::Scared,
    ];

    /// Canonical index of this primary in classifier distributions.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Primary::Joyful => 0,
            Primary::Powerful => 1,
            Primary::Peaceful => 2,
            Primary::Sad => 3,
            Primary::Mad => 4,
            Primary::Scared => 5,
        }
    }

    /// Lowercase label used for lexicon and similarity matching.
    pub fn label(&self) -> &'static str {
        match self {
            Primary::Joyful => "joyful",
            Primary::Powerful => "powerful",
            Primary::Peaceful => "peaceful",
            Primary::Sad => "sad",
            Primary::Mad => "mad",
            Primary::Scared => "scared",
        }
    }

    /// Whether this family carries positive valence.
    ///
    /// Sarcasm inversion applies to these "positive shell" candidates.
    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(self, Primary::Joyful | Primary::Powerful | Primary::Peaceful)
    }

    /// Signed valence prior for this family, in [-1, 1].
    ///
    /// Used by the rule-only fallback distribution and by neutral checks,
    /// not by the classifier path.
    pub fn valence_prior(&self) -> f32 {
        match self {
            Primary::Joyful => 0.8,
            Primary::Powerful => 0.6,
            Primary::Peaceful => 0.5,
            Primary::Sad => -0.7,
            Primary::Mad => -0.6,
            Primary::Scared => -0.6,
        }
    }

    /// Arousal prior for this family, in [0, 1].
    pub fn arousal_prior(&self) -> f32 {
        match self {
            Primary::Joyful => 0.6,
            Primary::Powerful => 0.55,
            Primary::Peaceful => 0.2,
            Primary::Sad => 0.3,
            Primary::Mad => 0.75,
            Primary::Scared => 0.7,
        }
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved position in the wheel.
///
/// `secondary` and `tertiary` are optional: the neutral gate yields a path
/// with neither, and ambiguity suppression yields a path without a tertiary.
/// Construction in selection code always goes through [`EmotionWheel`]
/// candidate lookups, so a populated label is always a valid child of its
/// parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelPath {
    /// Primary feeling family.
    pub primary: Primary,
    /// Secondary label, one of the primary's 6 children.
    pub secondary: Option<String>,
    /// Tertiary label, one of the secondary's 6 children. `None` when
    /// selection was suppressed as ambiguous.
    pub tertiary: Option<String>,
}

impl WheelPath {
    /// A primary-only path.
    pub fn primary_only(primary: Primary) -> Self {
        Self {
            primary,
            secondary: None,
            tertiary: None,
        }
    }
}

/// The immutable, validated emotion wheel.
///
/// # Example
///
/// ```
/// use affect_graph_core::taxonomy::{EmotionWheel, Primary};
///
/// let wheel = EmotionWheel::load().unwrap();
/// let secondaries = wheel.secondaries(Primary::Mad);
/// assert!(secondaries.contains(&"frustrated"));
/// assert_eq!(wheel.tertiaries(Primary::Mad, "frustrated").unwrap().len(), 6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmotionWheel {
    _validated: (),
}

impl EmotionWheel {
    /// Load and validate the compiled wheel tables.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TaxonomyError`] if the tables do not contain
    /// exactly 6 primaries × 6 secondaries × 6 tertiaries with unique labels
    /// within every sibling set. This only fires on a defective build; a
    /// correct binary cannot fail here.
    pub fn load() -> CoreResult<Self> {
        if WHEEL.len() != PRIMARY_COUNT {
            return Err(CoreError::TaxonomyError(format!(
                "expected {} primaries, found {}",
                PRIMARY_COUNT,
                WHEEL.len()
            )));
        }

        let mut seen_primaries = HashSet::new();
        let mut leaves = 0usize;
        for row in &WHEEL {
            if !seen_primaries.insert(row.primary) {
                return Err(CoreError::TaxonomyError(format!(
                    "duplicate primary '{}'",
                    row.primary
                )));
            }
            let mut seen_secondaries = HashSet::new();
            for sec in &row.secondaries {
                if !seen_secondaries.insert(sec.label) {
                    return Err(CoreError::TaxonomyError(format!(
                        "duplicate secondary '{}' under '{}'",
                        sec.label, row.primary
                    )));
                }
                let unique: HashSet<&str> = sec.tertiaries.iter().copied().collect();
                if unique.len() != TERTIARY_COUNT {
                    return Err(CoreError::TaxonomyError(format!(
                        "duplicate tertiary under '{}.{}'",
                        row.primary, sec.label
                    )));
                }
                leaves += sec.tertiaries.len();
            }
        }

        if leaves != LEAF_COUNT {
            return Err(CoreError::TaxonomyError(format!(
                "expected {} leaves, found {}",
                LEAF_COUNT, leaves
            )));
        }

        Ok(Self { _validated: () })
    }

    /// Total tertiary leaf count.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        LEAF_COUNT
    }

    /// The 6 secondary labels under a primary.
    pub fn secondaries(&self, primary: Primary) -> [&'static str; SECONDARY_COUNT] {
        let row = &WHEEL[primary.index()];
        debug_assert_eq!(row.primary, primary);
        let mut out = [""; SECONDARY_COUNT];
        for (i, sec) in row.secondaries.iter().enumerate() {
            out[i] = sec.label;
        }
        out
    }

    /// The 6 tertiary labels under a (primary, secondary) pair, or `None` if
    /// `secondary` is not a child of `primary`.
    pub fn tertiaries(
        &self,
        primary: Primary,
        secondary: &str,
    ) -> Option<[&'static str; TERTIARY_COUNT]> {
        let row = &WHEEL[primary.index()];
        row.secondaries
            .iter()
            .find(|sec| sec.label == secondary)
            .map(|sec| sec.tertiaries)
    }

    /// Whether a fully or partially populated path lies inside the wheel.
    pub fn contains_path(&self, path: &WheelPath) -> bool {
        match (&path.secondary, &path.tertiary) {
            (None, None) => true,
            (None, Some(_)) => false,
            (Some(sec), None) => self.tertiaries(path.primary, sec).is_some(),
            (Some(sec), Some(ter)) => self
                .tertiaries(path.primary, sec)
                .map(|leaves| leaves.contains(&ter.as_str()))
                .unwrap_or(false),
        }
    }

    /// Iterate every (primary, secondary, tertiary) leaf path.
    pub fn iter_leaves(&self) -> impl Iterator<Item = WheelPath> + '_ {
        WHEEL.iter().flat_map(|row| {
            row.secondaries.iter().flat_map(move |sec| {
                sec.tertiaries.iter().map(move |ter| WheelPath {
                    primary: row.primary,
                    secondary: Some(sec.label.to_string()),
                    tertiary: Some((*ter).to_string()),
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_loads() {
        let wheel = EmotionWheel::load().unwrap();
        assert_eq!(wheel.leaf_count(), 216);
    }

    #[test]
    fn test_every_primary_has_six_secondaries() {
        let wheel = EmotionWheel::load().unwrap();
        for primary in Primary::ALL {
            let secondaries = wheel.secondaries(primary);
            assert_eq!(secondaries.len(), 6);
            let unique: HashSet<&str> = secondaries.iter().copied().collect();
            assert_eq!(unique.len(), 6, "{primary} has duplicate secondaries");
        }
    }

    #[test]
    fn test_all_216_paths_enumerable_and_closed() {
        let wheel = EmotionWheel::load().unwrap();
        let leaves: Vec<WheelPath> = wheel.iter_leaves().collect();
        assert_eq!(leaves.len(), 216);
        for path in &leaves {
            assert!(wheel.contains_path(path), "leaf {:?} not closed", path);
        }
    }

    #[test]
    fn test_foreign_secondary_rejected() {
        let wheel = EmotionWheel::load().unwrap();
        let path = WheelPath {
            primary: Primary::Joyful,
            secondary: Some("anxious".to_string()),
            tertiary: None,
        };
        assert!(!wheel.contains_path(&path));
    }

    #[test]
    fn test_tertiary_without_secondary_rejected() {
        let wheel = EmotionWheel::load().unwrap();
        let path = WheelPath {
            primary: Primary::Joyful,
            secondary: None,
            tertiary: Some("eager".to_string()),
        };
        assert!(!wheel.contains_path(&path));
    }

    #[test]
    fn test_cross_branch_tertiary_rejected() {
        let wheel = EmotionWheel::load().unwrap();
        // "worried" belongs to scared.anxious, not joyful.excited
        let path = WheelPath {
            primary: Primary::Joyful,
            secondary: Some("excited".to_string()),
            tertiary: Some("worried".to_string()),
        };
        assert!(!wheel.contains_path(&path));
    }

    #[test]
    fn test_primary_index_roundtrip() {
        for primary in Primary::ALL {
            assert_eq!(Primary::ALL[primary.index()], primary);
        }
    }

    #[test]
    fn test_primary_serde_snake_case() {
        let json = serde_json::to_string(&Primary::Scared).unwrap();
        assert_eq!(json, "\"scared\"");
        let parsed: Primary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Primary::Scared);
    }

    #[test]
    fn test_positive_shell_families() {
        assert!(Primary::Joyful.is_positive());
        assert!(Primary::Powerful.is_positive());
        assert!(Primary::Peaceful.is_positive());
        assert!(!Primary::Sad.is_positive());
        assert!(!Primary::Mad.is_positive());
        assert!(!Primary::Scared.is_positive());
    }

    #[test]
    fn test_valence_priors_in_domain() {
        for primary in Primary::ALL {
            let v = primary.valence_prior();
            let a = primary.arousal_prior();
            assert!((-1.0..=1.0).contains(&v));
            assert!((0.0..=1.0).contains(&a));
        }
    }
}
