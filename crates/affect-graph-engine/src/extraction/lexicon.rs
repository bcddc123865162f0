//! Categorized affect lexicon.
//!
//! Maps words and short phrases (up to three tokens) to anchor, emotion,
//! and marker categories. Lookup is case-insensitive; the compiled default
//! table lives in [`super::default_terms`] and callers may extend or
//! replace entries at runtime for tests.

use std::collections::HashMap;

use affect_graph_core::taxonomy::Primary;
use affect_graph_core::types::{EventDomain, NegationStrength, ProfanityCategory, RiskTier};

use super::default_terms;

/// Event anchor polarity. Effort words are tracked but excluded from
/// valence sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorCategory {
    PositiveEvent,
    NegativeEvent,
    Effort,
}

/// One event anchor entry.
#[derive(Debug, Clone, Copy)]
pub struct AnchorEntry {
    pub category: AnchorCategory,
    /// Anchor strength in `(0, 1]`.
    pub weight: f32,
    /// Stable event label carried into history and thread detection.
    pub label: &'static str,
}

/// One emotion-term entry.
#[derive(Debug, Clone, Copy)]
pub struct EmotionEntry {
    pub primary: Primary,
    /// Signed valence of the term in `[-1, 1]`.
    pub valence: f32,
    /// Arousal of the term in `[0, 1]`.
    pub arousal: f32,
    pub weight: f32,
}

/// One risk-term entry.
#[derive(Debug, Clone, Copy)]
pub struct RiskEntry {
    pub tier: RiskTier,
    pub label: &'static str,
}

/// The full categorized lexicon.
///
/// # Example
///
/// ```
/// use affect_graph_engine::extraction::AffectLexicon;
///
/// let lexicon = AffectLexicon::default();
/// assert!(lexicon.emotion("terrified").is_some());
/// assert!(lexicon.anchor("promoted").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct AffectLexicon {
    anchors: HashMap<String, AnchorEntry>,
    emotions: HashMap<String, EmotionEntry>,
    hedges: HashMap<String, ()>,
    intensifiers: HashMap<String, ()>,
    agency: HashMap<String, ()>,
    negators: HashMap<String, NegationStrength>,
    scope_breakers: HashMap<String, ()>,
    domains: HashMap<String, EventDomain>,
    profanity: HashMap<String, ProfanityCategory>,
    risk: HashMap<String, RiskEntry>,
    sarcasm_cues: Vec<&'static str>,
    max_phrase_tokens: usize,
}

impl AffectLexicon {
    /// Create an empty lexicon.
    pub fn empty() -> Self {
        Self {
            anchors: HashMap::new(),
            emotions: HashMap::new(),
            hedges: HashMap::new(),
            intensifiers: HashMap::new(),
            agency: HashMap::new(),
            negators: HashMap::new(),
            scope_breakers: HashMap::new(),
            domains: HashMap::new(),
            profanity: HashMap::new(),
            risk: HashMap::new(),
            sarcasm_cues: Vec::new(),
            max_phrase_tokens: 1,
        }
    }

    /// Add an event anchor.
    pub fn add_anchor(&mut self, term: &str, category: AnchorCategory, weight: f32) {
        self.add_anchor_labeled(term, category, weight, "event");
    }

    /// Add an event anchor with an explicit event label.
    pub fn add_anchor_labeled(
        &mut self,
        term: &str,
        category: AnchorCategory,
        weight: f32,
        label: &'static str,
    ) {
        let key = term.to_lowercase();
        self.track_phrase_len(&key);
        self.anchors.insert(
            key,
            AnchorEntry {
                category,
                weight: weight.clamp(0.0, 1.0),
                label,
            },
        );
    }

    /// Add an emotion term.
    pub fn add_emotion(&mut self, term: &str, primary: Primary, valence: f32, arousal: f32) {
        let key = term.to_lowercase();
        self.track_phrase_len(&key);
        self.emotions.insert(
            key,
            EmotionEntry {
                primary,
                valence: valence.clamp(-1.0, 1.0),
                arousal: arousal.clamp(0.0, 1.0),
                weight: 1.0,
            },
        );
    }

    fn track_phrase_len(&mut self, key: &str) {
        let tokens = key.split(' ').count();
        if tokens > self.max_phrase_tokens {
            self.max_phrase_tokens = tokens;
        }
    }

    pub fn anchor(&self, term: &str) -> Option<&AnchorEntry> {
        self.anchors.get(term)
    }

    pub fn emotion(&self, term: &str) -> Option<&EmotionEntry> {
        self.emotions.get(term)
    }

    pub fn is_hedge(&self, term: &str) -> bool {
        self.hedges.contains_key(term)
    }

    pub fn is_intensifier(&self, term: &str) -> bool {
        self.intensifiers.contains_key(term)
    }

    pub fn is_agency(&self, term: &str) -> bool {
        self.agency.contains_key(term)
    }

    pub fn negator(&self, term: &str) -> Option<NegationStrength> {
        self.negators.get(term).copied()
    }

    /// Whether this token breaks a negation scope (concession conjunctions).
    pub fn breaks_scope(&self, term: &str) -> bool {
        self.scope_breakers.contains_key(term)
    }

    pub fn domain(&self, term: &str) -> Option<EventDomain> {
        self.domains.get(term).copied()
    }

    pub fn profanity(&self, term: &str) -> Option<ProfanityCategory> {
        self.profanity.get(term).copied()
    }

    pub fn risk(&self, term: &str) -> Option<&RiskEntry> {
        self.risk.get(term)
    }

    /// Sarcasm cue phrases, matched against the whole normalized text.
    pub fn sarcasm_cues(&self) -> &[&'static str] {
        &self.sarcasm_cues
    }

    /// Longest phrase length in tokens, bounding the n-gram scan.
    pub fn max_phrase_tokens(&self) -> usize {
        self.max_phrase_tokens
    }
}

impl Default for AffectLexicon {
    /// The compiled default table.
    fn default() -> Self {
        let mut lex = Self::empty();

        for &(term, weight, label) in default_terms::POSITIVE_ANCHORS {
            lex.add_anchor_labeled(term, AnchorCategory::PositiveEvent, weight, label);
        }
        for &(term, weight, label) in default_terms::NEGATIVE_ANCHORS {
            lex.add_anchor_labeled(term, AnchorCategory::NegativeEvent, weight, label);
        }
        for &term in default_terms::EFFORT_TERMS {
            lex.add_anchor_labeled(term, AnchorCategory::Effort, 0.5, "effort");
        }
        for &(term, primary, valence, arousal) in default_terms::EMOTION_TERMS {
            lex.add_emotion(term, primary, valence, arousal);
        }
        for &term in default_terms::HEDGES {
            lex.track_phrase_len(term);
            lex.hedges.insert(term.to_string(), ());
        }
        for &term in default_terms::INTENSIFIERS {
            lex.intensifiers.insert(term.to_string(), ());
        }
        for &term in default_terms::AGENCY_VERBS {
            lex.agency.insert(term.to_string(), ());
        }
        for &(term, strength) in default_terms::NEGATORS {
            lex.track_phrase_len(term);
            lex.negators.insert(term.to_string(), strength);
        }
        for &term in default_terms::SCOPE_BREAKERS {
            lex.scope_breakers.insert(term.to_string(), ());
        }
        for &(term, domain) in default_terms::DOMAIN_TERMS {
            lex.domains.insert(term.to_string(), domain);
        }
        for &(term, category) in default_terms::PROFANITY_TERMS {
            lex.profanity.insert(term.to_string(), category);
        }
        for &(term, tier, label) in default_terms::RISK_TERMS {
            lex.track_phrase_len(term);
            lex.risk.insert(term.to_string(), RiskEntry { tier, label });
        }
        lex.sarcasm_cues = default_terms::SARCASM_CUES.to_vec();

        lex
    }
}
