//! Lexicon-based feature extraction.
//!
//! Scans normalized reflection text against the categorized lexicon and
//! produces [`LinguisticFeatures`]: anchor and emotion hits with negation
//! effects applied, marker counts, linguistic flags, risk hits, and event
//! labels. Everything downstream (valence split, scoring, selection, risk)
//! reads these features rather than re-scanning text.

pub mod default_terms;
mod lexicon;
mod negation;
mod valence;

pub use lexicon::{AffectLexicon, AnchorCategory, AnchorEntry, EmotionEntry, RiskEntry};
pub use negation::{effect_at, scan as scan_negation, NegationSpan};
pub use valence::{derive_event_context, derive_expressed, ValenceSplit, ValenceSplitter};

use std::collections::HashMap;

use affect_graph_core::types::{
    EventDomain, LinguisticFlags, NegationFlag, NegationStrength, NeutralFlags, ProfanityCategory,
    RiskSignal,
};

use crate::config::ExtractionConfig;

/// One token of normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased token with surrounding punctuation stripped. Internal
    /// apostrophes and hyphens survive ("didn't", "self-harm").
    pub text: String,
    /// Whether the raw token ended a clause (`.` `;` `!` `?`).
    pub ends_clause: bool,
}

/// Split normalized text into tokens, recording clause boundaries.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|raw| {
            let ends_clause = raw
                .chars()
                .rev()
                .take_while(|c| !c.is_alphanumeric())
                .any(|c| matches!(c, '.' | ';' | '!' | '?'));
            let trimmed: String = raw
                .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-')
                .to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(Token {
                    text: trimmed,
                    ends_clause,
                })
            }
        })
        .collect()
}

/// An event-anchor occurrence.
#[derive(Debug, Clone)]
pub struct EventHit {
    pub term: String,
    pub entry: AnchorEntry,
    pub index: usize,
    /// Negation effect covering this hit, if any.
    pub negation: Option<NegationStrength>,
}

/// An emotion-term occurrence with negation already applied.
#[derive(Debug, Clone)]
pub struct EmotionHit {
    pub term: String,
    pub entry: EmotionEntry,
    pub index: usize,
    pub negation: Option<NegationStrength>,
    /// True when a negator flipped a negative term into attenuated positive
    /// ("not unhappy").
    pub litotes: bool,
    /// Valence after negation and attenuation, signed.
    pub effective_valence: f32,
    /// Arousal after negation damping and intensifier boost.
    pub effective_arousal: f32,
    /// Contribution weight after nulling, in `[0, 1]`.
    pub effective_weight: f32,
}

/// Everything the lexicon scan extracts from one reflection.
#[derive(Debug, Clone, Default)]
pub struct LinguisticFeatures {
    pub tokens: Vec<Token>,
    pub event_hits: Vec<EventHit>,
    pub emotion_hits: Vec<EmotionHit>,
    pub hedge_count: usize,
    pub intensifier_count: usize,
    pub agency_count: usize,
    pub low_control_count: usize,
    pub future_marker_count: usize,
    pub averted_marker_count: usize,
    pub exclamation_count: usize,
    pub domain_counts: HashMap<EventDomain, usize>,
    pub negation: NegationFlag,
    pub sarcasm: bool,
    pub profanity: ProfanityCategory,
    /// 1 − unique/total token ratio; high values read as filler.
    pub repetition_ratio: f32,
    /// A fear-family term, then a concession conjunction, then an agency
    /// verb ("terrified ... but I decided ...").
    pub concession_agency: bool,
    /// Direct first-person feeling statement present.
    pub first_person_feeling: bool,
    pub risk_hits: Vec<RiskSignal>,
    /// Stable labels of what happened: anchor labels plus hit domains.
    pub event_labels: Vec<String>,
}

impl LinguisticFeatures {
    /// Lowercased token strings, for lexical overlap in thread detection.
    pub fn token_strings(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }

    /// Presence flags consumed by the neutral gate.
    pub fn neutral_flags(&self) -> NeutralFlags {
        NeutralFlags {
            emotion_presence: !self.emotion_hits.is_empty(),
            event_presence: self
                .event_hits
                .iter()
                .any(|h| h.entry.category != AnchorCategory::Effort),
        }
    }

    /// All flags in output form.
    pub fn linguistic_flags(&self) -> LinguisticFlags {
        LinguisticFlags {
            negation: self.negation,
            sarcasm: self.sarcasm,
            profanity: self.profanity,
            neutral: self.neutral_flags(),
        }
    }
}

/// The lexicon-driven feature extractor.
///
/// Pure: the same text always yields the same features.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    lexicon: AffectLexicon,
    config: ExtractionConfig,
}

impl FeatureExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            lexicon: AffectLexicon::default(),
            config: config.clone(),
        }
    }

    /// Use a custom lexicon (tests, language packs).
    pub fn with_lexicon(config: &ExtractionConfig, lexicon: AffectLexicon) -> Self {
        Self {
            lexicon,
            config: config.clone(),
        }
    }

    pub fn lexicon(&self) -> &AffectLexicon {
        &self.lexicon
    }

    /// Extract features from normalized text.
    ///
    /// `raw_text` is only consulted for surface cues (exclamation runs)
    /// that normalization preserves anyway; scanning happens on tokens.
    pub fn extract(&self, normalized_text: &str, raw_text: &str) -> LinguisticFeatures {
        let tokens = tokenize(normalized_text);
        let spans = scan_negation(&tokens, &self.lexicon, self.config.negation_scope_tokens);
        let max_phrase = self.lexicon.max_phrase_tokens().min(3);

        let mut features = LinguisticFeatures {
            exclamation_count: raw_text.matches('!').count(),
            repetition_ratio: repetition_ratio(&tokens),
            ..Default::default()
        };

        self.scan_event_anchors(&tokens, &spans, max_phrase, &mut features);
        self.scan_emotion_terms(&tokens, &spans, max_phrase, &mut features);
        self.scan_markers(&tokens, normalized_text, max_phrase, &mut features);
        self.scan_risk(&tokens, max_phrase, &mut features);

        features.sarcasm = self
            .lexicon
            .sarcasm_cues()
            .iter()
            .any(|cue| normalized_text.contains(cue));

        features.negation = negation_flag(&features, &spans);
        features.concession_agency = self.concession_agency(&tokens, &features);
        features.first_person_feeling = ["i feel", "i felt", "i am ", "i'm "]
            .iter()
            .any(|marker| normalized_text.contains(marker));

        features.event_labels = event_labels(&features);
        features.tokens = tokens;

        tracing::debug!(
            event_hits = features.event_hits.len(),
            emotion_hits = features.emotion_hits.len(),
            negation = features.negation.present,
            sarcasm = features.sarcasm,
            risk_hits = features.risk_hits.len(),
            "extracted linguistic features"
        );

        features
    }

    fn scan_event_anchors(
        &self,
        tokens: &[Token],
        spans: &[NegationSpan],
        max_phrase: usize,
        features: &mut LinguisticFeatures,
    ) {
        for (index, len, term) in match_phrases(tokens, max_phrase, |phrase| {
            self.lexicon.anchor(phrase).map(|_| phrase.to_string())
        }) {
            let entry = *self.lexicon.anchor(&term).expect("matched term present");
            let negation = (0..len).find_map(|offset| effect_at(spans, index + offset));
            features.event_hits.push(EventHit {
                term,
                entry,
                index,
                negation,
            });
        }
    }

    fn scan_emotion_terms(
        &self,
        tokens: &[Token],
        spans: &[NegationSpan],
        max_phrase: usize,
        features: &mut LinguisticFeatures,
    ) {
        for (index, len, term) in match_phrases(tokens, max_phrase, |phrase| {
            self.lexicon.emotion(phrase).map(|_| phrase.to_string())
        }) {
            let entry = *self.lexicon.emotion(&term).expect("matched term present");
            let negation = (0..len).find_map(|offset| effect_at(spans, index + offset));

            let (effective_valence, effective_weight, litotes) = match negation {
                None => (entry.valence, entry.weight, false),
                Some(_) if entry.valence < 0.0 => {
                    // Negated negative reads as attenuated positive.
                    (
                        -entry.valence * self.config.litotes_attenuation,
                        entry.weight * self.config.litotes_attenuation,
                        true,
                    )
                }
                Some(NegationStrength::Weak) => (0.0, 0.0, false),
                Some(NegationStrength::Strong) => (
                    -entry.valence * (self.config.negation_flip_factor * 1.25).min(1.0),
                    entry.weight,
                    false,
                ),
                Some(_) => (
                    -entry.valence * self.config.negation_flip_factor,
                    entry.weight,
                    false,
                ),
            };

            let mut effective_arousal = if negation.is_some() {
                entry.arousal * 0.7
            } else {
                entry.arousal
            };
            if index > 0 && self.lexicon.is_intensifier(&tokens[index - 1].text) {
                effective_arousal =
                    (effective_arousal * self.config.intensifier_arousal_boost).min(1.0);
            }

            features.emotion_hits.push(EmotionHit {
                term,
                entry,
                index,
                negation,
                litotes,
                effective_valence,
                effective_arousal,
                effective_weight,
            });
        }
    }

    fn scan_markers(
        &self,
        tokens: &[Token],
        normalized_text: &str,
        max_phrase: usize,
        features: &mut LinguisticFeatures,
    ) {
        for (_, _, _term) in match_phrases(tokens, max_phrase, |phrase| {
            if self.lexicon.is_hedge(phrase) {
                Some(())
            } else {
                None
            }
        }) {
            features.hedge_count += 1;
        }

        for token in tokens {
            if self.lexicon.is_intensifier(&token.text) {
                features.intensifier_count += 1;
            }
            if self.lexicon.is_agency(&token.text) {
                features.agency_count += 1;
            }
            if let Some(domain) = self.lexicon.domain(&token.text) {
                *features.domain_counts.entry(domain).or_insert(0) += 1;
            }
            if let Some(category) = self.lexicon.profanity(&token.text) {
                if category > features.profanity {
                    features.profanity = category;
                }
            }
        }

        for marker in default_terms::LOW_CONTROL_MARKERS {
            if normalized_text.contains(marker) {
                features.low_control_count += 1;
            }
        }
        for marker in default_terms::FUTURE_MARKERS {
            if contains_marker(normalized_text, marker) {
                features.future_marker_count += 1;
            }
        }
        for marker in default_terms::AVERTED_MARKERS {
            if contains_marker(normalized_text, marker) {
                features.averted_marker_count += 1;
            }
        }
    }

    fn scan_risk(&self, tokens: &[Token], max_phrase: usize, features: &mut LinguisticFeatures) {
        for (_, _, term) in match_phrases(tokens, max_phrase, |phrase| {
            self.lexicon.risk(phrase).map(|_| phrase.to_string())
        }) {
            let entry = self.lexicon.risk(&term).expect("matched term present");
            let signal = RiskSignal::new(entry.tier, entry.label);
            if !features.risk_hits.contains(&signal) {
                features.risk_hits.push(signal);
            }
        }
    }

    fn concession_agency(&self, tokens: &[Token], features: &LinguisticFeatures) -> bool {
        let fear_index = features
            .emotion_hits
            .iter()
            .filter(|hit| {
                hit.entry.primary == affect_graph_core::taxonomy::Primary::Scared && !hit.litotes
            })
            .map(|hit| hit.index)
            .min();
        let Some(fear_index) = fear_index else {
            return false;
        };
        let breaker_index = tokens
            .iter()
            .enumerate()
            .skip(fear_index + 1)
            .find(|(_, t)| self.lexicon.breaks_scope(&t.text))
            .map(|(i, _)| i);
        let Some(breaker_index) = breaker_index else {
            return false;
        };
        tokens
            .iter()
            .skip(breaker_index + 1)
            .any(|t| self.lexicon.is_agency(&t.text))
    }
}

/// Longest-first phrase matching over a token stream.
///
/// Consumes matched tokens within one call so "broke up" does not also hit
/// "broke". Returns `(start index, length, matched value)` triples.
fn match_phrases<T>(
    tokens: &[Token],
    max_phrase: usize,
    lookup: impl Fn(&str) -> Option<T>,
) -> Vec<(usize, usize, T)> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let mut advanced = false;
        for len in (1..=max_phrase.min(tokens.len() - i)).rev() {
            let phrase = tokens[i..i + len]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            if let Some(value) = lookup(&phrase) {
                out.push((i, len, value));
                i += len;
                advanced = true;
                break;
            }
        }
        if !advanced {
            i += 1;
        }
    }
    out
}

/// Whole-word marker containment ("will" must not match "willing").
fn contains_marker(text: &str, marker: &str) -> bool {
    if marker.contains(' ') {
        return text.contains(marker);
    }
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .any(|word| word == marker)
}

fn repetition_ratio(tokens: &[Token]) -> f32 {
    if tokens.is_empty() {
        return 0.0;
    }
    let unique: std::collections::HashSet<&str> =
        tokens.iter().map(|t| t.text.as_str()).collect();
    1.0 - unique.len() as f32 / tokens.len() as f32
}

fn negation_flag(features: &LinguisticFeatures, spans: &[NegationSpan]) -> NegationFlag {
    if spans.is_empty() {
        return NegationFlag::default();
    }
    if features.emotion_hits.iter().any(|h| h.litotes) {
        return NegationFlag::detected(NegationStrength::Litotes);
    }
    let strongest = spans
        .iter()
        .map(|s| s.strength)
        .max_by_key(|s| match s {
            NegationStrength::Weak => 0,
            NegationStrength::Moderate => 1,
            NegationStrength::Strong => 2,
            NegationStrength::Litotes => 3,
        })
        .unwrap_or(NegationStrength::Moderate);
    NegationFlag::detected(strongest)
}

fn event_labels(features: &LinguisticFeatures) -> Vec<String> {
    let mut labels: Vec<String> = features
        .event_hits
        .iter()
        .filter(|h| h.entry.category != AnchorCategory::Effort)
        .map(|h| h.entry.label.to_string())
        .collect();
    for domain in features.domain_counts.keys() {
        labels.push(format!("{domain:?}").to_lowercase());
    }
    labels.sort();
    labels.dedup();
    labels
}
