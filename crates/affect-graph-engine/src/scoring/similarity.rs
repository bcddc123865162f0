//! Wheel-label similarity scores.
//!
//! The pipeline scores the reflection text against every wheel label in one
//! batched provider call (6 primaries + 36 secondaries + 216 tertiaries);
//! this module fixes the candidate ordering, folds the flat score vector
//! back into per-level lookups, and provides the deterministic lexical
//! fallback used when the embedding provider is unavailable.

use std::collections::{HashMap, HashSet};

use affect_graph_core::taxonomy::{EmotionWheel, Primary, SECONDARY_COUNT, TERTIARY_COUNT};

/// Similarity of the text to every wheel label.
#[derive(Debug, Clone)]
pub struct WheelSimilarity {
    core: [f32; 6],
    secondaries: HashMap<Primary, Vec<(&'static str, f32)>>,
    tertiaries: HashMap<(Primary, &'static str), Vec<(&'static str, f32)>>,
}

impl WheelSimilarity {
    /// Candidate phrases in the canonical batch order.
    ///
    /// Order: the 6 primary labels, then each primary's 6 secondaries, then
    /// each (primary, secondary)'s 6 tertiaries.
    pub fn candidates(wheel: &EmotionWheel) -> Vec<&'static str> {
        let mut out = Vec::with_capacity(6 + 36 + 216);
        for primary in Primary::ALL {
            out.push(primary.label());
        }
        for primary in Primary::ALL {
            out.extend(wheel.secondaries(primary));
        }
        for primary in Primary::ALL {
            for secondary in wheel.secondaries(primary) {
                out.extend(
                    wheel
                        .tertiaries(primary, secondary)
                        .expect("secondary from wheel"),
                );
            }
        }
        out
    }

    /// Fold a flat score vector (in [`Self::candidates`] order) back into
    /// per-level lookups. Scores are clamped to `[0, 1]`.
    ///
    /// Returns `None` when `scores` does not match the candidate count.
    pub fn from_scores(wheel: &EmotionWheel, scores: &[f32]) -> Option<Self> {
        let expected = 6 + 6 * SECONDARY_COUNT + 36 * TERTIARY_COUNT;
        if scores.len() != expected {
            return None;
        }
        let clamp = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };

        let mut core = [0.0f32; 6];
        for primary in Primary::ALL {
            core[primary.index()] = clamp(scores[primary.index()]);
        }

        let mut cursor = 6;
        let mut secondaries = HashMap::new();
        for primary in Primary::ALL {
            let labels = wheel.secondaries(primary);
            let entry: Vec<(&'static str, f32)> = labels
                .iter()
                .enumerate()
                .map(|(i, label)| (*label, clamp(scores[cursor + i])))
                .collect();
            secondaries.insert(primary, entry);
            cursor += SECONDARY_COUNT;
        }

        let mut tertiaries = HashMap::new();
        for primary in Primary::ALL {
            for secondary in wheel.secondaries(primary) {
                let leaves = wheel
                    .tertiaries(primary, secondary)
                    .expect("secondary from wheel");
                let entry: Vec<(&'static str, f32)> = leaves
                    .iter()
                    .enumerate()
                    .map(|(i, label)| (*label, clamp(scores[cursor + i])))
                    .collect();
                tertiaries.insert((primary, secondary), entry);
                cursor += TERTIARY_COUNT;
            }
        }

        Some(Self {
            core,
            secondaries,
            tertiaries,
        })
    }

    /// Deterministic lexical fallback: token-overlap similarity for every
    /// candidate, used when the embedding provider is down.
    pub fn lexical(wheel: &EmotionWheel, text: &str) -> Self {
        let candidates = Self::candidates(wheel);
        let lowered = text.to_lowercase();
        let tokens: HashSet<String> = lexical_tokens(&lowered);
        let scores: Vec<f32> = candidates
            .iter()
            .map(|c| lexical_similarity(&tokens, &lowered, c))
            .collect();
        Self::from_scores(wheel, &scores).expect("candidate order is fixed")
    }

    /// Similarity of the text to a primary's own label.
    #[inline]
    pub fn core(&self, primary: Primary) -> f32 {
        self.core[primary.index()]
    }

    /// Best tertiary similarity anywhere under a primary.
    pub fn best_tertiary(&self, primary: Primary) -> f32 {
        self.tertiaries
            .iter()
            .filter(|((p, _), _)| *p == primary)
            .flat_map(|(_, scores)| scores.iter().map(|(_, s)| *s))
            .fold(0.0, f32::max)
    }

    /// Scored secondary candidates under a primary.
    pub fn secondary_scores(&self, primary: Primary) -> &[(&'static str, f32)] {
        self.secondaries
            .get(&primary)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Scored tertiary candidates under a (primary, secondary) pair.
    pub fn tertiary_scores(&self, primary: Primary, secondary: &str) -> &[(&'static str, f32)] {
        // Lookup by the wheel's own static label so the borrowed key matches.
        self.tertiaries
            .iter()
            .find(|((p, s), _)| *p == primary && *s == secondary)
            .map(|(_, v)| v.as_slice())
            .unwrap_or(&[])
    }
}

pub(crate) fn lexical_tokens(lowered: &str) -> HashSet<String> {
    lowered
        .split(|c: char| !c.is_alphanumeric() && c != '-' && c != '\'')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Token-overlap similarity with a verbatim-phrase bonus.
pub(crate) fn lexical_similarity(tokens: &HashSet<String>, lowered: &str, candidate: &str) -> f32 {
    let cand_tokens: Vec<&str> = candidate.split(' ').collect();
    if cand_tokens.is_empty() || tokens.is_empty() {
        return 0.0;
    }
    let overlap = cand_tokens
        .iter()
        .filter(|t| tokens.contains(**t))
        .count() as f32;
    let union = cand_tokens.len() as f32 + tokens.len() as f32 - overlap;
    let jaccard = if union > 0.0 { overlap / union } else { 0.0 };
    let verbatim = if lowered.contains(candidate) { 0.6 } else { 0.0 };
    (jaccard + verbatim).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_count() {
        let wheel = EmotionWheel::load().unwrap();
        assert_eq!(WheelSimilarity::candidates(&wheel).len(), 258);
    }

    #[test]
    fn test_from_scores_rejects_wrong_length() {
        let wheel = EmotionWheel::load().unwrap();
        assert!(WheelSimilarity::from_scores(&wheel, &[0.5; 10]).is_none());
    }

    #[test]
    fn test_lexical_verbatim_hit() {
        let wheel = EmotionWheel::load().unwrap();
        let sims = WheelSimilarity::lexical(&wheel, "i feel so anxious about tomorrow");
        let anxious = sims
            .secondary_scores(Primary::Scared)
            .iter()
            .find(|(label, _)| *label == "anxious")
            .unwrap()
            .1;
        assert!(anxious > 0.5);
        let cheerful = sims
            .secondary_scores(Primary::Joyful)
            .iter()
            .find(|(label, _)| *label == "cheerful")
            .unwrap()
            .1;
        assert!(cheerful < 0.1);
    }

    #[test]
    fn test_best_tertiary_tracks_leaf_hit() {
        let wheel = EmotionWheel::load().unwrap();
        let sims = WheelSimilarity::lexical(&wheel, "feeling really worried and tense today");
        assert!(sims.best_tertiary(Primary::Scared) > 0.5);
        assert!(sims.best_tertiary(Primary::Joyful) < 0.2);
    }

    #[test]
    fn test_nan_scores_zeroed() {
        let wheel = EmotionWheel::load().unwrap();
        let mut scores = vec![0.5f32; 258];
        scores[0] = f32::NAN;
        let sims = WheelSimilarity::from_scores(&wheel, &scores).unwrap();
        assert_eq!(sims.core(Primary::Joyful), 0.0);
    }
}
