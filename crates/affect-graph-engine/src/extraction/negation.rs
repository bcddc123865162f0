//! Negation scope detection.
//!
//! Negators project a forward token window. The window breaks early at a
//! clause boundary (sentence punctuation) or a concession conjunction, so
//! "not happy, but proud" negates "happy" and leaves "proud" untouched.

use affect_graph_core::types::NegationStrength;

use super::lexicon::AffectLexicon;
use super::Token;

/// One negator occurrence and the token range it affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NegationSpan {
    /// Index of the negator token (or the first token of a negator phrase).
    pub negator_index: usize,
    /// First affected token index.
    pub start: usize,
    /// One past the last affected token index.
    pub end: usize,
    pub strength: NegationStrength,
}

/// Scan tokens for negators and compute their forward scopes.
///
/// Multi-token negators ("not at all") are matched longest-first; their
/// scope starts after the full phrase.
pub fn scan(tokens: &[Token], lexicon: &AffectLexicon, scope_tokens: usize) -> Vec<NegationSpan> {
    let mut spans = Vec::new();
    let max_phrase = lexicon.max_phrase_tokens().min(3);
    let mut i = 0;

    while i < tokens.len() {
        let mut matched: Option<(usize, NegationStrength)> = None;
        for len in (1..=max_phrase.min(tokens.len() - i)).rev() {
            let phrase = join_tokens(&tokens[i..i + len]);
            if let Some(strength) = lexicon.negator(&phrase) {
                matched = Some((len, strength));
                break;
            }
        }

        if let Some((len, strength)) = matched {
            let start = i + len;
            let mut end = (start + scope_tokens).min(tokens.len());
            for j in start..end {
                if lexicon.breaks_scope(&tokens[j].text) {
                    end = j;
                    break;
                }
                // A clause boundary closes the scope after its token.
                if tokens[j].ends_clause {
                    end = j + 1;
                    break;
                }
            }
            spans.push(NegationSpan {
                negator_index: i,
                start,
                end,
                strength,
            });
            i += len;
        } else {
            i += 1;
        }
    }

    spans
}

/// The strongest negation effect covering a token index, if any.
///
/// Litotes is classified at application time from the affected term's
/// polarity, so only Weak/Moderate/Strong appear here.
pub fn effect_at(spans: &[NegationSpan], index: usize) -> Option<NegationStrength> {
    let mut best: Option<NegationStrength> = None;
    for span in spans {
        if index >= span.start && index < span.end {
            best = Some(match (best, span.strength) {
                (None, s) => s,
                (Some(prev), s) => strongest(prev, s),
            });
        }
    }
    best
}

fn strongest(a: NegationStrength, b: NegationStrength) -> NegationStrength {
    let rank = |s: NegationStrength| match s {
        NegationStrength::Weak => 0,
        NegationStrength::Moderate => 1,
        NegationStrength::Strong => 2,
        NegationStrength::Litotes => 3,
    };
    if rank(b) > rank(a) {
        b
    } else {
        a
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&token.text);
    }
    out
}
