//! Default lexicon tables.
//!
//! Curated English term lists backing [`super::AffectLexicon::default`].
//! Multi-token entries (up to three tokens) are matched as phrases by the
//! n-gram scan. Weights are anchor strengths in `(0, 1]`; emotion tuples
//! are `(term, family, signed valence, arousal)`.

use affect_graph_core::taxonomy::Primary;
use affect_graph_core::types::{EventDomain, NegationStrength, ProfanityCategory, RiskTier};

/// Positive event anchors: `(term, weight, event label)`.
pub const POSITIVE_ANCHORS: &[(&str, f32, &str)] = &[
    ("promoted", 0.9, "career_advance"),
    ("promotion", 0.9, "career_advance"),
    ("raise", 0.7, "career_advance"),
    ("hired", 0.8, "career_advance"),
    ("new job", 0.8, "career_advance"),
    ("passed", 0.7, "achievement"),
    ("graduated", 0.9, "achievement"),
    ("won", 0.8, "achievement"),
    ("award", 0.8, "achievement"),
    ("succeeded", 0.8, "achievement"),
    ("accomplished", 0.7, "achievement"),
    ("finished", 0.5, "achievement"),
    ("completed", 0.5, "achievement"),
    ("accepted", 0.7, "acceptance"),
    ("approved", 0.6, "acceptance"),
    ("engaged", 0.8, "relationship_milestone"),
    ("married", 0.8, "relationship_milestone"),
    ("anniversary", 0.6, "relationship_milestone"),
    ("reunited", 0.7, "relationship_milestone"),
    ("recovered", 0.8, "health_improvement"),
    ("healed", 0.7, "health_improvement"),
    ("healthy again", 0.7, "health_improvement"),
    ("paid off", 0.7, "financial_gain"),
    ("saved", 0.5, "financial_gain"),
    ("bonus", 0.7, "financial_gain"),
    ("vacation", 0.6, "leisure_event"),
    ("celebrated", 0.7, "leisure_event"),
    ("birthday", 0.5, "leisure_event"),
];

/// Negative event anchors: `(term, weight, event label)`.
pub const NEGATIVE_ANCHORS: &[(&str, f32, &str)] = &[
    ("fired", 0.9, "career_setback"),
    ("laid off", 0.9, "career_setback"),
    ("demoted", 0.8, "career_setback"),
    ("rejected", 0.8, "rejection"),
    ("turned down", 0.7, "rejection"),
    ("failed", 0.8, "failure"),
    ("failing", 0.7, "failure"),
    ("flunked", 0.8, "failure"),
    ("mistake", 0.5, "failure"),
    ("messed up", 0.6, "failure"),
    ("breakup", 0.9, "relationship_conflict"),
    ("broke up", 0.9, "relationship_conflict"),
    ("divorce", 0.9, "relationship_conflict"),
    ("argument", 0.6, "relationship_conflict"),
    ("fight", 0.6, "relationship_conflict"),
    ("fought", 0.6, "relationship_conflict"),
    ("yelled", 0.6, "relationship_conflict"),
    ("accident", 0.8, "health_event"),
    ("injured", 0.8, "health_event"),
    ("sick", 0.6, "health_event"),
    ("diagnosed", 0.7, "health_event"),
    ("hospital", 0.7, "health_event"),
    ("relapse", 0.8, "health_event"),
    ("died", 0.95, "loss"),
    ("death", 0.95, "loss"),
    ("funeral", 0.9, "loss"),
    ("lost", 0.6, "loss"),
    ("debt", 0.7, "financial_strain"),
    ("evicted", 0.9, "financial_strain"),
    ("overdue", 0.6, "financial_strain"),
    ("broke", 0.6, "financial_strain"),
    ("cancelled", 0.5, "plan_disruption"),
    ("fell through", 0.6, "plan_disruption"),
    ("missed", 0.5, "plan_disruption"),
    ("deadline slipped", 0.6, "plan_disruption"),
];

/// Effort words: tracked for agency texture, excluded from valence sums.
pub const EFFORT_TERMS: &[&str] = &[
    "tried",
    "trying",
    "worked",
    "working",
    "studied",
    "practiced",
    "prepared",
    "pushed",
    "attempted",
    "grinding",
    "effort",
];

/// Emotion terms: `(term, family, signed valence, arousal)`.
pub const EMOTION_TERMS: &[(&str, Primary, f32, f32)] = &[
    // Joyful
    ("happy", Primary::Joyful, 0.8, 0.55),
    ("glad", Primary::Joyful, 0.6, 0.45),
    ("delighted", Primary::Joyful, 0.85, 0.65),
    ("thrilled", Primary::Joyful, 0.9, 0.85),
    ("excited", Primary::Joyful, 0.8, 0.8),
    ("cheerful", Primary::Joyful, 0.7, 0.55),
    ("joyful", Primary::Joyful, 0.85, 0.6),
    ("grateful", Primary::Joyful, 0.75, 0.4),
    ("thankful", Primary::Joyful, 0.7, 0.35),
    ("amused", Primary::Joyful, 0.6, 0.5),
    ("hopeful", Primary::Joyful, 0.65, 0.45),
    // Powerful
    ("proud", Primary::Powerful, 0.8, 0.6),
    ("confident", Primary::Powerful, 0.7, 0.5),
    ("strong", Primary::Powerful, 0.6, 0.5),
    ("capable", Primary::Powerful, 0.6, 0.45),
    ("determined", Primary::Powerful, 0.6, 0.6),
    ("empowered", Primary::Powerful, 0.75, 0.6),
    ("brave", Primary::Powerful, 0.65, 0.55),
    ("unstoppable", Primary::Powerful, 0.8, 0.75),
    ("in control", Primary::Powerful, 0.6, 0.4),
    // Peaceful
    ("calm", Primary::Peaceful, 0.5, 0.15),
    ("relaxed", Primary::Peaceful, 0.6, 0.15),
    ("peaceful", Primary::Peaceful, 0.65, 0.15),
    ("serene", Primary::Peaceful, 0.65, 0.15),
    ("at ease", Primary::Peaceful, 0.6, 0.2),
    ("safe", Primary::Peaceful, 0.55, 0.2),
    ("comfortable", Primary::Peaceful, 0.55, 0.2),
    ("grounded", Primary::Peaceful, 0.55, 0.25),
    ("content", Primary::Peaceful, 0.6, 0.25),
    // Sad
    ("sad", Primary::Sad, -0.7, 0.3),
    ("unhappy", Primary::Sad, -0.65, 0.3),
    ("down", Primary::Sad, -0.5, 0.25),
    ("miserable", Primary::Sad, -0.85, 0.35),
    ("depressed", Primary::Sad, -0.85, 0.3),
    ("heartbroken", Primary::Sad, -0.9, 0.45),
    ("lonely", Primary::Sad, -0.7, 0.3),
    ("hopeless", Primary::Sad, -0.9, 0.3),
    ("gloomy", Primary::Sad, -0.55, 0.25),
    ("disappointed", Primary::Sad, -0.6, 0.35),
    ("ashamed", Primary::Sad, -0.7, 0.45),
    ("guilty", Primary::Sad, -0.65, 0.45),
    ("empty", Primary::Sad, -0.7, 0.15),
    ("numb", Primary::Sad, -0.55, 0.1),
    ("worthless", Primary::Sad, -0.9, 0.35),
    ("exhausted", Primary::Sad, -0.5, 0.2),
    // Mad
    ("angry", Primary::Mad, -0.7, 0.8),
    ("mad", Primary::Mad, -0.65, 0.75),
    ("furious", Primary::Mad, -0.85, 0.9),
    ("annoyed", Primary::Mad, -0.5, 0.55),
    ("irritated", Primary::Mad, -0.5, 0.6),
    ("frustrated", Primary::Mad, -0.6, 0.65),
    ("resentful", Primary::Mad, -0.65, 0.55),
    ("bitter", Primary::Mad, -0.6, 0.5),
    ("livid", Primary::Mad, -0.85, 0.9),
    ("outraged", Primary::Mad, -0.8, 0.85),
    ("fed up", Primary::Mad, -0.6, 0.6),
    // Scared
    ("afraid", Primary::Scared, -0.65, 0.7),
    ("scared", Primary::Scared, -0.7, 0.75),
    ("terrified", Primary::Scared, -0.85, 0.9),
    ("anxious", Primary::Scared, -0.6, 0.75),
    ("nervous", Primary::Scared, -0.5, 0.7),
    ("worried", Primary::Scared, -0.55, 0.6),
    ("panicked", Primary::Scared, -0.8, 0.9),
    ("overwhelmed", Primary::Scared, -0.65, 0.75),
    ("stressed", Primary::Scared, -0.6, 0.7),
    ("uneasy", Primary::Scared, -0.45, 0.55),
    ("frightened", Primary::Scared, -0.7, 0.8),
    ("insecure", Primary::Scared, -0.55, 0.5),
    ("helpless", Primary::Scared, -0.75, 0.5),
];

/// Hedging markers, lowering willingness to express.
pub const HEDGES: &[&str] = &[
    "maybe",
    "perhaps",
    "possibly",
    "probably",
    "somewhat",
    "i guess",
    "i suppose",
    "sort of",
    "kind of",
    "a bit",
    "not sure",
    "whatever",
];

/// Intensity amplifiers.
pub const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "so",
    "extremely",
    "totally",
    "absolutely",
    "completely",
    "utterly",
    "incredibly",
    "super",
];

/// Agency verbs: markers of control over the event.
pub const AGENCY_VERBS: &[&str] = &[
    "decided",
    "chose",
    "managed",
    "handled",
    "tackled",
    "overcame",
    "organized",
    "planned",
    "built",
    "fixed",
    "led",
    "refused",
    "confronted",
    "prioritized",
    "committed",
];

/// Negators with their strength class.
pub const NEGATORS: &[(&str, NegationStrength)] = &[
    ("not", NegationStrength::Moderate),
    ("no", NegationStrength::Moderate),
    ("never", NegationStrength::Strong),
    ("not at all", NegationStrength::Strong),
    ("no way", NegationStrength::Strong),
    ("hardly", NegationStrength::Weak),
    ("barely", NegationStrength::Weak),
    ("scarcely", NegationStrength::Weak),
    ("without", NegationStrength::Weak),
    ("don't", NegationStrength::Moderate),
    ("didn't", NegationStrength::Moderate),
    ("doesn't", NegationStrength::Moderate),
    ("isn't", NegationStrength::Moderate),
    ("wasn't", NegationStrength::Moderate),
    ("aren't", NegationStrength::Moderate),
    ("can't", NegationStrength::Moderate),
    ("cannot", NegationStrength::Moderate),
    ("couldn't", NegationStrength::Moderate),
    ("won't", NegationStrength::Moderate),
    ("wouldn't", NegationStrength::Moderate),
    ("shouldn't", NegationStrength::Moderate),
];

/// Conjunctions that break a negation scope.
pub const SCOPE_BREAKERS: &[&str] = &[
    "but", "although", "though", "however", "yet", "still", "except", "anyway",
];

/// Domain keywords.
pub const DOMAIN_TERMS: &[(&str, EventDomain)] = &[
    ("work", EventDomain::Work),
    ("job", EventDomain::Work),
    ("boss", EventDomain::Work),
    ("office", EventDomain::Work),
    ("meeting", EventDomain::Work),
    ("deadline", EventDomain::Work),
    ("project", EventDomain::Work),
    ("coworker", EventDomain::Work),
    ("colleague", EventDomain::Work),
    ("shift", EventDomain::Work),
    ("interview", EventDomain::Work),
    ("career", EventDomain::Work),
    ("client", EventDomain::Work),
    ("friend", EventDomain::Relationships),
    ("partner", EventDomain::Relationships),
    ("wife", EventDomain::Relationships),
    ("husband", EventDomain::Relationships),
    ("boyfriend", EventDomain::Relationships),
    ("girlfriend", EventDomain::Relationships),
    ("mom", EventDomain::Relationships),
    ("dad", EventDomain::Relationships),
    ("mother", EventDomain::Relationships),
    ("father", EventDomain::Relationships),
    ("family", EventDomain::Relationships),
    ("relationship", EventDomain::Relationships),
    ("marriage", EventDomain::Relationships),
    ("son", EventDomain::Relationships),
    ("daughter", EventDomain::Relationships),
    ("doctor", EventDomain::Health),
    ("hospital", EventDomain::Health),
    ("sick", EventDomain::Health),
    ("pain", EventDomain::Health),
    ("sleep", EventDomain::Health),
    ("diet", EventDomain::Health),
    ("therapy", EventDomain::Health),
    ("medication", EventDomain::Health),
    ("diagnosis", EventDomain::Health),
    ("injury", EventDomain::Health),
    ("headache", EventDomain::Health),
    ("tired", EventDomain::Health),
    ("learning", EventDomain::SelfGrowth),
    ("course", EventDomain::SelfGrowth),
    ("goal", EventDomain::SelfGrowth),
    ("habit", EventDomain::SelfGrowth),
    ("journal", EventDomain::SelfGrowth),
    ("meditation", EventDomain::SelfGrowth),
    ("reading", EventDomain::SelfGrowth),
    ("skill", EventDomain::SelfGrowth),
    ("progress", EventDomain::SelfGrowth),
    ("growth", EventDomain::SelfGrowth),
    ("money", EventDomain::Finance),
    ("rent", EventDomain::Finance),
    ("bills", EventDomain::Finance),
    ("debt", EventDomain::Finance),
    ("salary", EventDomain::Finance),
    ("savings", EventDomain::Finance),
    ("budget", EventDomain::Finance),
    ("loan", EventDomain::Finance),
    ("mortgage", EventDomain::Finance),
    ("paycheck", EventDomain::Finance),
    ("vacation", EventDomain::Leisure),
    ("trip", EventDomain::Leisure),
    ("game", EventDomain::Leisure),
    ("movie", EventDomain::Leisure),
    ("music", EventDomain::Leisure),
    ("party", EventDomain::Leisure),
    ("hobby", EventDomain::Leisure),
    ("concert", EventDomain::Leisure),
    ("weekend", EventDomain::Leisure),
    ("beach", EventDomain::Leisure),
    ("hiking", EventDomain::Leisure),
];

/// Profanity terms by category.
pub const PROFANITY_TERMS: &[(&str, ProfanityCategory)] = &[
    ("damn", ProfanityCategory::Mild),
    ("dammit", ProfanityCategory::Mild),
    ("hell", ProfanityCategory::Mild),
    ("crap", ProfanityCategory::Mild),
    ("sucks", ProfanityCategory::Mild),
    ("freaking", ProfanityCategory::Mild),
    ("bloody", ProfanityCategory::Mild),
    ("fuck", ProfanityCategory::Strong),
    ("fucking", ProfanityCategory::Strong),
    ("shit", ProfanityCategory::Strong),
    ("bullshit", ProfanityCategory::Strong),
    ("asshole", ProfanityCategory::Strong),
    ("bitch", ProfanityCategory::Strong),
];

/// Risk terms: `(term, tier, stable signal label)`.
pub const RISK_TERMS: &[(&str, RiskTier, &str)] = &[
    ("suicide", RiskTier::Critical, "self_harm_language"),
    ("suicidal", RiskTier::Critical, "self_harm_language"),
    ("kill myself", RiskTier::Critical, "self_harm_language"),
    ("end my life", RiskTier::Critical, "self_harm_language"),
    ("end it all", RiskTier::Critical, "self_harm_language"),
    ("hurt myself", RiskTier::Critical, "self_harm_language"),
    ("self-harm", RiskTier::Critical, "self_harm_language"),
    ("no reason to live", RiskTier::Critical, "self_harm_language"),
    ("better off without", RiskTier::Critical, "burden_language"),
    ("hopeless", RiskTier::Elevated, "hopelessness_language"),
    ("worthless", RiskTier::Elevated, "worthlessness_language"),
    ("no point", RiskTier::Elevated, "hopelessness_language"),
    ("can't go on", RiskTier::Elevated, "hopelessness_language"),
    ("give up", RiskTier::Elevated, "hopelessness_language"),
    ("no way out", RiskTier::Elevated, "entrapment_language"),
    ("trapped", RiskTier::Elevated, "entrapment_language"),
    ("unbearable", RiskTier::Elevated, "overwhelm_language"),
    ("hate myself", RiskTier::Elevated, "self_criticism_language"),
    ("falling apart", RiskTier::Elevated, "overwhelm_language"),
    ("panic attack", RiskTier::Elevated, "panic_language"),
    ("can't sleep", RiskTier::Trend, "sleep_disruption"),
    ("haven't slept", RiskTier::Trend, "sleep_disruption"),
    ("drinking again", RiskTier::Trend, "substance_language"),
    ("stopped eating", RiskTier::Trend, "appetite_disruption"),
];

/// Markers of low control over the event.
pub const LOW_CONTROL_MARKERS: &[&str] = &[
    "was forced",
    "they decided",
    "out of my control",
    "couldn't do anything",
    "had no choice",
    "no control",
    "no say",
    "out of nowhere",
    "blindsided",
];

/// Markers of a prospective (planned) event.
pub const FUTURE_MARKERS: &[&str] = &[
    "will",
    "tomorrow",
    "going to",
    "planning",
    "next week",
    "next month",
    "upcoming",
    "about to",
];

/// Markers of an event that did not happen.
pub const AVERTED_MARKERS: &[&str] = &[
    "didn't happen",
    "fell through",
    "cancelled",
    "called off",
    "never happened",
    "almost",
    "nearly",
];

/// Sarcasm cue phrases, matched against the whole normalized text.
pub const SARCASM_CUES: &[&str] = &[
    "yeah right",
    "oh great",
    "just great",
    "just perfect",
    "oh wonderful",
    "how wonderful",
    "what a surprise",
    "lucky me",
    "thanks a lot",
    "oh joy",
    "as usual",
    "because of course",
];
