//! Static emotion wheel tables.
//!
//! Fixed data for the three-level wheel: 6 primaries, 6 secondaries per
//! primary, 6 tertiaries per secondary. [`super::EmotionWheel::load`]
//! validates this table once at startup and fails fast on any structural
//! defect; nothing else in the system reads these rows directly.

use super::Primary;

/// One primary feeling family and its six secondary branches.
pub(super) struct PrimaryRow {
    pub primary: Primary,
    pub secondaries: [SecondaryRow; 6],
}

/// One secondary feeling and its six tertiary leaves.
pub(super) struct SecondaryRow {
    pub label: &'static str,
    pub tertiaries: [&'static str; 6],
}

pub(super) const WHEEL: [PrimaryRow; 6] = [
    PrimaryRow {
        primary: Primary::Joyful,
        secondaries: [
            SecondaryRow {
                label: "excited",
                tertiaries: [
                    "eager",
                    "energized",
                    "enthusiastic",
                    "thrilled",
                    "exhilarated",
                    "alive",
                ],
            },
            SecondaryRow {
                label: "cheerful",
                tertiaries: [
                    "sunny",
                    "lighthearted",
                    "bubbly",
                    "amused",
                    "delighted",
                    "merry",
                ],
            },
            SecondaryRow {
                label: "content",
                tertiaries: [
                    "satisfied",
                    "fulfilled",
                    "mellow",
                    "at ease",
                    "comfortable",
                    "settled",
                ],
            },
            SecondaryRow {
                label: "playful",
                tertiaries: [
                    "silly",
                    "mischievous",
                    "spontaneous",
                    "whimsical",
                    "carefree",
                    "witty",
                ],
            },
            SecondaryRow {
                label: "optimistic",
                tertiaries: [
                    "hopeful",
                    "encouraged",
                    "expectant",
                    "inspired",
                    "uplifted",
                    "bright",
                ],
            },
            SecondaryRow {
                label: "grateful",
                tertiaries: [
                    "thankful",
                    "appreciative",
                    "blessed",
                    "touched",
                    "moved",
                    "warm",
                ],
            },
        ],
    },
    PrimaryRow {
        primary: Primary::Powerful,
        secondaries: [
            SecondaryRow {
                label: "confident",
                tertiaries: [
                    "self-assured",
                    "bold",
                    "certain",
                    "grounded",
                    "assertive",
                    "secure",
                ],
            },
            SecondaryRow {
                label: "proud",
                tertiaries: [
                    "accomplished",
                    "successful",
                    "triumphant",
                    "significant",
                    "validated",
                    "honored",
                ],
            },
            SecondaryRow {
                label: "determined",
                tertiaries: [
                    "resolute",
                    "persistent",
                    "driven",
                    "focused",
                    "committed",
                    "tenacious",
                ],
            },
            SecondaryRow {
                label: "courageous",
                tertiaries: [
                    "brave",
                    "daring",
                    "valiant",
                    "fearless",
                    "adventurous",
                    "heroic",
                ],
            },
            SecondaryRow {
                label: "capable",
                tertiaries: [
                    "competent",
                    "skilled",
                    "effective",
                    "resourceful",
                    "prepared",
                    "strong",
                ],
            },
            SecondaryRow {
                label: "respected",
                tertiaries: [
                    "valued",
                    "admired",
                    "appreciated",
                    "trusted",
                    "worthy",
                    "important",
                ],
            },
        ],
    },
    PrimaryRow {
        primary: Primary::Peaceful,
        secondaries: [
            SecondaryRow {
                label: "calm",
                tertiaries: [
                    "tranquil",
                    "composed",
                    "centered",
                    "steady",
                    "quiet",
                    "still",
                ],
            },
            SecondaryRow {
                label: "relaxed",
                tertiaries: [
                    "unhurried",
                    "loose",
                    "restful",
                    "soothed",
                    "unburdened",
                    "easygoing",
                ],
            },
            SecondaryRow {
                label: "trusting",
                tertiaries: [
                    "open",
                    "accepting",
                    "receptive",
                    "safe",
                    "reassured",
                    "supported",
                ],
            },
            SecondaryRow {
                label: "thoughtful",
                tertiaries: [
                    "reflective",
                    "contemplative",
                    "meditative",
                    "pensive",
                    "attentive",
                    "mindful",
                ],
            },
            SecondaryRow {
                label: "loving",
                tertiaries: [
                    "affectionate",
                    "tender",
                    "caring",
                    "compassionate",
                    "devoted",
                    "close",
                ],
            },
            SecondaryRow {
                label: "serene",
                tertiaries: [
                    "harmonious",
                    "balanced",
                    "whole",
                    "untroubled",
                    "gentle",
                    "restored",
                ],
            },
        ],
    },
    PrimaryRow {
        primary: Primary::Sad,
        secondaries: [
            SecondaryRow {
                label: "lonely",
                tertiaries: [
                    "isolated",
                    "abandoned",
                    "excluded",
                    "forgotten",
                    "distant",
                    "homesick",
                ],
            },
            SecondaryRow {
                label: "disappointed",
                tertiaries: [
                    "let down",
                    "disillusioned",
                    "discouraged",
                    "dismayed",
                    "deflated",
                    "defeated",
                ],
            },
            SecondaryRow {
                label: "hurt",
                tertiaries: [
                    "wounded",
                    "betrayed",
                    "rejected",
                    "crushed",
                    "aggrieved",
                    "slighted",
                ],
            },
            SecondaryRow {
                label: "depressed",
                tertiaries: [
                    "hopeless",
                    "empty",
                    "numb",
                    "weary",
                    "heavy",
                    "despairing",
                ],
            },
            SecondaryRow {
                label: "ashamed",
                tertiaries: [
                    "guilty",
                    "remorseful",
                    "embarrassed",
                    "humiliated",
                    "regretful",
                    "exposed",
                ],
            },
            SecondaryRow {
                label: "bored",
                tertiaries: [
                    "indifferent",
                    "listless",
                    "apathetic",
                    "flat",
                    "unstimulated",
                    "detached",
                ],
            },
        ],
    },
    PrimaryRow {
        primary: Primary::Mad,
        secondaries: [
            SecondaryRow {
                label: "angry",
                tertiaries: [
                    "furious",
                    "enraged",
                    "outraged",
                    "incensed",
                    "livid",
                    "seething",
                ],
            },
            SecondaryRow {
                label: "frustrated",
                tertiaries: [
                    "thwarted",
                    "stuck",
                    "exasperated",
                    "aggravated",
                    "blocked",
                    "fed up",
                ],
            },
            SecondaryRow {
                label: "irritated",
                tertiaries: [
                    "annoyed",
                    "agitated",
                    "impatient",
                    "prickly",
                    "bothered",
                    "on edge",
                ],
            },
            SecondaryRow {
                label: "resentful",
                tertiaries: [
                    "bitter",
                    "envious",
                    "jealous",
                    "begrudging",
                    "wronged",
                    "sore",
                ],
            },
            SecondaryRow {
                label: "hostile",
                tertiaries: [
                    "aggressive",
                    "confrontational",
                    "vengeful",
                    "spiteful",
                    "cold",
                    "harsh",
                ],
            },
            SecondaryRow {
                label: "critical",
                tertiaries: [
                    "judgmental",
                    "cynical",
                    "contemptuous",
                    "dismissive",
                    "scornful",
                    "sarcastic",
                ],
            },
        ],
    },
    PrimaryRow {
        primary: Primary::Scared,
        secondaries: [
            SecondaryRow {
                label: "anxious",
                tertiaries: [
                    "worried",
                    "nervous",
                    "uneasy",
                    "tense",
                    "apprehensive",
                    "restless",
                ],
            },
            SecondaryRow {
                label: "overwhelmed",
                tertiaries: [
                    "swamped",
                    "stretched",
                    "pressured",
                    "frantic",
                    "flooded",
                    "buried",
                ],
            },
            SecondaryRow {
                label: "insecure",
                tertiaries: [
                    "inadequate",
                    "inferior",
                    "self-doubting",
                    "unworthy",
                    "small",
                    "fragile",
                ],
            },
            SecondaryRow {
                label: "helpless",
                tertiaries: [
                    "powerless",
                    "trapped",
                    "cornered",
                    "vulnerable",
                    "dependent",
                    "resigned",
                ],
            },
            SecondaryRow {
                label: "confused",
                tertiaries: [
                    "bewildered",
                    "lost",
                    "torn",
                    "uncertain",
                    "disoriented",
                    "perplexed",
                ],
            },
            SecondaryRow {
                label: "shocked",
                tertiaries: [
                    "startled",
                    "stunned",
                    "alarmed",
                    "rattled",
                    "shaken",
                    "horrified",
                ],
            },
        ],
    },
];
