//! Event context types: what happened, as opposed to how it felt.

use serde::{Deserialize, Serialize};

use crate::types::domain;

/// Life domain a reflection's event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventDomain {
    Work,
    Relationships,
    Health,
    SelfGrowth,
    Finance,
    Leisure,
    #[default]
    General,
}

impl EventDomain {
    /// All concrete domains (excludes the `General` fallback).
    pub const ALL: [EventDomain; 6] = [
        EventDomain::Work,
        EventDomain::Relationships,
        EventDomain::Health,
        EventDomain::SelfGrowth,
        EventDomain::Finance,
        EventDomain::Leisure,
    ];
}

/// Primary/secondary domain attribution with a mixture ratio.
///
/// `mixture_ratio` is the share of domain evidence attributed to the primary
/// domain; 1.0 means single-domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainMix {
    pub primary: EventDomain,
    pub secondary: Option<EventDomain>,
    pub mixture_ratio: f32,
}

impl Default for DomainMix {
    fn default() -> Self {
        Self {
            primary: EventDomain::General,
            secondary: None,
            mixture_ratio: 1.0,
        }
    }
}

/// How much control the writer had over the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ControlLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Whether the event is prospective, realized, or averted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventPolarity {
    Planned,
    #[default]
    Happened,
    DidNotHappen,
}

/// Context of the described event, independent of the felt emotion.
///
/// `event_valence` is a unit value: 0.0 = clearly bad event, 1.0 = clearly
/// good event, 0.5 = no anchor evidence either way. "Promoted but terrified"
/// carries high event valence alongside low emotion valence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    pub domain: DomainMix,
    pub control: ControlLevel,
    pub polarity: EventPolarity,
    pub event_valence: f32,
}

impl Default for EventContext {
    fn default() -> Self {
        Self {
            domain: DomainMix::default(),
            control: ControlLevel::default(),
            polarity: EventPolarity::default(),
            event_valence: 0.5,
        }
    }
}

impl EventContext {
    /// Clamp the valence into its unit domain.
    pub fn clamped(mut self) -> Self {
        self.event_valence = domain::clamp_unit(self.event_valence);
        self
    }
}
