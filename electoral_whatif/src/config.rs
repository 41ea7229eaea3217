// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// One entry of a state's time series, as published by the historical dataset.
///
/// Only `exists`, `population`, `electoral_votes` and `winner` are read by the
/// apportionment engine. `runner_up` is used by the year summaries.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct YearEntry {
    pub year: u32,
    pub exists: bool,
    pub population: Option<u64>,
    pub electoral_votes: u32,
    pub winner: Option<String>,
    pub runner_up: Option<String>,
}

/// The full history of a single state.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct StateTimeline {
    pub name: String,
    pub timeline: Vec<YearEntry>,
}

impl StateTimeline {
    pub fn entry_for_year(&self, year: u32) -> Option<&YearEntry> {
        self.timeline.iter().find(|e| e.year == year)
    }
}

/// A state that took part in the election of a given year.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct StateYearSnapshot {
    pub name: String,
    /// Absent (or zero) populations exclude the state from the redistribution.
    pub population: Option<u64>,
    pub original_electoral_votes: u32,
    pub winning_party: Option<String>,
}

impl StateYearSnapshot {
    /// The population, if it can take part in a proportional calculation.
    pub fn usable_population(&self) -> Option<u64> {
        self.population.filter(|p| *p > 0)
    }
}

/// How the hypothetical electoral votes are derived.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Policy {
    /// Every state gets votes in proportion to its population, using the
    /// national population per electoral vote.
    EqualPopulation,
    /// Every state gets the population per electoral vote of the named state.
    NormalizedToState(String),
}

/// The data needed to run one what-if scenario.
///
/// The order of `states` is significant: it is the canonical order used to
/// break ties between equal remainders and between parties with equal totals.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ApportionmentInput {
    pub states: Vec<StateYearSnapshot>,
    /// Sum of the original electoral votes. Conserved by the engine.
    pub total_votes: u32,
    pub policy: Policy,
}

// ******** Output data structures *********

/// The hypothetical allocation for one state.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct StateChange {
    pub name: String,
    pub original: u32,
    pub new: u32,
    pub difference: i64,
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct VoteComparison {
    pub original: u32,
    pub new: u32,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ApportionmentResult {
    /// One entry per state with a usable population, in input order.
    /// Empty when the scenario could not be computed.
    pub changes: Vec<StateChange>,
    /// Sorted by decreasing votes, ties in order of first appearance.
    pub original_party_totals: Vec<(String, u32)>,
    pub new_party_totals: Vec<(String, u32)>,
    pub original_winner: Option<String>,
    pub original_runner_up: Option<String>,
    pub winner: Option<String>,
    pub runner_up: Option<String>,
    pub total_votes: VoteComparison,
    pub winner_votes: VoteComparison,
    pub runner_up_votes: VoteComparison,
    pub outcome_changed: bool,
}

impl ApportionmentResult {
    /// False when the preconditions of the scenario did not hold
    /// (no votes, no population, unknown reference state).
    pub fn is_computable(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn change_for(&self, state: &str) -> Option<&StateChange> {
        self.changes.iter().find(|c| c.name == state)
    }
}

/// Errors that prevent the engine from producing a trustworthy allocation.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ApportionmentErrors {
    /// The final allocation does not sum to the conserved total.
    /// Happens when there are more qualifying states than electoral votes.
    ConservationViolation { expected: u32, allocated: u64 },
    /// A state was added twice or with no electoral votes.
    InvalidState { name: String },
}

impl Error for ApportionmentErrors {}

impl Display for ApportionmentErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApportionmentErrors::ConservationViolation {
                expected,
                allocated,
            } => write!(
                f,
                "conservation violated: allocated {} electoral votes, expected {}",
                allocated, expected
            ),
            ApportionmentErrors::InvalidState { name } => {
                write!(f, "invalid state in apportionment input: {}", name)
            }
        }
    }
}
