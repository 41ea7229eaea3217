//! Extraction of the states that took part in one election.

use log::debug;

use crate::config::*;

/// The participating states of one election year, in timeline order.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Snapshot {
    pub year: u32,
    pub states: Vec<StateYearSnapshot>,
    pub total_votes: u32,
}

impl Snapshot {
    /// An empty snapshot means that no scenario is available for this year.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, name: &str) -> Option<&StateYearSnapshot> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Bundles the snapshot with a policy, ready for [`crate::apportion`].
    pub fn with_policy(self, policy: Policy) -> ApportionmentInput {
        ApportionmentInput {
            states: self.states,
            total_votes: self.total_votes,
            policy,
        }
    }
}

/// Selects the states that existed in `year`, cast electoral votes and have
/// a declared winner.
///
/// Years outside of the dataset give an empty snapshot, not an error.
pub fn extract_snapshot(timelines: &[StateTimeline], year: u32) -> Snapshot {
    let states: Vec<StateYearSnapshot> = timelines
        .iter()
        .filter_map(|tl| {
            let entry = tl.entry_for_year(year)?;
            match (&entry.winner, entry.exists) {
                (Some(party), true) if entry.electoral_votes > 0 => Some(StateYearSnapshot {
                    name: tl.name.clone(),
                    population: entry.population,
                    original_electoral_votes: entry.electoral_votes,
                    winning_party: Some(party.clone()),
                }),
                _ => {
                    debug!(
                        "extract_snapshot: {}: skipping {} entry {:?}",
                        year, tl.name, entry
                    );
                    None
                }
            }
        })
        .collect();
    let total_votes = states.iter().map(|s| s.original_electoral_votes).sum();
    debug!(
        "extract_snapshot: {}: {} states, {} electoral votes",
        year,
        states.len(),
        total_votes
    );
    Snapshot {
        year,
        states,
        total_votes,
    }
}
