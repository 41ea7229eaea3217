/*!
What-if reapportionment of U.S. presidential electoral votes.

Given the states that took part in one election (population, historical
electoral votes, winning party), [`apportion`] redistributes the same total
number of electoral votes with the largest remainder method (Hamilton's
method) and reports whether the winning party would change.

```
use electoral_whatif::builder::Builder;
use electoral_whatif::{apportion, Policy};
# use electoral_whatif::ApportionmentErrors;

let mut builder = Builder::new(&Policy::EqualPopulation)?;
builder.add_state_simple("A", 900_000, 9, "X")?;
builder.add_state_simple("B", 100_000, 1, "Y")?;

let res = apportion(&builder.build())?;
assert_eq!(res.total_votes.new, 10);
assert_eq!(res.winner.as_deref(), Some("X"));
# Ok::<(), ApportionmentErrors>(())
```
*/

mod config;

pub mod builder;
pub mod manual;
pub mod snapshot;
pub mod summary;

use log::{debug, info};

use std::{
    cmp::Ordering,
    collections::HashMap,
    ops::{Add, AddAssign},
};

pub use crate::config::*;
pub use crate::snapshot::{extract_snapshot, Snapshot};
pub use crate::summary::{
    election_winner, representation_stats, summarize_year, RepresentationStats, StateRatio,
    StateRepresentation, YearSummary,
};

// **** Private structures ****

#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
struct VoteCount(u64);

impl VoteCount {
    const EMPTY: VoteCount = VoteCount(0);
}

impl std::iter::Sum for VoteCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(VoteCount::EMPTY, |acc, vc| acc + vc)
    }
}

impl AddAssign for VoteCount {
    fn add_assign(&mut self, rhs: VoteCount) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Add for VoteCount {
    type Output = VoteCount;
    fn add(self: VoteCount, rhs: VoteCount) -> VoteCount {
        VoteCount(self.0.saturating_add(rhs.0))
    }
}

// The real-valued share of one state, before rounding.
#[derive(PartialEq, Debug, Clone, Copy)]
struct Quota {
    // Position of the state in the input.
    idx: usize,
    exact: f64,
}

impl Quota {
    fn initial_allocation(&self) -> VoteCount {
        let floor = self.exact.floor();
        if floor < 1.0 {
            VoteCount(1)
        } else {
            // Saturating cast, only reached for absurd reference ratios.
            VoteCount(floor as u64)
        }
    }

    // States that only get the guaranteed vote have nothing left to round.
    fn remainder(&self) -> f64 {
        if self.exact > 1.0 {
            self.exact - self.exact.floor()
        } else {
            0.0
        }
    }
}

/// Computes the what-if allocation for one election.
///
/// The states without a usable population are left out of the new
/// allocation. The result is empty (and has no winner) when the scenario
/// cannot be computed: no electoral votes, no population, or a reference
/// state that is missing or has no population.
///
/// Ties between equal remainders, and between parties with the same number
/// of votes, are broken by the order of the states in the input.
///
/// The only error is a [`ApportionmentErrors::ConservationViolation`], when
/// a single pass over the remainders cannot bring the allocation back to the
/// original total. This happens when there are more states than votes, or
/// when the reference ratio of a normalized policy is far from the national
/// one.
pub fn apportion(input: &ApportionmentInput) -> Result<ApportionmentResult, ApportionmentErrors> {
    info!(
        "Apportioning {} electoral votes across {} states, policy: {:?}",
        input.total_votes,
        input.states.len(),
        input.policy
    );

    let original_totals = rank_parties(
        input
            .states
            .iter()
            .map(|s| (s.winning_party.as_deref(), s.original_electoral_votes)),
    );
    debug!("apportion: original party totals: {:?}", original_totals);

    let ratio = match target_ratio(input) {
        Some(r) => r,
        None => {
            info!("apportion: scenario not computable for policy {:?}", input.policy);
            return Ok(not_computable(original_totals, input.total_votes));
        }
    };
    debug!("apportion: target population per electoral vote: {}", ratio);

    let quotas: Vec<Quota> = input
        .states
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| {
            s.usable_population().map(|p| Quota {
                idx,
                exact: p as f64 / ratio,
            })
        })
        .collect();
    debug!("apportion: quotas: {:?}", quotas);

    let allocation = allocate_largest_remainder(&quotas, VoteCount(input.total_votes as u64))?;

    let changes: Vec<StateChange> = quotas
        .iter()
        .zip(allocation.iter())
        .map(|(q, vc)| {
            let s = &input.states[q.idx];
            // Bounded by the conserved total.
            let new = vc.0 as u32;
            StateChange {
                name: s.name.clone(),
                original: s.original_electoral_votes,
                new,
                difference: new as i64 - s.original_electoral_votes as i64,
            }
        })
        .collect();

    let new_totals = rank_parties(
        quotas
            .iter()
            .zip(changes.iter())
            .map(|(q, c)| (input.states[q.idx].winning_party.as_deref(), c.new)),
    );
    debug!("apportion: new party totals: {:?}", new_totals);

    let new_sum: u32 = changes.iter().map(|c| c.new).sum();
    let mut res = not_computable(original_totals, input.total_votes);
    res.total_votes.new = new_sum;
    res.winner = new_totals.first().map(|(p, _)| p.clone());
    res.runner_up = new_totals.get(1).map(|(p, _)| p.clone());
    res.winner_votes.new = new_totals.first().map(|(_, v)| *v).unwrap_or(0);
    res.runner_up_votes.new = new_totals.get(1).map(|(_, v)| *v).unwrap_or(0);
    res.outcome_changed = res.winner != res.original_winner;
    res.new_party_totals = new_totals;
    res.changes = changes;

    info!(
        "Original winner: {:?}, new winner: {:?}, outcome changed: {}",
        res.original_winner, res.winner, res.outcome_changed
    );
    Ok(res)
}

// The result when no allocation is produced. Only the historical side is filled in.
fn not_computable(original_totals: Vec<(String, u32)>, total_votes: u32) -> ApportionmentResult {
    ApportionmentResult {
        changes: Vec::new(),
        original_winner: original_totals.first().map(|(p, _)| p.clone()),
        original_runner_up: original_totals.get(1).map(|(p, _)| p.clone()),
        winner: None,
        runner_up: None,
        total_votes: VoteComparison {
            original: total_votes,
            new: 0,
        },
        winner_votes: VoteComparison {
            original: original_totals.first().map(|(_, v)| *v).unwrap_or(0),
            new: 0,
        },
        runner_up_votes: VoteComparison {
            original: original_totals.get(1).map(|(_, v)| *v).unwrap_or(0),
            new: 0,
        },
        original_party_totals: original_totals,
        new_party_totals: Vec::new(),
        outcome_changed: false,
    }
}

/// The number of people per electoral vote that every state is held to.
fn target_ratio(input: &ApportionmentInput) -> Option<f64> {
    if input.total_votes == 0 {
        return None;
    }
    match &input.policy {
        Policy::EqualPopulation => {
            let total_population: u128 = input
                .states
                .iter()
                .filter_map(|s| s.usable_population())
                .map(u128::from)
                .sum();
            if total_population == 0 {
                None
            } else {
                Some(total_population as f64 / input.total_votes as f64)
            }
        }
        Policy::NormalizedToState(reference) => {
            let reference_state = input.states.iter().find(|s| s.name == *reference)?;
            let population = reference_state.usable_population()?;
            if reference_state.original_electoral_votes == 0 {
                None
            } else {
                Some(population as f64 / reference_state.original_electoral_votes as f64)
            }
        }
    }
}

/// Hamilton's method with a guaranteed vote per state.
///
/// Returns the allocation in the same order as the quotas.
fn allocate_largest_remainder(
    quotas: &[Quota],
    target: VoteCount,
) -> Result<Vec<VoteCount>, ApportionmentErrors> {
    let mut alloc: Vec<VoteCount> = quotas.iter().map(|q| q.initial_allocation()).collect();
    let allocated: VoteCount = alloc.iter().cloned().sum();
    debug!(
        "allocate_largest_remainder: initial allocation {:?}, target {:?}",
        allocated, target
    );

    match allocated.cmp(&target) {
        Ordering::Less => distribute_leftovers(&mut alloc, quotas, target.0 - allocated.0),
        Ordering::Greater => trim_over_allocation(&mut alloc, quotas, allocated.0 - target.0),
        Ordering::Equal => {}
    }

    let final_sum: VoteCount = alloc.iter().cloned().sum();
    if final_sum != target {
        return Err(ApportionmentErrors::ConservationViolation {
            expected: target.0 as u32,
            allocated: final_sum.0,
        });
    }
    Ok(alloc)
}

/// Ranks the quotas by remainder. The sort is stable, so equal remainders
/// keep the input order.
fn rank_by_remainder(quotas: &[Quota], descending: bool) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..quotas.len()).collect();
    ranking.sort_by(|&a, &b| {
        let (ra, rb) = (quotas[a].remainder(), quotas[b].remainder());
        if descending {
            rb.total_cmp(&ra)
        } else {
            ra.total_cmp(&rb)
        }
    });
    ranking
}

/// Grants one vote to each of the `extra` states with the largest
/// remainders. The ranking is walked once: a state gains at most one vote.
fn distribute_leftovers(alloc: &mut [VoteCount], quotas: &[Quota], extra: u64) {
    let ranking = rank_by_remainder(quotas, true);
    debug!("distribute_leftovers: {} extra votes, ranking {:?}", extra, ranking);
    for &pos in ranking.iter().take(extra.min(ranking.len() as u64) as usize) {
        alloc[pos] += VoteCount(1);
    }
}

/// Removes one vote from each of the `excess` states with the smallest
/// remainders, skipping the states already at one vote. The ranking is
/// walked once: a state loses at most one vote.
fn trim_over_allocation(alloc: &mut [VoteCount], quotas: &[Quota], excess: u64) {
    let ranking = rank_by_remainder(quotas, false);
    debug!("trim_over_allocation: {} excess votes, ranking {:?}", excess, ranking);
    let mut to_remove = excess;
    for &pos in ranking.iter() {
        if to_remove == 0 {
            break;
        }
        if alloc[pos].0 > 1 {
            alloc[pos].0 -= 1;
            to_remove -= 1;
        }
    }
    if to_remove > 0 {
        debug!("trim_over_allocation: {} votes could not be removed", to_remove);
    }
}

/// Sums the votes by party, highest first. Parties with the same total keep
/// the order in which they first appear. Entries without a party are ignored.
pub(crate) fn rank_parties<'a>(
    entries: impl Iterator<Item = (Option<&'a str>, u32)>,
) -> Vec<(String, u32)> {
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut totals: Vec<(&'a str, VoteCount)> = Vec::new();
    for (party, votes) in entries {
        if let Some(p) = party {
            let pos = *positions.entry(p).or_insert_with(|| {
                totals.push((p, VoteCount::EMPTY));
                totals.len() - 1
            });
            totals[pos].1 += VoteCount(votes as u64);
        }
    }
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
        .into_iter()
        .map(|(p, vc)| (p.to_string(), vc.0 as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn input(policy: Policy, states: &[(&str, Option<u64>, u32, Option<&str>)]) -> ApportionmentInput {
        let states: Vec<StateYearSnapshot> = states
            .iter()
            .map(|(name, pop, ev, party)| StateYearSnapshot {
                name: name.to_string(),
                population: *pop,
                original_electoral_votes: *ev,
                winning_party: party.map(|p| p.to_string()),
            })
            .collect();
        let total_votes = states.iter().map(|s| s.original_electoral_votes).sum();
        ApportionmentInput {
            states,
            total_votes,
            policy,
        }
    }

    fn new_votes(res: &ApportionmentResult) -> Vec<u32> {
        res.changes.iter().map(|c| c.new).collect()
    }

    #[test]
    fn two_states_outcome_recomputed() {
        init();
        let inp = input(
            Policy::EqualPopulation,
            &[
                ("A", Some(900_000), 9, Some("X")),
                ("B", Some(100_000), 1, Some("Y")),
            ],
        );
        let res = apportion(&inp).unwrap();
        assert_eq!(res.total_votes, VoteComparison { original: 10, new: 10 });
        assert!(res.changes.iter().all(|c| c.new >= 1));
        assert_eq!(new_votes(&res), vec![9, 1]);
        assert_eq!(res.original_winner.as_deref(), Some("X"));
        assert_eq!(res.winner.as_deref(), Some("X"));
        assert_eq!(res.runner_up.as_deref(), Some("Y"));
        assert!(!res.outcome_changed);
    }

    #[test]
    fn five_states_hand_computed() {
        init();
        let inp = input(
            Policy::EqualPopulation,
            &[
                ("S1", Some(1_000_000), 5, Some("A")),
                ("S2", Some(500_000), 3, Some("A")),
                ("S3", Some(500_000), 3, Some("B")),
                ("S4", Some(250_000), 1, Some("B")),
                ("S5", Some(250_000), 1, Some("B")),
            ],
        );
        let res = apportion(&inp).unwrap();
        // exact shares 5.2, 2.6, 2.6, 1.3, 1.3: the two leftovers go to the 0.6 remainders.
        assert_eq!(new_votes(&res), vec![5, 3, 3, 1, 1]);
        assert_eq!(res.total_votes.new, 13);
        assert_eq!(
            res.new_party_totals,
            vec![("A".to_string(), 8), ("B".to_string(), 5)]
        );
        assert_eq!(res.winner_votes, VoteComparison { original: 8, new: 8 });
        assert_eq!(res.runner_up_votes, VoteComparison { original: 5, new: 5 });
        assert!(!res.outcome_changed);
    }

    #[test]
    fn outcome_flips_when_small_states_lose_votes() {
        init();
        let inp = input(
            Policy::EqualPopulation,
            &[
                ("Big", Some(8_000_000), 6, Some("Blue")),
                ("Small1", Some(1_000_000), 3, Some("Red")),
                ("Small2", Some(1_000_000), 3, Some("Red")),
                ("Small3", Some(1_000_000), 3, Some("Red")),
            ],
        );
        let res = apportion(&inp).unwrap();
        // 15 votes for 11M people: exact 10.909, 1.364 x3.
        assert_eq!(new_votes(&res), vec![11, 2, 1, 1]);
        assert_eq!(res.original_winner.as_deref(), Some("Red"));
        assert_eq!(res.winner.as_deref(), Some("Blue"));
        assert_eq!(res.runner_up.as_deref(), Some("Red"));
        assert!(res.outcome_changed);
        let big = res.change_for("Big").unwrap();
        assert_eq!(big.difference, 5);
        assert_eq!(res.change_for("Small3").unwrap().difference, -2);
    }

    #[test]
    fn equal_remainders_follow_input_order() {
        init();
        let inp = input(
            Policy::EqualPopulation,
            &[
                ("A", Some(150), 1, Some("X")),
                ("B", Some(150), 1, Some("Y")),
                ("C", Some(100), 2, Some("Z")),
            ],
        );
        // 4 votes for 400 people: exact 1.5, 1.5, 1.0. One leftover, first in input order wins.
        let res = apportion(&inp).unwrap();
        assert_eq!(new_votes(&res), vec![2, 1, 1]);
    }

    #[test]
    fn party_ties_follow_first_appearance() {
        let totals = rank_parties(
            vec![(Some("B"), 3), (None, 10), (Some("A"), 3), (Some("C"), 4)].into_iter(),
        );
        assert_eq!(
            totals,
            vec![
                ("C".to_string(), 4),
                ("B".to_string(), 3),
                ("A".to_string(), 3)
            ]
        );
    }

    #[test]
    fn tiny_states_keep_one_vote() {
        init();
        let inp = input(
            Policy::EqualPopulation,
            &[
                ("Huge", Some(10_000_000), 3, Some("X")),
                ("Tiny1", Some(1_000), 3, Some("Y")),
                ("Tiny2", Some(1_000), 3, Some("Y")),
            ],
        );
        let res = apportion(&inp).unwrap();
        assert_eq!(new_votes(&res), vec![7, 1, 1]);
        assert_eq!(res.total_votes.new, 9);
    }

    #[test]
    fn deficit_is_trimmed_from_smallest_remainders() {
        init();
        let inp = input(
            Policy::EqualPopulation,
            &[
                ("L", Some(800), 3, Some("X")),
                ("T1", Some(100), 1, Some("Y")),
                ("T2", Some(50), 1, Some("Y")),
                ("T3", Some(50), 1, Some("Y")),
            ],
        );
        // 6 votes: exact 4.8, 0.6, 0.3, 0.3 -> 4 + 1 + 1 + 1 = 7, the large state gives one back.
        let res = apportion(&inp).unwrap();
        assert_eq!(new_votes(&res), vec![3, 1, 1, 1]);
    }

    #[test]
    fn normalized_to_reference_keeps_its_votes() {
        init();
        let inp = input(
            Policy::NormalizedToState("Ref".to_string()),
            &[
                ("Ref", Some(200_000), 2, Some("X")),
                ("Other", Some(600_000), 5, Some("Y")),
                ("Third", Some(300_000), 4, Some("X")),
            ],
        );
        // Reference ratio 100,000: exact 2, 6, 3 = 11 = total.
        let res = apportion(&inp).unwrap();
        assert_eq!(res.change_for("Ref").unwrap().new, 2);
        assert_eq!(res.change_for("Ref").unwrap().difference, 0);
        assert_eq!(new_votes(&res), vec![2, 6, 3]);
        assert_eq!(res.total_votes.new, 11);
    }

    #[test]
    fn normalized_with_large_surplus_is_a_conservation_violation() {
        init();
        let inp = input(
            Policy::NormalizedToState("Ref".to_string()),
            &[
                ("Ref", Some(1_000_000), 1, Some("X")),
                ("Other", Some(1_000_000), 9, Some("Y")),
            ],
        );
        // Reference ratio 1,000,000: exact 1 and 1, one extra vote each reaches 4 of 10.
        assert_eq!(
            apportion(&inp),
            Err(ApportionmentErrors::ConservationViolation {
                expected: 10,
                allocated: 4
            })
        );
    }

    #[test]
    fn normalized_with_large_deficit_is_a_conservation_violation() {
        init();
        let inp = input(
            Policy::NormalizedToState("Ref".to_string()),
            &[
                ("Ref", Some(100), 4, Some("X")),
                ("Other", Some(1_000), 2, Some("Y")),
            ],
        );
        // Reference ratio 25: exact 4 and 40, one vote removed from each gives 3 + 39.
        assert_eq!(
            apportion(&inp),
            Err(ApportionmentErrors::ConservationViolation {
                expected: 6,
                allocated: 42
            })
        );
    }

    #[test]
    fn small_surplus_is_granted_once_per_state() {
        init();
        let inp = input(
            Policy::NormalizedToState("Ref".to_string()),
            &[
                ("Ref", Some(100_000), 1, Some("X")),
                ("A", Some(250_000), 5, Some("Y")),
                ("B", Some(140_000), 2, Some("X")),
            ],
        );
        // Reference ratio 100,000: exact 1, 2.5, 1.4 -> 1 + 2 + 1 = 4, one more
        // vote each still leaves 7 of 8.
        assert_eq!(
            apportion(&inp),
            Err(ApportionmentErrors::ConservationViolation {
                expected: 8,
                allocated: 7
            })
        );

        let inp = input(
            Policy::NormalizedToState("Ref".to_string()),
            &[
                ("Ref", Some(100_000), 1, Some("X")),
                ("A", Some(250_000), 2, Some("Y")),
                ("B", Some(140_000), 3, Some("X")),
            ],
        );
        // Same shares, 6 votes: the two leftovers go to A (0.5) then B (0.4).
        let res = apportion(&inp).unwrap();
        assert_eq!(new_votes(&res), vec![1, 3, 2]);
        assert_eq!(res.change_for("Ref").unwrap().difference, 0);
    }

    #[test]
    fn huge_populations_do_not_overflow() {
        init();
        let inp = input(
            Policy::NormalizedToState("Ref".to_string()),
            &[
                ("Ref", Some(1), 1, Some("X")),
                ("A", Some(u64::MAX / 2), 1, Some("Y")),
                ("B", Some(u64::MAX / 2), 1, Some("Y")),
            ],
        );
        assert!(matches!(
            apportion(&inp),
            Err(ApportionmentErrors::ConservationViolation { expected: 3, .. })
        ));

        let inp = input(
            Policy::EqualPopulation,
            &[
                ("A", Some(u64::MAX / 2), 2, Some("X")),
                ("B", Some(u64::MAX / 2), 2, Some("Y")),
                ("C", Some(u64::MAX / 2), 2, Some("Y")),
            ],
        );
        let res = apportion(&inp).unwrap();
        assert_eq!(res.total_votes.new, 6);
    }

    #[test]
    fn missing_population_is_excluded() {
        init();
        let inp = input(
            Policy::EqualPopulation,
            &[
                ("A", Some(300), 2, Some("X")),
                ("B", None, 3, Some("Y")),
                ("C", Some(0), 1, Some("Y")),
                ("D", Some(300), 2, None),
            ],
        );
        let res = apportion(&inp).unwrap();
        assert_eq!(res.changes.len(), 2);
        assert_eq!(new_votes(&res), vec![4, 4]);
        assert!(res.change_for("B").is_none());
        // D has no party: its votes are not aggregated.
        assert_eq!(res.new_party_totals, vec![("X".to_string(), 4)]);
        assert_eq!(res.original_winner.as_deref(), Some("Y"));
        assert!(res.outcome_changed);
    }

    #[test]
    fn empty_input_is_not_computable() {
        init();
        let inp = input(Policy::EqualPopulation, &[]);
        let res = apportion(&inp).unwrap();
        assert!(!res.is_computable());
        assert_eq!(res.winner, None);
        assert_eq!(res.original_winner, None);
        assert!(!res.outcome_changed);
    }

    #[test]
    fn unknown_reference_is_not_computable() {
        init();
        let inp = input(
            Policy::NormalizedToState("Atlantis".to_string()),
            &[("A", Some(300), 2, Some("X"))],
        );
        let res = apportion(&inp).unwrap();
        assert!(res.changes.is_empty());
        assert_eq!(res.winner, None);
        assert_eq!(res.original_winner.as_deref(), Some("X"));
        assert_eq!(res.winner_votes.original, 2);
    }

    #[test]
    fn reference_without_population_is_not_computable() {
        let inp = input(
            Policy::NormalizedToState("A".to_string()),
            &[("A", None, 2, Some("X")), ("B", Some(300), 2, Some("Y"))],
        );
        let res = apportion(&inp).unwrap();
        assert!(!res.is_computable());
    }

    #[test]
    fn more_states_than_votes_is_a_conservation_violation() {
        init();
        let mut inp = input(
            Policy::EqualPopulation,
            &[
                ("A", Some(300), 1, Some("X")),
                ("B", Some(300), 1, Some("Y")),
                ("C", Some(300), 1, Some("Y")),
            ],
        );
        inp.total_votes = 2;
        let res = apportion(&inp);
        assert_eq!(
            res,
            Err(ApportionmentErrors::ConservationViolation {
                expected: 2,
                allocated: 3
            })
        );
    }

    #[test]
    fn apportion_is_idempotent() {
        let mut builder = Builder::new(&Policy::EqualPopulation).unwrap();
        builder.add_state_simple("A", 4_567_000, 7, "X").unwrap();
        builder.add_state_simple("B", 1_234_000, 5, "Y").unwrap();
        builder.add_state_simple("C", 987_000, 3, "X").unwrap();
        let inp = builder.build();
        assert_eq!(apportion(&inp), apportion(&inp));
    }

    #[test]
    fn growing_state_never_loses_votes() {
        init();
        let mut previous = 0;
        for step in 0..60u64 {
            let pop = 1_000_000 + step * 97_531;
            let inp = input(
                Policy::EqualPopulation,
                &[
                    ("Growing", Some(pop), 4, Some("X")),
                    ("B", Some(2_345_678), 6, Some("Y")),
                    ("C", Some(3_456_789), 8, Some("Y")),
                    ("D", Some(1_987_654), 3, Some("X")),
                    ("E", Some(1_234_567), 3, Some("Z")),
                ],
            );
            let res = apportion(&inp).unwrap();
            let now = res.change_for("Growing").unwrap().new;
            assert!(now >= previous, "population {} gave {} < {}", pop, now, previous);
            assert_eq!(res.total_votes.new, 24);
            previous = now;
        }
    }
}
