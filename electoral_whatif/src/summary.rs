//! Per-year statistics on how unevenly electoral votes represent people.

use log::debug;

use crate::config::*;
use crate::rank_parties;

#[derive(PartialEq, Debug, Clone)]
pub struct StateRatio {
    pub state: String,
    pub value: f64,
}

/// Representation of one state. Both values are absent without a population.
#[derive(PartialEq, Debug, Clone)]
pub struct StateRepresentation {
    pub name: String,
    pub population_per_ev: Option<f64>,
    /// National population per vote divided by the state's. Above 1.0, the
    /// state has more votes than its population warrants.
    pub representation_ratio: Option<f64>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct YearSummary {
    pub year: u32,
    pub total_states: usize,
    pub total_electoral_votes: u32,
    pub total_population: Option<u64>,
    pub national_pop_per_ev: Option<f64>,
    pub average_pop_per_ev: Option<f64>,
    pub min_pop_per_ev: Option<StateRatio>,
    pub max_pop_per_ev: Option<StateRatio>,
    pub winner_party_votes: Vec<(String, u32)>,
    pub runner_up_party_votes: Vec<(String, u32)>,
    pub winner_state_counts: Vec<(String, u32)>,
    pub states: Vec<StateRepresentation>,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct RepresentationStats {
    pub gini_coefficient: f64,
    pub standard_deviation: f64,
    pub min: f64,
    pub max: f64,
}

/// Builds the summary of one election year.
///
/// A state participates when it exists and has electoral votes, whether or
/// not a winner is recorded. An empty year gives a zeroed summary.
pub fn summarize_year(timelines: &[StateTimeline], year: u32) -> YearSummary {
    let participating: Vec<(&str, &YearEntry)> = timelines
        .iter()
        .filter_map(|tl| {
            tl.entry_for_year(year)
                .filter(|e| e.exists && e.electoral_votes > 0)
                .map(|e| (tl.name.as_str(), e))
        })
        .collect();
    debug!(
        "summarize_year: {}: {} participating states",
        year,
        participating.len()
    );

    let total_electoral_votes: u32 = participating.iter().map(|(_, e)| e.electoral_votes).sum();

    let with_population: Vec<(&str, u64, u32)> = participating
        .iter()
        .filter_map(|(name, e)| {
            e.population
                .filter(|p| *p > 0)
                .map(|p| (*name, p, e.electoral_votes))
        })
        .collect();
    let total_population: Option<u64> = if with_population.is_empty() {
        None
    } else {
        Some(
            with_population
                .iter()
                .fold(0u64, |acc, (_, p, _)| acc.saturating_add(*p)),
        )
    };
    let national_pop_per_ev: Option<f64> = total_population.map(|p| {
        let votes: u32 = with_population.iter().map(|(_, _, ev)| *ev).sum();
        p as f64 / votes as f64
    });

    let mut min_pop_per_ev: Option<StateRatio> = None;
    let mut max_pop_per_ev: Option<StateRatio> = None;
    let mut ratio_sum = 0.0;
    let mut states: Vec<StateRepresentation> = Vec::new();
    for (name, e) in participating.iter() {
        let ppe = e
            .population
            .filter(|p| *p > 0)
            .map(|p| p as f64 / e.electoral_votes as f64);
        if let Some(v) = ppe {
            ratio_sum += v;
            if min_pop_per_ev.as_ref().map_or(true, |m| v < m.value) {
                min_pop_per_ev = Some(StateRatio {
                    state: name.to_string(),
                    value: v,
                });
            }
            if max_pop_per_ev.as_ref().map_or(true, |m| v > m.value) {
                max_pop_per_ev = Some(StateRatio {
                    state: name.to_string(),
                    value: v,
                });
            }
        }
        states.push(StateRepresentation {
            name: name.to_string(),
            population_per_ev: ppe,
            representation_ratio: match (national_pop_per_ev, ppe) {
                (Some(n), Some(v)) => Some(n / v),
                _ => None,
            },
        });
    }
    let average_pop_per_ev = if with_population.is_empty() {
        None
    } else {
        Some(ratio_sum / with_population.len() as f64)
    };

    YearSummary {
        year,
        total_states: participating.len(),
        total_electoral_votes,
        total_population,
        national_pop_per_ev,
        average_pop_per_ev,
        min_pop_per_ev,
        max_pop_per_ev,
        winner_party_votes: rank_parties(
            participating
                .iter()
                .map(|(_, e)| (e.winner.as_deref(), e.electoral_votes)),
        ),
        runner_up_party_votes: rank_parties(
            participating
                .iter()
                .map(|(_, e)| (e.runner_up.as_deref(), e.electoral_votes)),
        ),
        winner_state_counts: rank_parties(
            participating.iter().map(|(_, e)| (e.winner.as_deref(), 1)),
        ),
        states,
    }
}

/// Disparity of the population per electoral vote across states.
///
/// Returns `None` if no state of the summary has a population.
pub fn representation_stats(summary: &YearSummary) -> Option<RepresentationStats> {
    let mut values: Vec<f64> = summary
        .states
        .iter()
        .filter_map(|s| s.population_per_ev)
        .collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    let mut sum_of_differences = 0.0;
    for a in values.iter() {
        for b in values.iter() {
            sum_of_differences += (a - b).abs();
        }
    }
    let mean = sum / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Some(RepresentationStats {
        gini_coefficient: sum_of_differences / (2.0 * n * sum),
        standard_deviation: variance.sqrt(),
        min: values[0],
        max: values[values.len() - 1],
    })
}

/// The party with the most electoral votes in the historical record.
pub fn election_winner(timelines: &[StateTimeline], year: u32) -> Option<(String, u32)> {
    rank_parties(timelines.iter().filter_map(|tl| {
        tl.entry_for_year(year)
            .filter(|e| e.electoral_votes > 0)
            .map(|e| (e.winner.as_deref(), e.electoral_votes))
    }))
    .into_iter()
    .next()
}
