// Reader for the JSON dataset of state timelines.

use std::collections::BTreeMap;

use log::info;
use serde::Deserialize;
use snafu::prelude::*;
use std::fs;

use crate::scenario::*;

#[derive(PartialEq, Debug, Clone, Deserialize)]
struct TimelineEntry {
    year: u32,
    #[serde(rename = "electoralVotes", default)]
    electoral_votes: Option<u32>,
    #[serde(default)]
    population: Option<f64>,
    #[serde(default)]
    winner: Option<String>,
    #[serde(rename = "runnerUp", default)]
    runner_up: Option<String>,
    #[serde(default)]
    exists: Option<bool>,
}

#[derive(PartialEq, Debug, Clone, Deserialize)]
struct TimelineRecord {
    name: String,
    timeline: Vec<TimelineEntry>,
}

/// Reads the timelines, in the order of their keys.
pub fn read_timelines(path: String) -> ScenarioResult<Vec<StateTimeline>> {
    let contents = fs::read_to_string(path.as_str()).context(OpeningJsonSnafu { path: path.clone() })?;
    let records: BTreeMap<String, TimelineRecord> =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    info!(
        "read_timelines: {} states from {}",
        records.len(),
        simplify_file_name(path.as_str())
    );
    Ok(records.into_values().map(convert_record).collect())
}

fn convert_record(record: TimelineRecord) -> StateTimeline {
    let timeline = record
        .timeline
        .into_iter()
        .map(|e| {
            let electoral_votes = e.electoral_votes.unwrap_or(0);
            YearEntry {
                year: e.year,
                exists: e.exists.unwrap_or(electoral_votes > 0),
                population: e
                    .population
                    .filter(|p| p.is_finite() && *p > 0.0)
                    .map(|p| p.round() as u64),
                electoral_votes,
                winner: e.winner.filter(|w| !w.is_empty()),
                runner_up: e.runner_up.filter(|w| !w.is_empty()),
            }
        })
        .collect();
    StateTimeline {
        name: record.name,
        timeline,
    }
}
