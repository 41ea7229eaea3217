use log::{debug, info, warn};

use electoral_whatif::*;
use snafu::{prelude::*, ErrorCompat, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::scenario::config_reader::*;
use crate::scenario::io_common::simplify_file_name;

mod config_reader;
mod io_common;
mod io_csv;
mod io_timelines;
mod io_xlsx;

#[derive(Debug, Snafu)]
pub enum ScenarioError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },

    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading a CSV line"))]
    CsvLineParse { source: csv::Error },
    #[snafu(display("Missing column {column} in the header"))]
    MissingColumn { column: String },
    #[snafu(display("Line {lineno}: could not read {column} from {content:?}"))]
    MalformedCell {
        lineno: usize,
        column: String,
        content: String,
    },

    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The Excel file has no data"))]
    EmptyExcel {},
    #[snafu(display("No worksheet named {name}"))]
    MissingWorksheet { name: String },
    #[snafu(display("Line {lineno}, column {column}: unexpected cell {content}"))]
    ExcelWrongCellType {
        lineno: usize,
        column: usize,
        content: String,
    },

    #[snafu(display("Could not find the directory of the configuration file"))]
    MissingParentDir {},
    #[snafu(display("Provider not implemented: {provider}"))]
    UnsupportedProvider { provider: String },
    #[snafu(display("Policy not implemented: {policy}"))]
    UnsupportedPolicy { policy: String },
    #[snafu(display("The normalized policy requires a reference state"))]
    MissingReferenceState {},
    #[snafu(display("No election year was given"))]
    MissingYear {},
    #[snafu(display("No data source was given, use --config or --input"))]
    MissingDataSource {},
    #[snafu(display("Error writing summary to {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },

    #[snafu(display("Apportionment failed"))]
    Apportionment { source: ApportionmentErrors },

    #[snafu(display("Difference detected between calculated summary and reference summary"))]
    ReferenceMismatch {},
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;

fn party_totals_to_json(totals: &[(String, u32)], count_name: &str) -> Vec<JSValue> {
    totals
        .iter()
        .map(|(party, count)| json!({"party": party, count_name: count}))
        .collect()
}

fn results_to_json(res: &ApportionmentResult) -> JSValue {
    let mut changes: JSMap<String, JSValue> = JSMap::new();
    for c in res.changes.iter() {
        changes.insert(
            c.name.clone(),
            json!({"original": c.original, "new": c.new, "difference": c.difference}),
        );
    }
    json!({
        "outcomeChanged": res.outcome_changed,
        "originalWinner": res.original_winner,
        "newWinner": res.winner,
        "totalElectoralVotes": {
            "original": res.total_votes.original,
            "new": res.total_votes.new
        },
        "winnerElectoralVotes": {
            "original": res.winner_votes.original,
            "new": res.winner_votes.new
        },
        "runnerUpElectoralVotes": {
            "original": res.runner_up_votes.original,
            "new": res.runner_up_votes.new
        },
        "originalPartyTotals": party_totals_to_json(&res.original_party_totals, "votes"),
        "newPartyTotals": party_totals_to_json(&res.new_party_totals, "votes"),
        "electoralVoteChanges": changes
    })
}

fn ratio_to_json(r: &Option<StateRatio>) -> JSValue {
    match r {
        Some(r) => json!({"state": r.state, "value": r.value}),
        None => JSValue::Null,
    }
}

fn year_summary_to_json(
    summary: &YearSummary,
    stats: &Option<RepresentationStats>,
    winner: &Option<(String, u32)>,
) -> JSValue {
    let mut states: JSMap<String, JSValue> = JSMap::new();
    for s in summary.states.iter() {
        states.insert(
            s.name.clone(),
            json!({
                "populationPerEv": s.population_per_ev,
                "representationRatio": s.representation_ratio
            }),
        );
    }
    let representation = match stats {
        Some(st) => json!({
            "giniCoefficient": st.gini_coefficient,
            "standardDeviation": st.standard_deviation,
            "min": st.min,
            "max": st.max
        }),
        None => JSValue::Null,
    };
    let election_winner = match winner {
        Some((party, votes)) => json!({"party": party, "votes": votes}),
        None => JSValue::Null,
    };
    json!({
        "year": summary.year,
        "totalStates": summary.total_states,
        "totalElectoralVotes": summary.total_electoral_votes,
        "totalPopulation": summary.total_population,
        "nationalPopPerEv": summary.national_pop_per_ev,
        "averagePopPerEv": summary.average_pop_per_ev,
        "minPopPerEv": ratio_to_json(&summary.min_pop_per_ev),
        "maxPopPerEv": ratio_to_json(&summary.max_pop_per_ev),
        "winnerPartyVotes": party_totals_to_json(&summary.winner_party_votes, "votes"),
        "runnerUpPartyVotes": party_totals_to_json(&summary.runner_up_party_votes, "votes"),
        "winnerStateCounts": party_totals_to_json(&summary.winner_state_counts, "states"),
        "electionWinner": election_winner,
        "representation": representation,
        "states": states
    })
}

/// The configuration after the command line overrides.
#[derive(Eq, PartialEq, Debug, Clone)]
struct ResolvedScenario {
    config: ScenarioConfig,
    // Relative file paths are resolved from this directory.
    root_dir: PathBuf,
}

fn resolve_scenario(args: &Args) -> ScenarioResult<ResolvedScenario> {
    let mut res = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            let root_dir = Path::new(config_path.as_str())
                .parent()
                .context(MissingParentDirSnafu {})?
                .to_path_buf();
            ResolvedScenario { config, root_dir }
        }
        None => {
            let input = args.input.clone().context(MissingDataSourceSnafu {})?;
            ResolvedScenario {
                config: ScenarioConfig {
                    output_settings: OutputSettings {
                        scenario_name: simplify_file_name(input.as_str()),
                        output_directory: None,
                    },
                    data_sources: Vec::new(),
                    scenario: ScenarioSettings {
                        year: None,
                        policy: POLICY_EQUAL.to_string(),
                        reference_state: None,
                    },
                },
                root_dir: PathBuf::new(),
            }
        }
    };

    if let Some(input) = &args.input {
        res.config.data_sources = vec![FileSource {
            provider: args
                .input_type
                .clone()
                .unwrap_or_else(|| "timelines".to_string()),
            file_path: input.clone(),
            excel_worksheet_name: args.excel_worksheet_name.clone(),
        }];
        res.root_dir = PathBuf::new();
    }
    if let Some(year) = args.year {
        res.config.scenario.year = Some(year);
    }
    if let Some(policy) = &args.policy {
        res.config.scenario.policy = policy_from_cli(policy)?;
    }
    if let Some(reference) = &args.normalize_to {
        res.config.scenario.reference_state = Some(reference.clone());
    }
    Ok(res)
}

fn read_timeline_data(root_dir: &Path, cfs: &FileSource) -> ScenarioResult<Vec<StateTimeline>> {
    let p: PathBuf = root_dir.join(cfs.file_path.as_str());
    let p2 = p.as_path().display().to_string();
    info!("Attempting to read data file {:?}", p2);
    match cfs.provider.as_str() {
        "timelines" => io_timelines::read_timelines(p2),
        "csv" => io_csv::read_csv_table(p2),
        "xlsx" => io_xlsx::read_excel_file(p2, cfs.excel_worksheet_name.as_deref()),
        x => UnsupportedProviderSnafu {
            provider: x.to_string(),
        }
        .fail(),
    }
}

fn read_all_sources(scenario: &ResolvedScenario) -> ScenarioResult<Vec<StateTimeline>> {
    if scenario.config.data_sources.is_empty() {
        return MissingDataSourceSnafu {}.fail();
    }
    let mut data: Vec<StateTimeline> = Vec::new();
    for cfs in scenario.config.data_sources.iter() {
        let file_data = read_timeline_data(&scenario.root_dir, cfs)?;
        io_common::merge_timelines(&mut data, file_data);
    }
    debug!("read_all_sources: {} states", data.len());
    Ok(data)
}

fn build_summary_js(
    config: &ScenarioConfig,
    timelines: &[StateTimeline],
) -> ScenarioResult<JSValue> {
    let year = config.scenario.year.context(MissingYearSnafu {})?;
    let c = OutputConfig {
        scenario: config.output_settings.scenario_name.clone(),
        year,
        policy: config.scenario.policy.clone(),
        reference_state: config.scenario.reference_state.clone(),
    };
    let js = match config.scenario.kind()? {
        ScenarioKind::Reallocation(policy) => {
            let snapshot = extract_snapshot(timelines, year);
            if snapshot.is_empty() {
                warn!("No participating state in {}", year);
            }
            let res = apportion(&snapshot.with_policy(policy)).context(ApportionmentSnafu {})?;
            json!({"config": c, "results": results_to_json(&res)})
        }
        ScenarioKind::YearSummary => {
            let summary = summarize_year(timelines, year);
            let stats = representation_stats(&summary);
            let winner = election_winner(timelines, year);
            json!({"config": c, "summary": year_summary_to_json(&summary, &stats, &winner)})
        }
    };
    Ok(js)
}

fn write_summary(
    js: &str,
    out: &Option<String>,
    config: &ScenarioConfig,
    root_dir: &Path,
) -> ScenarioResult<()> {
    let out_path: Option<String> = match out.as_deref() {
        Some("stdout") => None,
        Some(p) => Some(p.to_string()),
        None => config.output_settings.output_directory.as_ref().map(|dir| {
            root_dir
                .join(dir)
                .join(format!("{}_summary.json", config.output_settings.scenario_name))
                .display()
                .to_string()
        }),
    };
    match out_path {
        Some(p) => {
            info!("Writing summary to {}", p);
            fs::write(p.as_str(), js).context(WritingSummarySnafu { path: p.clone() })
        }
        None => {
            println!("{}", js);
            Ok(())
        }
    }
}

pub fn run_scenario(args: &Args) -> ScenarioResult<()> {
    let scenario = resolve_scenario(args)?;
    info!("scenario: {:?}", scenario);

    let timelines = read_all_sources(&scenario)?;
    let result_js = build_summary_js(&scenario.config, &timelines)?;

    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(ParsingJsonSnafu {})?;
    write_summary(
        pretty_js_stats.as_str(),
        &args.out,
        &scenario.config,
        &scenario.root_dir,
    )?;

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = read_summary(summary_p.clone())?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference string");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            return ReferenceMismatchSnafu {}.fail();
        }
        info!("The summary matches the reference {}", summary_p);
    }

    Ok(())
}

pub fn report_error(e: &ScenarioError) {
    eprintln!("An error occured: {}", e);
    let mut source = std::error::Error::source(e);
    while let Some(s) = source {
        eprintln!("  caused by: {}", s);
        source = s.source();
    }
    if let Some(bt) = ErrorCompat::backtrace(e) {
        eprintln!("trace: {}", bt);
    }
}

#[cfg(test)]
fn test_args(config: Option<&str>, reference: Option<&str>) -> Args {
    let test_dir = format!("{}/tests/data", env!("CARGO_MANIFEST_DIR"));
    Args {
        config: config.map(|c| format!("{}/{}", test_dir, c)),
        reference: reference.map(|r| format!("{}/{}", test_dir, r)),
        out: Some("stdout".to_string()),
        input: None,
        input_type: None,
        year: None,
        policy: None,
        normalize_to: None,
        excel_worksheet_name: None,
        verbose: false,
    }
}

#[cfg(test)]
pub fn test_wrapper(test_name: &str) {
    let _ = env_logger::builder().is_test(true).try_init();
    let args = test_args(
        Some(format!("{}_config.json", test_name).as_str()),
        Some(format!("{}_expected_summary.json", test_name).as_str()),
    );
    if let Err(e) = run_scenario(&args) {
        report_error(&e);
        panic!("scenario {} failed: {}", test_name, e);
    }
}
