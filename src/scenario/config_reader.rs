use crate::scenario::*;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use std::fs;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "scenarioName")]
    pub scenario_name: String,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
}

/// The configuration as it is written in the summary.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub scenario: String,
    pub year: u32,
    pub policy: String,
    #[serde(rename = "referenceState")]
    pub reference_state: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSettings {
    pub year: Option<u32>,
    pub policy: String,
    #[serde(rename = "referenceState")]
    pub reference_state: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: OutputSettings,
    #[serde(rename = "dataSources")]
    pub data_sources: Vec<FileSource>,
    pub scenario: ScenarioSettings,
}

pub const POLICY_EQUAL: &str = "equalPopulation";
pub const POLICY_NORMALIZED: &str = "normalizedToState";
pub const POLICY_SUMMARY: &str = "summary";

/// The scenario requested in the configuration.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ScenarioKind {
    Reallocation(Policy),
    YearSummary,
}

impl ScenarioSettings {
    pub fn kind(&self) -> ScenarioResult<ScenarioKind> {
        match self.policy.as_str() {
            POLICY_EQUAL => Ok(ScenarioKind::Reallocation(Policy::EqualPopulation)),
            POLICY_NORMALIZED => {
                let reference = self
                    .reference_state
                    .clone()
                    .context(MissingReferenceStateSnafu {})?;
                Ok(ScenarioKind::Reallocation(Policy::NormalizedToState(
                    reference,
                )))
            }
            POLICY_SUMMARY => Ok(ScenarioKind::YearSummary),
            x => UnsupportedPolicySnafu {
                policy: x.to_string(),
            }
            .fail(),
        }
    }
}

/// Translates the short names accepted on the command line.
pub fn policy_from_cli(name: &str) -> ScenarioResult<String> {
    match name {
        "equal" | POLICY_EQUAL => Ok(POLICY_EQUAL.to_string()),
        "normalized" | POLICY_NORMALIZED => Ok(POLICY_NORMALIZED.to_string()),
        POLICY_SUMMARY => Ok(POLICY_SUMMARY.to_string()),
        x => UnsupportedPolicySnafu {
            policy: x.to_string(),
        }
        .fail(),
    }
}

pub fn read_config(path: &str) -> ScenarioResult<ScenarioConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: ScenarioConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    info!("read_config: {:?}", config);
    Ok(config)
}

pub fn read_summary(path: String) -> ScenarioResult<JSValue> {
    let contents = fs::read_to_string(path.as_str()).context(OpeningJsonSnafu { path })?;
    debug!("read content: {:?}", contents);
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
