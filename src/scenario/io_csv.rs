// Primitives for reading CSV files.

use log::{debug, info, warn};
use snafu::prelude::*;

use crate::scenario::{
    io_common::{
        parse_count, parse_label, parse_u32, rows_to_timelines, ColumnIndex, HistoricalRow,
        COL_ELECTORAL_VOTES, COL_POPULATION, COL_YEAR,
    },
    *,
};

pub fn read_csv_table(path: String) -> ScenarioResult<Vec<StateTimeline>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path.as_str())
        .context(CsvOpenSnafu { path: path.clone() })?;
    let header: Vec<String> = rdr
        .headers()
        .context(CsvLineParseSnafu {})?
        .iter()
        .map(|s| s.to_string())
        .collect();
    debug!("read_csv_table: header: {:?}", header);
    let cols = ColumnIndex::from_header(&header)?;

    let mut rows: Vec<HistoricalRow> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu {})?;
        let cell = |pos: usize| line.get(pos).unwrap_or("");
        let state = match parse_label(cell(cols.state)) {
            Some(s) => s,
            None => {
                warn!("read_csv_table: line {}: no state name, skipping", lineno);
                continue;
            }
        };
        let year = parse_u32(cell(cols.year), lineno, COL_YEAR)?.context(MalformedCellSnafu {
            lineno,
            column: COL_YEAR,
            content: "",
        })?;
        let row = HistoricalRow {
            year,
            state,
            electoral_votes: parse_u32(cell(cols.electoral_votes), lineno, COL_ELECTORAL_VOTES)?
                .unwrap_or(0),
            population: parse_count(cell(cols.population), lineno, COL_POPULATION)?,
            winner: parse_label(cell(cols.winner)),
            runner_up: cols.runner_up.and_then(|pos| parse_label(cell(pos))),
        };
        debug!("read_csv_table: line {}: {:?}", lineno, row);
        rows.push(row);
    }
    info!(
        "read_csv_table: {} rows from {}",
        rows.len(),
        simplify_file_name(path.as_str())
    );
    Ok(rows_to_timelines(rows))
}
