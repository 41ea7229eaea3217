use calamine::{open_workbook, DataType, Reader, Xlsx};
use log::{debug, info};
use snafu::prelude::*;

use crate::scenario::io_common::{
    parse_count, parse_label, parse_u32, rows_to_timelines, ColumnIndex, HistoricalRow,
    COL_ELECTORAL_VOTES, COL_POPULATION, COL_YEAR,
};
use crate::scenario::*;

/// Reads the historical table from a workbook.
///
/// Uses the first worksheet unless a name is given.
pub fn read_excel_file(
    path: String,
    worksheet_name: Option<&str>,
) -> ScenarioResult<Vec<StateTimeline>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path.as_str()).context(OpeningExcelSnafu { path: path.clone() })?;
    let wrange = match worksheet_name {
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { name })?,
        None => workbook.worksheet_range_at(0).context(EmptyExcelSnafu {})?,
    }
    .context(OpeningExcelSnafu { path: path.clone() })?;

    let mut iter = wrange.rows();
    let header: Vec<String> = iter
        .next()
        .context(EmptyExcelSnafu {})?
        .iter()
        .enumerate()
        .map(|(idx, c)| read_cell(c, 1, idx))
        .collect::<ScenarioResult<Vec<String>>>()?;
    debug!("read_excel_file: header: {:?}", header);
    let cols = ColumnIndex::from_header(&header)?;

    let mut rows: Vec<HistoricalRow> = Vec::new();
    for (idx, cells) in iter.enumerate() {
        // Line numbers as displayed by spreadsheet programs.
        let lineno = idx + 2;
        let cell = |pos: usize| -> ScenarioResult<String> {
            match cells.get(pos) {
                Some(c) => read_cell(c, lineno, pos),
                None => Ok("".to_string()),
            }
        };
        let state = match parse_label(cell(cols.state)?.as_str()) {
            Some(s) => s,
            None => {
                debug!("read_excel_file: line {}: no state name, skipping", lineno);
                continue;
            }
        };
        let year = parse_u32(cell(cols.year)?.as_str(), lineno, COL_YEAR)?.context(
            MalformedCellSnafu {
                lineno,
                column: COL_YEAR,
                content: "",
            },
        )?;
        let runner_up = match cols.runner_up {
            Some(pos) => parse_label(cell(pos)?.as_str()),
            None => None,
        };
        let row = HistoricalRow {
            year,
            state,
            electoral_votes: parse_u32(
                cell(cols.electoral_votes)?.as_str(),
                lineno,
                COL_ELECTORAL_VOTES,
            )?
            .unwrap_or(0),
            population: parse_count(cell(cols.population)?.as_str(), lineno, COL_POPULATION)?,
            winner: parse_label(cell(cols.winner)?.as_str()),
            runner_up,
        };
        debug!("read_excel_file: line {}: {:?}", lineno, row);
        rows.push(row);
    }
    info!(
        "read_excel_file: {} rows from {}",
        rows.len(),
        simplify_file_name(path.as_str())
    );
    Ok(rows_to_timelines(rows))
}

fn read_cell(cell: &DataType, lineno: usize, column: usize) -> ScenarioResult<String> {
    match cell {
        DataType::String(s) => Ok(s.clone()),
        DataType::Int(i) => Ok(i.to_string()),
        DataType::Float(f) if f.fract() == 0.0 => Ok(format!("{}", *f as i64)),
        DataType::Float(f) => Ok(f.to_string()),
        DataType::Empty => Ok("".to_string()),
        _ => ExcelWrongCellTypeSnafu {
            lineno,
            column,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells() {
        assert_eq!(read_cell(&DataType::Float(1860.0), 2, 0).unwrap(), "1860");
        assert_eq!(read_cell(&DataType::Int(3), 2, 0).unwrap(), "3");
        assert_eq!(read_cell(&DataType::Empty, 2, 0).unwrap(), "");
        assert_eq!(
            read_cell(&DataType::String("Whig".to_string()), 2, 0).unwrap(),
            "Whig"
        );
        assert!(matches!(
            read_cell(&DataType::Bool(true), 2, 4),
            Err(ScenarioError::ExcelWrongCellType { lineno: 2, column: 4, .. })
        ));
    }

    #[test]
    fn missing_workbook() {
        let res = read_excel_file("/nonexistent/history.xlsx".to_string(), None);
        assert!(matches!(res, Err(ScenarioError::OpeningExcel { .. })));
    }
}
