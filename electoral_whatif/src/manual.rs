/*!

This is the long-form manual for `electoral_whatif` and `evwhatif`.

## Scenarios

The following scenarios are supported:
* `equalPopulation` (`--policy equal`): every state gets electoral votes in
  proportion to its population, with the national number of people per vote
* `normalizedToState` (`--policy normalized --normalize-to <state>`): every
  state is held to the number of people per vote of the reference state
* `summary` (`--policy summary`): no reallocation, prints statistics on the
  representation of each state for the year

In both reallocation scenarios the total number of electoral votes of the
year is conserved, and every state keeps at least one vote. The votes are
assigned with the largest remainder method (Hamilton's method): every state
first gets the integer part of its exact share, and the leftover votes go to
the states with the largest fractional parts, one vote each. An excess is
removed the same way, starting from the smallest fractional parts and
skipping the states that only have one vote.

When the reference state of a normalized scenario is very small or very
large, the shares can sum to much more or much less than the total. A single
pass over the states is then not enough, and the scenario fails with a
conservation error instead of returning votes unrelated to the shares.

Ties are broken by the order of the states in the input: between equal
remainders, and between parties with the same number of votes.

States without a population (territories, early years of the dataset) keep
their historical votes in the totals of the year but do not get a new
allocation.

## Input formats

The following formats are supported:
* `timelines` JSON dataset of state timelines
* `csv` Comma Separated Values, one row per state and per year
* `xlsx` the same table in an Excel workbook

### `timelines`

An object keyed by state name. Fields that are not listed below are ignored.

```text
{
  "Ohio": {
    "name": "Ohio",
    "timeline": [
      { "year": 1804, "exists": true, "population": 230760,
        "electoralVotes": 3, "winner": "Democratic-Republican",
        "runnerUp": "Federalist" }
    ]
  }
}
```

`population`, `winner` and `runnerUp` may be `null` or missing. The states
are read in the order of their keys.

### `csv`

Simple CSV reader. The first row is a header and the columns are found by
name, in any order:

```text
Year,State,Electoral_Votes,Population,Winner_Party,RunnerUp_Party
1804,Ohio,3,230760,Democratic-Republican,Federalist
```

`RunnerUp_Party` is optional, other columns are ignored. Empty cells are
treated as missing values. A state exists in a year if it has electoral
votes for that year. The states keep the order of their first row.

### `xlsx`

The same table as `csv`, in the first worksheet of the workbook, or in the
worksheet given by `--excel-worksheet-name` (or `excelWorksheetName` in the
configuration).

## Configuration

`evwhatif` can run entirely from the command line:

```text
evwhatif --input stateTimelines.json --year 1860 --policy normalized --normalize-to Wyoming
```

It also accepts a configuration file in JSON:

```text
{
  "outputSettings": { "scenarioName": "1860 at Wyoming ratio" },
  "dataSources": [ { "provider": "timelines", "filePath": "stateTimelines.json" } ],
  "scenario": { "year": 1860, "policy": "normalizedToState", "referenceState": "Wyoming" }
}
```

- `outputSettings.outputDirectory` (string, optional): directory in which the
  summary is written, as `<scenarioName>_summary.json`.
- `dataSources`: one or more inputs, relative paths are resolved from the
  directory of the configuration file. When several inputs have an entry for
  the same state and year, the first one is kept.
- `dataSources[].excelWorksheetName` (string, optional): for `xlsx` inputs.
- `scenario.referenceState` (string): required for `normalizedToState`.

The command line options `--year`, `--policy` and `--normalize-to` override
the configuration.

## Reference summaries

With `--reference <file>`, the computed summary is compared with the content
of the file. The differences are printed and the program fails if they are
not the same.

 */
