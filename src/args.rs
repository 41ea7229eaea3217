use clap::Parser;

/// This is a what-if program for the allocation of U.S. presidential electoral votes.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The file containing the scenario description in JSON.
    /// For more information about the file format, read the manual of the electoral_whatif crate.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference file containing the summary of a scenario in JSON format. If provided, evwhatif will
    /// check that the computed output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the scenario will be written in JSON format to the given
    /// location. Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) The historical dataset. Setting this option overrides the data sources that may be
    /// specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default timelines) The type of the input: timelines, csv or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// The election year. Overrides the year of the configuration.
    #[clap(short, long, value_parser)]
    pub year: Option<u32>,

    /// (default equal) The scenario: equal, normalized or summary.
    #[clap(short, long, value_parser)]
    pub policy: Option<String>,

    /// The reference state when using the normalized policy.
    #[clap(long, value_parser)]
    pub normalize_to: Option<String>,

    /// (default: first worksheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
