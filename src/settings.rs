use std::path::PathBuf;

use clap::Parser;

use crate::report::View;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Budget vs realized dashboard over an in-memory transaction list.
///
/// Data-entry commands are read as CSV with the columns
/// `action,id,description,amount,category,type`, where `action` is `add` or
/// `remove`. The selected view is written to stdout as CSV.
#[derive(Debug, Clone, Parser)]
#[command(name = "budget-dashboard", version)]
pub struct Settings {
    /// CSV file of data-entry commands; stdin when omitted.
    pub input: Option<PathBuf>,

    /// Do not read any data-entry commands.
    #[arg(long, conflicts_with = "input")]
    pub no_input: bool,

    /// View to render.
    #[arg(long, value_enum, default_value_t = View::Dashboard)]
    pub view: View,

    /// Start from an empty store instead of the example transactions.
    #[arg(long)]
    pub empty: bool,

    /// The input has no header row.
    #[arg(long)]
    pub no_headers: bool,

    /// Tracing filter directive, e.g. `debug` or `budget_dashboard=trace`.
    #[arg(long, env = "BUDGET_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults() -> Result<()> {
        let settings = Settings::try_parse_from(["budget-dashboard"])?;

        assert_eq!(settings.input, None);
        assert!(!settings.no_input);
        assert_eq!(settings.view, View::Dashboard);
        assert!(!settings.empty);
        assert!(!settings.no_headers);
        Ok(())
    }

    #[test]
    fn test_view_names_are_kebab_case() -> Result<()> {
        let settings = Settings::try_parse_from(["budget-dashboard", "--view", "cost-analysis"])?;
        assert_eq!(settings.view, View::CostAnalysis);

        let settings = Settings::try_parse_from(["budget-dashboard", "--view", "data-entry"])?;
        assert_eq!(settings.view, View::DataEntry);
        Ok(())
    }

    #[test]
    fn test_input_and_no_input_conflict() {
        let res = Settings::try_parse_from(["budget-dashboard", "--no-input", "entries.csv"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        let res = Settings::try_parse_from(["budget-dashboard", "--view", "charts"]);
        assert!(res.is_err());
    }
}
