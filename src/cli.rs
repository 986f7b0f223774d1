//! Command line: exactly one scenario name, nothing else.

use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

use crate::error::BenchmarkError;
use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "synthetic_benchmark")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(value_enum)]
    scenario: Scenario,
}

/// Scenario named by `args`, program name first.
///
/// The argument count is checked before clap sees the list, so `--` and any other
/// extra argument are usage errors.
pub fn parse_args<I, T>(args: I) -> Result<Scenario, BenchmarkError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        return Err(BenchmarkError::Usage);
    }
    let scenario = Cli::try_parse_from(args)
        .map_err(|_| BenchmarkError::Usage)?
        .scenario;
    debug!(scenario = scenario.name(), config = ?scenario.config(), "scenario selected");
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_name_parses() {
        for scenario in Scenario::ALL {
            let parsed = parse_args(["synthetic_benchmark", scenario.name()]).unwrap();
            assert_eq!(parsed, scenario);
        }
    }

    #[test]
    fn anything_else_is_a_usage_error() {
        let cases: [&[&str]; 9] = [
            &["synthetic_benchmark"],
            &["synthetic_benchmark", "99"],
            &["synthetic_benchmark", ""],
            &["synthetic_benchmark", "75 "],
            &["synthetic_benchmark", "75", "50"],
            &["synthetic_benchmark", "--", "75"],
            &["synthetic_benchmark", "--help"],
            &["synthetic_benchmark", "-V"],
            &["synthetic_benchmark", "-1"],
        ];
        for args in cases {
            assert!(
                matches!(parse_args(args.iter().copied()), Err(BenchmarkError::Usage)),
                "{args:?}"
            );
        }
    }

    #[test]
    fn lone_separator_is_a_usage_error() {
        assert!(matches!(
            parse_args(["synthetic_benchmark", "--"]),
            Err(BenchmarkError::Usage)
        ));
    }
}
