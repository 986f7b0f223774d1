use std::process::ExitCode;

use synthetic_benchmark::{cli, run_benchmark, BenchmarkConfig, BenchmarkError};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let result = cli::parse_args(std::env::args_os())
        .and_then(|scenario| run_benchmark(&BenchmarkConfig::new(scenario)));
    match result {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(BenchmarkError::Usage) => {
            println!("{}", BenchmarkError::Usage);
            ExitCode::from(1)
        }
        Err(e) => {
            error!(error = %e, "benchmark setup failed");
            ExitCode::from(2)
        }
    }
}
