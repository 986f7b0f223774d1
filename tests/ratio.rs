use synthetic_benchmark::{run_benchmark, BenchmarkConfig, Scenario};

const RUNS: usize = 5;

fn median_share(scenario: Scenario) -> f64 {
    let config = BenchmarkConfig::new(scenario);
    let mut shares: Vec<f64> = (0..RUNS)
        .map(|_| run_benchmark(&config).unwrap().encrypt_share())
        .collect();
    shares.sort_by(|a, b| a.total_cmp(b));
    shares[RUNS / 2]
}

#[test]
fn encrypt_share_follows_the_scenario() {
    let heavy = median_share(Scenario::Encrypt75);
    let light = median_share(Scenario::Encrypt10);
    assert!(
        light < heavy,
        "share for \"10\" ({light:.3}) is not below \"75\" ({heavy:.3})"
    );
}

#[test]
fn totals_cover_every_trial() {
    let config = BenchmarkConfig {
        trials: 10,
        ..BenchmarkConfig::new(Scenario::Encrypt25)
    };
    let report = run_benchmark(&config).unwrap();
    assert_eq!(report.trials, 10);
    assert_eq!(
        report.total_cycles(),
        report.work_cycles() + report.encrypt_cycles()
    );
}
