use aes_t_tables::CipherVariant;
use clap::ValueEnum;

use crate::placement::Placement;

pub const TRIALS: usize = 100;

/// Iteration counts of the two timed phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub work_iterations: u32,
    pub crypto_iterations: u32,
}

/// Named presets, after the share of time natively spent encrypting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Scenario {
    #[value(name = "75")]
    Encrypt75,
    #[value(name = "50")]
    Encrypt50,
    #[value(name = "25")]
    Encrypt25,
    #[value(name = "10")]
    Encrypt10,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Encrypt75,
        Scenario::Encrypt50,
        Scenario::Encrypt25,
        Scenario::Encrypt10,
    ];

    pub const fn config(self) -> ScenarioConfig {
        let (work_iterations, crypto_iterations) = match self {
            Scenario::Encrypt75 => (2048, 100),
            Scenario::Encrypt50 => (8192, 100),
            Scenario::Encrypt25 => (8192, 40),
            Scenario::Encrypt10 => (8192, 15),
        };
        ScenarioConfig {
            work_iterations,
            crypto_iterations,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Scenario::Encrypt75 => "75",
            Scenario::Encrypt50 => "50",
            Scenario::Encrypt25 => "25",
            Scenario::Encrypt10 => "10",
        }
    }
}

/// Everything a run needs to know, besides the buffers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub scenario: ScenarioConfig,
    pub trials: usize,
    pub key_placement: Placement,
    pub output_placement: Placement,
    pub variant: CipherVariant,
}

impl BenchmarkConfig {
    /// Configuration selected by the crate features.
    ///
    /// The expanded key always gets a page of its own and `wb_on_retire` adds the
    /// mapping hint to it. `full_protect` moves the cipher output and the checksum onto
    /// such pages too. `full_unroll` picks the unrolled cipher.
    pub fn new(scenario: Scenario) -> BenchmarkConfig {
        let protected = Placement::Page {
            wb_on_retire: cfg!(feature = "wb_on_retire"),
        };
        BenchmarkConfig {
            scenario: scenario.config(),
            trials: TRIALS,
            key_placement: protected,
            output_placement: if cfg!(feature = "full_protect") {
                protected
            } else {
                Placement::Heap
            },
            variant: if cfg!(feature = "full_unroll") {
                CipherVariant::Unrolled
            } else {
                CipherVariant::Looped
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_table() {
        let expected = [("75", 2048, 100), ("50", 8192, 100), ("25", 8192, 40), ("10", 8192, 15)];
        for (name, work, crypto) in expected {
            let scenario = Scenario::from_str(name, false).unwrap();
            assert_eq!(scenario.name(), name);
            assert_eq!(
                scenario.config(),
                ScenarioConfig {
                    work_iterations: work,
                    crypto_iterations: crypto
                }
            );
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["99", "", "75 ", "seventy-five", "-1", "Encrypt75"] {
            assert!(Scenario::from_str(name, false).is_err(), "{name:?}");
        }
    }

    #[test]
    fn features_select_the_placements() {
        let config = BenchmarkConfig::new(Scenario::Encrypt25);
        let protected = Placement::Page {
            wb_on_retire: cfg!(feature = "wb_on_retire"),
        };
        assert_eq!(config.key_placement, protected);
        if cfg!(feature = "full_protect") {
            assert_eq!(config.output_placement, protected);
        } else {
            assert_eq!(config.output_placement, Placement::Heap);
        }
        let variant = if cfg!(feature = "full_unroll") {
            CipherVariant::Unrolled
        } else {
            CipherVariant::Looped
        };
        assert_eq!(config.variant, variant);
    }

    #[test]
    fn default_config_runs_every_trial() {
        let config = BenchmarkConfig::new(Scenario::Encrypt50);
        assert_eq!(config.trials, TRIALS);
        assert!(matches!(config.key_placement, Placement::Page { .. }));
    }
}
