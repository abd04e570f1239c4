/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
As the formulas built by the [reasoner](crate::clue::reasoner) are small the options are few, and concern only how decisions are made during a solve.

Entailment is independent of any option, so options change how quickly (and via which model) an answer is found, never the answer.
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation for the probability of choosing `true`
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of assigning positive polarity to a atom when freely choosing a atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of choosing an atom at random (rather than the first atom without a value) when making a decision.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Default to the last set value of a atom when choosing a value for the atom, otherwise decide with [polarity_lean](Config::polarity_lean).
    pub phase_saving: ConfigOption<bool>,

    /// The seed for the source of rng.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    /// The default context is configured to provide quick, deterministic, results.
    fn default() -> Self {
        Config {
            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}
