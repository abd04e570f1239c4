use clap::ArgMatches;

use clue_reasoner::config::{Config, PolarityLean, RandomDecisionBias};

use crate::config_io::ConfigIO;

/// A config from the arguments, with a note of any value which is out of bounds.
pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Ok(Some(seed)) = args.try_get_one::<u64>("seed") {
        the_config.seed.value = *seed
    };

    if let Ok(Some(lean)) = args.try_get_one::<PolarityLean>("polarity_lean") {
        if !the_config.polarity_lean.set(*lean) {
            let (min, max) = the_config.polarity_lean.min_max();
            println!("c Polarity lean must be between {min} and {max}, using {}", the_config.polarity_lean.value);
        }
    };

    if let Ok(Some(bias)) = args.try_get_one::<RandomDecisionBias>("random_decision_bias") {
        if !the_config.random_decision_bias.set(*bias) {
            let (min, max) = the_config.random_decision_bias.min_max();
            println!(
                "c Random decision bias must be between {min} and {max}, using {}",
                the_config.random_decision_bias.value
            );
        }
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("no_phase_saving") {
        the_config.phase_saving.value = false
    };

    the_config
}

pub fn config_io_from_args(args: &ArgMatches) -> ConfigIO {
    let mut the_config = ConfigIO::default();

    if let Ok(Some(true)) = args.try_get_one::<bool>("each") {
        the_config.show_each = true
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("clauses") {
        the_config.show_clauses = true
    };

    if let Ok(Some(true)) = args.try_get_one::<bool>("stats") {
        the_config.show_stats = true
    };

    the_config
}
