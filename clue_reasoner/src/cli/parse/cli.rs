use clap::{value_parser, Arg, Command};

use clue_reasoner::config::{PolarityLean, RandomDecisionBias};

pub fn cli() -> Command {
    Command::new("clue_cli")
        .about("Replays a sample game of Clue, and shows what can be deduced")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("each")
            .short('e')
            .long("each")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display the notepad after each event, rather than only at the end of the game."))

        .arg(Arg::new("clauses")
            .short('c')
            .long("clauses")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display the clauses added for each event, in DIMACS form."))

        .arg(Arg::new("stats")
            .short('s')
            .long("stats")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display counts of solves, decisions, etc. at the end of the game."))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("The seed for the source of randomness used during solves."))

        .arg(Arg::new("polarity_lean")
            .long("polarity-lean")
            .value_parser(value_parser!(PolarityLean))
            .required(false)
            .num_args(1)
            .help("The chance of choosing true when deciding the value of an atom, from 0.0 to 1.0."))

        .arg(Arg::new("random_decision_bias")
            .long("random-decision-bias")
            .value_parser(value_parser!(RandomDecisionBias))
            .required(false)
            .num_args(1)
            .help("The chance of deciding on a random atom, rather than the first atom without a value, from 0.0 to 1.0."))

        .arg(Arg::new("no_phase_saving")
            .long("no-phase-saving")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Decide on values with the polarity lean, rather than the previous value of an atom."))
}
