use clue_reasoner::{
    clue::{cards::Category, reasoner::ClueReasoner, sample},
    context::Context,
    oracle::EntailmentOracle,
    structures::clause::Clause,
    types::err::ErrorKind,
};

mod config_io;
mod parse;

use config_io::ConfigIO;

fn main() {
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);
    let config_io = parse::config::config_io_from_args(&matches);

    let mut reasoner = match sample::reasoner(Context::from_config(config)) {
        Ok(reasoner) => reasoner,
        Err(e) => {
            println!("c Error setting up the game: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = replay(&mut reasoner, &config_io) {
        println!("c Error during the game: {e}");
        std::process::exit(1);
    }

    if config_io.show_stats {
        println!("c {}", reasoner.oracle().counters);
    }
}

fn replay<O: EntailmentOracle>(reasoner: &mut ClueReasoner<O>, config_io: &ConfigIO) -> Result<(), ErrorKind> {
    for event in sample::EVENTS {
        println!("{event}");

        let clauses = event.apply(reasoner)?;
        if config_io.show_clauses {
            for clause in &clauses {
                println!("  {}", clause.as_dimacs(true));
            }
        }

        if config_io.show_each {
            println!("{}", reasoner.notepad()?);
        }
    }

    if !config_io.show_each {
        println!();
        println!("{}", reasoner.notepad()?);
    }

    for category in Category::ALL {
        let candidates = reasoner
            .case_file_candidates(category)?
            .into_iter()
            .map(|card| reasoner.universe().name(card))
            .collect::<Vec<_>>();
        println!("{category}: {}", candidates.join(", "));
    }

    Ok(())
}
