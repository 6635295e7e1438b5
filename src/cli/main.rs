#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use crossterm::style::Stylize;

use otter_logic::{context::Context, reports::Report, types::err};

mod parse;
mod puzzles;

use puzzles::Puzzle;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let config = match parse::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let puzzle = match matches.subcommand_name() {
        Some("clue") => puzzles::clue(),
        Some("houses") => puzzles::houses(),
        _ => {
            println!("c A puzzle is required");
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(config);

    let result = puzzle.and_then(|puzzle| run(&mut the_context, &puzzle));
    if let Err(e) = result {
        println!("c Error: {e}");
        std::process::exit(2);
    }

    if matches.get_flag("stats") {
        let counters = &the_context.counters;
        println!("c Queries:    {}", counters.total_queries);
        println!("c Valuations: {}", counters.total_leaves);
        println!("c Time:       {:.2?}", counters.time);
    }
}

/// Adds each stage of `puzzle` to the context in turn, reporting on every symbol after each stage.
fn run(the_context: &mut Context, puzzle: &Puzzle) -> Result<(), err::ErrorKind> {
    for stage in &puzzle.stages {
        for sentence in &stage.sentences {
            the_context.add(sentence.clone())?;
        }

        println!("{}", "-".repeat(50));
        println!("{}", stage.note.bold());
        println!();

        for (symbol, report) in the_context.classify_all(&puzzle.symbols)? {
            let line = format!("{symbol}: {report}");
            match report {
                Report::Present => println!("{}", line.green()),
                Report::Absent => println!("{}", line.red()),
                Report::Undetermined => println!("{line}"),
                Report::Inconsistent => println!("{}", line.yellow()),
            }
        }
    }

    Ok(())
}
