use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use otter_logic::config::{Config, ConfigError, SymbolOrder};

pub fn cli() -> Command {
    Command::new("otter_logic")
        .about("Determines what follows from the knowledge of a logic puzzle")
        .subcommand_required(true)

        .subcommand(Command::new("clue")
            .about("Deduce the contents of the envelope in a game of Clue, as cards are revealed."))

        .subcommand(Command::new("houses")
            .about("Deduce the house of each of four students, from a handful of clues."))

        .arg(Arg::new("parallel")
            .long("parallel")
            .short('p')
            .action(ArgAction::SetTrue)
            .help("Examine the branches of case splits on separate threads.")
            .global(true))

        .arg(Arg::new("parallel_depth")
            .long("parallel-depth")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("The count of case splits whose branches are examined on separate threads.")
            .long_help("The count of case splits whose branches are examined on separate threads.
Has no effect unless '--parallel' is given.
At most 2^depth threads are used by a single query.")
            .global(true))

        .arg(Arg::new("shuffle")
            .long("shuffle")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Value symbols in an order shuffled by the given seed.")
            .global(true))

        .arg(Arg::new("stats")
            .long("stats")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("Display counts of queries and valuations examined.")
            .global(true))
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    if args.get_flag("parallel") {
        the_config.parallel.set(true)?;
    };

    if let Ok(Some(depth)) = args.try_get_one::<usize>("parallel_depth") {
        the_config.parallel_depth.set(*depth)?;
    };

    if let Ok(Some(seed)) = args.try_get_one::<u64>("shuffle") {
        the_config.symbol_order.set(SymbolOrder::Shuffled)?;
        the_config.seed.set(*seed)?;
    };

    Ok(the_config)
}
