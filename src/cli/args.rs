use clap::Parser;

use kripke_guess::config::{Config, Notation};

/// Guess a hidden Kripke frame on four worlds by querying modal formulas
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The count of queries and incorrect guesses permitted on each frame
    #[arg(short, long, default_value_t = 10)]
    pub turns: u32,

    /// A seed for sampling frames, for a repeatable game
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write each formula back before the result of a query
    #[arg(short, long, default_value_t = false)]
    pub echo: bool,

    /// The notation to write formulas in
    #[arg(short, long, default_value_t, value_enum)]
    pub notation: Notation,

    /// Print a reference for these arguments as markdown, and exit
    #[arg(long, default_value_t = false)]
    pub markdown_help: bool,
}

/// A [Config] from the given arguments.
///
/// If a value is outside the bounds of an option a message is sent and the process is terminated.
pub fn config_from_args(args: &Args) -> Config {
    let mut config = Config::default();

    if config.turns.set(args.turns).is_err() {
        let (min, max) = config.turns.min_max();
        println!("turns requires a value between {min} and {max}");
        std::process::exit(1);
    }

    config.echo.value = args.echo;
    config.notation = args.notation;
    config.seed = args.seed;

    config
}
