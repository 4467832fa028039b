#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::{BufRead, Write};

use clap::Parser;

use kripke_guess::{db::canonical::canonical_db, game::Game};

mod args;
mod commands;

use args::{config_from_args, Args};
use commands::Command;

fn prompt(game: &Game) {
    print!("[{}] ", game.remaining());
    let _ = std::io::stdout().flush();
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args = Args::parse();

    if args.markdown_help {
        print!("{}", clap_markdown::help_markdown::<Args>());
        return;
    }

    let config = config_from_args(&args);

    // The table of canonical ids is built before any frame is hidden.
    let _ = canonical_db();

    let mut game = Game::from_config(config);

    println!("Run !help for available commands.");
    commands::announce(&game);
    prompt(&game);

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };

        match Command::read(&line) {
            Command::Nothing => {}
            Command::Exit => break,
            Command::Help => commands::help(),
            Command::Show => commands::show(game.frame()),
            Command::Dot => println!("{}", game.frame().dot()),
            Command::Reset => {
                game.reset();
                commands::announce(&game);
            }
            Command::Guess(text) => commands::guess(&mut game, text),
            Command::Query(text) => commands::query(&mut game, text),
        }

        if game.exhausted() {
            println!("game over!");
            commands::show(game.frame());
            game.reset();
            commands::announce(&game);
        }

        prompt(&game);
    }
}
