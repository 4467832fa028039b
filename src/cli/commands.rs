use crossterm::style::Stylize;

use kripke_guess::{
    game::Game,
    parse::parse_formula,
    reports::{GuessReport, QueryReport},
    structures::frame::Frame,
};

/// A line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'l> {
    Guess(&'l str),
    Reset,
    Show,
    Dot,
    Help,
    Exit,
    Query(&'l str),
    Nothing,
}

impl<'l> Command<'l> {
    pub fn read(line: &'l str) -> Self {
        let input = line.trim();
        if input.is_empty() {
            Command::Nothing
        } else if let Some(rest) = input.strip_prefix("!guess") {
            Command::Guess(rest.trim())
        } else if input.starts_with("!reset") {
            Command::Reset
        } else if input.starts_with("!show") {
            Command::Show
        } else if input.starts_with("!dot") {
            Command::Dot
        } else if input.starts_with("!help") {
            Command::Help
        } else if input.starts_with("!exit") {
            Command::Exit
        } else {
            Command::Query(input)
        }
    }
}

pub fn announce(game: &Game) {
    println!(
        "A new Kripke frame is created! It has 4 worlds and {} relations.",
        game.frame().relation_count()
    );
}

pub fn show(frame: &Frame) {
    println!("id: {}", frame.id());
    for relation in frame.relations() {
        println!("{} ==> {}", relation.from(), relation.to());
    }
}

pub fn help() {
    println!("<formula> ... check if the formula is valid in the frame");
    println!("!guess <frame> ... guess the frame");
    println!("!reset ... abandon this frame and start over");
    println!("!show ... see the frame (CHEAT)");
    println!("!dot ... see the frame as a graphviz graph (CHEAT)");
    println!("!help ... show this");
    println!("!exit ... bye bye");
}

pub fn query(game: &mut Game, text: &str) {
    let formula = match parse_formula(text) {
        Ok(formula) => formula,
        Err(e) => {
            println!("invalid formula: {e}");
            println!("example: Mp -> LMp");
            return;
        }
    };

    if game.config().echo.value {
        println!("{}", formula.display(game.config().notation));
    }

    let report = game.query(&formula);
    match report {
        QueryReport::Valid => println!("{}", report.to_string().green()),
        QueryReport::ValidIn(_) => println!("{}", report.to_string().yellow()),
        QueryReport::Invalid => println!("{}", report.to_string().red()),
    }
}

pub fn guess(game: &mut Game, text: &str) {
    match game.guess_str(text) {
        Ok(report) => match report {
            GuessReport::Correct(ref solved) => {
                println!("{}", report.to_string().green());
                show(solved);
                announce(game);
            }
            GuessReport::Incorrect => println!("{}", report.to_string().red()),
        },
        Err(e) => {
            println!("invalid frame expression: {e}");
            println!("example: aRa, aRb, bRb");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read() {
        assert_eq!(
            Command::read("  !guess aRb, bRa "),
            Command::Guess("aRb, bRa")
        );
        assert_eq!(Command::read("!reset"), Command::Reset);
        assert_eq!(Command::read("!exit now"), Command::Exit);
        assert_eq!(Command::read("Mp -> LMp"), Command::Query("Mp -> LMp"));
        assert_eq!(Command::read("   "), Command::Nothing);
    }
}
