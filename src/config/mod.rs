/*!
Configuration of a [game](crate::game).

All configuration for a game is contained within [Config].
Bounded values are held as a [ConfigOption], whose value may only be [set](ConfigOption::set) within the bounds of the option.

```rust
# use kripke_guess::config::{Config, Notation};
let mut config = Config::default();
assert_eq!(config.turns.value, 10);

assert!(config.turns.set(3).is_ok());
assert!(config.turns.set(0).is_err());
assert_eq!(config.turns.value, 3);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The count of queries and incorrect guesses permitted on a frame.
    pub turns: ConfigOption<u32>,

    /// Write each formula read by a query before the result of the query.
    pub echo: ConfigOption<bool>,

    /// The notation to use when writing a formula.
    pub notation: Notation,

    /// A seed for sampling frames, otherwise a seed is drawn from the system.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            turns: ConfigOption {
                name: "turns",
                min: 1,
                max: 99,
                value: 10,
            },

            echo: ConfigOption {
                name: "echo",
                min: false,
                max: true,
                value: false,
            },

            notation: Notation::default(),

            seed: None,
        }
    }
}

/// Ways of writing a formula.
///
/// Each way is one of the spellings accepted by the [formula parser](crate::parse::formula).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Notation {
    /// ASCII symbols, e.g. `[]p -> <>p`
    Ascii,
    /// Unicode symbols, e.g. `□p → ⋄p`
    #[default]
    Unicode,
    /// LaTeX commands, e.g. `\Box p \to \Diamond p`
    Latex,
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notation::Ascii => write!(f, "ascii"),
            Notation::Unicode => write!(f, "unicode"),
            Notation::Latex => write!(f, "latex"),
        }
    }
}
