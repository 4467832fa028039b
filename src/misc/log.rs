/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, and are intended to help when extending the library or fixing issues.

Note, no log implementation is provided by the library.
The binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `logging` feature, and so, for example:
- Logs from the canonical database may be filtered with `RUST_LOG=canonical …`.
- Logs of each turn of a game may be found with `RUST_LOG=game=info …`.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [frames](crate::structures::frame)
    pub const FRAME: &str = "frame";

    /// Logs related to [validity](crate::procedures::validity)
    pub const VALIDITY: &str = "validity";

    /// Logs related to the [canonical database](crate::db::canonical)
    pub const CANONICAL: &str = "canonical";

    /// Logs related to a [game](crate::game)
    pub const GAME: &str = "game";
}
