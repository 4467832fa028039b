//! Error types used in the library.
//!
//! Errors are surfaced to the caller as soon as found, and are never recovered from within the library:
//! - A [ParseError], when some text is not a formula or not a frame specification.
//! - A [FrameError], when an id is outside the range of frame ids.
//! - A [ConfigError], when a configuration option is given a value outside its bounds.
//!
//! Names of the error enums overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// Any error from the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Parse(ParseError),
    Frame(FrameError),
    Config(ConfigError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Parse(e) => write!(f, "{e}"),
            ErrorKind::Frame(e) => write!(f, "{e}"),
            ErrorKind::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors during parsing.
///
/// Offsets are byte offsets into the parsed text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// No token is spelt at the offset.
    UnknownToken(usize),

    /// A letter was read in place of an atom, though the letter is not an atom.
    UnknownAtom(char, usize),

    /// A letter was read in place of a world, though the letter is not a world.
    UnknownWorld(char, usize),

    /// A token was read where some other token was required.
    UnexpectedToken(usize),

    /// The text ended where some token was required.
    /// For example, an unclosed parenthesis.
    UnexpectedEnd,

    /// A complete formula or frame was read, though some text remains.
    TrailingInput(usize),

    /// Subformulas are nested too deeply at the offset.
    TooDeep(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "nothing to read"),
            ParseError::UnknownToken(offset) => write!(f, "unknown symbol at {offset}"),
            ParseError::UnknownAtom(letter, offset) => {
                write!(f, "'{letter}' at {offset} is not an atom")
            }
            ParseError::UnknownWorld(letter, offset) => {
                write!(f, "'{letter}' at {offset} is not a world")
            }
            ParseError::UnexpectedToken(offset) => write!(f, "unexpected symbol at {offset}"),
            ParseError::UnexpectedEnd => write!(f, "unexpected end of input"),
            ParseError::TrailingInput(offset) => write!(f, "unread input from {offset}"),
            ParseError::TooDeep(offset) => write!(f, "nested too deeply at {offset}"),
        }
    }
}

/// Errors with frames.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FrameError {
    /// An id outside [0, 2¹⁶) was given as the id of a frame.
    IdOutOfRange(usize),
}

impl From<FrameError> for ErrorKind {
    fn from(e: FrameError) -> Self {
        ErrorKind::Frame(e)
    }
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::IdOutOfRange(id) => write!(f, "{id} is not the id of a frame"),
        }
    }
}

/// Errors when configuring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::OutOfBounds(name) => write!(f, "{name} is out of bounds"),
        }
    }
}
