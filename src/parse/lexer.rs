/*!
A lexer driven by a table of spellings.

Each kind of token is paired with every way the token may be spelt, e.g. negation with `~`, `¬`, `\neg`, and `\lnot`.
The parsers only consider the kind of a token, and so the spellings of a token may be revised without revising a grammar.

At each offset:
- Whitespace is skipped.
- The longest spelling found at the offset is read, with ties going to the spelling listed first.
- Otherwise, a single character may be read through the 'letter' function of the lexer.
  This allows, e.g., every lowercase letter to be read as a candidate world, so that a letter which is not a world is noted as such, rather than as an unknown token.
*/

use crate::types::err::{self};

/// A token of kind `K`, with the text read and the offset of the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'t, K> {
    pub kind: K,
    pub text: &'t str,
    pub offset: usize,
}

/// A table of spellings for tokens of kind `K`.
pub struct Lexer<K: 'static> {
    /// Each kind of token, paired with every spelling of the kind.
    pub spellings: &'static [(K, &'static [&'static str])],

    /// The kind of token, if any, for a character without a spelling.
    pub letter: fn(char) -> Option<K>,
}

impl<K: Copy> Lexer<K> {
    /// The tokens of `text`, or an error at the first offset no token is read from.
    pub fn tokens<'t>(&self, text: &'t str) -> Result<Tokens<'t, K>, err::ParseError> {
        let mut tokens = Vec::default();
        let mut offset = 0;

        loop {
            let rest = &text[offset..];
            let trimmed = rest.trim_start();
            offset += rest.len() - trimmed.len();

            let Some(character) = trimmed.chars().next() else {
                break;
            };

            let mut longest: Option<(K, usize)> = None;
            for (kind, spellings) in self.spellings {
                for spelling in *spellings {
                    let length = spelling.len();
                    if trimmed.starts_with(spelling) && longest.map_or(true, |(_, l)| l < length) {
                        longest = Some((*kind, length));
                    }
                }
            }

            if longest.is_none() {
                longest = (self.letter)(character).map(|kind| (kind, character.len_utf8()));
            }

            match longest {
                Some((kind, length)) => {
                    tokens.push(Token {
                        kind,
                        text: &trimmed[..length],
                        offset,
                    });
                    offset += length;
                }
                None => return Err(err::ParseError::UnknownToken(offset)),
            }
        }

        Ok(Tokens {
            tokens,
            position: 0,
        })
    }
}

/// A sequence of tokens, read front to back.
pub struct Tokens<'t, K> {
    tokens: Vec<Token<'t, K>>,
    position: usize,
}

impl<'t, K: Copy + PartialEq> Tokens<'t, K> {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The next token, without reading it.
    pub fn peek(&self) -> Option<&Token<'t, K>> {
        self.tokens.get(self.position)
    }

    /// Reads the next token.
    pub fn advance(&mut self) -> Option<Token<'t, K>> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Reads the next token if it is of the given kind.
    pub fn advance_if(&mut self, kinds: &[K]) -> Option<Token<'t, K>> {
        match self.peek() {
            Some(token) if kinds.contains(&token.kind) => self.advance(),
            _ => None,
        }
    }

    /// Reads the next token, which is required to be of the given kind.
    pub fn expect(&mut self, kind: K) -> Result<Token<'t, K>, err::ParseError> {
        match self.advance() {
            Some(token) if token.kind == kind => Ok(token),
            Some(token) => Err(err::ParseError::UnexpectedToken(token.offset)),
            None => Err(err::ParseError::UnexpectedEnd),
        }
    }

    /// Ok, if every token has been read.
    pub fn finish(&self) -> Result<(), err::ParseError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(err::ParseError::TrailingInput(token.offset)),
        }
    }
}
