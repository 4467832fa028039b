/*!
A parser for frame specifications.

A frame specification is a comma separated list of relations, each written as a world, a relator, and a world:

```text
frame    := relation ( ',' relation )*
relation := world ('R' | '<' | '≺' | '\prec') world
world    := 'a' | 'b' | 'c' | 'd'
```

The frame specified is the set of relations listed, and so listing a relation more than once is the same as listing the relation once.

```rust
# use kripke_guess::parse::parse_frame;
# use kripke_guess::structures::{frame::Frame, relation::Relation, world::World::*};
let frame = parse_frame("aRa, aRb, bRb").expect("frame");
assert_eq!(frame, Frame::from_iter([Relation::new(A, A), Relation::new(A, B), Relation::new(B, B)]));

assert_eq!(parse_frame("a<a,a≺b , b\\prec b, aRb"), Ok(frame));
assert!(parse_frame("aRe").is_err());
```
*/

use crate::{
    misc::log::targets::{self},
    parse::lexer::{Lexer, Tokens},
    structures::{frame::Frame, relation::Relation, world::World},
    types::err::{self},
};

/// Kinds of token in a frame specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameToken {
    /// Some lowercase letter, which may or may not be a world.
    Letter,
    Relator,
    Separator,
}

/// The lexer for frame specifications.
pub const FRAME_LEXER: Lexer<FrameToken> = Lexer {
    spellings: &[
        (FrameToken::Relator, &["R", "<", "≺", "\\prec"]),
        (FrameToken::Separator, &[","]),
    ],
    letter: |c| c.is_ascii_lowercase().then_some(FrameToken::Letter),
};

/// The frame specified in `text`.
pub fn parse_frame(text: &str) -> Result<Frame, err::ParseError> {
    let mut tokens = FRAME_LEXER.tokens(text)?;
    if tokens.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let mut relations = vec![relation(&mut tokens)?];
    while tokens.advance_if(&[FrameToken::Separator]).is_some() {
        relations.push(relation(&mut tokens)?);
    }
    tokens.finish()?;

    let frame = Frame::from_iter(relations);
    log::trace!(target: targets::PARSE, "Read frame {frame} from {text:?}");
    Ok(frame)
}

fn relation(tokens: &mut Tokens<FrameToken>) -> Result<Relation, err::ParseError> {
    let from = world(tokens)?;
    tokens.expect(FrameToken::Relator)?;
    let to = world(tokens)?;
    Ok(Relation::new(from, to))
}

fn world(tokens: &mut Tokens<FrameToken>) -> Result<World, err::ParseError> {
    let token = tokens.expect(FrameToken::Letter)?;
    let letter = token.text.chars().next();
    match letter.and_then(World::from_letter) {
        Some(world) => Ok(world),
        None => Err(err::ParseError::UnknownWorld(
            letter.unwrap_or_default(),
            token.offset,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::world::World::*;

    #[test]
    fn single_relation() {
        assert_eq!(
            parse_frame("dRc"),
            Ok(Frame::from_iter([Relation::new(D, C)]))
        );
    }

    #[test]
    fn duplicates_collapse() {
        let frame = parse_frame("aRb, aRb, aRb").expect("frame");
        assert_eq!(frame.relation_count(), 1);
    }

    #[test]
    fn errors() {
        assert_eq!(parse_frame(""), Err(err::ParseError::Empty));
        assert_eq!(
            parse_frame("aRe"),
            Err(err::ParseError::UnknownWorld('e', 2))
        );
        assert_eq!(parse_frame("aRb,"), Err(err::ParseError::UnexpectedEnd));
        assert_eq!(
            parse_frame("aRb bRa"),
            Err(err::ParseError::TrailingInput(4))
        );
        assert_eq!(parse_frame("ab"), Err(err::ParseError::UnexpectedToken(1)));
        assert_eq!(parse_frame("Rb"), Err(err::ParseError::UnexpectedToken(0)));
        assert_eq!(parse_frame("a -> b"), Err(err::ParseError::UnknownToken(2)));
        assert_eq!(
            parse_frame(",aRb"),
            Err(err::ParseError::UnexpectedToken(0))
        );
    }
}
