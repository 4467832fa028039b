/*!
A parser for formulas.

# Grammar

From loosest to tightest binding:

```text
expression := disjunct ( ('→' | '↔') expression )?
disjunct   := term ( ('∧' | '∨') disjunct )?
term       := atom | '⊤' | '⊥'
            | ('¬' | '□' | '⋄') term
            | '(' expression ')'
```

So:
- Prefix operators take the smallest following term, and stack: `¬□p` is `¬(□p)`.
- Conjunction and disjunction bind tighter than implication and the biconditional.
- Conjunction and disjunction share a tier, as do implication and the biconditional, and within a tier operators associate to the right: `p → q → r` is `p → (q → r)` and `p ∧ q ∨ r` is `p ∧ (q ∨ r)`.

# Spellings

| Token | Spellings |
|-------|-----------|
| atom | `p` `q` `r` `s` |
| ⊤ | `T` `⊤` `1` `\top` |
| ⊥ | `F` `⊥` `0` `\bot` |
| ¬ | `~` `¬` `\neg` `\lnot` |
| □ | `[]` `□` `L` `\Box` |
| ⋄ | `<>` `⋄` `◇` `M` `\Diamond` |
| ∧ | `&` `^` `∧` `\wedge` `\land` |
| ∨ | `\|` `v` `∨` `\vee` `\lor` |
| → | `->` `→` `\rightarrow` `\to` `\implies` |
| ↔ | `<->` `↔` `\leftrightarrow` `\iff` |
| ( | `(` `\left(` |
| ) | `)` `\right)` |

Whitespace between tokens is ignored.
Formulas nested deeper than [MAX_DEPTH] are not read.

```rust
# use kripke_guess::parse::parse_formula;
# use kripke_guess::structures::{atom::Atom, formula::Formula};
let p = Formula::Atom(Atom::P);
let five = Formula::implies(Formula::possibly(p.clone()), Formula::necessarily(Formula::possibly(p)));

assert_eq!(parse_formula("Mp -> LMp"), Ok(five.clone()));
assert_eq!(parse_formula("⋄p→□⋄p"), Ok(five.clone()));
assert_eq!(parse_formula("\\Diamond p \\to \\Box \\Diamond p"), Ok(five));

assert!(parse_formula("p -> ").is_err());
assert!(parse_formula("x").is_err());
```
*/

use crate::{
    misc::log::targets::{self},
    parse::lexer::{Lexer, Tokens},
    structures::{atom::Atom, formula::Formula},
    types::err::{self},
};

/// Kinds of token in a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulaToken {
    /// Some lowercase letter, which may or may not be an atom.
    Letter,
    Top,
    Bottom,
    Not,
    Box,
    Diamond,
    And,
    Or,
    Implies,
    Iff,
    Open,
    Close,
}

/// The lexer for formulas.
pub const FORMULA_LEXER: Lexer<FormulaToken> = Lexer {
    spellings: &[
        (FormulaToken::Top, &["T", "⊤", "1", "\\top"]),
        (FormulaToken::Bottom, &["F", "⊥", "0", "\\bot"]),
        (FormulaToken::Not, &["~", "¬", "\\neg", "\\lnot"]),
        (FormulaToken::Box, &["[]", "□", "L", "\\Box"]),
        (FormulaToken::Diamond, &["<>", "⋄", "◇", "M", "\\Diamond"]),
        (FormulaToken::And, &["&", "^", "∧", "\\wedge", "\\land"]),
        (FormulaToken::Or, &["|", "v", "∨", "\\vee", "\\lor"]),
        (FormulaToken::Implies, &["->", "→", "\\rightarrow", "\\to", "\\implies"]),
        (FormulaToken::Iff, &["<->", "↔", "\\leftrightarrow", "\\iff"]),
        (FormulaToken::Open, &["(", "\\left("]),
        (FormulaToken::Close, &[")", "\\right)"]),
    ],
    letter: |c| c.is_ascii_lowercase().then_some(FormulaToken::Letter),
};

/// The deepest nesting of subformulas read before parsing fails with [TooDeep](err::ParseError::TooDeep).
///
/// Each prefix operator, parenthesis, and binary connective nests the formula read after it.
pub const MAX_DEPTH: usize = 1024;

/// The formula written in `text`.
pub fn parse_formula(text: &str) -> Result<Formula, err::ParseError> {
    let mut tokens = FORMULA_LEXER.tokens(text)?;
    if tokens.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let formula = expression(&mut tokens, 0)?;
    tokens.finish()?;

    log::trace!(target: targets::PARSE, "Read formula {formula} from {text:?}");
    Ok(formula)
}

fn expression(tokens: &mut Tokens<FormulaToken>, depth: usize) -> Result<Formula, err::ParseError> {
    let left = disjunct(tokens, depth)?;
    match tokens.advance_if(&[FormulaToken::Implies, FormulaToken::Iff]) {
        Some(connective) => {
            let right = expression(tokens, depth + 1)?;
            Ok(binary(connective.kind, left, right))
        }
        None => Ok(left),
    }
}

fn disjunct(tokens: &mut Tokens<FormulaToken>, depth: usize) -> Result<Formula, err::ParseError> {
    let left = term(tokens, depth)?;
    match tokens.advance_if(&[FormulaToken::And, FormulaToken::Or]) {
        Some(connective) => {
            let right = disjunct(tokens, depth + 1)?;
            Ok(binary(connective.kind, left, right))
        }
        None => Ok(left),
    }
}

// Every nesting passes through a term, so the depth is bounded here.
fn term(tokens: &mut Tokens<FormulaToken>, depth: usize) -> Result<Formula, err::ParseError> {
    let Some(token) = tokens.advance() else {
        return Err(err::ParseError::UnexpectedEnd);
    };

    if depth > MAX_DEPTH {
        return Err(err::ParseError::TooDeep(token.offset));
    }

    match token.kind {
        FormulaToken::Letter => {
            let letter = token.text.chars().next();
            match letter.and_then(Atom::from_letter) {
                Some(atom) => Ok(Formula::Atom(atom)),
                None => Err(err::ParseError::UnknownAtom(
                    letter.unwrap_or_default(),
                    token.offset,
                )),
            }
        }

        FormulaToken::Top => Ok(Formula::Top),
        FormulaToken::Bottom => Ok(Formula::Bottom),

        FormulaToken::Not => Ok(Formula::not(term(tokens, depth + 1)?)),
        FormulaToken::Box => Ok(Formula::necessarily(term(tokens, depth + 1)?)),
        FormulaToken::Diamond => Ok(Formula::possibly(term(tokens, depth + 1)?)),

        FormulaToken::Open => {
            let formula = expression(tokens, depth + 1)?;
            tokens.expect(FormulaToken::Close)?;
            Ok(formula)
        }

        FormulaToken::And
        | FormulaToken::Or
        | FormulaToken::Implies
        | FormulaToken::Iff
        | FormulaToken::Close => Err(err::ParseError::UnexpectedToken(token.offset)),
    }
}

/// The formula joining `left` and `right` by the connective of `kind`.
///
/// Only called with the kind of a binary connective.
fn binary(kind: FormulaToken, left: Formula, right: Formula) -> Formula {
    match kind {
        FormulaToken::And => Formula::and(left, right),
        FormulaToken::Or => Formula::or(left, right),
        FormulaToken::Implies => Formula::implies(left, right),
        _ => Formula::iff(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Formula {
        Formula::Atom(Atom::P)
    }

    fn q() -> Formula {
        Formula::Atom(Atom::Q)
    }

    fn r() -> Formula {
        Formula::Atom(Atom::R)
    }

    #[test]
    fn prefix_binds_tightest() {
        assert_eq!(
            parse_formula("~Lp & q"),
            Ok(Formula::and(Formula::not(Formula::necessarily(p())), q()))
        );
    }

    #[test]
    fn implication_is_loosest() {
        assert_eq!(
            parse_formula("p & q -> r"),
            Ok(Formula::implies(Formula::and(p(), q()), r()))
        );
        assert_eq!(
            parse_formula("p -> q & r"),
            Ok(Formula::implies(p(), Formula::and(q(), r())))
        );
    }

    #[test]
    fn right_association() {
        assert_eq!(
            parse_formula("p -> q -> r"),
            Ok(Formula::implies(p(), Formula::implies(q(), r())))
        );
        assert_eq!(
            parse_formula("p & q v r"),
            Ok(Formula::and(p(), Formula::or(q(), r())))
        );
        assert_eq!(
            parse_formula("p <-> q -> r"),
            Ok(Formula::iff(p(), Formula::implies(q(), r())))
        );
    }

    #[test]
    fn parentheses_reset_precedence() {
        assert_eq!(
            parse_formula("(p -> q) -> r"),
            Ok(Formula::implies(Formula::implies(p(), q()), r()))
        );
        assert_eq!(
            parse_formula("\\left( p \\lor q \\right) \\land r"),
            Ok(Formula::and(Formula::or(p(), q()), r()))
        );
        assert_eq!(
            parse_formula("L(p -> q)"),
            Ok(Formula::necessarily(Formula::implies(p(), q())))
        );
    }

    #[test]
    fn constants() {
        for top in ["T", "⊤", "1", "\\top"] {
            assert_eq!(parse_formula(top), Ok(Formula::Top));
        }
        for bottom in ["F", "⊥", "0", "\\bot"] {
            assert_eq!(parse_formula(bottom), Ok(Formula::Bottom));
        }
    }

    #[test]
    fn longest_spelling_wins() {
        // `\to` is a prefix of `\top`, and `<>` shares a prefix with `<->`.
        assert_eq!(
            parse_formula("\\top \\to p"),
            Ok(Formula::implies(Formula::Top, p()))
        );
        assert_eq!(
            parse_formula("<>p<->p"),
            Ok(Formula::iff(Formula::possibly(p()), p()))
        );
    }

    #[test]
    fn errors() {
        assert_eq!(parse_formula(""), Err(err::ParseError::Empty));
        assert_eq!(parse_formula("  "), Err(err::ParseError::Empty));
        assert_eq!(
            parse_formula("p & x"),
            Err(err::ParseError::UnknownAtom('x', 4))
        );
        assert_eq!(
            parse_formula("p # q"),
            Err(err::ParseError::UnknownToken(2))
        );
        assert_eq!(parse_formula("(p & q"), Err(err::ParseError::UnexpectedEnd));
        assert_eq!(
            parse_formula("p & q)"),
            Err(err::ParseError::TrailingInput(5))
        );
        assert_eq!(parse_formula("p q"), Err(err::ParseError::TrailingInput(2)));
        assert_eq!(
            parse_formula("& p"),
            Err(err::ParseError::UnexpectedToken(0))
        );
        assert_eq!(parse_formula("~"), Err(err::ParseError::UnexpectedEnd));
        assert_eq!(
            parse_formula("(p))"),
            Err(err::ParseError::TrailingInput(3))
        );
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!("{}p", "~".repeat(100_000));
        assert_eq!(
            parse_formula(&deep),
            Err(err::ParseError::TooDeep(MAX_DEPTH + 1))
        );

        let parens = format!("{}p{}", "(".repeat(5_000), ")".repeat(5_000));
        assert!(matches!(
            parse_formula(&parens),
            Err(err::ParseError::TooDeep(_))
        ));

        let chain = vec!["p"; 5_000].join(" & ");
        assert!(matches!(
            parse_formula(&chain),
            Err(err::ParseError::TooDeep(_))
        ));

        let shallow = format!("{}p", "~".repeat(MAX_DEPTH));
        assert!(parse_formula(&shallow).is_ok());
    }
}
