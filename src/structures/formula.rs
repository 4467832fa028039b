/*!
Formulas of (basic, propositional) modal logic.

A formula is a tree, with each compound formula owning its subformulas:

| Variant | Reading |
|---------|---------|
| [Top](Formula::Top), [Bottom](Formula::Bottom) | ⊤, ⊥ |
| [Atom](Formula::Atom) | p, q, r, s |
| [Not](Formula::Not) | ¬φ |
| [Box](Formula::Box) | □φ, 'necessarily φ' |
| [Diamond](Formula::Diamond) | ⋄φ, 'possibly φ' |
| [And](Formula::And), [Or](Formula::Or) | φ ∧ ψ, φ ∨ ψ |
| [Implies](Formula::Implies), [Iff](Formula::Iff) | φ → ψ, φ ↔ ψ |

Formulas are built by the [formula parser](crate::parse::formula), or directly:

```rust
# use kripke_guess::structures::{atom::Atom, formula::Formula};
# use kripke_guess::config::Notation;
let p = Formula::Atom(Atom::P);
let five = Formula::implies(Formula::possibly(p.clone()), Formula::necessarily(Formula::possibly(p)));

assert_eq!(five.to_string(), "⋄p → □⋄p");
assert_eq!(five.display(Notation::Ascii).to_string(), "<>p -> []<>p");
```

# Display

A formula is written with one of the spellings of a [Notation], with any binary subformula wrapped in parentheses.
The written formula parses back to the same formula, whichever notation is used.
*/

use std::collections::BTreeSet;

use crate::{config::Notation, structures::atom::Atom};

/// A formula of modal logic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    Top,
    Bottom,
    Atom(Atom),
    Not(Box<Formula>),
    Box(Box<Formula>),
    Diamond(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    pub fn necessarily(formula: Formula) -> Self {
        Formula::Box(Box::new(formula))
    }

    pub fn possibly(formula: Formula) -> Self {
        Formula::Diamond(Box::new(formula))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// The distinct atoms occurring in the formula, in order.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut BTreeSet<Atom>) {
        match self {
            Formula::Top | Formula::Bottom => {}
            Formula::Atom(atom) => {
                atoms.insert(*atom);
            }
            Formula::Not(inner) | Formula::Box(inner) | Formula::Diamond(inner) => {
                inner.collect_atoms(atoms)
            }
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right)
            | Formula::Iff(left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }

    /// The formula, written in `notation`.
    pub fn display(&self, notation: Notation) -> FormulaDisplay<'_> {
        FormulaDisplay {
            formula: self,
            notation,
        }
    }
}

/// The symbols used to write a formula in some notation.
struct Symbols {
    top: &'static str,
    bottom: &'static str,
    not: &'static str,
    necessarily: &'static str,
    possibly: &'static str,
    and: &'static str,
    or: &'static str,
    implies: &'static str,
    iff: &'static str,
    open: &'static str,
    close: &'static str,
}

const ASCII: Symbols = Symbols {
    top: "T",
    bottom: "F",
    not: "~",
    necessarily: "[]",
    possibly: "<>",
    and: " & ",
    or: " | ",
    implies: " -> ",
    iff: " <-> ",
    open: "(",
    close: ")",
};

const UNICODE: Symbols = Symbols {
    top: "⊤",
    bottom: "⊥",
    not: "¬",
    necessarily: "□",
    possibly: "⋄",
    and: " ∧ ",
    or: " ∨ ",
    implies: " → ",
    iff: " ↔ ",
    open: "(",
    close: ")",
};

// Prefix commands carry a trailing space, so `\neg p` is not read as `\negp`.
const LATEX: Symbols = Symbols {
    top: "\\top",
    bottom: "\\bot",
    not: "\\neg ",
    necessarily: "\\Box ",
    possibly: "\\Diamond ",
    and: " \\wedge ",
    or: " \\vee ",
    implies: " \\to ",
    iff: " \\leftrightarrow ",
    open: "\\left(",
    close: "\\right)",
};

impl Notation {
    fn symbols(&self) -> &'static Symbols {
        match self {
            Notation::Ascii => &ASCII,
            Notation::Unicode => &UNICODE,
            Notation::Latex => &LATEX,
        }
    }
}

/// A formula paired with a notation to write the formula in.
pub struct FormulaDisplay<'f> {
    formula: &'f Formula,
    notation: Notation,
}

fn write_formula(
    f: &mut std::fmt::Formatter<'_>,
    formula: &Formula,
    symbols: &Symbols,
    nested: bool,
) -> std::fmt::Result {
    let (left, connective, right) = match formula {
        Formula::Top => return f.write_str(symbols.top),
        Formula::Bottom => return f.write_str(symbols.bottom),
        Formula::Atom(atom) => return write!(f, "{atom}"),

        Formula::Not(inner) => {
            f.write_str(symbols.not)?;
            return write_formula(f, inner, symbols, true);
        }
        Formula::Box(inner) => {
            f.write_str(symbols.necessarily)?;
            return write_formula(f, inner, symbols, true);
        }
        Formula::Diamond(inner) => {
            f.write_str(symbols.possibly)?;
            return write_formula(f, inner, symbols, true);
        }

        Formula::And(left, right) => (left, symbols.and, right),
        Formula::Or(left, right) => (left, symbols.or, right),
        Formula::Implies(left, right) => (left, symbols.implies, right),
        Formula::Iff(left, right) => (left, symbols.iff, right),
    };

    if nested {
        f.write_str(symbols.open)?;
    }
    write_formula(f, left, symbols, true)?;
    f.write_str(connective)?;
    write_formula(f, right, symbols, true)?;
    if nested {
        f.write_str(symbols.close)?;
    }
    Ok(())
}

impl std::fmt::Display for FormulaDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_formula(f, self.formula, self.notation.symbols(), false)
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_formula(f, self, Notation::Unicode.symbols(), false)
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

    #[test]
    fn atoms_are_distinct() {
        let formula = Formula::and(
            Formula::necessarily(p()),
            Formula::or(q(), Formula::not(p())),
        );
        assert_eq!(
            formula.atoms().into_iter().collect::<Vec<_>>(),
            vec![Atom::P, Atom::Q]
        );
        let constant = Formula::iff(Formula::Top, Formula::Bottom);
        assert!(constant.atoms().is_empty());
    }

    #[test]
    fn nested_binaries_are_wrapped() {
        let formula = Formula::implies(
            Formula::implies(p(), q()),
            Formula::not(Formula::and(p(), q())),
        );
        assert_eq!(formula.to_string(), "(p → q) → ¬(p ∧ q)");
        assert_eq!(
            formula.display(Notation::Ascii).to_string(),
            "(p -> q) -> ~(p & q)"
        );
        assert_eq!(
            formula.display(Notation::Latex).to_string(),
            "\\left(p \\to q\\right) \\to \\neg \\left(p \\wedge q\\right)"
        );
    }

    #[test]
    fn constants() {
        let formula = Formula::or(Formula::Top, Formula::possibly(Formula::Bottom));
        assert_eq!(formula.display(Notation::Ascii).to_string(), "T | <>F");
        assert_eq!(formula.to_string(), "⊤ ∨ ⋄⊥");
    }
}
