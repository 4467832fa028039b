/*!
Atoms, aka. propositional variables.

There are exactly four atoms, written `p`, `q`, `r`, and `s`.
As with [worlds](crate::structures::world) the order of atoms is fixed, and is used to place the value of an atom at a world within a [valuation](crate::structures::valuation).

In the modal logic literature these are usually called 'propositional variables', while the SAT literature prefers 'variables' and the logic literature 'atoms'.
*/

/// A count of the atoms available to a formula.
pub const ATOM_COUNT: usize = 4;

/// An atom, aka. a propositional variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Atom {
    P,
    Q,
    R,
    S,
}

/// All atoms, in order.
pub const ATOMS: [Atom; ATOM_COUNT] = [Atom::P, Atom::Q, Atom::R, Atom::S];

impl Atom {
    /// The position of the atom in [ATOMS].
    pub fn index(&self) -> usize {
        match self {
            Atom::P => 0,
            Atom::Q => 1,
            Atom::R => 2,
            Atom::S => 3,
        }
    }

    /// The letter used to write the atom.
    pub fn letter(&self) -> char {
        match self {
            Atom::P => 'p',
            Atom::Q => 'q',
            Atom::R => 'r',
            Atom::S => 's',
        }
    }

    /// The atom written with `letter`, if any.
    pub fn from_letter(letter: char) -> Option<Self> {
        ATOMS.into_iter().find(|atom| atom.letter() == letter)
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
