/*!
The satisfaction relation, between a model, a world, and a formula.

Satisfaction is defined by recursion on the structure of a formula:

| Formula | Satisfied at *w* *if and only if* |
|---------|-----------------------------------|
| ⊤ | always |
| ⊥ | never |
| p | (*w*, p) is in the valuation |
| ¬φ | φ is not satisfied at *w* |
| □φ | φ is satisfied at every world accessible from *w* |
| ⋄φ | φ is satisfied at some world accessible from *w* |
| φ ∧ ψ, φ ∨ ψ, φ → ψ, φ ↔ ψ | the boolean combination of φ and ψ at *w* |

In particular, □φ is satisfied at any world with no accessible world, and ⋄φ is satisfied at no such world.

```rust
# use kripke_guess::structures::{atom::Atom, formula::Formula, frame::Frame, model::Model, valuation::Valuation, world::World};
let empty = Frame::default();
let model = Model::new(&empty, Valuation::default());

assert!(model.satisfies(World::A, &Formula::necessarily(Formula::Bottom)));
assert!(!model.satisfies(World::A, &Formula::possibly(Formula::Top)));
```
*/

use crate::structures::{formula::Formula, model::Model, world::World};

impl Model<'_> {
    /// Whether `formula` is satisfied at `world` of the model.
    pub fn satisfies(&self, world: World, formula: &Formula) -> bool {
        match formula {
            Formula::Top => true,
            Formula::Bottom => false,
            Formula::Atom(atom) => self.valuation().holds(world, *atom),

            Formula::Not(inner) => !self.satisfies(world, inner),

            Formula::Box(inner) => self
                .frame()
                .successors(world)
                .all(|successor| self.satisfies(successor, inner)),

            Formula::Diamond(inner) => self
                .frame()
                .successors(world)
                .any(|successor| self.satisfies(successor, inner)),

            Formula::And(left, right) => {
                self.satisfies(world, left) && self.satisfies(world, right)
            }
            Formula::Or(left, right) => {
                self.satisfies(world, left) || self.satisfies(world, right)
            }
            Formula::Implies(left, right) => {
                !self.satisfies(world, left) || self.satisfies(world, right)
            }
            Formula::Iff(left, right) => {
                self.satisfies(world, left) == self.satisfies(world, right)
            }
        }
    }
}
