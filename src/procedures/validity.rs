/*!
Validity, in a model and in a frame.

- A formula is valid in a model when satisfied at every world of the model.
- A formula is valid at a world of a frame when satisfied at the world in every model built on the frame.
- A formula is valid in a frame when valid at every world of the frame.

Only the atoms occurring in a formula matter to whether the formula is satisfied, and so the models built on a frame are those whose [valuations](Valuations) differ only on the atoms of the formula.
With *k* distinct atoms this is 2^(4 · *k*) models, and so at most 2¹⁶.
A formula with no atoms, such as ⊤ → □⊥, is checked on the single model with the empty valuation.

```rust
# use kripke_guess::parse::{parse_formula, parse_frame};
# use kripke_guess::structures::world::World;
let frame = parse_frame("aRa, aRb, bRb").expect("frame");
let five = parse_formula("Mp -> LMp").expect("formula");

assert_eq!(frame.valid_worlds(&five), vec![World::B, World::C, World::D]);
assert!(!frame.validates(&five));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::Formula,
        frame::Frame,
        model::Model,
        valuation::Valuations,
        world::{World, WORLDS, WORLD_COUNT},
    },
};

impl Model<'_> {
    /// Whether `formula` is satisfied at every world of the model.
    pub fn valid(&self, formula: &Formula) -> bool {
        WORLDS
            .into_iter()
            .all(|world| self.satisfies(world, formula))
    }
}

impl Frame {
    /// Every valuation relevant to `formula`.
    fn valuations_for(formula: &Formula) -> Valuations {
        let atoms = formula.atoms().into_iter().collect::<Vec<_>>();
        Valuations::over(&atoms)
    }

    /// Whether `formula` is valid in the frame.
    pub fn validates(&self, formula: &Formula) -> bool {
        Self::valuations_for(formula).all(|valuation| Model::new(self, valuation).valid(formula))
    }

    /// The worlds of the frame at which `formula` is valid, in order.
    pub fn valid_worlds(&self, formula: &Formula) -> Vec<World> {
        let mut valid = [true; WORLD_COUNT];

        for valuation in Self::valuations_for(formula) {
            let model = Model::new(self, valuation);
            for world in WORLDS {
                if valid[world.index()] && !model.satisfies(world, formula) {
                    valid[world.index()] = false;
                }
            }

            if valid.iter().all(|v| !v) {
                break;
            }
        }

        let worlds = WORLDS
            .into_iter()
            .filter(|world| valid[world.index()])
            .collect::<Vec<_>>();

        log::debug!(target: targets::VALIDITY, "{formula} is valid at {worlds:?} of {self}");
        worlds
    }
}
