/*!
A model, aka. a frame paired with a valuation.

Models are transient: the [validity procedures](crate::procedures::validity) build one model for each valuation they consider, borrowing the frame throughout.
*/

use crate::structures::{frame::Frame, valuation::Valuation};

/// A frame paired with a valuation.
#[derive(Clone, Copy, Debug)]
pub struct Model<'f> {
    frame: &'f Frame,
    valuation: Valuation,
}

impl<'f> Model<'f> {
    pub fn new(frame: &'f Frame, valuation: Valuation) -> Self {
        Model { frame, valuation }
    }

    pub fn frame(&self) -> &'f Frame {
        self.frame
    }

    pub fn valuation(&self) -> &Valuation {
        &self.valuation
    }
}
