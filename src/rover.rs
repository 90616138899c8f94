//! Rover state and the single-command step function.

use crate::grid::{GridBounds, Heading, RobotStatus};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Operations a rover command character can map to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoverOp {
    /// Quarter turn counter-clockwise (`L`).
    RotateLeft,
    /// Quarter turn clockwise (`R`).
    RotateRight,
    /// One cell forward along the current heading (`F`).
    Forward,
    /// No-op; character has no registered meaning.
    Ignore,
}

/// Outcome of applying one operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The rover is still on the grid with this state.
    Moved(RoverState),
    /// The move would leave the grid. Holds the state before the move.
    Lost(RoverState),
}

/// Position and heading of a rover that is on the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    pub position: IVec2,
    pub heading: Heading,
}

impl RoverState {
    pub fn new(position: IVec2, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Applies `op` and returns the resulting state.
    ///
    /// The rover is consumed; a lost rover is handed back unchanged inside
    /// [`Step::Lost`].
    pub fn step(mut self, op: RoverOp, bounds: &GridBounds) -> Step {
        match op {
            RoverOp::RotateLeft => {
                if let Heading::Cardinal(o) = &mut self.heading {
                    *o = o.left();
                }
            }
            RoverOp::RotateRight => {
                if let Heading::Cardinal(o) = &mut self.heading {
                    *o = o.right();
                }
            }
            RoverOp::Forward => {
                let Heading::Cardinal(orientation) = self.heading else {
                    return Step::Moved(self);
                };
                let delta = orientation.unit_vector();
                let candidate = self
                    .position
                    .x
                    .checked_add(delta.x)
                    .zip(self.position.y.checked_add(delta.y))
                    .map(|(x, y)| IVec2::new(x, y));
                match candidate {
                    Some(next) if bounds.contains(next) => self.position = next,
                    // Off the edge, or past the representable range.
                    _ => return Step::Lost(self),
                }
            }
            RoverOp::Ignore => {}
        }
        Step::Moved(self)
    }
}

impl From<Step> for RobotStatus {
    fn from(step: Step) -> Self {
        match step {
            Step::Moved(RoverState { position, heading }) => {
                RobotStatus::Active { position, heading }
            }
            Step::Lost(RoverState { position, heading }) => RobotStatus::Lost { position, heading },
        }
    }
}
