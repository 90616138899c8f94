//! Interpreter that drives robots through their command strings.
//!
//! The entry point is [`RoverInterpreter`]. [`RoverInterpreter::default`] knows
//! the standard `L`/`R`/`F` commands; register other characters via
//! [`RoverInterpreter::set_op`], then call [`RoverInterpreter::run`] with a
//! parsed [`Mission`].

use crate::grid::{GridBounds, Mission, Robot, RobotStatus, SimulationResult};
use crate::rover::{RoverOp, RoverState, Step};
use std::collections::HashMap;

/// Maps command characters to rover operations and runs missions.
#[derive(Clone, Debug)]
pub struct RoverInterpreter {
    op_map: HashMap<char, RoverOp>,
}

impl Default for RoverInterpreter {
    fn default() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_commands();
        interpreter
    }
}

impl RoverInterpreter {
    /// Creates an interpreter with an empty command map. Every character is
    /// ignored until registered.
    pub fn new() -> Self {
        Self {
            op_map: HashMap::new(),
        }
    }

    /// Replaces the entire command map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, RoverOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`RoverOp`] to a command character.
    pub fn set_op(&mut self, command: char, op: RoverOp) {
        self.op_map.insert(command, op);
    }

    /// Registers `L`, `R` and `F`.
    pub fn populate_standard_commands(&mut self) {
        let mappings = [
            ('L', RoverOp::RotateLeft),
            ('R', RoverOp::RotateRight),
            ('F', RoverOp::Forward),
        ];

        for (command, op) in mappings {
            self.set_op(command, op);
        }
    }

    /// Looks up the operation for `command`; unmapped characters are [`RoverOp::Ignore`].
    pub fn op_for(&self, command: char) -> RoverOp {
        self.op_map.get(&command).copied().unwrap_or(RoverOp::Ignore)
    }

    /// Runs every robot of `mission` in input order.
    ///
    /// Robots never interact: a lost robot leaves nothing behind for the
    /// robots that follow it.
    pub fn run(&self, mission: Mission) -> SimulationResult {
        let Mission { bounds, robots } = mission;
        let statuses: Vec<RobotStatus> = robots
            .into_iter()
            .map(|robot| self.run_robot(&bounds, robot))
            .collect();

        let result = SimulationResult::new(statuses);
        log::info!(
            "mission complete: {} robots, {} lost",
            result.len(),
            result.lost_count()
        );
        result
    }

    /// Runs one robot's commands and reports where it ended up.
    ///
    /// # Start check
    ///
    /// A robot whose start position is off the grid (or unreadable) runs no
    /// commands and reports [`RobotStatus::OffGrid`].
    ///
    /// # Losing a robot
    ///
    /// Commands run left to right. The first forward move that would leave the
    /// grid stops the robot; it reports the state it had *before* that move.
    pub fn run_robot(&self, bounds: &GridBounds, robot: Robot) -> RobotStatus {
        let Robot {
            position,
            heading,
            commands,
        } = robot;

        let Some(position) = position.filter(|p| bounds.contains(*p)) else {
            log::debug!("robot at {position:?} does not begin on grid");
            return RobotStatus::OffGrid;
        };

        let mut rover = RoverState::new(position, heading);
        for command in commands.chars() {
            match rover.step(self.op_for(command), bounds) {
                Step::Moved(next) => rover = next,
                Step::Lost(last) => {
                    log::debug!(
                        "robot lost moving {:?} from ({}, {})",
                        last.heading,
                        last.position.x,
                        last.position.y
                    );
                    return Step::Lost(last).into();
                }
            }
        }
        Step::Moved(rover).into()
    }
}
