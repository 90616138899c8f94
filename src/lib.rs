//! # mars-rover-sim
//!
//! Drives robots across a bounded rectangular plateau and reports where each
//! one ends up, or that it was lost off an edge.
//!
//! Input is a small text format: a grid-size line followed by one line per
//! robot, `(x, y, HEADING) COMMANDS`. [`parse_mission`] turns it into a
//! [`Mission`], and a [`RoverInterpreter`] executes it into a
//! [`SimulationResult`]. [`run_robot_commands`] does both and renders the
//! result as text.

pub mod error;
pub mod grid;
pub mod interpreter;
pub mod parser;
pub mod rover;

pub use error::*;
pub use grid::*;
pub use interpreter::*;
pub use parser::*;
pub use rover::*;

/// Parses `input`, runs every robot with the standard commands, and returns
/// one status line per robot.
///
/// A rejected mission returns the error message instead
/// (`Invalid commands` or `Invalid grid size`).
pub fn run_robot_commands(input: &str) -> String {
    match parse_mission(input) {
        Ok(mission) => RoverInterpreter::default().run(mission).to_string(),
        Err(err) => {
            log::warn!("mission rejected: {err:?}");
            err.to_string()
        }
    }
}
