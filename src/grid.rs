use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The inclusive upper-right corner of the plateau.
///
/// Valid coordinates satisfy `0 <= x <= max.x` and `0 <= y <= max.y`.
/// An axis whose size could not be read is stored as `i32::MAX`, which leaves
/// it unbounded above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub max: IVec2,
}

impl GridBounds {
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self {
            max: IVec2::new(max_x, max_y),
        }
    }

    /// Returns `true` if `position` lies on the grid.
    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0 && position.y >= 0 && position.x <= self.max.x && position.y <= self.max.y
    }
}

/// One of the four compass headings a robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All headings in clockwise order, indexed the same way as the tables below.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    const LEFT_OF: [Orientation; 4] = [
        Orientation::West,
        Orientation::North,
        Orientation::East,
        Orientation::South,
    ];

    const RIGHT_OF: [Orientation; 4] = [
        Orientation::East,
        Orientation::South,
        Orientation::West,
        Orientation::North,
    ];

    const UNIT: [IVec2; 4] = [IVec2::Y, IVec2::X, IVec2::NEG_Y, IVec2::NEG_X];

    const fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        Self::LEFT_OF[self.index()]
    }

    /// Quarter turn clockwise.
    pub fn right(self) -> Self {
        Self::RIGHT_OF[self.index()]
    }

    /// Unit step taken by a forward move while facing this way.
    pub fn unit_vector(self) -> IVec2 {
        Self::UNIT[self.index()]
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "N" => Some(Orientation::North),
            "E" => Some(Orientation::East),
            "S" => Some(Orientation::South),
            "W" => Some(Orientation::West),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The heading text of a robot line.
///
/// Anything other than `N`, `E`, `S` or `W` is kept verbatim. Such a robot
/// cannot turn or drive, and reports the text back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Cardinal(Orientation),
    Unrecognized(String),
}

impl Heading {
    pub fn parse(text: &str) -> Self {
        match Orientation::from_letter(text) {
            Some(orientation) => Heading::Cardinal(orientation),
            None => Heading::Unrecognized(text.to_string()),
        }
    }
}

impl From<Orientation> for Heading {
    fn from(orientation: Orientation) -> Self {
        Heading::Cardinal(orientation)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Cardinal(orientation) => write!(f, "{orientation}"),
            Heading::Unrecognized(text) => f.write_str(text),
        }
    }
}

/// A robot as read from one input line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    /// Starting position, or `None` when the coordinates were unreadable.
    pub position: Option<IVec2>,
    pub heading: Heading,
    /// Raw command string; characters are decoded one at a time when run.
    pub commands: String,
}

impl Robot {
    pub fn new(x: i32, y: i32, heading: impl Into<Heading>, commands: impl Into<String>) -> Self {
        Self {
            position: Some(IVec2::new(x, y)),
            heading: heading.into(),
            commands: commands.into(),
        }
    }
}

/// A fully parsed input: the grid and its robots in input order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub bounds: GridBounds,
    pub robots: Vec<Robot>,
}

/// Final report for a single robot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotStatus {
    /// The start position was outside the grid; no command ran.
    OffGrid,
    /// The robot drove off an edge. Holds the last on-grid state.
    Lost { position: IVec2, heading: Heading },
    /// Every command ran without leaving the grid.
    Active { position: IVec2, heading: Heading },
}

impl RobotStatus {
    pub fn is_lost(&self) -> bool {
        matches!(self, RobotStatus::Lost { .. })
    }
}

impl fmt::Display for RobotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotStatus::OffGrid => f.write_str("Robot does not begin on grid"),
            RobotStatus::Lost { position, heading } => {
                write!(f, "({}, {}, {heading}) LOST", position.x, position.y)
            }
            RobotStatus::Active { position, heading } => {
                write!(f, "({}, {}, {heading})", position.x, position.y)
            }
        }
    }
}

/// Per-robot statuses in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    statuses: Vec<RobotStatus>,
}

impl SimulationResult {
    pub fn new(statuses: Vec<RobotStatus>) -> Self {
        Self { statuses }
    }

    pub fn statuses(&self) -> &[RobotStatus] {
        &self.statuses
    }

    pub fn lost_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.is_lost()).count()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, status) in self.statuses.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{status}")?;
        }
        Ok(())
    }
}
