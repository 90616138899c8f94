//! Reads the text mission format into a [`Mission`].
//!
//! ```text
//! 4 8
//! (2, 3, E) LFRFF
//! (0, 2, N) FFLFRFF
//! ```
//!
//! The first line holds the grid size. Every following non-blank line is one
//! robot: its start position and heading in parentheses, then its commands.

use crate::error::MissionError;
use crate::grid::{GridBounds, Heading, Mission, Robot};
use glam::IVec2;

/// Parses a complete mission.
///
/// Fails only on empty input or a negative grid size. Malformed robot lines
/// are kept and degrade when the robot runs.
pub fn parse_mission(input: &str) -> Result<Mission, MissionError> {
    if input.is_empty() {
        return Err(MissionError::EmptyInput);
    }

    let mut lines = input.lines();
    let bounds = parse_grid_line(lines.next().unwrap_or_default())?;

    let robots: Vec<Robot> = lines
        .filter(|line| !line.trim().is_empty())
        .map(parse_robot_line)
        .collect();

    log::debug!(
        "parsed mission: grid ({}, {}), {} robots",
        bounds.max.x,
        bounds.max.y,
        robots.len()
    );

    Ok(Mission { bounds, robots })
}

/// Parses the `<maxX> <maxY>` header.
///
/// A negative value on either axis is rejected. A token that is not a number
/// (or is missing) leaves that axis without an upper limit. Fractional sizes
/// round down. An empty line reads as zero width with unbounded height.
pub fn parse_grid_line(line: &str) -> Result<GridBounds, MissionError> {
    let mut tokens = line.split_whitespace();
    let max_x = parse_grid_axis(Some(tokens.next().unwrap_or_default()));
    let max_y = parse_grid_axis(tokens.next());

    match (max_x, max_y) {
        (Some(x), Some(y)) => Ok(GridBounds::new(x, y)),
        _ => Err(MissionError::InvalidGridSize {
            line: line.to_string(),
        }),
    }
}

/// `None` means the axis is negative.
fn parse_grid_axis(token: Option<&str>) -> Option<i32> {
    let Some(token) = token else {
        log::warn!("grid size is missing a dimension; treating it as unbounded");
        return Some(i32::MAX);
    };
    if token.is_empty() {
        return Some(0);
    }
    if let Ok(value) = token.parse::<i32>() {
        return (value >= 0).then_some(value);
    }
    match token.parse::<f64>() {
        Ok(value) if value < 0.0 => None,
        Ok(value) if value.is_finite() => Some(value.floor().min(i32::MAX as f64) as i32),
        _ => {
            log::warn!("grid size token {token:?} is not a number; treating it as unbounded");
            Some(i32::MAX)
        }
    }
}

/// Parses one `(x, y, HEADING) COMMANDS` line.
///
/// This never fails. Unreadable coordinates leave the robot without a start
/// position, and an unknown heading is kept as text. A line missing its `)`
/// still parses: the group runs up to (not including) the last character, and
/// the whole line is read as commands.
pub fn parse_robot_line(line: &str) -> Robot {
    let start = line.find('(').map_or(0, |open| open + 1);
    let (end, rest) = match line.find(')') {
        Some(close) => (close, &line[close + 1..]),
        None => {
            log::warn!("robot line {line:?} has no closing parenthesis");
            let last = line.char_indices().last().map_or(0, |(i, _)| i);
            (last, line)
        }
    };

    let inner = line.get(start..end).unwrap_or_default();
    let mut fields = inner.split(',').map(str::trim);
    let x = fields.next().and_then(|f| f.parse::<i32>().ok());
    let y = fields.next().and_then(|f| f.parse::<i32>().ok());
    let heading = Heading::parse(fields.next().unwrap_or_default());

    let position = x.zip(y).map(|(x, y)| IVec2::new(x, y));
    if position.is_none() {
        log::warn!("robot line {line:?} has unreadable coordinates");
    }
    if let Heading::Unrecognized(text) = &heading {
        log::warn!("robot line {line:?} has unrecognised heading {text:?}");
    }

    let robot = Robot {
        position,
        heading,
        commands: rest.trim().to_string(),
    };
    log::debug!("parsed robot {robot:?}");
    robot
}
