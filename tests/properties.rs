// tests/properties.rs
use glam::IVec2;
use mars_rover_sim::{
    GridBounds, Heading, Orientation, Robot, RobotStatus, RoverInterpreter, RoverOp, RoverState,
    Step, run_robot_commands,
};
use proptest::prelude::*;

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

/// A grid together with a robot that starts somewhere on it.
fn arb_grid_and_robot() -> impl Strategy<Value = (GridBounds, Robot)> {
    (0i32..12, 0i32..12).prop_flat_map(|(max_x, max_y)| {
        (
            Just(GridBounds::new(max_x, max_y)),
            0..=max_x,
            0..=max_y,
            arb_orientation(),
            "[LRF]{0,40}",
        )
            .prop_map(|(bounds, x, y, o, commands)| (bounds, Robot::new(x, y, o, commands)))
    })
}

proptest! {
    #[test]
    fn four_quarter_turns_are_identity(o in arb_orientation()) {
        prop_assert_eq!(o.left().left().left().left(), o);
        prop_assert_eq!(o.right().right().right().right(), o);
        prop_assert_eq!(o.left().right(), o);

        let bounds = GridBounds::new(0, 0);
        let mut rover = RoverState::new(IVec2::ZERO, o.into());
        for _ in 0..4 {
            rover = match rover.step(RoverOp::RotateLeft, &bounds) {
                Step::Moved(next) => next,
                Step::Lost(_) => unreachable!("rotation never loses a rover"),
            };
        }
        prop_assert_eq!(rover.heading, Heading::Cardinal(o));
    }

    #[test]
    fn empty_commands_echo_start((bounds, robot) in arb_grid_and_robot()) {
        let robot = Robot { commands: String::new(), ..robot };
        let start = robot.position.unwrap();
        let status = RoverInterpreter::default().run_robot(&bounds, robot.clone());
        prop_assert_eq!(status, RobotStatus::Active { position: start, heading: robot.heading });
    }

    #[test]
    fn lost_status_is_last_on_grid_state((bounds, robot) in arb_grid_and_robot()) {
        let status = RoverInterpreter::default().run_robot(&bounds, robot);
        match status {
            RobotStatus::Lost { position, heading } => {
                prop_assert!(bounds.contains(position));
                let Heading::Cardinal(o) = heading else {
                    return Err(TestCaseError::fail("lost robot must have a heading"));
                };
                prop_assert!(!bounds.contains(position + o.unit_vector()));
            }
            RobotStatus::Active { position, .. } => prop_assert!(bounds.contains(position)),
            RobotStatus::OffGrid => prop_assert!(false, "robot started on grid"),
        }
    }

    #[test]
    fn output_order_matches_input_order(
        (bounds, robots) in (0i32..8, 0i32..8).prop_flat_map(|(mx, my)| (
            Just(GridBounds::new(mx, my)),
            prop::collection::vec(
                (-2..=mx + 2, -2..=my + 2, arb_orientation(), "[LRF]{0,12}"),
                0..8,
            ),
        ))
    ) {
        let lines: Vec<String> = robots
            .iter()
            .map(|(x, y, o, commands)| format!("({x}, {y}, {o}) {commands}"))
            .collect();
        let input = format!("{} {}\n{}", bounds.max.x, bounds.max.y, lines.join("\n"));

        let interpreter = RoverInterpreter::default();
        let expected: Vec<String> = robots
            .into_iter()
            .map(|(x, y, o, commands)| {
                interpreter.run_robot(&bounds, Robot::new(x, y, o, commands)).to_string()
            })
            .collect();

        prop_assert_eq!(run_robot_commands(&input), expected.join("\n"));
    }

    #[test]
    fn active_status_reparses_to_itself((bounds, robot) in arb_grid_and_robot()) {
        let status = RoverInterpreter::default().run_robot(&bounds, robot);
        if let RobotStatus::Active { .. } = status {
            let line = status.to_string();
            let input = format!("{} {}\n{}", bounds.max.x, bounds.max.y, line);
            prop_assert_eq!(run_robot_commands(&input), line);
        }
    }
}
