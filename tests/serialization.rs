// tests/serialization.rs
use glam::IVec2;
use mars_rover_sim::{Heading, Mission, RoverInterpreter, SimulationResult, parse_mission};

#[test]
fn test_mission_survives_json() {
    let mission = parse_mission("4 8\n(2, 3, E) LFRFF\n(1, 1, Q) F\nbroken").unwrap();
    assert_eq!(mission.robots[1].heading, Heading::Unrecognized("Q".to_string()));

    let json = serde_json::to_string(&mission).unwrap();
    let restored: Mission = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, mission);
    assert_eq!(restored.robots[0].position, Some(IVec2::new(2, 3)));
    assert_eq!(restored.robots[2].position, None);
}

#[test]
fn test_result_survives_json() {
    let mission = parse_mission("4 8\n(2, 3, E) LFRFF\n(0, 2, N) FFLFRFF\n(9, 9, N)").unwrap();
    let result = RoverInterpreter::default().run(mission);

    let json = serde_json::to_string(&result).unwrap();
    let restored: SimulationResult = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, result);
    assert_eq!(restored.lost_count(), 1);
    assert_eq!(
        restored.to_string(),
        "(4, 4, E)\n(0, 4, W) LOST\nRobot does not begin on grid"
    );
}
