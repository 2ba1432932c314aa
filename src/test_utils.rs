//! Task fixtures shared by the crate's tests.

/// One binary variable and one operator flipping it each way.
pub const SWITCH_TASK_TEXT: &str = r#"{
    "variables": [
        {"name": "switch", "domain": ["off", "on"]}
    ],
    "operators": [
        {"name": "flip-on", "preconditions": [[0, 0]], "effects": [[0, 1]]},
        {"name": "flip-off", "preconditions": [[0, 1]], "effects": [[0, 0]]}
    ],
    "initial_state": [0],
    "goal": [[0, 1]]
}"#;

/// A one-ball, one-gripper transport task: the robot starts at room a with
/// the ball on the floor and has to deliver it to room b.
///
/// Variables: 0 robot location, 1 ball location (a, b, or gripper),
/// 2 gripper state. Shortest plan: pick-a, move-a-b, drop-b.
pub const GRIPPER_TASK_TEXT: &str = r#"{
    "variables": [
        {"name": "at-robot", "domain": ["a", "b"]},
        {"name": "at-ball", "domain": ["a", "b", "gripper"]},
        {"name": "holding", "domain": ["free", "ball"]}
    ],
    "operators": [
        {"name": "move-a-b", "preconditions": [[0, 0]], "effects": [[0, 1]]},
        {"name": "move-b-a", "preconditions": [[0, 1]], "effects": [[0, 0]]},
        {"name": "pick-a", "preconditions": [[0, 0], [1, 0], [2, 0]], "effects": [[1, 2], [2, 1]]},
        {"name": "pick-b", "preconditions": [[0, 1], [1, 1], [2, 0]], "effects": [[1, 2], [2, 1]]},
        {"name": "drop-a", "preconditions": [[0, 0], [1, 2], [2, 1]], "effects": [[1, 0], [2, 0]]},
        {"name": "drop-b", "preconditions": [[0, 1], [1, 2], [2, 1]], "effects": [[1, 1], [2, 0]]}
    ],
    "initial_state": [0, 0, 0],
    "goal": [[1, 1]]
}"#;

/// No operators, so the goal is unreachable.
pub const UNSOLVABLE_TASK_TEXT: &str = r#"{
    "variables": [
        {"name": "switch", "domain": ["off", "on"]}
    ],
    "operators": [],
    "initial_state": [0],
    "goal": [[0, 1]]
}"#;
