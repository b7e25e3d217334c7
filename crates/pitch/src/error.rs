use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{name} must be positive, got {value} cm")]
    NonPositiveDimension { name: &'static str, value: i32 },
    #[error(
        "penalty spot at {penalty_spot_distance} cm must lie strictly inside each half of a {length} cm pitch"
    )]
    PenaltySpotBeyondMidline {
        penalty_spot_distance: i32,
        length: i32,
    },
    #[error("goal width {goal_width} cm must be smaller than pitch width {width} cm")]
    GoalWiderThanPitch { goal_width: i32, width: i32 },
}
