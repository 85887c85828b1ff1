use crate::control::policy::StepPolicy;
use crate::trajectory_system::kinematics::{PhysicalState, VelocityClamp};

/// Per-body termination rule, checked before each step. The `max_time`
/// bound in `StepPolicy` applies on top of whichever rule is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoppingCondition {
    /// Drag has bled the speed down to the policy's velocity floor.
    DecayToRest,
    /// The body has fallen back past its launch speed.
    ReturnPastLaunch { launch_speed: f64 },
    /// Run until the time bound alone.
    TimeLimit,
}

impl StoppingCondition {
    pub fn is_met(&self, state: &PhysicalState, policy: &StepPolicy) -> bool {
        match self {
            StoppingCondition::DecayToRest => state.velocity.abs() <= policy.velocity_floor,
            StoppingCondition::ReturnPastLaunch { launch_speed } => {
                state.velocity <= -launch_speed
            }
            StoppingCondition::TimeLimit => false,
        }
    }

    /// Only drag-stopping bodies get the zero clamp; anything that may
    /// legitimately change sign must integrate freely.
    pub fn velocity_clamp(&self) -> VelocityClamp {
        match self {
            StoppingCondition::DecayToRest => VelocityClamp::DecayToRest,
            StoppingCondition::ReturnPastLaunch { .. } | StoppingCondition::TimeLimit => {
                VelocityClamp::Free
            }
        }
    }
}
