use crate::control::{body::BodyConfig, policy::StepPolicy};

/// One body at one instant. A new snapshot is produced per step; the
/// previous one survives only inside the recorded series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalState {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
}

impl PhysicalState {
    pub fn new(position: f64, velocity: f64) -> Self {
        PhysicalState {
            time: 0.0,
            position,
            velocity,
        }
    }
}

/// Whether a step may clamp a decaying velocity at zero. Drag-stopping
/// bodies use `DecayToRest`; free-fall and constant-force bodies must keep
/// `Free` because a sign change is a valid state for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityClamp {
    DecayToRest,
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state: PhysicalState,
    /// Drag magnitude that acted during this step, for the caller's series.
    pub drag_force: f64,
}

/// Advance one state by exactly one `policy.time_step` with explicit Euler.
///
/// The position update uses the pre-step velocity, not the freshly updated
/// one. That ordering matches the symplectic-leaning Euler variant this
/// engine is built around and must not be switched.
pub fn euler_step(
    state: &PhysicalState,
    body: &BodyConfig,
    policy: &StepPolicy,
    clamp: VelocityClamp,
) -> StepOutcome {
    let dt = policy.time_step;
    let drag_force = body.drag.drag_force(state.velocity);
    let force = body.drag.net_force(state.velocity, body.external_force)
        - body.mass * body.gravitational_accel;
    let acceleration = force / body.mass;

    let mut velocity = state.velocity + acceleration * dt;
    if clamp == VelocityClamp::DecayToRest {
        // A velocity shrinking in magnitude must settle at zero instead of
        // oscillating across it.
        if state.velocity > 0.0 && velocity < state.velocity {
            velocity = velocity.max(0.0);
        } else if state.velocity < 0.0 && velocity > state.velocity {
            velocity = velocity.min(0.0);
        }
    }

    StepOutcome {
        state: PhysicalState {
            time: state.time + dt,
            position: state.position + state.velocity * dt,
            velocity,
        },
        drag_force,
    }
}
