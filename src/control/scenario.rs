use crate::constants::{
    AIR_DENSITY, BOAT_START_POSITION, BOAT_VELOCITY, COARSE_TIME_STEP, FINE_TIME_STEP, GRAVITY,
    LAUNCH_VELOCITY, MAX_SIMULATION_TIME, VEHICLE_CROSS_SECTION, VEHICLE_DRAG_COEFFICIENT,
    VEHICLE_MASS,
};
use crate::control::body::BodyConfig;
use crate::control::composer::{BodySetup, MultiBodyComposer};
use crate::control::policy::StepPolicy;
use crate::control::stopping::StoppingCondition;
use crate::trajectory_system::aerodynamics::DragModel;
use crate::trajectory_system::kinematics::PhysicalState;

pub struct ScenarioFactory;

impl ScenarioFactory {
    /// Horizontal launch of the canonical vehicle: quadratic drag only,
    /// finely stepped, run until it is effectively at rest.
    pub fn create_drag_projectile(identifier: String, initial_velocity: f64) -> BodySetup {
        BodySetup::new(
            identifier,
            PhysicalState::new(0.0, initial_velocity),
            BodyConfig::new(
                VEHICLE_MASS,
                DragModel::new(VEHICLE_DRAG_COEFFICIENT, VEHICLE_CROSS_SECTION, AIR_DENSITY),
                0.0,
                0.0,
            ),
            StepPolicy::new(FINE_TIME_STEP, MAX_SIMULATION_TIME),
            StoppingCondition::DecayToRest,
        )
    }

    /// Straight-up launch under gravity alone, coarsely stepped, run until
    /// the body has fallen back past its launch speed.
    pub fn create_vertical_launch(identifier: String, initial_velocity: f64) -> BodySetup {
        BodySetup::new(
            identifier,
            PhysicalState::new(0.0, initial_velocity),
            BodyConfig::ballistic(VEHICLE_MASS, GRAVITY),
            StepPolicy::new(COARSE_TIME_STEP, MAX_SIMULATION_TIME),
            StoppingCondition::ReturnPastLaunch {
                launch_speed: initial_velocity,
            },
        )
    }

    /// Force-free observer holding a fixed velocity for the whole window.
    pub fn create_drifting_observer(
        identifier: String,
        initial_position: f64,
        velocity: f64,
    ) -> BodySetup {
        BodySetup::new(
            identifier,
            PhysicalState::new(initial_position, velocity),
            BodyConfig::coasting(1.0),
            StepPolicy::new(FINE_TIME_STEP, MAX_SIMULATION_TIME),
            StoppingCondition::TimeLimit,
        )
    }

    /// The complete canonical scenario: drag projectile, vertical launch,
    /// and the drifting boat, each independent of the others.
    pub fn create_launch_scenario() -> MultiBodyComposer {
        MultiBodyComposer::new()
            .with_body(Self::create_drag_projectile(
                "projectile-x".to_string(),
                LAUNCH_VELOCITY,
            ))
            .with_body(Self::create_vertical_launch(
                "projectile-y".to_string(),
                LAUNCH_VELOCITY,
            ))
            .with_body(Self::create_drifting_observer(
                "boat".to_string(),
                BOAT_START_POSITION,
                BOAT_VELOCITY,
            ))
    }
}
