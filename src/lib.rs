pub mod configuration;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::body::BodyConfig;
pub use control::composer::{BodySetup, MultiBodyComposer, MultiBodyResult};
pub use control::policy::StepPolicy;
pub use control::runner::SimulationRun;
pub use control::scenario::ScenarioFactory;
pub use control::stopping::StoppingCondition;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::DragModel;
pub use trajectory_system::kinematics::{euler_step, PhysicalState, StepOutcome, VelocityClamp};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{SeriesSummary, SimulationSeries};
