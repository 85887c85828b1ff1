use crate::errors::SimulationError;
use crate::trajectory_system::aerodynamics::DragModel;

/// Everything that determines the forces on one body. Built once per run
/// and never mutated while the run is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyConfig {
    pub mass: f64,
    pub drag: DragModel,
    pub external_force: f64,
    pub gravitational_accel: f64,
}

impl BodyConfig {
    pub fn new(mass: f64, drag: DragModel, external_force: f64, gravitational_accel: f64) -> Self {
        BodyConfig {
            mass,
            drag,
            external_force,
            gravitational_accel,
        }
    }

    /// A body under gravity alone, no drag and no external force.
    pub fn ballistic(mass: f64, gravitational_accel: f64) -> Self {
        BodyConfig::new(mass, DragModel::none(), 0.0, gravitational_accel)
    }

    /// A force-free body that keeps whatever velocity it starts with.
    pub fn coasting(mass: f64) -> Self {
        BodyConfig::new(mass, DragModel::none(), 0.0, 0.0)
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.mass > 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.gravitational_accel < 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "gravitational_accel must be non-negative, got {}",
                self.gravitational_accel
            )));
        }
        self.drag.validate()
    }
}
