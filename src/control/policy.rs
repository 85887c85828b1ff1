use crate::constants::VELOCITY_FLOOR;
use crate::errors::SimulationError;

/// Loop granularity and termination bounds shared by every body in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPolicy {
    pub time_step: f64,
    pub max_time: f64,
    pub velocity_floor: f64,
}

impl StepPolicy {
    pub fn new(time_step: f64, max_time: f64) -> Self {
        StepPolicy {
            time_step,
            max_time,
            velocity_floor: VELOCITY_FLOOR,
        }
    }

    pub fn with_velocity_floor(time_step: f64, max_time: f64, velocity_floor: f64) -> Self {
        StepPolicy {
            time_step,
            max_time,
            velocity_floor,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.time_step > 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if !(self.max_time > 0.0) {
            return Err(SimulationError::ConfigurationError(format!(
                "max_time must be positive, got {}",
                self.max_time
            )));
        }
        if self.velocity_floor < 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "velocity_floor must be non-negative, got {}",
                self.velocity_floor
            )));
        }
        Ok(())
    }

    /// Hard cap on the series length, honored even if a stopping predicate
    /// never fires.
    pub fn max_samples(&self) -> usize {
        (self.max_time / self.time_step).ceil() as usize + 1
    }
}
