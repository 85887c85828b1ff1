use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragModel {
    pub drag_coefficient: f64,
    pub cross_sectional_area: f64,
    pub fluid_density: f64,
}

impl DragModel {
    pub fn new(drag_coefficient: f64, cross_sectional_area: f64, fluid_density: f64) -> Self {
        DragModel {
            drag_coefficient,
            cross_sectional_area,
            fluid_density,
        }
    }

    /// A model with all coefficients zeroed, for bodies that feel no drag.
    pub fn none() -> Self {
        DragModel::new(0.0, 0.0, 0.0)
    }

    /// Drag force magnitude at the given velocity. Always non-negative;
    /// the direction is resolved by `net_force`.
    pub fn drag_force(&self, velocity: f64) -> f64 {
        0.5 * self.fluid_density
            * self.drag_coefficient
            * self.cross_sectional_area
            * velocity
            * velocity
    }

    /// Combine the constant external force with drag opposing the direction
    /// of travel. The sign rule keeps drag dissipative in both directions.
    pub fn net_force(&self, velocity: f64, external_force: f64) -> f64 {
        let drag = self.drag_force(velocity);
        if velocity > 0.0 {
            external_force - drag
        } else {
            external_force + drag
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.drag_coefficient < 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "drag_coefficient must be non-negative, got {}",
                self.drag_coefficient
            )));
        }
        if self.cross_sectional_area < 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "cross_sectional_area must be non-negative, got {}",
                self.cross_sectional_area
            )));
        }
        if self.fluid_density < 0.0 {
            return Err(SimulationError::ConfigurationError(format!(
                "fluid_density must be non-negative, got {}",
                self.fluid_density
            )));
        }
        Ok(())
    }
}
