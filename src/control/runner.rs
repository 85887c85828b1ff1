use log::debug;

use crate::control::{body::BodyConfig, policy::StepPolicy, stopping::StoppingCondition};
use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::SimulationSeries;
use crate::trajectory_system::kinematics::{euler_step, PhysicalState};

/// Drives the integrator from an initial condition to a stopping condition,
/// collecting every produced state into a series the caller then owns.
#[derive(Debug, Clone, Copy)]
pub struct SimulationRun {
    pub config: BodyConfig,
    pub policy: StepPolicy,
    pub stopping: StoppingCondition,
}

impl SimulationRun {
    pub fn new(config: BodyConfig, policy: StepPolicy, stopping: StoppingCondition) -> Self {
        SimulationRun {
            config,
            policy,
            stopping,
        }
    }

    pub fn run(&self, initial: PhysicalState) -> Result<SimulationSeries, SimulationError> {
        self.config.validate()?;
        self.policy.validate()?;

        let clamp = self.stopping.velocity_clamp();
        let max_samples = self.policy.max_samples();
        let mut series = SimulationSeries::with_capacity(max_samples);
        let mut state = initial;
        series.record_state(&state);

        while !self.stopping.is_met(&state, &self.policy)
            && state.time < self.policy.max_time
            && series.len() < max_samples
        {
            let outcome = euler_step(&state, &self.config, &self.policy, clamp);
            series.record_drag(outcome.drag_force);
            series.record_state(&outcome.state);
            state = outcome.state;
        }

        // Trailing sample keeps drag_forces the same length as velocities.
        series.record_drag(self.config.drag.drag_force(state.velocity));

        debug!(
            "run finished after {} samples at t = {:.4} s (v = {:.6} m/s)",
            series.len(),
            state.time,
            state.velocity
        );

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GRAVITY;
    use crate::trajectory_system::aerodynamics::DragModel;
    use approx::assert_relative_eq;

    fn drag_run(time_step: f64, max_time: f64) -> SimulationRun {
        SimulationRun::new(
            BodyConfig::new(1.0, DragModel::new(1.21, 1.25 * 1.89, 1.28), 0.0, 0.0),
            StepPolicy::new(time_step, max_time),
            StoppingCondition::DecayToRest,
        )
    }

    #[test]
    fn test_invalid_config_rejected_before_any_step() {
        let run = SimulationRun::new(
            BodyConfig::coasting(0.0),
            StepPolicy::new(0.01, 1.0),
            StoppingCondition::TimeLimit,
        );
        assert!(run.run(PhysicalState::new(0.0, 1.0)).is_err());

        let run = SimulationRun::new(
            BodyConfig::coasting(1.0),
            StepPolicy::new(0.0, 1.0),
            StoppingCondition::TimeLimit,
        );
        assert!(run.run(PhysicalState::new(0.0, 1.0)).is_err());
    }

    #[test]
    fn test_series_vectors_share_length() {
        let series = drag_run(0.01, 2.0).run(PhysicalState::new(0.0, 10.0)).unwrap();
        assert_eq!(series.times.len(), series.positions.len());
        assert_eq!(series.times.len(), series.velocities.len());
        assert_eq!(series.times.len(), series.drag_forces.len());
        assert!(series.len() > 1);
    }

    #[test]
    fn test_times_advance_by_exactly_one_step() {
        let series = drag_run(0.01, 2.0).run(PhysicalState::new(0.0, 10.0)).unwrap();
        for pair in series.times.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.01, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_immediate_rest_yields_single_sample() {
        let run = SimulationRun::new(
            BodyConfig::coasting(1.0),
            StepPolicy::new(0.01, 5.0),
            StoppingCondition::DecayToRest,
        );
        let series = run.run(PhysicalState::new(0.0, 0.0)).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.drag_forces.len(), 1);
        assert_relative_eq!(series.drag_forces[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_max_time_bounds_a_predicate_that_never_fires() {
        let run = SimulationRun::new(
            BodyConfig::coasting(1.0),
            StepPolicy::new(0.1, 1.0),
            StoppingCondition::TimeLimit,
        );
        let series = run.run(PhysicalState::new(0.0, 1.98)).unwrap();
        assert!(series.len() <= run.policy.max_samples());
        let final_time = *series.times.last().unwrap();
        assert!(
            final_time >= 1.0 - 1e-9,
            "Run should reach the time bound, stopped at t = {}",
            final_time
        );
    }

    #[test]
    fn test_drag_velocities_never_increase() {
        let series = drag_run(0.001, 4.0).run(PhysicalState::new(0.0, 40.45)).unwrap();
        for pair in series.velocities.windows(2) {
            assert!(
                pair[1] <= pair[0],
                "Drag-stopping velocity rose from {} to {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_runs_are_deterministic() {
        let run = drag_run(0.001, 4.0);
        let first = run.run(PhysicalState::new(0.0, 40.45)).unwrap();
        let second = run.run(PhysicalState::new(0.0, 40.45)).unwrap();
        assert_eq!(first, second);
    }
}
