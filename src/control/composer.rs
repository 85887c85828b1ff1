use std::collections::{BTreeMap, HashSet};

use log::debug;
use rayon::prelude::*;

use crate::control::{
    body::BodyConfig, policy::StepPolicy, runner::SimulationRun, stopping::StoppingCondition,
};
use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::SimulationSeries;
use crate::trajectory_system::kinematics::PhysicalState;

/// One body's complete run description, addressed by identifier.
#[derive(Debug, Clone)]
pub struct BodySetup {
    pub identifier: String,
    pub initial: PhysicalState,
    pub config: BodyConfig,
    pub policy: StepPolicy,
    pub stopping: StoppingCondition,
}

impl BodySetup {
    pub fn new(
        identifier: String,
        initial: PhysicalState,
        config: BodyConfig,
        policy: StepPolicy,
        stopping: StoppingCondition,
    ) -> Self {
        BodySetup {
            identifier,
            initial,
            config,
            policy,
            stopping,
        }
    }
}

/// Series per body identifier. Ordered so that export and logging are
/// deterministic run to run.
pub type MultiBodyResult = BTreeMap<String, SimulationSeries>;

/// Runs a set of independent bodies that share nothing but the time axis.
/// No body ever observes another body's state.
#[derive(Debug, Clone, Default)]
pub struct MultiBodyComposer {
    bodies: Vec<BodySetup>,
}

impl MultiBodyComposer {
    pub fn new() -> Self {
        MultiBodyComposer { bodies: Vec::new() }
    }

    pub fn with_body(mut self, setup: BodySetup) -> Self {
        self.bodies.push(setup);
        self
    }

    pub fn add_body(&mut self, setup: BodySetup) {
        self.bodies.push(setup);
    }

    pub fn bodies(&self) -> &[BodySetup] {
        &self.bodies
    }

    pub fn run_all(&self) -> Result<MultiBodyResult, SimulationError> {
        let mut seen = HashSet::new();
        for body in &self.bodies {
            if !seen.insert(body.identifier.as_str()) {
                return Err(SimulationError::ScenarioError(format!(
                    "duplicate body identifier \"{}\"",
                    body.identifier
                )));
            }
        }

        if let Some(first) = self.bodies.first() {
            if self
                .bodies
                .iter()
                .any(|b| b.policy.time_step != first.policy.time_step)
            {
                debug!("bodies use different time steps; per-index samples are not time-aligned");
            }
        }

        // Bodies are pure and independent, so they may run concurrently.
        let runs: Vec<(String, SimulationSeries)> = self
            .bodies
            .par_iter()
            .map(|body| {
                let run = SimulationRun::new(body.config, body.policy, body.stopping);
                run.run(body.initial)
                    .map(|series| (body.identifier.clone(), series))
            })
            .collect::<Result<_, _>>()?;

        Ok(runs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer(identifier: &str, velocity: f64) -> BodySetup {
        BodySetup::new(
            identifier.to_string(),
            PhysicalState::new(0.0, velocity),
            BodyConfig::coasting(1.0),
            StepPolicy::new(0.1, 1.0),
            StoppingCondition::TimeLimit,
        )
    }

    #[test]
    fn test_one_series_per_body() {
        let composer = MultiBodyComposer::new()
            .with_body(observer("a", 1.0))
            .with_body(observer("b", 2.0));

        let result = composer.run_all().unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.contains_key("a"));
        assert!(result.contains_key("b"));
    }

    #[test]
    fn test_duplicate_identifier_rejected_before_running() {
        let composer = MultiBodyComposer::new()
            .with_body(observer("boat", 1.0))
            .with_body(observer("boat", 2.0));

        let err = composer.run_all().unwrap_err();
        assert!(
            err.to_string().contains("boat"),
            "Error should name the duplicate identifier, got: {}",
            err
        );
    }

    #[test]
    fn test_composed_run_matches_solo_run() {
        let setup = observer("solo", 1.98);
        let solo = SimulationRun::new(setup.config, setup.policy, setup.stopping)
            .run(setup.initial)
            .unwrap();

        let composed = MultiBodyComposer::new()
            .with_body(setup)
            .with_body(observer("other", -3.0))
            .run_all()
            .unwrap();

        assert_eq!(composed["solo"], solo);
    }

    #[test]
    fn test_heterogeneous_run_lengths_allowed() {
        let short = BodySetup::new(
            "short".to_string(),
            PhysicalState::new(0.0, 0.0),
            BodyConfig::coasting(1.0),
            StepPolicy::new(0.1, 1.0),
            StoppingCondition::DecayToRest,
        );
        let long = observer("long", 1.0);

        let result = MultiBodyComposer::new()
            .with_body(short)
            .with_body(long)
            .run_all()
            .unwrap();

        assert_eq!(result["short"].len(), 1);
        assert!(result["long"].len() > 1);
    }

    #[test]
    fn test_empty_composition_yields_empty_result() {
        let result = MultiBodyComposer::new().run_all().unwrap();
        assert!(result.is_empty());
    }
}
