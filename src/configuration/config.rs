//! Declarative scenario input loaded from JSON and mapped into runtime
//! simulation types before any run starts.
//!
//! An example scenario file:
//!
//! ```json
//! {
//!   "time_step": 0.0001,
//!   "max_time": 8.27,
//!   "bodies": [
//!     {
//!       "name": "projectile-x",
//!       "initial_position": 0.0,
//!       "initial_velocity": 40.45,
//!       "mass": 1542.21,
//!       "drag_coefficient": 1.21,
//!       "cross_sectional_area": 2.3625,
//!       "fluid_density": 1.28,
//!       "stopping": "decay_to_rest"
//!     },
//!     {
//!       "name": "boat",
//!       "initial_position": 20.423,
//!       "initial_velocity": 1.98,
//!       "mass": 1.0,
//!       "stopping": "time_limit"
//!     }
//!   ]
//! }
//! ```

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::control::body::BodyConfig;
use crate::control::composer::BodySetup;
use crate::control::policy::StepPolicy;
use crate::control::stopping::StoppingCondition;
use crate::errors::SimulationError;
use crate::trajectory_system::aerodynamics::DragModel;
use crate::trajectory_system::kinematics::PhysicalState;

/// Which stopping rule a configured body uses. `return_past_launch` takes
/// its bound from the body's own initial velocity.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub enum StoppingConfig {
    #[serde(rename = "decay_to_rest")]
    DecayToRest,

    #[serde(rename = "return_past_launch")]
    ReturnPastLaunch,

    #[serde(rename = "time_limit")]
    TimeLimit,
}

#[derive(Deserialize, Debug)]
pub struct BodyEntry {
    pub name: String,
    pub initial_position: f64,
    pub initial_velocity: f64,
    pub mass: f64,
    #[serde(default)]
    pub drag_coefficient: f64,
    #[serde(default)]
    pub cross_sectional_area: f64,
    #[serde(default)]
    pub fluid_density: f64,
    #[serde(default)]
    pub external_force: f64,
    #[serde(default)]
    pub gravitational_accel: f64,
    pub stopping: StoppingConfig,
}

#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub time_step: f64,
    pub max_time: f64,
    pub bodies: Vec<BodyEntry>,
}

impl ScenarioConfig {
    pub fn from_file(path: &Path) -> Result<Self, SimulationError> {
        let file = File::open(path).map_err(|e| {
            SimulationError::ConfigurationError(format!(
                "cannot open scenario file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_reader(file).map_err(|e| {
            SimulationError::ConfigurationError(format!(
                "malformed scenario file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Map every entry into a validated `BodySetup`. Negative values are
    /// rejected here for every float except `external_force`, so a bad
    /// scenario never reaches the integrator.
    pub fn into_bodies(self) -> Result<Vec<BodySetup>, SimulationError> {
        let policy = StepPolicy::new(self.time_step, self.max_time);
        policy.validate()?;

        let mut bodies = Vec::with_capacity(self.bodies.len());
        for entry in self.bodies {
            if entry.initial_velocity < 0.0 {
                return Err(SimulationError::ConfigurationError(format!(
                    "initial_velocity must be non-negative for body \"{}\", got {}",
                    entry.name, entry.initial_velocity
                )));
            }

            let config = BodyConfig::new(
                entry.mass,
                DragModel::new(
                    entry.drag_coefficient,
                    entry.cross_sectional_area,
                    entry.fluid_density,
                ),
                entry.external_force,
                entry.gravitational_accel,
            );
            config.validate()?;

            let stopping = match entry.stopping {
                StoppingConfig::DecayToRest => StoppingCondition::DecayToRest,
                StoppingConfig::ReturnPastLaunch => StoppingCondition::ReturnPastLaunch {
                    launch_speed: entry.initial_velocity,
                },
                StoppingConfig::TimeLimit => StoppingCondition::TimeLimit,
            };

            bodies.push(BodySetup::new(
                entry.name,
                PhysicalState::new(entry.initial_position, entry.initial_velocity),
                config,
                policy,
                stopping,
            ));
        }
        Ok(bodies)
    }
}

pub fn load_scenario(path: &Path) -> Result<Vec<BodySetup>, SimulationError> {
    ScenarioConfig::from_file(path)?.into_bodies()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(json: &str) -> Result<Vec<BodySetup>, SimulationError> {
        let config: ScenarioConfig = serde_json::from_str(json).unwrap();
        config.into_bodies()
    }

    #[test]
    fn test_minimal_scenario_parses() {
        let bodies = parse(
            r#"{
                "time_step": 0.01,
                "max_time": 1.0,
                "bodies": [
                    {
                        "name": "boat",
                        "initial_position": 20.423,
                        "initial_velocity": 1.98,
                        "mass": 1.0,
                        "stopping": "time_limit"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].identifier, "boat");
        assert_eq!(bodies[0].stopping, StoppingCondition::TimeLimit);
        assert_eq!(bodies[0].config.drag.drag_coefficient, 0.0);
    }

    #[test]
    fn test_return_past_launch_binds_initial_velocity() {
        let bodies = parse(
            r#"{
                "time_step": 0.01,
                "max_time": 10.0,
                "bodies": [
                    {
                        "name": "projectile-y",
                        "initial_position": 0.0,
                        "initial_velocity": 40.45,
                        "mass": 1542.21,
                        "gravitational_accel": 9.81,
                        "stopping": "return_past_launch"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            bodies[0].stopping,
            StoppingCondition::ReturnPastLaunch {
                launch_speed: 40.45
            }
        );
    }

    #[test]
    fn test_negative_mass_rejected() {
        let err = parse(
            r#"{
                "time_step": 0.01,
                "max_time": 1.0,
                "bodies": [
                    {
                        "name": "bad",
                        "initial_position": 0.0,
                        "initial_velocity": 1.0,
                        "mass": -5.0,
                        "stopping": "time_limit"
                    }
                ]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("mass"));
    }

    #[test]
    fn test_negative_initial_velocity_rejected() {
        let err = parse(
            r#"{
                "time_step": 0.01,
                "max_time": 1.0,
                "bodies": [
                    {
                        "name": "bad",
                        "initial_position": 0.0,
                        "initial_velocity": -1.0,
                        "mass": 1.0,
                        "stopping": "time_limit"
                    }
                ]
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("initial_velocity"));
    }

    #[test]
    fn test_negative_external_force_accepted() {
        let bodies = parse(
            r#"{
                "time_step": 0.01,
                "max_time": 1.0,
                "bodies": [
                    {
                        "name": "pushed",
                        "initial_position": 0.0,
                        "initial_velocity": 0.0,
                        "mass": 2.0,
                        "external_force": -9.5,
                        "stopping": "time_limit"
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(bodies[0].config.external_force, -9.5);
    }

    #[test]
    fn test_load_scenario_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "time_step": 0.01,
                "max_time": 1.0,
                "bodies": [
                    {{
                        "name": "boat",
                        "initial_position": 0.0,
                        "initial_velocity": 1.98,
                        "mass": 1.0,
                        "stopping": "time_limit"
                    }}
                ]
            }}"#
        )
        .unwrap();

        let bodies = load_scenario(&path).unwrap();
        assert_eq!(bodies.len(), 1);
    }

    #[test]
    fn test_missing_file_is_a_configuration_error() {
        let err = load_scenario(Path::new("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, SimulationError::ConfigurationError(_)));
    }
}
