use log::info;
use serde::Serialize;

use crate::trajectory_system::kinematics::PhysicalState;

/// Parallel, same-length sample vectors produced by one run. Append-only
/// while the run is in flight, never mutated once returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationSeries {
    pub times: Vec<f64>,
    pub positions: Vec<f64>,
    pub velocities: Vec<f64>,
    pub drag_forces: Vec<f64>,
}

impl SimulationSeries {
    pub fn new() -> Self {
        SimulationSeries::default()
    }

    pub fn with_capacity(samples: usize) -> Self {
        SimulationSeries {
            times: Vec::with_capacity(samples),
            positions: Vec::with_capacity(samples),
            velocities: Vec::with_capacity(samples),
            drag_forces: Vec::with_capacity(samples),
        }
    }

    pub fn record_state(&mut self, state: &PhysicalState) {
        self.times.push(state.time);
        self.positions.push(state.position);
        self.velocities.push(state.velocity);
    }

    pub fn record_drag(&mut self, force: f64) {
        self.drag_forces.push(force);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn final_state(&self) -> Option<PhysicalState> {
        let i = self.times.len().checked_sub(1)?;
        Some(PhysicalState {
            time: self.times[i],
            position: self.positions[i],
            velocity: self.velocities[i],
        })
    }

    pub fn summary(&self) -> SeriesSummary {
        let last = self.final_state();
        SeriesSummary {
            samples: self.len(),
            duration: last.map_or(0.0, |s| s.time),
            final_position: last.map_or(0.0, |s| s.position),
            final_velocity: last.map_or(0.0, |s| s.velocity),
            peak_position: self
                .positions
                .iter()
                .copied()
                .fold(last.map_or(0.0, |s| s.position), f64::max),
            peak_drag: self.drag_forces.iter().copied().fold(0.0, f64::max),
        }
    }
}

/// Headline numbers for one finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub samples: usize,
    pub duration: f64,
    pub final_position: f64,
    pub final_velocity: f64,
    pub peak_position: f64,
    pub peak_drag: f64,
}

impl SeriesSummary {
    pub fn log(&self, name: &str) {
        info!(
            "{}: {} samples over {:.3} s, final position {:.3} m, final velocity {:.4} m/s, \
             peak position {:.3} m, peak drag {:.2} N",
            name,
            self.samples,
            self.duration,
            self.final_position,
            self.final_velocity,
            self.peak_position,
            self.peak_drag
        );
    }
}
