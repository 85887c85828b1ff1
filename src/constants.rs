// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY: f64 = 1.28; // kg/m³

// Vehicle Constants
pub const VEHICLE_MASS: f64 = 1542.21; // kg
pub const VEHICLE_DRAG_COEFFICIENT: f64 = 1.21;
pub const VEHICLE_CROSS_SECTION: f64 = 1.25 * 1.89; // m² (frontal width × height)

// Launch Scenario
pub const LAUNCH_VELOCITY: f64 = 40.45; // m/s (90.5 mph)

// Observer Body
pub const BOAT_VELOCITY: f64 = 1.98; // m/s
pub const BOAT_START_POSITION: f64 = 20.423; // m

// Simulation Parameters
pub const FINE_TIME_STEP: f64 = 0.0001; // s
pub const COARSE_TIME_STEP: f64 = 0.01; // s
pub const MAX_SIMULATION_TIME: f64 = 8.27; // s
pub const VELOCITY_FLOOR: f64 = 1e-6; // m/s, below this a drag-stopping body is at rest
