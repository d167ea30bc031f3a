// Simulation Parameters
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0; // s, 60 ticks per second
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = -0.35;
pub const DEFAULT_STAGE_DURATION: f64 = 1.0; // s of burn per fuel stage

// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Booster Geometry
// Corner mounts below the centre of mass, in body space.
pub const BOOSTER_MOUNT_OFFSETS: [[f64; 3]; 4] = [
    [1.0, -1.5, 1.0],
    [1.0, -1.5, -1.0],
    [-1.0, -1.5, 1.0],
    [-1.0, -1.5, -1.0],
];

// Launch Scenario
pub const ROCKET_MASS: f64 = 1.0; // kg
pub const ROCKET_BOUNDS: [f64; 3] = [1.0, 3.0, 1.0]; // m
pub const ROCKET_START_POSITION: [f64; 3] = [0.0, 1.5, 0.0]; // m
pub const ROCKET_START_SPIN: [f64; 3] = [0.0, 10.0, 0.0]; // rad/s
pub const LAUNCH_FUEL_CELLS: usize = 1000;
pub const LAUNCH_CELL_THRUST: f64 = GRAVITY + 0.35; // N, summed over four corners
pub const GROUND_SIZE: f64 = 30.0; // m
pub const ENDPOINT_POSITION: [f64; 3] = [0.0, 35.0, 0.0]; // m
pub const ENDPOINT_RADIUS: f64 = 1.0; // m
