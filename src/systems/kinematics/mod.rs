mod integrator;

pub use integrator::{autopilot_running, autopilot_tick_system, integrate};
