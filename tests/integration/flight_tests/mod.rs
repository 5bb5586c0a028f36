mod autopilot;
mod config;
mod keyboard;
mod mode;
