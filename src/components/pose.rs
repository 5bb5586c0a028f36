use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Marker for the single simulated vehicle.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Vehicle;

/// Position and orientation of the vehicle.
///
/// Longitude and latitude are in degrees and are treated as linear distances by the
/// integrator. Heading, pitch and roll are in degrees and are never wrapped, so they may
/// accumulate past ±360.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Default for Pose {
    /// Downtown Los Angeles, 200 above the ellipsoid, level and facing north.
    fn default() -> Self {
        Self {
            longitude: -118.24368,
            latitude: 34.05293,
            altitude: 200.0,
            heading: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

impl Pose {
    pub fn new(
        longitude: f64,
        latitude: f64,
        altitude: f64,
        heading: f64,
        pitch: f64,
        roll: f64,
    ) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
            heading,
            pitch,
            roll,
        }
    }

    /// A pose at the origin with every angle at zero.
    pub fn zeroed() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    pub fn field(&self, field: PoseField) -> f64 {
        match field {
            PoseField::Longitude => self.longitude,
            PoseField::Latitude => self.latitude,
            PoseField::Altitude => self.altitude,
            PoseField::Heading => self.heading,
            PoseField::Pitch => self.pitch,
            PoseField::Roll => self.roll,
        }
    }

    pub fn set_field(&mut self, field: PoseField, value: f64) {
        match field {
            PoseField::Longitude => self.longitude = value,
            PoseField::Latitude => self.latitude = value,
            PoseField::Altitude => self.altitude = value,
            PoseField::Heading => self.heading = value,
            PoseField::Pitch => self.pitch = value,
            PoseField::Roll => self.roll = value,
        }
    }

    /// Position as (longitude, latitude, altitude).
    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.longitude, self.latitude, self.altitude)
    }

    /// Orientation as (heading, pitch, roll).
    pub fn orientation(&self) -> (f64, f64, f64) {
        (self.heading, self.pitch, self.roll)
    }

    /// Adds a position delta laid out as (longitude, latitude, altitude).
    pub fn translate(&mut self, delta: &Vector3<f64>) {
        self.longitude += delta.x;
        self.latitude += delta.y;
        self.altitude += delta.z;
    }
}

/// Names the six scalar fields of a [`Pose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoseField {
    Longitude,
    Latitude,
    Altitude,
    Heading,
    Pitch,
    Roll,
}

impl PoseField {
    pub const ALL: [PoseField; 6] = [
        PoseField::Longitude,
        PoseField::Latitude,
        PoseField::Altitude,
        PoseField::Heading,
        PoseField::Pitch,
        PoseField::Roll,
    ];

    pub fn index(self) -> usize {
        match self {
            PoseField::Longitude => 0,
            PoseField::Latitude => 1,
            PoseField::Altitude => 2,
            PoseField::Heading => 3,
            PoseField::Pitch => 4,
            PoseField::Roll => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PoseField::Longitude => "longitude",
            PoseField::Latitude => "latitude",
            PoseField::Altitude => "altitude",
            PoseField::Heading => "heading",
            PoseField::Pitch => "pitch",
            PoseField::Roll => "roll",
        }
    }
}

impl fmt::Display for PoseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PoseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "longitude" | "lon" => Ok(PoseField::Longitude),
            "latitude" | "lat" => Ok(PoseField::Latitude),
            "altitude" | "alt" => Ok(PoseField::Altitude),
            "heading" => Ok(PoseField::Heading),
            "pitch" => Ok(PoseField::Pitch),
            "roll" => Ok(PoseField::Roll),
            other => Err(format!("unknown pose field '{}'", other)),
        }
    }
}
