// SPDX-License-Identifier: GPL-3.0-or-later
use std::time::SystemTime;

/// A single pair of readings delivered by the probe service.
///
/// Samples are immutable once created; the hub hands them to
/// [`ProbeDevice::update_state`][crate::probe::ProbeDevice::update_state] as
/// they arrive. The readings are stored verbatim, no range checking is done
/// at this layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Temperature in degrees Celsius.
    pub temperature: f64,

    /// Soil moisture as a percentage.
    pub moisture: f64,

    /// When the probe took this reading.
    pub taken_at: SystemTime,
}

impl Sample {
    /// Create a sample stamped with the current time.
    pub fn new(temperature: f64, moisture: f64) -> Self {
        Self::at(temperature, moisture, SystemTime::now())
    }

    /// Create a sample with an explicit timestamp.
    pub fn at(temperature: f64, moisture: f64, taken_at: SystemTime) -> Self {
        Self {
            temperature,
            moisture,
            taken_at,
        }
    }
}
