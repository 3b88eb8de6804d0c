// SPDX-License-Identifier: GPL-3.0-or-later
mod device;
mod sensor;

pub use device::ProbeDevice;
pub use sensor::{ProbeSensor, SensorKind};
