// SPDX-License-Identifier: GPL-3.0-or-later
mod entity;
mod notifier;
mod registry;

pub use entity::{Entity, EntityDescription, SensorClass, Unit};
pub use notifier::StateNotifier;
pub use registry::{DeviceRecord, DeviceRegistry};
