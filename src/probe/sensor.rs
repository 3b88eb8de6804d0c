// SPDX-License-Identifier: GPL-3.0-or-later
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::host::{Entity, EntityDescription, SensorClass, StateNotifier, Unit};

use super::device::Readings;

/// Which of the probe's two readings a sensor mirrors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SensorKind {
    Moisture,
    Temperature,
}

impl SensorKind {
    /// Suffix appended to the device id to form the sensor's unique id.
    fn suffix(&self) -> &'static str {
        match self {
            SensorKind::Moisture => "moisture",
            SensorKind::Temperature => "temperature",
        }
    }

    fn description(&self) -> EntityDescription {
        match self {
            SensorKind::Moisture => EntityDescription {
                name: "Soil moisture",
                device_class: Some(SensorClass::Humidity),
                unit: Some(Unit::Percentage),
                display_precision: Some(1),
                icon: "mdi:water-percent",
            },
            SensorKind::Temperature => EntityDescription {
                name: "Temperature",
                device_class: Some(SensorClass::Temperature),
                unit: Some(Unit::Celsius),
                display_precision: Some(0),
                icon: "mdi:home-thermometer-outline",
            },
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.suffix())
    }
}

/// A read-only view over one of the device's cached readings.
///
/// Sensors hold no value of their own. Every read goes through the shared
/// readings cell, so a sensor always reports exactly what its device has
/// cached at that moment.
pub struct ProbeSensor {
    kind: SensorKind,
    unique_id: String,
    readings: Rc<RefCell<Readings>>,
    notifier: Rc<dyn StateNotifier>,
}

impl ProbeSensor {
    pub(super) fn new(
        kind: SensorKind,
        device_id: &str,
        readings: Rc<RefCell<Readings>>,
        notifier: Rc<dyn StateNotifier>,
    ) -> Self {
        Self {
            kind,
            unique_id: format!("{}_{}", device_id, kind.suffix()),
            readings,
            notifier,
        }
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// The device reading this sensor mirrors, or `None` before the first
    /// sample has arrived.
    pub fn current_value(&self) -> Option<f64> {
        let readings = self.readings.borrow();
        match self.kind {
            SensorKind::Moisture => readings.moisture,
            SensorKind::Temperature => readings.temperature,
        }
    }

    /// Tell the host to re-read this sensor's displayed value.
    pub fn write_state(&self) {
        trace!(unique_id = %self.unique_id, "notifying host of a state change");
        self.notifier.entity_updated(&self.unique_id);
    }
}

impl Entity for ProbeSensor {
    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn name(&self) -> &str {
        self.kind.description().name
    }

    fn description(&self) -> EntityDescription {
        self.kind.description()
    }

    fn state_json(&self) -> serde_json::Value {
        self.current_value()
            .map_or(serde_json::Value::Null, serde_json::Value::from)
    }
}
