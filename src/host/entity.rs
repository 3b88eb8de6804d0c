// SPDX-License-Identifier: GPL-3.0-or-later
use std::fmt;

use serde::Serialize;

/// What the host platform needs from anything it renders: a stable identity,
/// display metadata, and the current state on demand.
///
/// There is no poll method. Entities push changes through
/// [`StateNotifier`][super::StateNotifier] and the host re-reads
/// [`state_json`][Entity::state_json] afterwards.
pub trait Entity {
    /// Stable identifier, unique across the whole platform.
    fn unique_id(&self) -> &str;

    /// Human-readable name shown in the platform UI.
    fn name(&self) -> &str;

    /// Fixed display metadata for this entity.
    fn description(&self) -> EntityDescription;

    /// The current state, rendered for host storage.
    fn state_json(&self) -> serde_json::Value;

    /// Whether the entity should be shown as reachable.
    fn available(&self) -> bool {
        true
    }
}

/// Sensor classification, using the host's device class names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorClass {
    Humidity,
    Temperature,
}

/// Unit of measurement reported alongside a sensor value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Unit {
    #[serde(rename = "°C")]
    Celsius,

    #[serde(rename = "%")]
    Percentage,
}

impl fmt::Display for Unit {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(match self {
            Unit::Celsius => "°C",
            Unit::Percentage => "%",
        })
    }
}

/// Fixed display metadata attached to an entity.
///
/// Serialized with the field names the host expects in an entity
/// description payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntityDescription {
    pub name: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_class: Option<SensorClass>,

    #[serde(
        rename = "unit_of_measurement",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<Unit>,

    #[serde(
        rename = "suggested_display_precision",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_precision: Option<u8>,

    pub icon: &'static str,
}
