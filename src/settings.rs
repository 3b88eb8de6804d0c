// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{default_newtype, default_string};

default_string!(DeviceName, "Brian moisture probe");

/// Settings for a single probe.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ProbeSettings {
    /// Unique, stable identifier for the probe.
    ///
    /// This id keys the device registry entry and prefixes the sensor
    /// entity ids, so it must not change across restarts.
    id: String,

    /// Display name for the device, shown in the platform UI.
    #[serde(default)]
    name: DeviceName,
}

impl ProbeSettings {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            name: DeviceName::default(),
        }
    }

    /// Parse settings from a TOML fragment, as hosts usually store them.
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("parsing probe settings")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name.0
    }
}
