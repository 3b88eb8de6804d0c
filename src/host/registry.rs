// SPDX-License-Identifier: GPL-3.0-or-later
use async_trait::async_trait;
use serde::Serialize;

/// A device entry as the host's device registry stores it.
///
/// The registry keys entries by the identifier pairs, so the same record
/// submitted twice resolves to one entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeviceRecord {
    /// `(domain, unique_id)` pairs keying the registry entry.
    pub identifiers: Vec<(String, String)>,

    pub name: String,

    pub manufacturer: String,

    pub model: String,

    pub model_id: String,

    pub serial_number: String,

    pub sw_version: String,

    pub hw_version: String,
}

/// The host platform's device registry.
#[async_trait(?Send)]
pub trait DeviceRegistry {
    /// Create the registry entry described by `record` under the config
    /// entry `entry_id`, or fetch the existing entry if the identifiers are
    /// already known.
    async fn get_or_create(&self, entry_id: &str, record: DeviceRecord) -> anyhow::Result<()>;
}
