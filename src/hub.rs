// SPDX-License-Identifier: GPL-3.0-or-later
use std::rc::Rc;

use tracing::debug;

use crate::host::Entity;

/// Callback the host provides for registering newly created entities.
pub type AddEntitiesCallback = Box<dyn Fn(&[Rc<dyn Entity>])>;

/// The slice of the external hub this integration relies on.
///
/// The hub owns the probe connection and delivers samples on its own
/// schedule; during setup the integration only hands it the host's
/// entity-addition callback.
pub trait Hub {
    fn set_add_entities_callback(&mut self, callback: AddEntitiesCallback);
}

/// Set up the sensor platform for a config entry.
pub async fn setup_entry(
    hub: &mut dyn Hub,
    add_entities: AddEntitiesCallback,
) -> anyhow::Result<bool> {
    debug!("handing the entity-addition callback to the hub");
    hub.set_add_entities_callback(add_entities);
    Ok(true)
}
