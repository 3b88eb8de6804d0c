// SPDX-License-Identifier: GPL-3.0-or-later
//! Platform glue for the Hackware soil probe.
//!
//! The probe itself is owned by an external hub that maintains the hardware
//! connection and delivers [`Sample`]s. This crate maps those samples onto a
//! device and two sensor entities the host platform can render, using the
//! host-provided registration and notification interfaces in [`host`].

pub mod host;
pub mod probe;

mod hub;
mod sample;
mod settings;

pub use hub::{setup_entry, AddEntitiesCallback, Hub};
pub use sample::Sample;
pub use settings::ProbeSettings;

/// Integration domain, used to namespace device registry identifiers.
pub const DOMAIN: &str = "hackware";

#[macro_export]
macro_rules! default_newtype {
    ($name:ident, $wrapped_type:ty, $default:literal) => {
        #[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
        pub struct $name(pub $wrapped_type);
        impl Default for $name {
            fn default() -> Self {
                $name($default.into())
            }
        }
        impl From<$name> for $wrapped_type {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }
        impl From<$wrapped_type> for $name {
            fn from(wrapped: $wrapped_type) -> Self {
                $name(wrapped)
            }
        }
    };
}

#[macro_export]
macro_rules! default_string {
    ($name:ident, $default:literal) => {
        default_newtype!($name, String, $default);
    };
}
