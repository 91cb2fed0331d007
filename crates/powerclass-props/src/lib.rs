//! Property exposure layer for power supply devices.
//!
//! Turns the static property catalog into a host-registrable attribute
//! collection and answers the host's read, write, visibility and event-export
//! requests against any [`PowerSupply`](powerclass_core::PowerSupply)
//! implementation, hiding which properties a given device actually supports.
//!
//! Everything here runs synchronously on the caller's thread. With the
//! `charge-recovery` feature enabled, a capacity read can additionally block
//! for the duration of a charger recovery pulse.
//!
//! # Example
//!
//! ```
//! use powerclass_core::mock::MockSupply;
//! use powerclass_core::{PropertyId, SupplyType};
//! use powerclass_props::SupplyClass;
//!
//! let class = SupplyClass::new();
//! let batt = MockSupply::new("batt0", SupplyType::Battery)
//!     .with_value(PropertyId::Capacity, 42);
//!
//! let text = class.show(&batt, PropertyId::Capacity.index()).unwrap();
//! assert_eq!(text, "42\n");
//! ```

pub mod binder;
pub mod catalog;
mod class;
#[cfg(feature = "charge-recovery")]
pub mod recovery;
mod show;
mod store;
#[cfg(feature = "soc-telemetry")]
pub mod telemetry;
mod throttle;
mod uevent;
pub mod visibility;

pub use binder::{Attribute, AttributeSet};
pub use catalog::{CATALOG, Catalog, PropertyDescriptor, describe};
pub use class::SupplyClass;
#[cfg(feature = "charge-recovery")]
pub use recovery::{ChargeRecovery, RecoveryConfig, RecoveryConfigError};
#[cfg(feature = "soc-telemetry")]
pub use telemetry::{SocReport, SocTelemetry};
pub use visibility::Visibility;
