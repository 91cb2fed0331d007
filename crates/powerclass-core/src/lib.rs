//! Power supply property model
//!
//! Defines the property enumeration shared by every power source device
//! (batteries, chargers, mains, wireless), the typed value union those
//! properties carry, and the traits a concrete device implements to publish
//! its state. The exposure layer in `powerclass-props` consumes these types
//! to present a uniform attribute and event interface while hiding which
//! properties a given device actually supports.

pub mod error;
pub mod mock;
pub mod property;
pub mod supply;
pub mod types;
pub mod value;

pub use error::PropertyError;
pub use property::{PropertyId, ValueKind};
pub use supply::{ChargerControl, PowerSupply};
pub use types::{CapacityLevel, ChargeType, Health, Scope, Status, SupplyType, Technology, UsbType};
pub use value::PropertyValue;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, PropertyError>;
