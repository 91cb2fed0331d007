//! Device-side traits.
//!
//! [`PowerSupply`] is the boundary to the device object model: the exposure
//! layer never owns a device, never caches its answers, and delegates all
//! serialization of concurrent access to the device itself.

use crate::error::PropertyError;
use crate::property::PropertyId;
use crate::types::{SupplyType, UsbType};
use crate::value::PropertyValue;

/// One power source as seen by the exposure layer.
///
/// Each `get_property`/`set_property` call is atomic on its own, but there is
/// no cross-property guarantee: a sequence of reads may observe the device
/// mid-change.
pub trait PowerSupply: Send + Sync {
    /// Device name as registered with the host (e.g. `batt0`).
    fn name(&self) -> &str;

    /// Static type tag. Never queried through [`PowerSupply::get_property`];
    /// the type attribute is synthesized from this value.
    fn supply_type(&self) -> SupplyType;

    /// Supported properties, in the device's declared order.
    fn properties(&self) -> &[PropertyId];

    /// Declared connection-type options for [`PropertyId::UsbType`].
    fn usb_types(&self) -> &[UsbType] {
        &[]
    }

    /// Query the live value of one property.
    fn get_property(&self, prop: PropertyId) -> Result<PropertyValue, PropertyError>;

    /// Update one property.
    ///
    /// The default reports the device as unable to accept updates, matching
    /// drivers that register no update callback.
    fn set_property(&self, _prop: PropertyId, _value: i64) -> Result<(), PropertyError> {
        Err(PropertyError::NotPresent)
    }

    /// Whether a declared property accepts writes.
    fn property_is_writeable(&self, _prop: PropertyId) -> bool {
        false
    }
}

/// Charger hardware control used by the charge-recovery heuristic.
pub trait ChargerControl: Send + Sync {
    /// Issue one raw charger command.
    fn set_charger(&self, command: i32) -> Result<(), PropertyError>;
}
