//! Mock power supplies for testing without real hardware.
//!
//! [`MockSupply`] is a scriptable in-memory device: tests declare which
//! properties it supports, preload values or failures per property, and
//! mutate them mid-test through `&self`.

use crate::error::PropertyError;
use crate::property::PropertyId;
use crate::supply::{ChargerControl, PowerSupply};
use crate::types::{SupplyType, UsbType};
use crate::value::PropertyValue;
use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

/// Scriptable in-memory power supply.
pub struct MockSupply {
    name: String,
    supply_type: SupplyType,
    properties: Vec<PropertyId>,
    usb_types: Vec<UsbType>,
    writable: Vec<PropertyId>,
    set_error: Option<PropertyError>,
    values: RwLock<HashMap<PropertyId, Result<PropertyValue, PropertyError>>>,
}

impl MockSupply {
    pub fn new(name: &str, supply_type: SupplyType) -> Self {
        Self {
            name: name.to_string(),
            supply_type,
            properties: Vec::new(),
            usb_types: Vec::new(),
            writable: Vec::new(),
            set_error: None,
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the declared property set (and its order).
    pub fn with_properties(mut self, props: &[PropertyId]) -> Self {
        self.properties = props.to_vec();
        self
    }

    /// Declare the supported connection-type options, in order.
    pub fn with_usb_types(mut self, types: &[UsbType]) -> Self {
        self.usb_types = types.to_vec();
        self
    }

    /// Mark properties as accepting writes.
    pub fn with_writable(mut self, props: &[PropertyId]) -> Self {
        self.writable = props.to_vec();
        self
    }

    /// Preload a property value, declaring the property if needed.
    pub fn with_value(self, prop: PropertyId, value: impl Into<PropertyValue>) -> Self {
        self.set_value(prop, value);
        self.declared(prop)
    }

    /// Preload a property failure, declaring the property if needed.
    pub fn with_error(self, prop: PropertyId, error: PropertyError) -> Self {
        self.set_error(prop, error);
        self.declared(prop)
    }

    /// Make every subsequent update fail with `error`.
    pub fn with_set_error(mut self, error: PropertyError) -> Self {
        self.set_error = Some(error);
        self
    }

    fn declared(mut self, prop: PropertyId) -> Self {
        if !self.properties.contains(&prop) {
            self.properties.push(prop);
        }
        self
    }

    /// Change a property value mid-test.
    pub fn set_value(&self, prop: PropertyId, value: impl Into<PropertyValue>) {
        if let Ok(mut values) = self.values.write() {
            values.insert(prop, Ok(value.into()));
        }
        tracing::debug!(property = ?prop, "[MOCK] value updated");
    }

    /// Make one property fail mid-test.
    pub fn set_error(&self, prop: PropertyId, error: PropertyError) {
        if let Ok(mut values) = self.values.write() {
            values.insert(prop, Err(error));
        }
    }

    /// The value the device currently holds, for write-path assertions.
    pub fn value(&self, prop: PropertyId) -> Option<PropertyValue> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(&prop).cloned())
            .and_then(Result::ok)
    }
}

impl PowerSupply for MockSupply {
    fn name(&self) -> &str {
        &self.name
    }

    fn supply_type(&self) -> SupplyType {
        self.supply_type
    }

    fn properties(&self) -> &[PropertyId] {
        &self.properties
    }

    fn usb_types(&self) -> &[UsbType] {
        &self.usb_types
    }

    fn get_property(&self, prop: PropertyId) -> Result<PropertyValue, PropertyError> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(&prop).cloned())
            .unwrap_or(Err(PropertyError::NoData))
    }

    fn set_property(&self, prop: PropertyId, value: i64) -> Result<(), PropertyError> {
        if let Some(error) = &self.set_error {
            return Err(error.clone());
        }
        self.set_value(prop, value);
        Ok(())
    }

    fn property_is_writeable(&self, prop: PropertyId) -> bool {
        self.writable.contains(&prop)
    }
}

/// Charger control that records every issued command.
#[derive(Debug, Default)]
pub struct RecordingCharger {
    commands: Mutex<Vec<i32>>,
}

impl RecordingCharger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands issued so far, in order.
    pub fn commands(&self) -> Vec<i32> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }
}

impl ChargerControl for RecordingCharger {
    fn set_charger(&self, command: i32) -> Result<(), PropertyError> {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command);
        }
        tracing::debug!(command, "[MOCK] charger command");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_supply_values() {
        let supply = MockSupply::new("batt0", SupplyType::Battery)
            .with_value(PropertyId::Capacity, 85)
            .with_error(PropertyId::Temp, PropertyError::Busy);

        assert_eq!(supply.name(), "batt0");
        assert_eq!(supply.supply_type(), SupplyType::Battery);
        assert_eq!(
            supply.properties(),
            &[PropertyId::Capacity, PropertyId::Temp]
        );
        assert_eq!(
            supply.get_property(PropertyId::Capacity),
            Ok(PropertyValue::Integer(85))
        );
        assert_eq!(
            supply.get_property(PropertyId::Temp),
            Err(PropertyError::Busy)
        );
        // Undeclared and unscripted properties have nothing to report.
        assert_eq!(
            supply.get_property(PropertyId::VoltageNow),
            Err(PropertyError::NoData)
        );
    }

    #[test]
    fn test_mock_supply_updates() {
        let supply = MockSupply::new("bms", SupplyType::Battery)
            .with_value(PropertyId::ChargeControlLimit, 0)
            .with_writable(&[PropertyId::ChargeControlLimit]);

        assert!(supply.property_is_writeable(PropertyId::ChargeControlLimit));
        assert!(!supply.property_is_writeable(PropertyId::Capacity));

        supply.set_property(PropertyId::ChargeControlLimit, 2).unwrap();
        assert_eq!(
            supply.value(PropertyId::ChargeControlLimit),
            Some(PropertyValue::Integer(2))
        );
    }

    #[test]
    fn test_mock_supply_set_error() {
        let supply = MockSupply::new("bms", SupplyType::Battery)
            .with_value(PropertyId::Calibrate, 0)
            .with_set_error(PropertyError::Driver("i2c write failed".into()));

        assert_eq!(
            supply.set_property(PropertyId::Calibrate, 1),
            Err(PropertyError::Driver("i2c write failed".into()))
        );
        assert_eq!(
            supply.value(PropertyId::Calibrate),
            Some(PropertyValue::Integer(0))
        );
    }

    #[test]
    fn test_recording_charger() {
        let charger = RecordingCharger::new();
        charger.set_charger(2).unwrap();
        charger.set_charger(3).unwrap();
        assert_eq!(charger.commands(), vec![2, 3]);
    }
}
