//! Attribute write path.

use crate::catalog;
use crate::class::SupplyClass;
use powerclass_core::{PowerSupply, PropertyError, PropertyId};

impl SupplyClass {
    /// Parse user input for one attribute and forward it to the device.
    ///
    /// Accepts an exact value label for enumerated properties, or a signed
    /// base-10 integer for any property; one trailing newline is tolerated
    /// either way. Returns the number of input bytes consumed.
    ///
    /// Reachability is the visibility resolver's job: this path trusts that
    /// the host only routes writes to attributes it reported read-write.
    pub fn store(
        &self,
        psy: &dyn PowerSupply,
        attrno: usize,
        input: &str,
    ) -> Result<usize, PropertyError> {
        let Some(prop) = PropertyId::from_index(attrno) else {
            return Err(PropertyError::InvalidInput(format!(
                "attribute index {attrno} out of range"
            )));
        };

        let desc = catalog::describe(prop);
        let stripped = input.strip_suffix('\n').unwrap_or(input);

        let value = match desc.text_values.iter().position(|text| *text == stripped) {
            Some(index) => index as i64,
            // Integers are valid for enumerated properties in addition to
            // their text labels.
            None => stripped
                .parse::<i64>()
                .map_err(|_| PropertyError::InvalidInput(stripped.to_string()))?,
        };

        psy.set_property(prop, value)?;
        Ok(input.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerclass_core::mock::MockSupply;
    use powerclass_core::{PropertyValue, Status, SupplyType};

    fn writable_battery() -> MockSupply {
        MockSupply::new("batt0", SupplyType::Battery)
            .with_value(PropertyId::Status, Status::Unknown as i64)
            .with_value(PropertyId::CapacityAlertMin, 5)
            .with_writable(&[PropertyId::Status, PropertyId::CapacityAlertMin])
    }

    #[test]
    fn test_store_enum_label() {
        let class = SupplyClass::new();
        let batt = writable_battery();

        let consumed = class
            .store(&batt, PropertyId::Status.index(), "Charging\n")
            .unwrap();
        assert_eq!(consumed, 9);
        assert_eq!(
            batt.value(PropertyId::Status),
            Some(PropertyValue::Integer(Status::Charging as i64))
        );
    }

    #[test]
    fn test_store_enum_label_is_case_sensitive() {
        let class = SupplyClass::new();
        let batt = writable_battery();

        assert!(matches!(
            class.store(&batt, PropertyId::Status.index(), "charging"),
            Err(PropertyError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_store_integer_literal() {
        let class = SupplyClass::new();
        let batt = writable_battery();

        let consumed = class
            .store(&batt, PropertyId::CapacityAlertMin.index(), "-3\n")
            .unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(
            batt.value(PropertyId::CapacityAlertMin),
            Some(PropertyValue::Integer(-3))
        );
    }

    #[test]
    fn test_store_rejects_garbage_without_effect() {
        let class = SupplyClass::new();
        let batt = writable_battery();

        assert_eq!(
            class.store(&batt, PropertyId::CapacityAlertMin.index(), "bogus"),
            Err(PropertyError::InvalidInput("bogus".into()))
        );
        assert_eq!(
            batt.value(PropertyId::CapacityAlertMin),
            Some(PropertyValue::Integer(5))
        );
    }

    #[test]
    fn test_store_propagates_device_failure() {
        let class = SupplyClass::new();
        let batt = MockSupply::new("batt0", SupplyType::Battery)
            .with_value(PropertyId::Calibrate, 0)
            .with_writable(&[PropertyId::Calibrate])
            .with_set_error(PropertyError::Busy);

        assert_eq!(
            class.store(&batt, PropertyId::Calibrate.index(), "1"),
            Err(PropertyError::Busy)
        );
    }
}
