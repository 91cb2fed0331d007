//! Attribute read path.

use crate::catalog;
use crate::class::SupplyClass;
use powerclass_core::{PowerSupply, PropertyError, PropertyId, PropertyValue, ValueKind};

impl SupplyClass {
    /// Read one attribute and format its current value as text.
    ///
    /// The returned string is exactly what an attribute read must yield,
    /// trailing newline included. With the `charge-recovery` feature and an
    /// attached context, a capacity read may block here while a recovery
    /// pulse runs.
    pub fn show(&self, psy: &dyn PowerSupply, attrno: usize) -> Result<String, PropertyError> {
        let Some(prop) = PropertyId::from_index(attrno) else {
            return Err(PropertyError::InvalidInput(format!(
                "attribute index {attrno} out of range"
            )));
        };
        self.show_property(psy, prop)
    }

    pub(crate) fn show_property(
        &self,
        psy: &dyn PowerSupply,
        prop: PropertyId,
    ) -> Result<String, PropertyError> {
        // The type attribute reflects the static type tag, never the driver.
        let value = if prop == PropertyId::Type {
            PropertyValue::Integer(psy.supply_type() as i64)
        } else {
            match psy.get_property(prop) {
                Ok(value) => value,
                Err(err) => {
                    self.report_query_failure(psy, prop, &err);
                    return Err(err);
                }
            }
        };

        let desc = catalog::describe(prop);
        if desc.is_enumerated()
            && let Some(v) = value.as_int()
            && let Ok(index) = usize::try_from(v)
            && let Some(text) = desc.text_values.get(index)
        {
            #[cfg(feature = "soc-telemetry")]
            self.telemetry.observe_enum(prop, v);
            return Ok(format!("{text}\n"));
        }
        // An enumerated value outside its table falls through and renders as
        // a plain decimal.

        let rendered = match prop {
            PropertyId::UsbType => self.show_usb_type(psy, &value)?,
            _ if prop.kind() == ValueKind::Text => {
                let text = value.as_text().ok_or_else(|| {
                    PropertyError::Driver(format!("{prop:?} reported a non-string value"))
                })?;
                format!("{text}\n")
            }
            _ => {
                let v = value.as_int().ok_or_else(|| {
                    PropertyError::Driver(format!("{prop:?} reported a non-integer value"))
                })?;
                #[cfg(feature = "charge-recovery")]
                if let Some(recovery) = &self.recovery {
                    recovery.observe(prop, v);
                }
                format!("{v}\n")
            }
        };

        #[cfg(feature = "soc-telemetry")]
        self.telemetry.observe(prop, &value);

        Ok(rendered)
    }

    /// Render the multi-choice connection-type attribute: every declared
    /// option in declared order, space separated, the active one bracketed,
    /// the final space replaced by a newline.
    fn show_usb_type(
        &self,
        psy: &dyn PowerSupply,
        value: &PropertyValue,
    ) -> Result<String, PropertyError> {
        let active = value.as_int().ok_or_else(|| {
            PropertyError::Driver("connection type reported as a non-integer value".into())
        })?;

        let mut out = String::new();
        let mut matched = false;
        for &usb_type in psy.usb_types() {
            if active == usb_type as i64 {
                out.push('[');
                out.push_str(usb_type.as_str());
                out.push_str("] ");
                matched = true;
            } else {
                out.push_str(usb_type.as_str());
                out.push(' ');
            }
        }

        if !matched {
            tracing::warn!(
                supply = psy.name(),
                active,
                "driver reporting unsupported connection type"
            );
            return Err(PropertyError::Driver(
                "driver reporting unsupported connection type".into(),
            ));
        }

        out.pop();
        out.push('\n');
        Ok(out)
    }

    fn report_query_failure(&self, psy: &dyn PowerSupply, prop: PropertyId, err: &PropertyError) {
        match err {
            PropertyError::NoData => {
                tracing::debug!(
                    supply = psy.name(),
                    property = ?prop,
                    "driver has no data for property"
                );
            }
            // Absent devices and transient busy states are expected; stay quiet.
            PropertyError::NotPresent | PropertyError::Busy => {}
            other => {
                if self.throttle().allow() {
                    tracing::error!(
                        supply = psy.name(),
                        property = ?prop,
                        error = %other,
                        "driver failed to report property"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerclass_core::mock::MockSupply;
    use powerclass_core::{Status, SupplyType, UsbType};

    #[test]
    fn test_integer_rendering() {
        let class = SupplyClass::new();
        let batt = MockSupply::new("batt0", SupplyType::Battery)
            .with_value(PropertyId::VoltageNow, 4350000)
            .with_value(PropertyId::CurrentNow, -180000);

        assert_eq!(
            class.show(&batt, PropertyId::VoltageNow.index()).unwrap(),
            "4350000\n"
        );
        assert_eq!(
            class.show(&batt, PropertyId::CurrentNow.index()).unwrap(),
            "-180000\n"
        );
    }

    #[test]
    fn test_enumerated_rendering_takes_precedence() {
        let class = SupplyClass::new();
        let batt = MockSupply::new("batt0", SupplyType::Battery)
            .with_value(PropertyId::Status, Status::Discharging as i64);

        assert_eq!(
            class.show(&batt, PropertyId::Status.index()).unwrap(),
            "Discharging\n"
        );
    }

    #[test]
    fn test_enumerated_value_out_of_table_renders_decimal() {
        let class = SupplyClass::new();
        let batt =
            MockSupply::new("batt0", SupplyType::Battery).with_value(PropertyId::Status, 77);

        assert_eq!(class.show(&batt, PropertyId::Status.index()).unwrap(), "77\n");
    }

    #[test]
    fn test_type_bypasses_the_driver() {
        let class = SupplyClass::new();
        // Type is not declared and has no scripted value; the tag is enough.
        let usb = MockSupply::new("usb", SupplyType::Usb);

        assert_eq!(class.show(&usb, PropertyId::Type.index()).unwrap(), "USB\n");
    }

    #[test]
    fn test_string_rendering() {
        let class = SupplyClass::new();
        let batt = MockSupply::new("batt0", SupplyType::Battery)
            .with_value(PropertyId::ModelName, "INR18650-35E");

        assert_eq!(
            class.show(&batt, PropertyId::ModelName.index()).unwrap(),
            "INR18650-35E\n"
        );
    }

    #[test]
    fn test_string_property_with_integer_value_is_a_driver_fault() {
        let class = SupplyClass::new();
        let batt =
            MockSupply::new("batt0", SupplyType::Battery).with_value(PropertyId::ModelName, 7);

        assert!(matches!(
            class.show(&batt, PropertyId::ModelName.index()),
            Err(PropertyError::Driver(_))
        ));
    }

    #[test]
    fn test_usb_type_brackets_active_option() {
        let class = SupplyClass::new();
        let usb = MockSupply::new("usb", SupplyType::Usb)
            .with_usb_types(&[UsbType::Dcp, UsbType::Cdp, UsbType::Pd])
            .with_value(PropertyId::UsbType, UsbType::Cdp as i64);

        assert_eq!(
            class.show(&usb, PropertyId::UsbType.index()).unwrap(),
            "DCP [CDP] PD\n"
        );
    }

    #[test]
    fn test_usb_type_single_option() {
        let class = SupplyClass::new();
        let usb = MockSupply::new("usb", SupplyType::Usb)
            .with_usb_types(&[UsbType::Sdp])
            .with_value(PropertyId::UsbType, UsbType::Sdp as i64);

        assert_eq!(class.show(&usb, PropertyId::UsbType.index()).unwrap(), "[SDP]\n");
    }

    #[test]
    fn test_usb_type_undeclared_active_is_a_driver_fault() {
        let class = SupplyClass::new();
        let usb = MockSupply::new("usb", SupplyType::Usb)
            .with_usb_types(&[UsbType::Dcp, UsbType::Cdp])
            .with_value(PropertyId::UsbType, UsbType::Pd as i64);

        assert!(matches!(
            class.show(&usb, PropertyId::UsbType.index()),
            Err(PropertyError::Driver(_))
        ));
    }

    #[test]
    fn test_query_failures_propagate() {
        let class = SupplyClass::new();
        let batt = MockSupply::new("batt0", SupplyType::Battery)
            .with_error(PropertyId::Temp, PropertyError::NoData)
            .with_error(PropertyId::VoltageNow, PropertyError::NotPresent)
            .with_error(PropertyId::Capacity, PropertyError::Busy)
            .with_error(
                PropertyId::Health,
                PropertyError::Driver("gauge timeout".into()),
            );

        assert_eq!(
            class.show(&batt, PropertyId::Temp.index()),
            Err(PropertyError::NoData)
        );
        assert_eq!(
            class.show(&batt, PropertyId::VoltageNow.index()),
            Err(PropertyError::NotPresent)
        );
        assert_eq!(
            class.show(&batt, PropertyId::Capacity.index()),
            Err(PropertyError::Busy)
        );
        assert_eq!(
            class.show(&batt, PropertyId::Health.index()),
            Err(PropertyError::Driver("gauge timeout".into()))
        );
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let class = SupplyClass::new();
        let batt =
            MockSupply::new("batt0", SupplyType::Battery).with_value(PropertyId::Capacity, 42);

        let first = class.show(&batt, PropertyId::Capacity.index()).unwrap();
        let second = class.show(&batt, PropertyId::Capacity.index()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_attribute_index() {
        let class = SupplyClass::new();
        let batt = MockSupply::new("batt0", SupplyType::Battery);

        assert!(matches!(
            class.show(&batt, PropertyId::COUNT),
            Err(PropertyError::InvalidInput(_))
        ));
    }
}
