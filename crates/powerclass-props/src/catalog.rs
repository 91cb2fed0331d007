//! Static property catalog.
//!
//! One descriptor per [`PropertyId`], built once at compile time and shared
//! by every device. The table must stay total over the enumeration: a slot
//! without a descriptor is a configuration defect that the binder tolerates
//! by neutering the slot, never a runtime error.

use powerclass_core::PropertyId;

/// Labels for enumerated property values, indexed by the raw integer value.
pub const TYPE_TEXT: &[&str] = &[
    "Unknown",
    "Battery",
    "UPS",
    "Mains",
    "USB",
    "USB_DCP",
    "USB_CDP",
    "USB_ACA",
    "USB_C",
    "USB_PD",
    "USB_PD_DRP",
    "BrickID",
    "Wireless",
];

pub const USB_TYPE_TEXT: &[&str] = &[
    "Unknown",
    "SDP",
    "DCP",
    "CDP",
    "ACA",
    "C",
    "PD",
    "PD_DRP",
    "PD_PPS",
    "BrickID",
];

pub const STATUS_TEXT: &[&str] = &[
    "Unknown",
    "Charging",
    "Discharging",
    "Not charging",
    "Full",
];

pub const CHARGE_TYPE_TEXT: &[&str] = &[
    "Unknown",
    "N/A",
    "Trickle",
    "Fast",
    "Standard",
    "Adaptive",
    "Custom",
];

pub const HEALTH_TEXT: &[&str] = &[
    "Unknown",
    "Good",
    "Overheat",
    "Dead",
    "Over voltage",
    "Unspecified failure",
    "Cold",
    "Watchdog timer expire",
    "Safety timer expire",
    "Over current",
    "Calibration required",
    "Warm",
    "Cool",
    "Hot",
];

pub const TECHNOLOGY_TEXT: &[&str] = &[
    "Unknown",
    "NiMH",
    "Li-ion",
    "Li-poly",
    "LiFe",
    "NiCd",
    "LiMn",
];

pub const CAPACITY_LEVEL_TEXT: &[&str] = &[
    "Unknown",
    "Critical",
    "Low",
    "Normal",
    "High",
    "Full",
];

pub const SCOPE_TEXT: &[&str] = &["Unknown", "System", "Device"];

const NO_TEXT: &[&str] = &[];

/// Immutable description of one property slot.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDescriptor {
    /// Canonical uppercase name; `None` marks a missing catalog entry, which
    /// callers must treat as "unimplemented, skip".
    pub name: Option<&'static str>,
    /// Ordered value labels; empty for non-enumerated properties.
    pub text_values: &'static [&'static str],
}

impl PropertyDescriptor {
    /// Sentinel for a slot no descriptor was registered for.
    pub const MISSING: Self = Self {
        name: None,
        text_values: NO_TEXT,
    };

    /// Whether values of this property render through a text table.
    pub fn is_enumerated(&self) -> bool {
        !self.text_values.is_empty()
    }
}

/// A full descriptor table, one slot per property in enumeration order.
pub type Catalog = [PropertyDescriptor; PropertyId::COUNT];

const fn entry(name: &'static str, text_values: &'static [&'static str]) -> PropertyDescriptor {
    PropertyDescriptor {
        name: Some(name),
        text_values,
    }
}

const fn build() -> Catalog {
    let mut table = [PropertyDescriptor::MISSING; PropertyId::COUNT];

    // Integer-valued properties.
    table[PropertyId::Status as usize] = entry("STATUS", STATUS_TEXT);
    table[PropertyId::ChargeType as usize] = entry("CHARGE_TYPE", CHARGE_TYPE_TEXT);
    table[PropertyId::Health as usize] = entry("HEALTH", HEALTH_TEXT);
    table[PropertyId::Present as usize] = entry("PRESENT", NO_TEXT);
    table[PropertyId::Online as usize] = entry("ONLINE", NO_TEXT);
    table[PropertyId::Authentic as usize] = entry("AUTHENTIC", NO_TEXT);
    table[PropertyId::Technology as usize] = entry("TECHNOLOGY", TECHNOLOGY_TEXT);
    table[PropertyId::CycleCount as usize] = entry("CYCLE_COUNT", NO_TEXT);
    table[PropertyId::VoltageMax as usize] = entry("VOLTAGE_MAX", NO_TEXT);
    table[PropertyId::VoltageMin as usize] = entry("VOLTAGE_MIN", NO_TEXT);
    table[PropertyId::VoltageMaxDesign as usize] = entry("VOLTAGE_MAX_DESIGN", NO_TEXT);
    table[PropertyId::VoltageMinDesign as usize] = entry("VOLTAGE_MIN_DESIGN", NO_TEXT);
    table[PropertyId::VoltageNow as usize] = entry("VOLTAGE_NOW", NO_TEXT);
    table[PropertyId::VoltageAvg as usize] = entry("VOLTAGE_AVG", NO_TEXT);
    table[PropertyId::VoltageOcv as usize] = entry("VOLTAGE_OCV", NO_TEXT);
    table[PropertyId::VoltageBoot as usize] = entry("VOLTAGE_BOOT", NO_TEXT);
    table[PropertyId::CurrentMax as usize] = entry("CURRENT_MAX", NO_TEXT);
    table[PropertyId::CurrentNow as usize] = entry("CURRENT_NOW", NO_TEXT);
    table[PropertyId::CurrentAvg as usize] = entry("CURRENT_AVG", NO_TEXT);
    table[PropertyId::CurrentBoot as usize] = entry("CURRENT_BOOT", NO_TEXT);
    table[PropertyId::PowerNow as usize] = entry("POWER_NOW", NO_TEXT);
    table[PropertyId::PowerAvg as usize] = entry("POWER_AVG", NO_TEXT);
    // Vendor display-state property; without the vendor feature the slot
    // stays a MISSING sentinel and binds as a neutered placeholder.
    #[cfg(feature = "charge-recovery")]
    {
        table[PropertyId::LcdOn as usize] = entry("LCD_ON", NO_TEXT);
    }
    table[PropertyId::ChargeFullDesign as usize] = entry("CHARGE_FULL_DESIGN", NO_TEXT);
    table[PropertyId::ChargeEmptyDesign as usize] = entry("CHARGE_EMPTY_DESIGN", NO_TEXT);
    table[PropertyId::ChargeFull as usize] = entry("CHARGE_FULL", NO_TEXT);
    table[PropertyId::ChargeEmpty as usize] = entry("CHARGE_EMPTY", NO_TEXT);
    table[PropertyId::ChargeNow as usize] = entry("CHARGE_NOW", NO_TEXT);
    table[PropertyId::ChargeAvg as usize] = entry("CHARGE_AVG", NO_TEXT);
    table[PropertyId::ChargeCounter as usize] = entry("CHARGE_COUNTER", NO_TEXT);
    table[PropertyId::ConstantChargeCurrent as usize] = entry("CONSTANT_CHARGE_CURRENT", NO_TEXT);
    table[PropertyId::ConstantChargeCurrentMax as usize] =
        entry("CONSTANT_CHARGE_CURRENT_MAX", NO_TEXT);
    table[PropertyId::ConstantChargeVoltage as usize] = entry("CONSTANT_CHARGE_VOLTAGE", NO_TEXT);
    table[PropertyId::ConstantChargeVoltageMax as usize] =
        entry("CONSTANT_CHARGE_VOLTAGE_MAX", NO_TEXT);
    table[PropertyId::ChargeControlLimit as usize] = entry("CHARGE_CONTROL_LIMIT", NO_TEXT);
    table[PropertyId::ChargeControlLimitMax as usize] = entry("CHARGE_CONTROL_LIMIT_MAX", NO_TEXT);
    table[PropertyId::ChargeControlStartThreshold as usize] =
        entry("CHARGE_CONTROL_START_THRESHOLD", NO_TEXT);
    table[PropertyId::ChargeControlEndThreshold as usize] =
        entry("CHARGE_CONTROL_END_THRESHOLD", NO_TEXT);
    table[PropertyId::InputCurrentLimit as usize] = entry("INPUT_CURRENT_LIMIT", NO_TEXT);
    table[PropertyId::InputVoltageLimit as usize] = entry("INPUT_VOLTAGE_LIMIT", NO_TEXT);
    table[PropertyId::InputPowerLimit as usize] = entry("INPUT_POWER_LIMIT", NO_TEXT);
    table[PropertyId::EnergyFullDesign as usize] = entry("ENERGY_FULL_DESIGN", NO_TEXT);
    table[PropertyId::EnergyEmptyDesign as usize] = entry("ENERGY_EMPTY_DESIGN", NO_TEXT);
    table[PropertyId::EnergyFull as usize] = entry("ENERGY_FULL", NO_TEXT);
    table[PropertyId::EnergyEmpty as usize] = entry("ENERGY_EMPTY", NO_TEXT);
    table[PropertyId::EnergyNow as usize] = entry("ENERGY_NOW", NO_TEXT);
    table[PropertyId::EnergyAvg as usize] = entry("ENERGY_AVG", NO_TEXT);
    table[PropertyId::Capacity as usize] = entry("CAPACITY", NO_TEXT);
    table[PropertyId::CapacityAlertMin as usize] = entry("CAPACITY_ALERT_MIN", NO_TEXT);
    table[PropertyId::CapacityAlertMax as usize] = entry("CAPACITY_ALERT_MAX", NO_TEXT);
    table[PropertyId::CapacityErrorMargin as usize] = entry("CAPACITY_ERROR_MARGIN", NO_TEXT);
    table[PropertyId::CapacityLevel as usize] = entry("CAPACITY_LEVEL", CAPACITY_LEVEL_TEXT);
    table[PropertyId::Temp as usize] = entry("TEMP", NO_TEXT);
    table[PropertyId::TempMax as usize] = entry("TEMP_MAX", NO_TEXT);
    table[PropertyId::TempMin as usize] = entry("TEMP_MIN", NO_TEXT);
    table[PropertyId::TempAlertMin as usize] = entry("TEMP_ALERT_MIN", NO_TEXT);
    table[PropertyId::TempAlertMax as usize] = entry("TEMP_ALERT_MAX", NO_TEXT);
    table[PropertyId::TempAmbient as usize] = entry("TEMP_AMBIENT", NO_TEXT);
    table[PropertyId::TempAmbientAlertMin as usize] = entry("TEMP_AMBIENT_ALERT_MIN", NO_TEXT);
    table[PropertyId::TempAmbientAlertMax as usize] = entry("TEMP_AMBIENT_ALERT_MAX", NO_TEXT);
    table[PropertyId::TimeToEmptyNow as usize] = entry("TIME_TO_EMPTY_NOW", NO_TEXT);
    table[PropertyId::TimeToEmptyAvg as usize] = entry("TIME_TO_EMPTY_AVG", NO_TEXT);
    table[PropertyId::TimeToFullNow as usize] = entry("TIME_TO_FULL_NOW", NO_TEXT);
    table[PropertyId::TimeToFullAvg as usize] = entry("TIME_TO_FULL_AVG", NO_TEXT);
    table[PropertyId::Type as usize] = entry("TYPE", TYPE_TEXT);
    table[PropertyId::UsbType as usize] = entry("USB_TYPE", NO_TEXT);
    table[PropertyId::Scope as usize] = entry("SCOPE", SCOPE_TEXT);
    table[PropertyId::PrechargeCurrent as usize] = entry("PRECHARGE_CURRENT", NO_TEXT);
    table[PropertyId::ChargeTermCurrent as usize] = entry("CHARGE_TERM_CURRENT", NO_TEXT);
    table[PropertyId::Calibrate as usize] = entry("CALIBRATE", NO_TEXT);
    table[PropertyId::ManufactureYear as usize] = entry("MANUFACTURE_YEAR", NO_TEXT);
    table[PropertyId::ManufactureMonth as usize] = entry("MANUFACTURE_MONTH", NO_TEXT);
    table[PropertyId::ManufactureDay as usize] = entry("MANUFACTURE_DAY", NO_TEXT);

    // String-valued properties.
    table[PropertyId::ModelName as usize] = entry("MODEL_NAME", NO_TEXT);
    table[PropertyId::Manufacturer as usize] = entry("MANUFACTURER", NO_TEXT);
    table[PropertyId::SerialNumber as usize] = entry("SERIAL_NUMBER", NO_TEXT);

    // Vendor charging extensions.
    table[PropertyId::QuickChargeType as usize] = entry("QUICK_CHARGE_TYPE", NO_TEXT);
    table[PropertyId::TxAdapter as usize] = entry("TX_ADAPTER", NO_TEXT);
    table[PropertyId::SignalStrength as usize] = entry("SIGNAL_STRENGTH", NO_TEXT);
    table[PropertyId::ReverseChgMode as usize] = entry("REVERSE_CHG_MODE", NO_TEXT);

    table
}

/// The process-wide catalog.
pub static CATALOG: Catalog = build();

/// Look up the descriptor for a property. Total, pure and O(1).
pub fn describe(prop: PropertyId) -> &'static PropertyDescriptor {
    &CATALOG[prop as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_is_total() {
        for &prop in PropertyId::ALL {
            // Never panics, and the slot is either named or explicitly absent.
            let desc = describe(prop);
            if desc.name.is_none() {
                assert!(desc.text_values.is_empty());
            }
        }
    }

    #[test]
    fn test_named_entries() {
        assert_eq!(describe(PropertyId::Status).name, Some("STATUS"));
        assert_eq!(describe(PropertyId::Capacity).name, Some("CAPACITY"));
        assert_eq!(describe(PropertyId::SerialNumber).name, Some("SERIAL_NUMBER"));
        assert_eq!(describe(PropertyId::ReverseChgMode).name, Some("REVERSE_CHG_MODE"));
    }

    #[test]
    fn test_enumerated_entries_carry_tables() {
        assert!(describe(PropertyId::Status).is_enumerated());
        assert!(describe(PropertyId::ChargeType).is_enumerated());
        assert!(describe(PropertyId::Health).is_enumerated());
        assert!(describe(PropertyId::Technology).is_enumerated());
        assert!(describe(PropertyId::CapacityLevel).is_enumerated());
        assert!(describe(PropertyId::Type).is_enumerated());
        assert!(describe(PropertyId::Scope).is_enumerated());

        // The connection type renders through the multi-choice path, not the
        // plain enumerated path.
        assert!(!describe(PropertyId::UsbType).is_enumerated());
        assert!(!describe(PropertyId::Capacity).is_enumerated());
    }

    #[test]
    fn test_text_tables_match_wire_values() {
        use powerclass_core::{Health, Status, SupplyType, UsbType};

        assert_eq!(TYPE_TEXT[SupplyType::Wireless as usize], "Wireless");
        assert_eq!(TYPE_TEXT[SupplyType::UsbTypeC as usize], "USB_C");
        assert_eq!(USB_TYPE_TEXT[UsbType::Cdp as usize], "CDP");
        assert_eq!(USB_TYPE_TEXT[UsbType::PdPps as usize], "PD_PPS");
        assert_eq!(STATUS_TEXT[Status::NotCharging as usize], "Not charging");
        assert_eq!(HEALTH_TEXT[Health::Hot as usize], "Hot");
    }

    #[cfg(feature = "charge-recovery")]
    #[test]
    fn test_vendor_lcd_entry_present() {
        assert_eq!(describe(PropertyId::LcdOn).name, Some("LCD_ON"));
    }

    #[cfg(not(feature = "charge-recovery"))]
    #[test]
    fn test_vendor_lcd_entry_missing() {
        assert_eq!(describe(PropertyId::LcdOn).name, None);
    }
}
