//! State-of-charge telemetry.
//!
//! Samples property reads as they flow through the show path and emits one
//! structured report when the battery drops from a full 100% reading to 99%,
//! summarizing the charge state around the transition.

use crate::catalog::{HEALTH_TEXT, STATUS_TEXT, USB_TYPE_TEXT};
use powerclass_core::{PropertyId, PropertyValue};
use serde::Serialize;
use std::sync::Mutex;

/// One emitted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocReport {
    pub soc: i64,
    pub voltage: i64,
    pub temp: i64,
    pub health: String,
    pub state: String,
    pub current: i64,
    pub full_charge: i64,
    pub cycle_count: i64,
    pub connection_type: String,
}

#[derive(Debug, Default)]
struct TelemetryState {
    soc: i64,
    voltage: i64,
    temp: i64,
    health: i64,
    state: i64,
    current: i64,
    full_charge: i64,
    cycle_count: i64,
    connection_type: i64,
    last_report: Option<SocReport>,
}

/// Sample cache plus the full-to-99% transition detector.
#[derive(Debug)]
pub struct SocTelemetry {
    state: Mutex<TelemetryState>,
}

impl SocTelemetry {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(TelemetryState::default()),
        }
    }

    /// Capture a sample that rendered through an enumeration text table.
    pub(crate) fn observe_enum(&self, prop: PropertyId, value: i64) {
        if matches!(prop, PropertyId::Status | PropertyId::Health) {
            self.observe_int(prop, value);
        }
    }

    /// Capture a sample from the non-enumerated rendering branches.
    pub(crate) fn observe(&self, prop: PropertyId, value: &PropertyValue) {
        if let Some(v) = value.as_int() {
            self.observe_int(prop, v);
        }
    }

    fn observe_int(&self, prop: PropertyId, value: i64) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        match prop {
            PropertyId::CurrentNow => state.current = value,
            PropertyId::UsbType => state.connection_type = value,
            PropertyId::ChargeFull => state.full_charge = value,
            PropertyId::Status => state.state = value,
            PropertyId::Health => state.health = value,
            PropertyId::Temp => state.temp = (value + 5) / 10,
            PropertyId::VoltageNow => state.voltage = value,
            PropertyId::CycleCount => state.cycle_count = value,
            PropertyId::Capacity => {
                if state.soc != value {
                    // Only the full-to-99% edge is worth a report.
                    if state.soc == 100 && value == 99 {
                        let report = SocReport {
                            soc: state.soc,
                            voltage: state.voltage,
                            temp: state.temp,
                            health: text_label(HEALTH_TEXT, state.health),
                            state: text_label(STATUS_TEXT, state.state),
                            current: state.current,
                            full_charge: state.full_charge,
                            cycle_count: state.cycle_count,
                            connection_type: text_label(USB_TYPE_TEXT, state.connection_type),
                        };
                        tracing::info!(
                            soc = report.soc,
                            voltage = report.voltage,
                            temp = report.temp,
                            health = %report.health,
                            state = %report.state,
                            current = report.current,
                            full_charge = report.full_charge,
                            cycle_count = report.cycle_count,
                            connection_type = %report.connection_type,
                            "battery left full charge"
                        );
                        state.last_report = Some(report);
                    }
                    state.soc = value;
                }
            }
            _ => {}
        }
    }

    /// The most recent report, if any transition has fired.
    pub fn last_report(&self) -> Option<SocReport> {
        self.state.lock().ok().and_then(|state| state.last_report.clone())
    }
}

fn text_label(table: &[&str], value: i64) -> String {
    usize::try_from(value)
        .ok()
        .and_then(|index| table.get(index))
        .copied()
        .unwrap_or("Unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerclass_core::{Health, Status, UsbType};

    fn sample(telemetry: &SocTelemetry, prop: PropertyId, value: i64) {
        telemetry.observe(prop, &PropertyValue::Integer(value));
    }

    #[test]
    fn test_report_fires_only_on_the_full_to_99_edge() {
        let telemetry = SocTelemetry::new();

        sample(&telemetry, PropertyId::VoltageNow, 4400000);
        sample(&telemetry, PropertyId::Temp, 298);
        sample(&telemetry, PropertyId::CurrentNow, 120000);
        sample(&telemetry, PropertyId::ChargeFull, 4900000);
        sample(&telemetry, PropertyId::CycleCount, 17);
        telemetry.observe_enum(PropertyId::Status, Status::Full as i64);
        telemetry.observe_enum(PropertyId::Health, Health::Good as i64);
        sample(&telemetry, PropertyId::UsbType, UsbType::Pd as i64);

        sample(&telemetry, PropertyId::Capacity, 100);
        assert_eq!(telemetry.last_report(), None);

        sample(&telemetry, PropertyId::Capacity, 99);
        let report = telemetry.last_report().expect("report should have fired");
        assert_eq!(report.soc, 100);
        assert_eq!(report.voltage, 4400000);
        assert_eq!(report.temp, 30);
        assert_eq!(report.health, "Good");
        assert_eq!(report.state, "Full");
        assert_eq!(report.current, 120000);
        assert_eq!(report.full_charge, 4900000);
        assert_eq!(report.cycle_count, 17);
        assert_eq!(report.connection_type, "PD");
    }

    #[test]
    fn test_later_drops_do_not_re_emit() {
        let telemetry = SocTelemetry::new();
        sample(&telemetry, PropertyId::VoltageNow, 4400000);
        sample(&telemetry, PropertyId::Capacity, 100);
        sample(&telemetry, PropertyId::Capacity, 99);
        assert!(telemetry.last_report().is_some());

        // The cached voltage moves on; a further drop must not rebuild the
        // report from it.
        sample(&telemetry, PropertyId::VoltageNow, 4100000);
        sample(&telemetry, PropertyId::Capacity, 98);
        let report = telemetry.last_report().expect("report should persist");
        assert_eq!(report.voltage, 4400000);
    }

    #[test]
    fn test_jump_from_below_full_does_not_fire() {
        let telemetry = SocTelemetry::new();
        sample(&telemetry, PropertyId::Capacity, 98);
        sample(&telemetry, PropertyId::Capacity, 99);
        assert_eq!(telemetry.last_report(), None);
    }

    #[test]
    fn test_unknown_text_indices_fall_back() {
        let telemetry = SocTelemetry::new();
        telemetry.observe_enum(PropertyId::Health, 999);
        sample(&telemetry, PropertyId::Capacity, 100);
        sample(&telemetry, PropertyId::Capacity, 99);
        assert_eq!(telemetry.last_report().map(|r| r.health), Some("Unknown".into()));
    }

    #[test]
    fn test_report_serializes() {
        let telemetry = SocTelemetry::new();
        sample(&telemetry, PropertyId::Capacity, 100);
        sample(&telemetry, PropertyId::Capacity, 99);
        let report = telemetry.last_report().expect("report should have fired");

        let json = serde_json::to_value(&report).expect("report should serialize");
        assert_eq!(json["soc"], 100);
        assert_eq!(json["state"], "Unknown");
    }
}
