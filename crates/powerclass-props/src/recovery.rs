//! Stuck-charge recovery heuristic.
//!
//! Watches capacity reads for a stuck-charge signature — charger online,
//! battery still drawing current but below full — and nudges the charger
//! hardware with an enable/disable pulse once the signature has been seen
//! often enough. Runs inline in the show path and sleeps on the caller's
//! thread while pulsing, so a capacity read can block for the pulse
//! duration.

use powerclass_core::{ChargerControl, PropertyId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU32, Ordering};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecoveryConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Tunables for the recovery state machine.
///
/// Defaults match the shipped hardware constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Qualifying reads that must be exceeded before a pulse fires.
    pub trigger_threshold: u32,
    /// Pulses after which the escalated pulse pair fires.
    pub escalation_threshold: u32,
    /// Charger command pair for the normal pulse.
    pub enable_command: i32,
    pub disable_command: i32,
    /// Charger command pair for the escalated pulse.
    pub escalation_enable_command: i32,
    pub escalation_disable_command: i32,
    /// Delay between the two halves of each pulse.
    pub pulse_delay_ms: u64,
    pub escalation_delay_ms: u64,
    /// Capacity at or above this is treated as effectively full.
    pub full_soc: i64,
    /// Reads at or above this temperature (degrees C) never qualify.
    pub max_temp: i64,
    /// A hot pack at high voltage is legitimately held off charge; reads
    /// qualify only when not both limits are exceeded.
    pub hot_temp: i64,
    pub hot_voltage_mv: i64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            trigger_threshold: 10,
            escalation_threshold: 5,
            enable_command: 2,
            disable_command: 3,
            escalation_enable_command: 1,
            escalation_disable_command: 0,
            pulse_delay_ms: 1000,
            escalation_delay_ms: 2000,
            full_soc: 99,
            max_temp: 55,
            hot_temp: 47,
            hot_voltage_mv: 8100,
        }
    }
}

impl RecoveryConfig {
    /// Load from a TOML file; keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self, RecoveryConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Process-lifetime recovery state, injected into the show path.
///
/// The counters and cached samples are independent relaxed atomics:
/// concurrent capacity reads race on them the same way the shipped
/// implementation raced on plain globals, so the debouncing is best-effort
/// rather than an exact count, and no cross-field snapshot is taken.
pub struct ChargeRecovery {
    config: RecoveryConfig,
    charger: Arc<dyn ChargerControl>,
    bypass: AtomicBool,
    trigger_count: AtomicU32,
    escalation_count: AtomicU32,
    charge_current: AtomicI64,
    charger_online: AtomicI64,
    battery_soc: AtomicI64,
    battery_temp: AtomicI64,
    battery_voltage: AtomicI64,
}

impl ChargeRecovery {
    pub fn new(charger: Arc<dyn ChargerControl>) -> Self {
        Self::with_config(RecoveryConfig::default(), charger)
    }

    pub fn with_config(config: RecoveryConfig, charger: Arc<dyn ChargerControl>) -> Self {
        Self {
            config,
            charger,
            bypass: AtomicBool::new(false),
            trigger_count: AtomicU32::new(0),
            escalation_count: AtomicU32::new(0),
            charge_current: AtomicI64::new(0),
            charger_online: AtomicI64::new(0),
            battery_soc: AtomicI64::new(0),
            battery_temp: AtomicI64::new(0),
            battery_voltage: AtomicI64::new(0),
        }
    }

    /// Suspend the heuristic while a bypass charging mode is active.
    pub fn set_bypass(&self, bypass: bool) {
        self.bypass.store(bypass, Ordering::Relaxed);
    }

    pub fn trigger_count(&self) -> u32 {
        self.trigger_count.load(Ordering::Relaxed)
    }

    pub fn escalation_count(&self) -> u32 {
        self.escalation_count.load(Ordering::Relaxed)
    }

    /// Record one integer sample from the show path. A capacity sample also
    /// runs the recovery check against whatever the other caches last saw;
    /// there is no coordination with the order those reads happened in.
    pub(crate) fn observe(&self, prop: PropertyId, value: i64) {
        match prop {
            PropertyId::CurrentNow => self.charge_current.store(value, Ordering::Relaxed),
            PropertyId::Online => self.charger_online.store(value, Ordering::Relaxed),
            PropertyId::Temp => self.battery_temp.store(value / 10, Ordering::Relaxed),
            PropertyId::VoltageNow => self.battery_voltage.store(value / 1000, Ordering::Relaxed),
            PropertyId::Capacity => {
                self.battery_soc.store(value, Ordering::Relaxed);
                self.check(value);
            }
            _ => {}
        }
    }

    fn qualifies(&self, soc: i64) -> bool {
        if self.bypass.load(Ordering::Relaxed) {
            return false;
        }
        if self.charger_online.load(Ordering::Relaxed) != 1 {
            return false;
        }
        if self.charge_current.load(Ordering::Relaxed) <= 0 {
            return false;
        }
        if soc >= self.config.full_soc {
            return false;
        }
        let temp = self.battery_temp.load(Ordering::Relaxed);
        if temp >= self.config.max_temp {
            return false;
        }
        !(temp > self.config.hot_temp
            && self.battery_voltage.load(Ordering::Relaxed) > self.config.hot_voltage_mv)
    }

    fn check(&self, soc: i64) {
        if !self.qualifies(soc) {
            // No decay on a healthy read: sparse qualifying reads still
            // accumulate toward the trigger.
            return;
        }

        let count = self.trigger_count.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(
            count,
            soc,
            current = self.charge_current.load(Ordering::Relaxed),
            temp = self.battery_temp.load(Ordering::Relaxed),
            voltage = self.battery_voltage.load(Ordering::Relaxed),
            "stuck-charge signature observed"
        );
        if count <= self.config.trigger_threshold {
            return;
        }
        self.trigger_count.store(0, Ordering::Relaxed);

        tracing::info!(soc, "charging stalled while drawing current, pulsing charger");
        self.pulse(
            self.config.enable_command,
            self.config.disable_command,
            self.config.pulse_delay_ms,
        );

        let pulses = self.escalation_count.fetch_add(1, Ordering::Relaxed) + 1;
        if pulses >= self.config.escalation_threshold {
            self.escalation_count.store(0, Ordering::Relaxed);
            // Second-stage reset for supplies that come back with no current
            // or only a trickle after a PD plug-in.
            tracing::info!("recovery pulses exhausted, issuing escalated charger reset");
            self.pulse(
                self.config.escalation_enable_command,
                self.config.escalation_disable_command,
                self.config.escalation_delay_ms,
            );
        }
    }

    /// Blocking: sleeps between the two commands on the calling thread.
    fn pulse(&self, enable: i32, disable: i32, delay_ms: u64) {
        if let Err(err) = self.charger.set_charger(enable) {
            tracing::warn!(command = enable, error = %err, "charger command failed");
        }
        thread::sleep(Duration::from_millis(delay_ms));
        if let Err(err) = self.charger.set_charger(disable) {
            tracing::warn!(command = disable, error = %err, "charger command failed");
        }
    }
}
