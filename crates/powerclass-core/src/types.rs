//! Value enumerations for power supply properties.
//!
//! Discriminants are wire values: devices report them as plain integers and
//! the exposure layer's text tables are indexed by them, so the order here is
//! fixed.

/// Kind of power source a device registers as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyType {
    Unknown = 0,
    Battery,
    Ups,
    Mains,
    Usb,
    UsbDcp,
    UsbCdp,
    UsbAca,
    UsbTypeC,
    UsbPd,
    UsbPdDrp,
    AppleBrickId,
    Wireless,
}

impl SupplyType {
    /// Canonical text label.
    pub const fn as_str(self) -> &'static str {
        match self {
            SupplyType::Unknown => "Unknown",
            SupplyType::Battery => "Battery",
            SupplyType::Ups => "UPS",
            SupplyType::Mains => "Mains",
            SupplyType::Usb => "USB",
            SupplyType::UsbDcp => "USB_DCP",
            SupplyType::UsbCdp => "USB_CDP",
            SupplyType::UsbAca => "USB_ACA",
            SupplyType::UsbTypeC => "USB_C",
            SupplyType::UsbPd => "USB_PD",
            SupplyType::UsbPdDrp => "USB_PD_DRP",
            SupplyType::AppleBrickId => "BrickID",
            SupplyType::Wireless => "Wireless",
        }
    }
}

/// Connection type a USB supply can negotiate.
///
/// Devices declare the subset they support and report which one is currently
/// active; the exposure layer renders the whole declared set with the active
/// option bracketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsbType {
    Unknown = 0,
    Sdp,
    Dcp,
    Cdp,
    Aca,
    C,
    Pd,
    PdDrp,
    PdPps,
    AppleBrickId,
}

impl UsbType {
    /// Canonical text label.
    pub const fn as_str(self) -> &'static str {
        match self {
            UsbType::Unknown => "Unknown",
            UsbType::Sdp => "SDP",
            UsbType::Dcp => "DCP",
            UsbType::Cdp => "CDP",
            UsbType::Aca => "ACA",
            UsbType::C => "C",
            UsbType::Pd => "PD",
            UsbType::PdDrp => "PD_DRP",
            UsbType::PdPps => "PD_PPS",
            UsbType::AppleBrickId => "BrickID",
        }
    }
}

/// Charging status of a battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Unknown = 0,
    Charging,
    Discharging,
    NotCharging,
    Full,
}

/// Coarse charge algorithm phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeType {
    Unknown = 0,
    None,
    Trickle,
    Fast,
    Standard,
    Adaptive,
    Custom,
}

/// Battery health as reported by the fuel gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Unknown = 0,
    Good,
    Overheat,
    Dead,
    OverVoltage,
    UnspecFailure,
    Cold,
    WatchdogTimerExpire,
    SafetyTimerExpire,
    OverCurrent,
    CalibrationRequired,
    Warm,
    Cool,
    Hot,
}

/// Battery chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technology {
    Unknown = 0,
    NiMh,
    LiIon,
    LiPoly,
    LiFe,
    NiCd,
    LiMn,
}

/// Coarse capacity banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityLevel {
    Unknown = 0,
    Critical,
    Low,
    Normal,
    High,
    Full,
}

/// Whether the supply powers the system or an attached peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Unknown = 0,
    System,
    Device,
}
