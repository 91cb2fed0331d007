//! The assembled exposure layer.

use crate::binder::AttributeSet;
use crate::catalog::{self, Catalog};
#[cfg(feature = "charge-recovery")]
use crate::recovery::ChargeRecovery;
#[cfg(feature = "soc-telemetry")]
use crate::telemetry::{SocReport, SocTelemetry};
use crate::throttle::LogThrottle;
use crate::visibility::Visibility;
use powerclass_core::PowerSupply;

/// One initialized property exposure layer.
///
/// Construct once at startup, then let the host route attribute reads,
/// writes, visibility checks and device-event exports through it for every
/// registered supply. All methods are synchronous and run on the caller's
/// thread.
pub struct SupplyClass {
    attrs: AttributeSet,
    throttle: LogThrottle,
    #[cfg(feature = "charge-recovery")]
    pub(crate) recovery: Option<ChargeRecovery>,
    #[cfg(feature = "soc-telemetry")]
    pub(crate) telemetry: SocTelemetry,
}

impl SupplyClass {
    /// Bind the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(&catalog::CATALOG)
    }

    /// Bind a specific catalog.
    pub fn with_catalog(catalog: &Catalog) -> Self {
        Self {
            attrs: AttributeSet::bind(catalog),
            throttle: LogThrottle::new(),
            #[cfg(feature = "charge-recovery")]
            recovery: None,
            #[cfg(feature = "soc-telemetry")]
            telemetry: SocTelemetry::new(),
        }
    }

    /// Attach the charge-recovery heuristic to the show path.
    #[cfg(feature = "charge-recovery")]
    pub fn with_recovery(mut self, recovery: ChargeRecovery) -> Self {
        self.recovery = Some(recovery);
        self
    }

    /// The bound attribute collection, index-aligned with
    /// [`PropertyId`](powerclass_core::PropertyId).
    pub fn attributes(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Resolve attribute visibility for one device.
    pub fn visibility(&self, psy: &dyn PowerSupply, attrno: usize) -> Visibility {
        self.attrs.visibility(psy, attrno)
    }

    /// The attached recovery context, if any.
    #[cfg(feature = "charge-recovery")]
    pub fn recovery(&self) -> Option<&ChargeRecovery> {
        self.recovery.as_ref()
    }

    /// The most recent state-of-charge report, if one has fired.
    #[cfg(feature = "soc-telemetry")]
    pub fn last_soc_report(&self) -> Option<SocReport> {
        self.telemetry.last_report()
    }

    pub(crate) fn throttle(&self) -> &LogThrottle {
        &self.throttle
    }
}

impl Default for SupplyClass {
    fn default() -> Self {
        Self::new()
    }
}
