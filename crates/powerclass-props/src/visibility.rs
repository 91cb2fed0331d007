//! Per-device attribute visibility.

use crate::binder::AttributeSet;
use powerclass_core::{PowerSupply, PropertyId};

/// How one attribute appears to observers of a given device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The attribute does not exist for this device.
    Hidden,
    /// Readable only.
    ReadOnly,
    /// Readable and writable.
    ReadWrite,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        !matches!(self, Visibility::Hidden)
    }

    pub fn is_writable(self) -> bool {
        matches!(self, Visibility::ReadWrite)
    }
}

impl AttributeSet {
    /// Resolve whether attribute `attrno` exists for `psy`, and with which
    /// access mode.
    ///
    /// The host calls this on every attribute enumeration; it is
    /// deterministic, never blocks and never touches device state.
    pub fn visibility(&self, psy: &dyn PowerSupply, attrno: usize) -> Visibility {
        let Some(attr) = self.get(attrno) else {
            return Visibility::Hidden;
        };
        if !attr.is_named() {
            return Visibility::Hidden;
        }
        let Some(prop) = PropertyId::from_index(attrno) else {
            return Visibility::Hidden;
        };

        // The type attribute is synthesized from the static type tag, so it
        // exists even when the device does not declare it.
        if prop == PropertyId::Type {
            return Visibility::ReadOnly;
        }

        for &declared in psy.properties() {
            if declared == prop {
                if psy.property_is_writeable(prop) {
                    return Visibility::ReadWrite;
                }
                return Visibility::ReadOnly;
            }
        }

        Visibility::Hidden
    }
}
