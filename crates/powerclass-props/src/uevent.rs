//! Device event export.

use crate::catalog;
use crate::class::SupplyClass;
use powerclass_core::{PowerSupply, PropertyError, PropertyId};

impl SupplyClass {
    /// Serialize a device's current property snapshot into ordered
    /// `POWER_SUPPLY_<NAME>=<value>` entries for an event notification.
    ///
    /// Every property is read live through the show path, one query at a
    /// time; the snapshot is not atomic across properties.
    pub fn uevent(&self, psy: &dyn PowerSupply) -> Result<Vec<String>, PropertyError> {
        let mut env = Vec::with_capacity(psy.properties().len() + 2);
        env.push(format!("POWER_SUPPLY_NAME={}", psy.name()));

        self.add_prop_entry(psy, PropertyId::Type, &mut env)?;
        for &prop in psy.properties() {
            self.add_prop_entry(psy, prop, &mut env)?;
        }

        Ok(env)
    }

    fn add_prop_entry(
        &self,
        psy: &dyn PowerSupply,
        prop: PropertyId,
        env: &mut Vec<String>,
    ) -> Result<(), PropertyError> {
        // A property the catalog never described has no exportable name.
        let Some(name) = catalog::describe(prop).name else {
            return Ok(());
        };

        let text = match self.show_property(psy, prop) {
            Ok(text) => text,
            // An absent battery answers NotPresent for everything; keep the
            // event going so it still carries at least PRESENT=0.
            Err(PropertyError::NoData | PropertyError::NotPresent) => return Ok(()),
            Err(err) => return Err(err),
        };

        let value = text.split('\n').next().unwrap_or("");
        env.push(format!("POWER_SUPPLY_{name}={value}"));
        Ok(())
    }
}
