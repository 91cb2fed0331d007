//! Attribute binding.
//!
//! Turns the property catalog into the attribute collection the host
//! registers with its filesystem interface. Binding happens exactly once at
//! initialization; the resulting set is immutable and shared by every device.

use crate::catalog::Catalog;
use powerclass_core::PropertyId;

/// One filesystem-visible attribute slot.
#[derive(Debug, Clone)]
pub struct Attribute {
    label: String,
    named: bool,
}

impl Attribute {
    /// Exposed attribute name: the lowercased canonical property name, or a
    /// `_err_<index>` placeholder for a missing catalog slot.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the catalog had a descriptor for this slot.
    pub fn is_named(&self) -> bool {
        self.named
    }
}

/// The bound attribute collection, index-aligned with [`PropertyId`].
///
/// Reads and writes for slot `n` route to the show/store paths with `n` as
/// the attribute index; the position carries the property identity.
#[derive(Debug)]
pub struct AttributeSet {
    attrs: Vec<Attribute>,
}

impl AttributeSet {
    /// Bind every property slot from `catalog`.
    ///
    /// A slot without a descriptor is still bound, so later slots keep their
    /// indices; it gets a placeholder label and a warning here, once, and the
    /// visibility resolver hides it from every device.
    pub fn bind(catalog: &Catalog) -> Self {
        let mut attrs = Vec::with_capacity(PropertyId::COUNT);

        for (index, desc) in catalog.iter().enumerate() {
            match desc.name {
                Some(name) => attrs.push(Attribute {
                    label: name.to_lowercase(),
                    named: true,
                }),
                None => {
                    tracing::warn!(
                        index,
                        "property missing from the catalog, binding a placeholder slot"
                    );
                    attrs.push(Attribute {
                        label: format!("_err_{index}"),
                        named: false,
                    });
                }
            }
        }

        Self { attrs }
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn get(&self, attrno: usize) -> Option<&Attribute> {
        self.attrs.get(attrno)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }
}
