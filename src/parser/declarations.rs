//! Parsed declaration structures and the effect-flag registry.
//!
//! Custom style text mixes three kinds of entries, and keeping them in
//! one string-keyed bag makes it too easy to treat an effect flag as a
//! real style property. [`DeclarationMap`] therefore splits the parse
//! result into three explicit parts:
//!
//! - **literal properties**: ordinary `property: value` declarations;
//! - **flags**: the closed set of boolean pseudo-properties selecting an
//!   animated background effect;
//! - **variants**: flag-scoped secondary selectors (e.g. an effect's
//!   speed), meaningful only while their owning flag is set.

use std::collections::BTreeMap;

use bitflags::bitflags;

bitflags! {
    /// The closed set of animated-background effect flags.
    ///
    /// Bit order is the canonical classification order: tokens derived
    /// from a flag set always come out in this order, regardless of the
    /// order declarations appeared in the source text.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EffectFlags: u8 {
        const MATRIX_RAIN = 0b0001;
        const PARTICLES   = 0b0010;
        const SCANLINES   = 0b0100;
        const FLICKER     = 0b1000;
    }
}

/// Flag names in canonical order.
pub(crate) const FLAG_NAMES: [(&str, EffectFlags); 4] = [
    ("matrix-rain", EffectFlags::MATRIX_RAIN),
    ("particles", EffectFlags::PARTICLES),
    ("scanlines", EffectFlags::SCANLINES),
    ("flicker", EffectFlags::FLICKER),
];

/// Variant property names and the flag that owns each.
pub(crate) const VARIANT_OWNERS: [(&str, EffectFlags); 2] = [
    ("matrix-rain-speed", EffectFlags::MATRIX_RAIN),
    ("particles-speed", EffectFlags::PARTICLES),
];

/// Recognized speed levels for effect variants.
pub(crate) const SPEED_LEVELS: [&str; 3] = ["slow", "normal", "fast"];

/// The flag a property name selects, if it is a flag pseudo-property.
pub fn flag_for(name: &str) -> Option<EffectFlags> {
    FLAG_NAMES
        .iter()
        .find(|(flag_name, _)| *flag_name == name)
        .map(|(_, flag)| *flag)
}

/// The flag that owns a variant property name, if it is one.
pub fn variant_owner(name: &str) -> Option<EffectFlags> {
    VARIANT_OWNERS
        .iter()
        .find(|(variant_name, _)| *variant_name == name)
        .map(|(_, flag)| *flag)
}

/// The flags and flag-scoped variants carried by a declaration map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectSet {
    pub flags: EffectFlags,
    /// Variant property name → value (e.g. `matrix-rain-speed` → `fast`).
    pub variants: BTreeMap<String, String>,
}

impl EffectSet {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.variants.is_empty()
    }

    /// Drops every variant whose owning flag is not present. A variant
    /// is only meaningful while its flag is set.
    pub(crate) fn prune_orphans(&mut self) {
        let flags = self.flags;
        self.variants
            .retain(|name, _| variant_owner(name).is_some_and(|owner| flags.contains(owner)));
    }
}

/// An order-independent parse of custom style text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeclarationMap {
    /// Literal property → value declarations.
    pub properties: BTreeMap<String, String>,
    /// Recognized effect flags and their variants.
    pub effects: EffectSet,
}

impl DeclarationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.effects.is_empty()
    }
}
