//! Mapping effect flags to animated-background class tokens.
//!
//! The dashboard's animated-background renderer picks its effect from a
//! list of class tokens. Output order follows the canonical flag order,
//! not the order declarations appeared in, so class lists are
//! reproducible for snapshot testing.

use crate::parser::declarations::{
    DeclarationMap, EffectSet, FLAG_NAMES, SPEED_LEVELS, VARIANT_OWNERS,
};

/// Classifies a parsed declaration map into animated-background tokens.
pub fn classify(map: &DeclarationMap) -> Vec<String> {
    animation_classes(&map.effects)
}

/// The class tokens for an effect set, in canonical flag order.
///
/// Each present flag contributes its base token (`<flag>-bg`); if the
/// flag's speed variant holds a recognized level, a combined
/// `<flag>-<level>` token follows it. Unrecognized variant values are
/// ignored.
pub fn animation_classes(effects: &EffectSet) -> Vec<String> {
    let mut classes = Vec::new();

    for (name, flag) in FLAG_NAMES {
        if !effects.flags.contains(flag) {
            continue;
        }
        classes.push(format!("{name}-bg"));

        let variant = VARIANT_OWNERS
            .iter()
            .find(|(_, owner)| *owner == flag)
            .and_then(|(variant_name, _)| effects.variants.get(*variant_name));
        if let Some(level) = variant {
            if SPEED_LEVELS.contains(&level.as_str()) {
                classes.push(format!("{name}-{level}"));
            }
        }
    }

    classes
}
