//! Composition and retraction of visual-effect presets.
//!
//! Presets are small declaration maps that users layer onto an element's
//! custom style text. Applying one must not clobber unrelated
//! declarations, and undoing one must not take another preset's flags
//! down with it. Both operations are property-identity based: removal
//! matches "undo this preset", not "undo this exact declaration".

use crate::parser::declarations::DeclarationMap;

/// Merges `incoming` over `base`.
///
/// - Literal properties: per-key union, incoming wins on collision.
/// - Flags: set union. A preset never un-sets another preset's flag.
/// - Variants: per-key union, incoming wins, so re-applying a preset
///   with a different speed replaces only the variant, not the flag.
pub fn merge(base: &DeclarationMap, incoming: &DeclarationMap) -> DeclarationMap {
    let mut result = base.clone();

    for (property, value) in &incoming.properties {
        result.properties.insert(property.clone(), value.clone());
    }
    result.effects.flags |= incoming.effects.flags;
    for (name, value) in &incoming.effects.variants {
        result
            .effects
            .variants
            .insert(name.clone(), value.clone());
    }

    result
}

/// Removes the contribution of `to_remove` from `current`.
///
/// - Literal properties named by `to_remove` are deleted regardless of
///   their current value.
/// - Flags present in both are dropped; flags only in `current` stay.
/// - Variants explicitly named by `to_remove` are deleted, and any
///   variant whose owning flag is absent from the final flag set is
///   dropped with it. Retention depends on the final result, so
///   removing several presets is order-independent.
pub fn remove(current: &DeclarationMap, to_remove: &DeclarationMap) -> DeclarationMap {
    let mut result = current.clone();

    for property in to_remove.properties.keys() {
        result.properties.remove(property);
    }
    result.effects.flags.remove(to_remove.effects.flags);
    for name in to_remove.effects.variants.keys() {
        result.effects.variants.remove(name);
    }
    result.effects.prune_orphans();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_merge_then_remove_is_identity_on_disjoint_maps() {
        let current = parse("color: red; padding: 4px;");
        let effect = parse("box-shadow: 0 0 8px lime; matrix-rain: true; matrix-rain-speed: slow;");

        let merged = merge(&current, &effect);
        let restored = remove(&merged, &effect);

        assert_eq!(restored, current);
    }

    #[test]
    fn test_variant_dropped_with_owning_flag() {
        let current = parse("matrix-rain: true; matrix-rain-speed: fast;");
        let undo = parse("matrix-rain: true;");

        let result = remove(&current, &undo);
        assert!(result.is_empty());
    }
}
