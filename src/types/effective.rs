//! The fully-resolved style record for one element.

use std::collections::BTreeMap;

use crate::parser::declarations::EffectSet;

/// The single, fully-resolved style record for one themable element
/// after precedence resolution.
///
/// Declarations are keyed by CSS property name in a stable order, so
/// resolving the same inputs twice yields byte-identical output. Effect
/// flags parsed out of custom style text are carried separately; they
/// classify an animated background and never become style declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectiveStyle {
    pub declarations: BTreeMap<String, String>,
    pub effects: EffectSet,
}

impl EffectiveStyle {
    /// The resolved value for a CSS property, if the cascade produced one.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.effects.is_empty()
    }

    pub(crate) fn set(&mut self, property: &str, value: impl Into<String>) {
        self.declarations.insert(property.to_string(), value.into());
    }
}
