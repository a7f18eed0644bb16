//! Incremental synchronization of resolved styles onto a live target.
//!
//! Every resolution pass flattens its effective styles into one
//! [`VariableTable`], a flat namespaced key/value map, and applies
//! it through a [`StyleTarget`]. The synchronizer keeps an explicit
//! [`SyncSnapshot`] of the keys applied on the previous pass so that a
//! property unset in the theme is actually cleared from the target;
//! leaving it behind would visually leak the old style.
//!
//! The snapshot is owned by the caller and threaded through explicitly,
//! so independent synchronizers (one per window, one per test) can
//! coexist without shared state.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::types::effective::EffectiveStyle;
use crate::types::palette::{ColorMode, Palette, PaletteRole};

/// The live presentation target style variables are written to.
///
/// The hosting application implements this against its rendering layer;
/// [`InMemoryTarget`] is the reference implementation used in tests.
pub trait StyleTarget {
    fn set_variable(&mut self, name: &str, value: &str);
    fn remove_variable(&mut self, name: &str);
}

/// A plain map-backed [`StyleTarget`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InMemoryTarget {
    variables: BTreeMap<String, String>,
}

impl InMemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl StyleTarget for InMemoryTarget {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    fn remove_variable(&mut self, name: &str) {
        self.variables.remove(name);
    }
}

/// One resolution pass's flat variable table.
///
/// Keys are `--<namespace>-<property>`; the namespace is the owning
/// element's name, so no two elements can write the same key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariableTable {
    entries: BTreeMap<String, String>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(namespace, style)` pairs.
    pub fn from_styles(styles: &[(&str, &EffectiveStyle)]) -> Self {
        let mut table = Self::new();
        for (namespace, style) in styles {
            table.push_style(namespace, style);
        }
        table
    }

    /// Adds one element's declarations under its namespace. Absent
    /// attributes contribute no key; there is no explicit unset marker.
    pub fn push_style(&mut self, namespace: &str, style: &EffectiveStyle) {
        for (property, value) in &style.declarations {
            self.entries
                .insert(format!("--{namespace}-{property}"), value.clone());
        }
    }

    /// Adds the base palette under the `color` namespace
    /// (`--color-primary`, `--color-card-foreground`, ...).
    pub fn push_palette(&mut self, palette: &Palette, mode: ColorMode) {
        for role in PaletteRole::ALL {
            self.entries
                .insert(format!("--color-{}", role.name()), palette.color(role, mode));
        }
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The set of variable names applied on the previous synchronization
/// pass. Created empty, replaced wholesale after each pass.
#[derive(Clone, Debug, Default)]
pub struct SyncSnapshot {
    applied: BTreeSet<String>,
}

impl SyncSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> &BTreeSet<String> {
        &self.applied
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Applies a variable table to the target and clears stale variables.
///
/// Every current key is written unconditionally, without value
/// diffing, and only then are keys
/// from the previous pass that vanished removed, so the target never
/// shows an unstyled gap in between. Calls must be serialized per
/// snapshot; resolution itself carries no such restriction.
pub fn synchronize(
    snapshot: &mut SyncSnapshot,
    target: &mut dyn StyleTarget,
    table: &VariableTable,
) {
    for (name, value) in &table.entries {
        target.set_variable(name, value);
    }

    let current: BTreeSet<String> = table.entries.keys().cloned().collect();
    let stale: Vec<&String> = snapshot.applied.difference(&current).collect();
    if !stale.is_empty() {
        debug!("clearing {} stale theme variables", stale.len());
    }
    for name in stale {
        target.remove_variable(name);
    }

    snapshot.applied = current;
}
