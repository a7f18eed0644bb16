//! Incremental variable synchronization against an in-memory target.

use hearthcss::sync::{InMemoryTarget, SyncSnapshot, VariableTable, synchronize};
use hearthcss::types::{ColorMode, Palette, ThemableElement, ThemeConfiguration};
use hearthcss::{RenderContext, resolve};

fn resolved_table(json: &str, pairs: &[ThemableElement]) -> VariableTable {
    let config = ThemeConfiguration::from_json(json).unwrap();
    let ctx = RenderContext::new(ColorMode::Light);
    let styles: Vec<_> = pairs
        .iter()
        .map(|&element| (element, resolve(&config, element, &ctx)))
        .collect();
    let named: Vec<(&str, _)> = styles
        .iter()
        .map(|(element, style)| (element.name(), style))
        .collect();
    VariableTable::from_styles(&named)
}

#[test]
fn test_variables_are_namespaced_per_element() {
    let table = resolved_table(
        r##"{
            "elements": {
                "card": { "backgroundColor": "#111111", "borderRadius": "8px" },
                "widget": { "backgroundColor": "#222222" }
            }
        }"##,
        &[ThemableElement::Card, ThemableElement::Widget],
    );

    let mut target = InMemoryTarget::new();
    let mut snapshot = SyncSnapshot::new();
    synchronize(&mut snapshot, &mut target, &table);

    assert_eq!(target.get("--card-background-color"), Some("#111111"));
    assert_eq!(target.get("--card-border-radius"), Some("8px"));
    assert_eq!(target.get("--widget-background-color"), Some("#222222"));
}

#[test]
fn test_stale_variables_are_cleared() {
    let before = resolved_table(
        r##"{ "elements": { "card": { "backgroundColor": "#111111", "borderRadius": "8px" } } }"##,
        &[ThemableElement::Card],
    );
    let after = resolved_table(
        r##"{ "elements": { "card": { "backgroundColor": "#333333" } } }"##,
        &[ThemableElement::Card],
    );

    let mut target = InMemoryTarget::new();
    let mut snapshot = SyncSnapshot::new();

    synchronize(&mut snapshot, &mut target, &before);
    assert_eq!(target.get("--card-border-radius"), Some("8px"));

    synchronize(&mut snapshot, &mut target, &after);
    assert_eq!(target.get("--card-background-color"), Some("#333333"));
    assert_eq!(target.get("--card-border-radius"), None);
}

#[test]
fn test_synchronize_is_idempotent() {
    let table = resolved_table(
        r##"{ "elements": { "sidebar": { "backgroundColor": "#123456" } } }"##,
        &[ThemableElement::Sidebar],
    );

    let mut target = InMemoryTarget::new();
    let mut snapshot = SyncSnapshot::new();

    synchronize(&mut snapshot, &mut target, &table);
    let first = target.clone();
    synchronize(&mut snapshot, &mut target, &table);
    assert_eq!(target, first);
}

#[test]
fn test_empty_table_clears_everything_previously_applied() {
    let table = resolved_table(
        r##"{ "elements": { "card": { "backgroundColor": "#111111" } } }"##,
        &[ThemableElement::Card],
    );

    let mut target = InMemoryTarget::new();
    let mut snapshot = SyncSnapshot::new();
    synchronize(&mut snapshot, &mut target, &table);
    assert!(!target.is_empty());

    synchronize(&mut snapshot, &mut target, &VariableTable::new());
    assert!(target.is_empty());
    assert!(snapshot.is_empty());
}

#[test]
fn test_snapshot_tracks_only_its_own_target() {
    let table = resolved_table(
        r##"{ "elements": { "card": { "backgroundColor": "#111111" } } }"##,
        &[ThemableElement::Card],
    );

    let mut target_a = InMemoryTarget::new();
    let mut target_b = InMemoryTarget::new();
    let mut snapshot_a = SyncSnapshot::new();
    let mut snapshot_b = SyncSnapshot::new();

    synchronize(&mut snapshot_a, &mut target_a, &table);
    synchronize(&mut snapshot_b, &mut target_b, &VariableTable::new());

    // The second synchronizer never applied anything, so it clears
    // nothing; the first target keeps its variables.
    assert!(!target_a.is_empty());
    assert!(target_b.is_empty());
}

#[test]
fn test_palette_emits_color_namespace() {
    let mut table = VariableTable::new();
    table.push_palette(&Palette::default(), ColorMode::Dark);

    let mut target = InMemoryTarget::new();
    let mut snapshot = SyncSnapshot::new();
    synchronize(&mut snapshot, &mut target, &table);

    assert_eq!(target.get("--color-primary"), Some("#3b82f6"));
    assert_eq!(target.get("--color-card-foreground"), Some("#e2e8f0"));
    assert_eq!(target.len(), 19);
}

#[test]
fn test_mode_switch_overwrites_palette_in_place() {
    let mut target = InMemoryTarget::new();
    let mut snapshot = SyncSnapshot::new();

    let mut light = VariableTable::new();
    light.push_palette(&Palette::default(), ColorMode::Light);
    synchronize(&mut snapshot, &mut target, &light);
    assert_eq!(target.get("--color-background"), Some("#f8fafc"));

    let mut dark = VariableTable::new();
    dark.push_palette(&Palette::default(), ColorMode::Dark);
    synchronize(&mut snapshot, &mut target, &dark);
    assert_eq!(target.get("--color-background"), Some("#0b1120"));
    assert_eq!(target.len(), 19);
}
