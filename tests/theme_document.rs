//! Portable theme document parsing and serialization.

use hearthcss::types::{
    ColorMode, Palette, PaletteRole, ThemableElement, ThemeConfiguration,
};

#[test]
fn test_empty_document_parses_to_defaults() {
    let config = ThemeConfiguration::from_json("{}").unwrap();
    assert_eq!(config, ThemeConfiguration::default());
    assert!(config.elements.is_empty());
    assert!(config.sidebar.is_none());
}

#[test]
fn test_camel_case_field_names() {
    let config = ThemeConfiguration::from_json(
        r##"{
            "dark": { "cardForeground": "#e0e0e0" },
            "elements": {
                "button-primary": {
                    "backgroundColor": "#111111",
                    "borderRadius": "6px",
                    "hoverScale": 1.05,
                    "customCss": "letter-spacing: 1px;"
                }
            },
            "pageBackground": { "backgroundImage": "wall.png" }
        }"##,
    )
    .unwrap();

    let spec = config.element(ThemableElement::ButtonPrimary).unwrap();
    assert_eq!(spec.background_color.as_deref(), Some("#111111"));
    assert_eq!(spec.border_radius.as_deref(), Some("6px"));
    assert_eq!(spec.hover_scale, Some(1.05));
    assert_eq!(spec.custom_css.as_deref(), Some("letter-spacing: 1px;"));
    assert_eq!(
        config.dark.card_foreground.as_deref(),
        Some("#e0e0e0")
    );
    assert_eq!(
        config
            .page_background
            .as_ref()
            .and_then(|s| s.background_image.as_deref()),
        Some("wall.png")
    );
}

#[test]
fn test_missing_fields_default_to_none() {
    let config = ThemeConfiguration::from_json(
        r##"{ "elements": { "card": { "backgroundColor": "#fff" } } }"##,
    )
    .unwrap();

    let spec = config.element(ThemableElement::Card).unwrap();
    assert!(spec.gradient.is_none());
    assert!(spec.shadow.is_none());
    assert!(spec.custom_css.is_none());
    assert!(spec.has_background());
}

#[test]
fn test_round_trip_preserves_document() {
    let source = r##"{
        "light": { "primary": "#2563eb", "background": "#ffffff" },
        "dark": { "primary": "#3b82f6" },
        "elements": {
            "card": {
                "gradient": { "from": "#ff0000", "to": "#00ff00", "direction": "to right" },
                "backgroundOpacity": 0.75,
                "shadow": "lg"
            },
            "chores-background": { "backgroundColor": "#222222" }
        },
        "sidebar": { "backgroundColor": "#0f172a", "textColor": "#e2e8f0" }
    }"##;

    let config = ThemeConfiguration::from_json(source).unwrap();
    let reparsed = ThemeConfiguration::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(config, reparsed);
}

#[test]
fn test_unknown_element_keys_survive_round_trip() {
    let config = ThemeConfiguration::from_json(
        r##"{ "elements": { "disco-ball": { "backgroundColor": "#ff00ff" } } }"##,
    )
    .unwrap();

    let reparsed = ThemeConfiguration::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(
        reparsed
            .elements
            .get("disco-ball")
            .and_then(|s| s.background_color.as_deref()),
        Some("#ff00ff")
    );
}

#[test]
fn test_malformed_document_is_an_error() {
    assert!(ThemeConfiguration::from_json("not json").is_err());
    assert!(ThemeConfiguration::from_json(r##"{ "elements": [] }"##).is_err());
}

#[test]
fn test_configured_palette_beats_mode_default() {
    let config = ThemeConfiguration::from_json(
        r##"{ "light": { "primary": "#ff0000" } }"##,
    )
    .unwrap();

    assert_eq!(
        config.light.color(PaletteRole::Primary, ColorMode::Light),
        "#ff0000"
    );
    // Roles the theme leaves unset fall back per mode.
    assert_eq!(
        config.dark.color(PaletteRole::Primary, ColorMode::Dark),
        "#3b82f6"
    );
}

#[test]
fn test_palette_serializes_camel_case() {
    let palette = Palette {
        card_foreground: Some("#101010".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_string(&palette).unwrap();
    assert!(json.contains("\"cardForeground\":\"#101010\""));
}
