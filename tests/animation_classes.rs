//! Classification of effect flags into animated-background tokens.

use hearthcss::parser::animation::{animation_classes, classify};
use hearthcss::parser::parse;

#[test]
fn test_flag_with_speed_yields_two_tokens() {
    let map = parse("matrix-rain: true; matrix-rain-speed: fast;");
    assert_eq!(classify(&map), vec!["matrix-rain-bg", "matrix-rain-fast"]);
}

#[test]
fn test_flag_without_variant_yields_base_token() {
    let map = parse("scanlines: true;");
    assert_eq!(classify(&map), vec!["scanlines-bg"]);
}

#[test]
fn test_order_is_canonical_not_insertion() {
    let forward = parse("matrix-rain: true; flicker: true; particles: true;");
    let backward = parse("flicker: true; particles: true; matrix-rain: true;");

    let expected = vec!["matrix-rain-bg", "particles-bg", "flicker-bg"];
    assert_eq!(classify(&forward), expected);
    assert_eq!(classify(&backward), expected);
}

#[test]
fn test_all_speed_levels_are_recognized() {
    for level in ["slow", "normal", "fast"] {
        let map = parse(&format!("particles: true; particles-speed: {level};"));
        assert_eq!(
            classify(&map),
            vec!["particles-bg".to_string(), format!("particles-{level}")]
        );
    }
}

#[test]
fn test_variant_without_flag_contributes_nothing() {
    // The owning flag was never set; the variant alone classifies as nothing.
    let map = parse("matrix-rain-speed: fast;");
    assert!(animation_classes(&map.effects).is_empty());
}
