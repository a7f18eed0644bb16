//! Style precedence resolution.
//!
//! This module turns a theme configuration plus a rendering context into
//! one [`EffectiveStyle`] per element. The precedence chain, highest to
//! lowest, evaluated independently per attribute group:
//!
//! 1. A route-specific override, when the element is a page background
//!    and the active route's entry carries a background-defining field
//! 2. The element's own new-layer entry
//! 3. The legacy per-section block, if the new layer is silent on the group
//! 4. The hard-coded palette fallback for the active mode
//!
//! Inside a winning layer the background resolves gradient over image
//! over solid color; an image still gets a solid paint fallback for the
//! time before it loads. Background opacity below 1 is baked into every
//! resolved color (gradient endpoints included) rather than applied to
//! the element, which would also fade descendant content.
//!
//! Custom style text on the winning layer parses last and overrides the
//! structured result by CSS property name; hand-written text is the
//! most intentional override available.
//!
//! Resolution is a pure function of its inputs and never fails: an
//! element name outside the catalog yields the palette fallback, since
//! this runs on every render and one bad identifier must not blank the
//! screen.

use log::{debug, trace};

use crate::parser;
use crate::types::color::{apply_opacity, fmt_number};
use crate::types::config::{ElementStyleSpec, ThemeConfiguration};
use crate::types::effective::EffectiveStyle;
use crate::types::element::{Route, ThemableElement};
use crate::types::palette::{ColorMode, Palette, PaletteRole};

/// Turns a possibly-relative image reference into a fully qualified
/// locator string. Resolution policy belongs to the host; this crate
/// only threads the strings through.
pub trait AssetLocator {
    fn resolve_url(&self, reference: &str) -> String;
}

/// The default locator: references pass through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughLocator;

impl AssetLocator for PassthroughLocator {
    fn resolve_url(&self, reference: &str) -> String {
        reference.to_string()
    }
}

/// What the hosting application knows about the current render pass.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    pub mode: ColorMode,
    pub route: Option<Route>,
}

impl RenderContext {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode, route: None }
    }

    pub fn with_route(mode: ColorMode, route: Route) -> Self {
        Self {
            mode,
            route: Some(route),
        }
    }
}

/// Resolves the effective style for one element.
pub fn resolve(
    config: &ThemeConfiguration,
    element: ThemableElement,
    ctx: &RenderContext,
) -> EffectiveStyle {
    resolve_with_locator(config, element, ctx, &PassthroughLocator)
}

/// Resolves an element addressed by name. Names outside the catalog
/// yield the palette-derived fallback rather than an error.
pub fn resolve_named(
    config: &ThemeConfiguration,
    name: &str,
    ctx: &RenderContext,
) -> EffectiveStyle {
    match ThemableElement::from_name(name) {
        Some(element) => resolve(config, element, ctx),
        None => {
            debug!("unknown themable element {name:?}, using palette fallback");
            palette_fallback(config, ctx)
        }
    }
}

/// [`resolve`] with an explicit asset locator for image references.
pub fn resolve_with_locator(
    config: &ThemeConfiguration,
    element: ThemableElement,
    ctx: &RenderContext,
    locator: &dyn AssetLocator,
) -> EffectiveStyle {
    let palette = active_palette(config, ctx);
    let legacy: Option<ElementStyleSpec> = config.legacy_for(element).map(ElementStyleSpec::from);

    // Build the layer chain, highest precedence first.
    let mut layers: Vec<&ElementStyleSpec> = Vec::new();

    if element == ThemableElement::PageBackground {
        if let Some(route) = ctx.route {
            if let Some(spec) = config.element(ThemableElement::RouteBackground(route)) {
                if spec.has_background() {
                    trace!("route {} overrides the page background", route.name());
                    layers.push(spec);
                }
            }
        }
    }

    if let Some(spec) = config.element(element) {
        layers.push(spec);
    }

    // A route variant resolved directly falls back to its global element.
    match element {
        ThemableElement::RouteBackground(_) => {
            if let Some(spec) = config.element(ThemableElement::PageBackground) {
                layers.push(spec);
            }
        }
        ThemableElement::RouteWidget(_) => {
            if let Some(spec) = config.element(ThemableElement::Widget) {
                layers.push(spec);
            }
        }
        _ => {}
    }

    if let Some(ref spec) = legacy {
        layers.push(spec);
    }

    let mut style = EffectiveStyle::default();
    apply_background(&mut style, &layers, palette, element, ctx.mode, locator);
    apply_text(&mut style, &layers, palette, element, ctx.mode);
    apply_border(&mut style, &layers);
    apply_shadow(&mut style, &layers);
    apply_spacing(&mut style, &layers);
    apply_effects(&mut style, &layers);
    apply_custom(&mut style, &layers);
    style
}

fn active_palette<'a>(config: &'a ThemeConfiguration, ctx: &RenderContext) -> &'a Palette {
    match ctx.mode {
        ColorMode::Light => &config.light,
        ColorMode::Dark => &config.dark,
    }
}

/// The palette-only style used when an element name is not in the catalog.
fn palette_fallback(config: &ThemeConfiguration, ctx: &RenderContext) -> EffectiveStyle {
    let palette = active_palette(config, ctx);
    let mut style = EffectiveStyle::default();
    style.set(
        "background-color",
        palette.color(PaletteRole::Background, ctx.mode),
    );
    style.set("color", palette.color(PaletteRole::Foreground, ctx.mode));
    style
}

/// The palette slot an element's background derives from when no layer
/// styles it.
fn background_role(element: ThemableElement) -> PaletteRole {
    match element {
        ThemableElement::PageBackground | ThemableElement::RouteBackground(_) => {
            PaletteRole::Background
        }
        ThemableElement::ButtonPrimary => PaletteRole::Primary,
        ThemableElement::ButtonSecondary => PaletteRole::Secondary,
        _ => PaletteRole::Card,
    }
}

fn foreground_role(element: ThemableElement) -> PaletteRole {
    match element {
        ThemableElement::PageBackground | ThemableElement::RouteBackground(_) => {
            PaletteRole::Foreground
        }
        ThemableElement::ButtonPrimary => PaletteRole::PrimaryForeground,
        ThemableElement::ButtonSecondary => PaletteRole::SecondaryForeground,
        _ => PaletteRole::CardForeground,
    }
}

fn apply_background(
    style: &mut EffectiveStyle,
    layers: &[&ElementStyleSpec],
    palette: &Palette,
    element: ThemableElement,
    mode: ColorMode,
    locator: &dyn AssetLocator,
) {
    let Some(spec) = layers.iter().find(|s| s.has_background()) else {
        style.set(
            "background-color",
            palette.color(background_role(element), mode),
        );
        return;
    };

    let opacity = spec.background_opacity.unwrap_or(1.0);

    if let Some(gradient) = &spec.gradient {
        let from = apply_opacity(&gradient.from, opacity);
        let to = apply_opacity(&gradient.to, opacity);
        let direction = gradient.direction.as_deref().unwrap_or("135deg");
        style.set(
            "background",
            format!("linear-gradient({direction}, {from}, {to})"),
        );
    } else if let Some(image) = &spec.background_image {
        style.set(
            "background-image",
            format!("url({})", locator.resolve_url(image)),
        );
        // Solid paint for the time before the image loads, picked with
        // the same precedence one level down.
        let fallback = spec
            .background_color
            .clone()
            .unwrap_or_else(|| palette.color(background_role(element), mode));
        style.set("background-color", apply_opacity(&fallback, opacity));
    } else if let Some(color) = &spec.background_color {
        style.set("background-color", apply_opacity(color, opacity));
    }
}

fn apply_text(
    style: &mut EffectiveStyle,
    layers: &[&ElementStyleSpec],
    palette: &Palette,
    element: ThemableElement,
    mode: ColorMode,
) {
    let Some(spec) = layers.iter().find(|s| s.has_text()) else {
        style.set("color", palette.color(foreground_role(element), mode));
        return;
    };

    if let Some(color) = &spec.text_color {
        style.set("color", color.clone());
    } else {
        style.set("color", palette.color(foreground_role(element), mode));
    }
    if let Some(size) = &spec.text_size {
        style.set("font-size", size.clone());
    }
    if let Some(weight) = &spec.text_weight {
        style.set("font-weight", weight.clone());
    }
    if let Some(family) = &spec.font_family {
        style.set("font-family", family.clone());
    }
}

fn apply_border(style: &mut EffectiveStyle, layers: &[&ElementStyleSpec]) {
    let Some(spec) = layers.iter().find(|s| s.has_border()) else {
        return;
    };

    if let Some(color) = &spec.border_color {
        style.set("border-color", color.clone());
    }
    if let Some(width) = &spec.border_width {
        style.set("border-width", width.clone());
    }
    if let Some(border_style) = &spec.border_style {
        style.set("border-style", border_style.clone());
    }
    if let Some(radius) = &spec.border_radius {
        style.set("border-radius", radius.clone());
    }
}

fn apply_shadow(style: &mut EffectiveStyle, layers: &[&ElementStyleSpec]) {
    let Some(spec) = layers.iter().find(|s| s.shadow.is_some()) else {
        return;
    };
    if let Some(shadow) = &spec.shadow {
        style.set("box-shadow", shadow_value(shadow));
    }
}

/// Expands a shadow preset to its literal value; anything else passes
/// through as a literal `box-shadow`.
fn shadow_value(raw: &str) -> String {
    match raw {
        "none" => "none".to_string(),
        "sm" => "0 1px 2px rgba(0, 0, 0, 0.05)".to_string(),
        "md" => "0 4px 6px rgba(0, 0, 0, 0.1)".to_string(),
        "lg" => "0 10px 15px rgba(0, 0, 0, 0.1)".to_string(),
        "xl" => "0 20px 25px rgba(0, 0, 0, 0.15)".to_string(),
        literal => literal.to_string(),
    }
}

fn apply_spacing(style: &mut EffectiveStyle, layers: &[&ElementStyleSpec]) {
    let Some(spec) = layers
        .iter()
        .find(|s| s.padding.is_some() || s.margin.is_some())
    else {
        return;
    };

    if let Some(padding) = &spec.padding {
        style.set("padding", padding.clone());
    }
    if let Some(margin) = &spec.margin {
        style.set("margin", margin.clone());
    }
}

fn apply_effects(style: &mut EffectiveStyle, layers: &[&ElementStyleSpec]) {
    let Some(spec) = layers.iter().find(|s| s.has_effects()) else {
        return;
    };

    if let Some(scale) = spec.scale {
        style.set("scale", fmt_number(scale));
    }
    if let Some(rotation) = spec.rotation {
        style.set("rotate", format!("{}deg", fmt_number(rotation)));
    }
    if let Some(skew) = spec.skew_x {
        style.set("skew-x", format!("{}deg", fmt_number(skew)));
    }
    if let Some(skew) = spec.skew_y {
        style.set("skew-y", format!("{}deg", fmt_number(skew)));
    }
    if let Some(saturation) = spec.saturation {
        style.set("saturate", fmt_number(saturation));
    }
    if let Some(grayscale) = spec.grayscale {
        style.set("grayscale", fmt_number(grayscale));
    }
    if let Some(color) = &spec.glow_color {
        style.set("glow-color", color.clone());
    }
    if let Some(size) = &spec.glow_size {
        style.set("glow-size", size.clone());
    }
    if let Some(scale) = spec.hover_scale {
        style.set("hover-scale", fmt_number(scale));
    }
    if let Some(opacity) = spec.hover_opacity {
        style.set("hover-opacity", fmt_number(opacity));
    }
}

fn apply_custom(style: &mut EffectiveStyle, layers: &[&ElementStyleSpec]) {
    let Some(text) = layers.iter().find_map(|s| s.custom_css.as_deref()) else {
        return;
    };

    let parsed = parser::parse(text);
    for (property, value) in parsed.properties {
        style.declarations.insert(property, value);
    }
    style.effects = parsed.effects;
}
