//! The theme configuration document.
//!
//! A [`ThemeConfiguration`] is the JSON-shaped root object produced by
//! the theme-authoring surface. It carries two style layers that may
//! both be present:
//!
//! - the **new layer**: a map from element name to [`ElementStyleSpec`],
//!   covering the full catalog;
//! - the **legacy layer**: narrower per-section blocks
//!   (sidebar/header/page background) that predate the map.
//!
//! The configuration is treated as immutable input; the cascade decides
//! which layer wins per attribute group. The document is also the
//! portable export/import payload: [`ThemeConfiguration::from_json`]
//! and [`ThemeConfiguration::to_json`] are the only fallible operations
//! in this crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::types::element::ThemableElement;
use crate::types::palette::Palette;

/// A two-endpoint gradient background.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gradient {
    pub from: String,
    pub to: String,
    /// CSS gradient direction (e.g. `135deg`, `to bottom`). Defaults to
    /// `135deg` when absent.
    pub direction: Option<String>,
}

/// The raw, possibly partial, style intent for one themable element.
///
/// Every field is independently optional; absence means "inherit from
/// the next layer", never "reset".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementStyleSpec {
    pub background_color: Option<String>,
    pub gradient: Option<Gradient>,
    /// Possibly-relative image reference; resolved to a full locator by
    /// the host's asset locator, never fetched here.
    pub background_image: Option<String>,
    /// 0–1. Baked into the resolved background colors, not applied to
    /// the element as a whole.
    pub background_opacity: Option<f32>,

    pub text_color: Option<String>,
    pub text_size: Option<String>,
    pub text_weight: Option<String>,
    pub font_family: Option<String>,

    pub border_color: Option<String>,
    pub border_width: Option<String>,
    pub border_style: Option<String>,
    pub border_radius: Option<String>,

    /// Shadow preset (`none`/`sm`/`md`/`lg`/`xl`) or a literal
    /// `box-shadow` value.
    pub shadow: Option<String>,

    pub padding: Option<String>,
    pub margin: Option<String>,

    pub scale: Option<f32>,
    /// Degrees.
    pub rotation: Option<f32>,
    pub skew_x: Option<f32>,
    pub skew_y: Option<f32>,
    pub saturation: Option<f32>,
    pub grayscale: Option<f32>,

    pub glow_color: Option<String>,
    pub glow_size: Option<String>,

    pub hover_scale: Option<f32>,
    pub hover_opacity: Option<f32>,

    /// Free-form custom style text in the declaration micro-language;
    /// applied last, overriding structured fields by property name.
    pub custom_css: Option<String>,
}

impl ElementStyleSpec {
    /// Whether this spec carries any background-defining field. A layer
    /// wins the background group only if this is true.
    pub fn has_background(&self) -> bool {
        self.gradient.is_some()
            || self.background_image.is_some()
            || self.background_color.is_some()
    }

    pub(crate) fn has_text(&self) -> bool {
        self.text_color.is_some()
            || self.text_size.is_some()
            || self.text_weight.is_some()
            || self.font_family.is_some()
    }

    pub(crate) fn has_border(&self) -> bool {
        self.border_color.is_some()
            || self.border_width.is_some()
            || self.border_style.is_some()
            || self.border_radius.is_some()
    }

    pub(crate) fn has_effects(&self) -> bool {
        self.scale.is_some()
            || self.rotation.is_some()
            || self.skew_x.is_some()
            || self.skew_y.is_some()
            || self.saturation.is_some()
            || self.grayscale.is_some()
            || self.glow_color.is_some()
            || self.glow_size.is_some()
            || self.hover_scale.is_some()
            || self.hover_opacity.is_some()
    }
}

/// A legacy per-section style block. Narrower than the element map: no
/// gradients, borders, or effect knobs ever shipped in this shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacySection {
    pub background_color: Option<String>,
    pub background_image: Option<String>,
    pub text_color: Option<String>,
    pub custom_css: Option<String>,
}

impl From<&LegacySection> for ElementStyleSpec {
    fn from(legacy: &LegacySection) -> Self {
        ElementStyleSpec {
            background_color: legacy.background_color.clone(),
            background_image: legacy.background_image.clone(),
            text_color: legacy.text_color.clone(),
            custom_css: legacy.custom_css.clone(),
            ..Default::default()
        }
    }
}

/// The root theme document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfiguration {
    pub light: Palette,
    pub dark: Palette,

    /// New layer: element name → style spec. Unknown keys are carried
    /// through (de)serialization but never matched by the cascade.
    pub elements: BTreeMap<String, ElementStyleSpec>,

    /// Legacy layer.
    pub sidebar: Option<LegacySection>,
    pub header: Option<LegacySection>,
    pub page_background: Option<LegacySection>,
}

impl ThemeConfiguration {
    /// Parses a portable theme document.
    pub fn from_json(text: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes this theme as a portable document.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The new-layer entry for an element, if the theme has one.
    pub fn element(&self, element: ThemableElement) -> Option<&ElementStyleSpec> {
        self.elements.get(element.name())
    }

    /// The legacy section that corresponds to an element. Only the
    /// sections that existed before the element map have one.
    pub(crate) fn legacy_for(&self, element: ThemableElement) -> Option<&LegacySection> {
        match element {
            ThemableElement::Sidebar => self.sidebar.as_ref(),
            ThemableElement::Header => self.header.as_ref(),
            ThemableElement::PageBackground | ThemableElement::RouteBackground(_) => {
                self.page_background.as_ref()
            }
            _ => None,
        }
    }
}
