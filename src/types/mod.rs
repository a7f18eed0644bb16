//! Core types: colors, elements, palettes, theme documents, and the
//! resolved style record.

pub mod color;
pub mod config;
pub mod effective;
pub mod element;
pub mod palette;

pub use color::apply_opacity;
pub use config::{ElementStyleSpec, Gradient, LegacySection, ThemeConfiguration};
pub use effective::EffectiveStyle;
pub use element::{Route, ThemableElement};
pub use palette::{ColorMode, Palette, PaletteRole};
