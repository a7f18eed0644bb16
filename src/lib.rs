//! # hearthcss
//!
//! The theming engine of the Hearth household dashboard.
//!
//! Themes are layered: legacy per-section fields, newer per-element
//! override maps, route-specific versus global entries, and free-form
//! custom style text all compete to style the same elements. This crate
//! resolves that layering into one flat set of effective style values
//! per element and keeps a live presentation target in sync:
//!
//! - **Cascade**: [`resolve`] walks the precedence chain and produces an
//!   [`EffectiveStyle`](types::EffectiveStyle) per element
//! - **Custom style text**: [`parser::parse`] / [`parser::serialize`]
//!   handle the declaration micro-language, [`parser::effects`] composes
//!   and retracts effect presets, [`parser::animation`] classifies
//!   effect flags into renderer tokens
//! - **Colors**: [`types::apply_opacity`] bakes background opacity into
//!   individual color values
//! - **Synchronization**: [`sync::synchronize`] diffs each pass against
//!   the previous one and clears stale variables from the target
//!
//! ## Quick Start
//!
//! ```rust
//! use hearthcss::sync::{self, InMemoryTarget, SyncSnapshot, VariableTable};
//! use hearthcss::types::{ColorMode, ThemableElement, ThemeConfiguration};
//! use hearthcss::{RenderContext, resolve};
//!
//! let config = ThemeConfiguration::from_json(r##"{
//!     "elements": {
//!         "card": { "backgroundColor": "#1e293b", "borderRadius": "12px" }
//!     }
//! }"##).unwrap();
//!
//! let ctx = RenderContext::new(ColorMode::Dark);
//! let card = resolve(&config, ThemableElement::Card, &ctx);
//! assert_eq!(card.get("background-color"), Some("#1e293b"));
//!
//! let table = VariableTable::from_styles(&[("card", &card)]);
//! let mut target = InMemoryTarget::new();
//! let mut snapshot = SyncSnapshot::new();
//! sync::synchronize(&mut snapshot, &mut target, &table);
//! assert_eq!(target.get("--card-border-radius"), Some("12px"));
//! ```
//!
//! Resolution is pure and reentrant; only [`sync::synchronize`] mutates
//! state, and that state is an explicit caller-owned snapshot. Nothing
//! in this crate renders, fetches, or persists anything.

pub mod error;
pub mod parser;
pub mod sync;
pub mod types;

pub use error::ThemeError;
pub use parser::cascade::{
    AssetLocator, PassthroughLocator, RenderContext, resolve, resolve_named, resolve_with_locator,
};
