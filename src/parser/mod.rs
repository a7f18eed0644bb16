//! The custom style micro-language and everything built on it.
//!
//! Themes attach free-form style text to elements: a semicolon-delimited
//! list of `property: value` declarations, optionally containing
//! `/* */` comments and the closed set of effect-flag pseudo-properties.
//!
//! - [`parse`] / [`serialize`]: text ↔ [`DeclarationMap`]
//! - [`effects`]: preset composition (merge) and retraction (remove)
//! - [`animation`]: flag set → classification tokens
//! - [`cascade`]: the style precedence resolver
//!
//! ## Grammar
//!
//! Comments are stripped, the text is split on `;`, and each segment is
//! parsed as an identifier, a `:`, and a value running to the end of the
//! segment. Segments that don't fit (missing colon, empty property or
//! value) are skipped: custom text is hand-written and a bad line must
//! never take the rest of the theme down with it.
//!
//! ## Example
//!
//! ```rust
//! use hearthcss::parser::parse;
//!
//! let map = parse("color: #fff; matrix-rain: true; matrix-rain-speed: fast;");
//! assert_eq!(map.properties.get("color").map(String::as_str), Some("#fff"));
//! assert!(map.effects.flags.contains(hearthcss::parser::EffectFlags::MATRIX_RAIN));
//! ```

pub mod animation;
pub mod cascade;
pub mod declarations;
pub mod effects;

pub use declarations::{DeclarationMap, EffectFlags, EffectSet};

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    sequence::tuple,
};

use crate::parser::declarations::{FLAG_NAMES, flag_for, variant_owner};

/// Parses custom style text into a [`DeclarationMap`].
///
/// Never fails: malformed segments are skipped and unknown input
/// degrades to an empty or partial map.
pub fn parse(text: &str) -> DeclarationMap {
    let clean = strip_comments(text);
    let mut map = DeclarationMap::new();

    for segment in clean.split(';') {
        let Ok((_, (name, value))) = parse_segment(segment) else {
            continue;
        };
        record(&mut map, name, value);
    }

    map
}

/// Serializes a [`DeclarationMap`] back to declaration text.
///
/// Entries come out in stable order: literal properties, then flags in
/// canonical order (rendered as `flag: true`), then variants, each
/// terminated by `;`. `parse(serialize(m))` reproduces `m` for any map
/// of well-formed entries.
pub fn serialize(map: &DeclarationMap) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (property, value) in &map.properties {
        parts.push(format!("{property}: {value};"));
    }
    for (name, flag) in FLAG_NAMES {
        if map.effects.flags.contains(flag) {
            parts.push(format!("{name}: true;"));
        }
    }
    for (name, value) in &map.effects.variants {
        parts.push(format!("{name}: {value};"));
    }

    parts.join(" ")
}

/// Routes one parsed declaration into the right part of the map.
fn record(map: &mut DeclarationMap, name: &str, value: &str) {
    if let Some(flag) = flag_for(name) {
        // A flag declared with anything but `true` is dropped entirely;
        // it is recognized, so it must not leak into the literals.
        if value == "true" {
            map.effects.flags |= flag;
        }
        return;
    }
    if variant_owner(name).is_some() {
        map.effects
            .variants
            .insert(name.to_string(), value.to_string());
        return;
    }
    map.properties.insert(name.to_string(), value.to_string());
}

/// Parses one `property: value` segment. The value is the trimmed
/// remainder of the segment, so it may itself contain colons
/// (e.g. `url(https://...)`).
fn parse_segment(segment: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = multispace0(segment)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;

    let value = input.trim();
    if value.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Verify,
        )));
    }

    Ok(("", (name, value)))
}

/// Parses a property identifier (alphanumerics, dashes, underscores).
fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Strips `/* ... */` block comments. An unterminated comment runs to
/// the end of the text.
fn strip_comments(source: &str) -> String {
    let mut clean = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
            continue;
        }
        clean.push(c);
    }
    clean
}
