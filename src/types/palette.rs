//! Semantic color palettes.
//!
//! A theme carries one light and one dark palette. Each palette is a
//! fixed set of named semantic colors; accent-like roles come with a
//! paired foreground counterpart so text placed on them stays legible.
//! Every field is optional in the document; a missing color falls back
//! to the hard-coded default for the active mode, mirroring how the
//! cascade treats missing element fields.

use serde::{Deserialize, Serialize};

/// Light or dark rendering mode, chosen by the hosting application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// One semantic slot in a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteRole {
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,
    Background,
    Foreground,
    Card,
    CardForeground,
    Muted,
    MutedForeground,
    Border,
    Destructive,
    DestructiveForeground,
    Success,
    SuccessForeground,
    Warning,
    WarningForeground,
}

impl PaletteRole {
    pub const ALL: [PaletteRole; 19] = [
        PaletteRole::Primary,
        PaletteRole::PrimaryForeground,
        PaletteRole::Secondary,
        PaletteRole::SecondaryForeground,
        PaletteRole::Accent,
        PaletteRole::AccentForeground,
        PaletteRole::Background,
        PaletteRole::Foreground,
        PaletteRole::Card,
        PaletteRole::CardForeground,
        PaletteRole::Muted,
        PaletteRole::MutedForeground,
        PaletteRole::Border,
        PaletteRole::Destructive,
        PaletteRole::DestructiveForeground,
        PaletteRole::Success,
        PaletteRole::SuccessForeground,
        PaletteRole::Warning,
        PaletteRole::WarningForeground,
    ];

    /// The role's kebab-case name as emitted in `--color-*` variables.
    pub fn name(&self) -> &'static str {
        match self {
            PaletteRole::Primary => "primary",
            PaletteRole::PrimaryForeground => "primary-foreground",
            PaletteRole::Secondary => "secondary",
            PaletteRole::SecondaryForeground => "secondary-foreground",
            PaletteRole::Accent => "accent",
            PaletteRole::AccentForeground => "accent-foreground",
            PaletteRole::Background => "background",
            PaletteRole::Foreground => "foreground",
            PaletteRole::Card => "card",
            PaletteRole::CardForeground => "card-foreground",
            PaletteRole::Muted => "muted",
            PaletteRole::MutedForeground => "muted-foreground",
            PaletteRole::Border => "border",
            PaletteRole::Destructive => "destructive",
            PaletteRole::DestructiveForeground => "destructive-foreground",
            PaletteRole::Success => "success",
            PaletteRole::SuccessForeground => "success-foreground",
            PaletteRole::Warning => "warning",
            PaletteRole::WarningForeground => "warning-foreground",
        }
    }

    /// The built-in default for this role in the given mode.
    pub fn default_color(&self, mode: ColorMode) -> &'static str {
        match mode {
            ColorMode::Light => match self {
                PaletteRole::Primary => "#2563eb",
                PaletteRole::PrimaryForeground => "#f8fafc",
                PaletteRole::Secondary => "#e2e8f0",
                PaletteRole::SecondaryForeground => "#1e293b",
                PaletteRole::Accent => "#0ea5e9",
                PaletteRole::AccentForeground => "#f0f9ff",
                PaletteRole::Background => "#f8fafc",
                PaletteRole::Foreground => "#0f172a",
                PaletteRole::Card => "#ffffff",
                PaletteRole::CardForeground => "#0f172a",
                PaletteRole::Muted => "#f1f5f9",
                PaletteRole::MutedForeground => "#64748b",
                PaletteRole::Border => "#e2e8f0",
                PaletteRole::Destructive => "#dc2626",
                PaletteRole::DestructiveForeground => "#fef2f2",
                PaletteRole::Success => "#16a34a",
                PaletteRole::SuccessForeground => "#f0fdf4",
                PaletteRole::Warning => "#d97706",
                PaletteRole::WarningForeground => "#fffbeb",
            },
            ColorMode::Dark => match self {
                PaletteRole::Primary => "#3b82f6",
                PaletteRole::PrimaryForeground => "#0b1120",
                PaletteRole::Secondary => "#334155",
                PaletteRole::SecondaryForeground => "#e2e8f0",
                PaletteRole::Accent => "#38bdf8",
                PaletteRole::AccentForeground => "#082f49",
                PaletteRole::Background => "#0b1120",
                PaletteRole::Foreground => "#e2e8f0",
                PaletteRole::Card => "#1e293b",
                PaletteRole::CardForeground => "#e2e8f0",
                PaletteRole::Muted => "#1e293b",
                PaletteRole::MutedForeground => "#94a3b8",
                PaletteRole::Border => "#334155",
                PaletteRole::Destructive => "#ef4444",
                PaletteRole::DestructiveForeground => "#450a0a",
                PaletteRole::Success => "#22c55e",
                PaletteRole::SuccessForeground => "#052e16",
                PaletteRole::Warning => "#f59e0b",
                PaletteRole::WarningForeground => "#451a03",
            },
        }
    }
}

/// A fixed set of semantic colors for one rendering mode.
///
/// Values are kept as strings: themes may use hex, `rgb()`, named
/// colors, or whatever else the presentation layer accepts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub primary: Option<String>,
    pub primary_foreground: Option<String>,
    pub secondary: Option<String>,
    pub secondary_foreground: Option<String>,
    pub accent: Option<String>,
    pub accent_foreground: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub card: Option<String>,
    pub card_foreground: Option<String>,
    pub muted: Option<String>,
    pub muted_foreground: Option<String>,
    pub border: Option<String>,
    pub destructive: Option<String>,
    pub destructive_foreground: Option<String>,
    pub success: Option<String>,
    pub success_foreground: Option<String>,
    pub warning: Option<String>,
    pub warning_foreground: Option<String>,
}

impl Palette {
    /// The configured color for a role, if the theme set one.
    pub fn get(&self, role: PaletteRole) -> Option<&String> {
        match role {
            PaletteRole::Primary => self.primary.as_ref(),
            PaletteRole::PrimaryForeground => self.primary_foreground.as_ref(),
            PaletteRole::Secondary => self.secondary.as_ref(),
            PaletteRole::SecondaryForeground => self.secondary_foreground.as_ref(),
            PaletteRole::Accent => self.accent.as_ref(),
            PaletteRole::AccentForeground => self.accent_foreground.as_ref(),
            PaletteRole::Background => self.background.as_ref(),
            PaletteRole::Foreground => self.foreground.as_ref(),
            PaletteRole::Card => self.card.as_ref(),
            PaletteRole::CardForeground => self.card_foreground.as_ref(),
            PaletteRole::Muted => self.muted.as_ref(),
            PaletteRole::MutedForeground => self.muted_foreground.as_ref(),
            PaletteRole::Border => self.border.as_ref(),
            PaletteRole::Destructive => self.destructive.as_ref(),
            PaletteRole::DestructiveForeground => self.destructive_foreground.as_ref(),
            PaletteRole::Success => self.success.as_ref(),
            PaletteRole::SuccessForeground => self.success_foreground.as_ref(),
            PaletteRole::Warning => self.warning.as_ref(),
            PaletteRole::WarningForeground => self.warning_foreground.as_ref(),
        }
    }

    /// The effective color for a role: the configured value, or the
    /// built-in default for the given mode.
    pub fn color(&self, role: PaletteRole, mode: ColorMode) -> String {
        self.get(role)
            .cloned()
            .unwrap_or_else(|| role.default_color(mode).to_string())
    }
}
