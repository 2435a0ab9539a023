//! Light/dark palette tokens.
//!
//! Every page derives its inline styles from one `Theme` value resolved
//! from the shared `light_mode` signal. Tokens are static hex strings so
//! `Theme` is `Copy` and cheap to pass into closures.

/// Resolved palette for one theme mode.
#[derive(Clone, Copy, PartialEq)]
pub struct Theme {
    /// Page background behind panels
    pub page_bg: &'static str,
    /// Shell chrome background (navbar, overlays)
    pub nav_bg: &'static str,
    /// Main panel background
    pub panel_bg: &'static str,
    /// Main panel border
    pub panel_border: &'static str,
    /// Inner card background (stat cards, settings sub-panels)
    pub card_bg: &'static str,
    /// Inner card border
    pub card_border: &'static str,
    /// Form control background
    pub input_bg: &'static str,
    /// Form control border
    pub input_border: &'static str,
    /// Headings and emphasized values
    pub heading: &'static str,
    /// Body text
    pub text: &'static str,
    /// Secondary text
    pub text_muted: &'static str,
    /// Tertiary text (table headers, footnotes)
    pub text_faint: &'static str,
    /// Brand accent (links, active nav, focus)
    pub accent: &'static str,
    /// Translucent accent fill behind active elements
    pub accent_bg: &'static str,
    /// Destructive actions and error text
    pub danger: &'static str,
    /// Chart gridlines
    pub grid: &'static str,
    /// Chart axis labels
    pub axis: &'static str,
    /// Alternating table row fill
    pub row_alt: &'static str,
    /// Hairline separators inside panels
    pub divider: &'static str,
}

pub const DARK: Theme = Theme {
    page_bg: "#0d1117",
    nav_bg: "#141824",
    panel_bg: "#161b27",
    panel_border: "#252d3d",
    card_bg: "#1e2538",
    card_border: "#2a2f42",
    input_bg: "#101623",
    input_border: "#2a2f42",
    heading: "#ffffff",
    text: "#f3f4f6",
    text_muted: "#9ca3af",
    text_faint: "#6b7280",
    accent: "#22d3ee",
    accent_bg: "rgba(34,211,238,0.1)",
    danger: "#f87171",
    grid: "#1e2535",
    axis: "#9ca3af",
    row_alt: "rgba(255,255,255,0.02)",
    divider: "#1e2535",
};

pub const LIGHT: Theme = Theme {
    page_bg: "#ffffff",
    nav_bg: "#ffffff",
    panel_bg: "#ffffff",
    panel_border: "#e5e7eb",
    card_bg: "#f9fafb",
    card_border: "#e5e7eb",
    input_bg: "#ffffff",
    input_border: "#d1d5db",
    heading: "#1f2937",
    text: "#111827",
    text_muted: "#6b7280",
    text_faint: "#9ca3af",
    accent: "#2563eb",
    accent_bg: "#eff6ff",
    danger: "#dc2626",
    grid: "#e5e7eb",
    axis: "#6b7280",
    row_alt: "#f9fafb",
    divider: "#e5e7eb",
};

impl Theme {
    /// Palette for the given mode flag.
    pub fn from_mode(light: bool) -> Self {
        if light {
            LIGHT
        } else {
            DARK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_resolve_to_distinct_palettes() {
        let dark = Theme::from_mode(false);
        let light = Theme::from_mode(true);
        assert_eq!(dark.accent, "#22d3ee");
        assert_eq!(light.accent, "#2563eb");
        assert_ne!(dark.page_bg, light.page_bg);
    }
}
