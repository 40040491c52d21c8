//! Theme colors and root font size, read from the page once per refresh and
//! handed to the chart builders.

/// CSS custom properties holding the seven theme colors, in palette order.
pub const PALETTE_VARS: [&str; 7] = [
    "--color-primary",
    "--color-secondary",
    "--color-tertiary",
    "--color-quaternary",
    "--color-quinary",
    "--color-senary",
    "--color-septenary",
];

/// Used when a custom property is unset.
const FALLBACK_PALETTE: [&str; 7] = [
    "#1f4e79", "#c55a11", "#548235", "#bf9000", "#7030a0", "#2e75b6", "#0f7b6c",
];

/// Browser default root font size.
pub const DEFAULT_ROOT_FONT_PX: f64 = 16.0;

/// Alpha suffix for line chart fills (~40% opacity).
pub const LINE_FILL_ALPHA: &str = "66";
/// Alpha suffix for bar fills (~56% opacity).
pub const BAR_FILL_ALPHA: &str = "90";

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    palette: [String; 7],
    root_font_px: f64,
}

impl Theme {
    pub fn new(palette: [String; 7], root_font_px: f64) -> Self {
        Self {
            palette,
            root_font_px,
        }
    }

    /// Build a theme from a custom-property lookup. Empty or missing values
    /// fall back to the built-in palette, a missing font size to 16px.
    pub fn from_lookup<F>(lookup: F, root_font_px: Option<f64>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let palette = std::array::from_fn(|i| {
            lookup(PALETTE_VARS[i])
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| FALLBACK_PALETTE[i].to_string())
        });
        let root_font_px = root_font_px
            .filter(|px| px.is_finite() && *px > 0.0)
            .unwrap_or(DEFAULT_ROOT_FONT_PX);
        Self::new(palette, root_font_px)
    }

    /// Palette color by index, wrapping past the seventh.
    pub fn color(&self, index: usize) -> &str {
        &self.palette[index % self.palette.len()]
    }

    /// The line chart color.
    pub fn septenary(&self) -> &str {
        self.color(6)
    }

    /// The first `count` palette colors.
    pub fn leading(&self, count: usize) -> &[String] {
        &self.palette[..count.min(self.palette.len())]
    }

    pub fn root_font_px(&self) -> f64 {
        self.root_font_px
    }

    pub fn rem_to_px(&self, rem: f64) -> f64 {
        rem * self.root_font_px
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_lookup(|_| None, None)
    }
}

/// Append a hex alpha suffix to a `#rrggbb` color.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    format!("{color}{alpha}")
}

/// Parse a computed font size such as `"16px"` or `"18.5px"`. Leading
/// numeric text is used, the unit is ignored.
pub fn parse_font_size(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
