use field_core::{Rgb, Rgba, Theme};

/// CSS `rgba()` string for canvas fill/stroke/shadow styles.
pub fn rgba(c: Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        c.rgb.r, c.rgb.g, c.rgb.b, c.alpha
    )
}

pub fn hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Value of the root `data-theme` attribute; `None` means remove it.
pub fn document_theme_value(theme: Theme) -> Option<&'static str> {
    match theme {
        Theme::Default => None,
        Theme::Red => Some(theme.name()),
    }
}

/// Shortest CSS form: hex when opaque, `rgba()` otherwise.
pub fn css(c: Rgba) -> String {
    if c.alpha >= 1.0 {
        hex(c.rgb)
    } else {
        rgba(c)
    }
}

/// `shadowBlur` is in device pixels and ignores the context transform.
pub fn shadow_blur_px(blur: f32, dpr: f64) -> f64 {
    blur as f64 * dpr
}
