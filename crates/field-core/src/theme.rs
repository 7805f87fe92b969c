//! Named colour palettes for the particle field.
//!
//! A [`Theme`] is picked by name from the page (`"default"` or `"red"`); it
//! resolves to a [`Palette`] holding the particle fill, the base colour of
//! connection lines and the cursor/trail colour. Unknown names resolve to the
//! default palette.

use crate::error::UnknownTheme;
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an opacity; `alpha` is clamped to \[0, 1\].
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn opaque(self) -> Rgba {
        self.with_alpha(1.0)
    }
}

/// RGB colour with a floating-point opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub particle: Rgba,
    pub line: Rgb,
    pub cursor: Rgb,
}

const DEFAULT_PALETTE: Palette = Palette {
    particle: Rgba {
        rgb: Rgb::new(139, 157, 166),
        alpha: 0.5,
    },
    line: Rgb::new(0, 224, 167), // cyan
    cursor: Rgb::new(0x00, 0xe0, 0xa7),
};

const RED_PALETTE: Palette = Palette {
    particle: Rgba {
        rgb: Rgb::new(166, 139, 139),
        alpha: 0.5,
    },
    line: Rgb::new(255, 46, 99),
    cursor: Rgb::new(0xff, 0x2e, 0x63),
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Default,
    Red,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Default, Theme::Red];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Red => "red",
        }
    }

    /// Lenient lookup used for page input: unknown names give [`Theme::Default`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|e: UnknownTheme| {
            log::debug!("[theme] {e}; using default");
            Theme::Default
        })
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Default => DEFAULT_PALETTE,
            Theme::Red => RED_PALETTE,
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
