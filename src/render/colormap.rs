//! Continuous colormaps for raster layers.

use core::fmt;
use core::str::FromStr;

/// Named continuous colormap.
///
/// `Gray` runs from black at the low end to white at the high end; the
/// perceptual maps follow their usual orientation (dark low, bright high).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Colormap {
    #[default]
    Viridis,
    Magma,
    Inferno,
    Plasma,
    Gray,
}

impl Colormap {
    /// Color at `t`, clamped to `[0, 1]`.
    pub fn map(self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let color = match self {
            Colormap::Viridis => colorous::VIRIDIS.eval_continuous(t),
            Colormap::Magma => colorous::MAGMA.eval_continuous(t),
            Colormap::Inferno => colorous::INFERNO.eval_continuous(t),
            Colormap::Plasma => colorous::PLASMA.eval_continuous(t),
            // GREYS runs light to dark
            Colormap::Gray => colorous::GREYS.eval_continuous(1.0 - t),
        };
        [color.r, color.g, color.b]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Magma => "magma",
            Colormap::Inferno => "inferno",
            Colormap::Plasma => "plasma",
            Colormap::Gray => "gray",
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown colormap name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColormap(pub String);

impl fmt::Display for UnknownColormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown colormap: {}", self.0)
    }
}

impl std::error::Error for UnknownColormap {}

impl FromStr for Colormap {
    type Err = UnknownColormap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "viridis" => Ok(Colormap::Viridis),
            "magma" => Ok(Colormap::Magma),
            "inferno" => Ok(Colormap::Inferno),
            "plasma" => Ok(Colormap::Plasma),
            "gray" | "grey" => Ok(Colormap::Gray),
            _ => Err(UnknownColormap(s.to_string())),
        }
    }
}

/// Map `value` linearly from `[lo, hi]` onto `[0, 1]`.
///
/// A degenerate range maps everything to 0.
#[inline]
pub fn normalize(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi <= lo {
        return 0.0;
    }
    ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
}
