//! Core color value types and errors.

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Creates a color from its red, green and blue channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel.
    #[inline]
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

/// A color in hue/saturation/value form.
///
/// All three components are expected in `0.0..=1.0`; hue is a fraction of a
/// full turn, not degrees. Nothing is clamped or checked. Values outside that
/// range still convert deterministically, but the result is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl Hsv {
    /// Creates a color from normalized hue, saturation and value.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    #[inline]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// A color in hue/saturation/lightness form.
///
/// Same `0.0..=1.0` contract as [`Hsv`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Hsl {
    /// Creates a color from normalized hue, saturation and lightness.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    #[inline]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    #[inline]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    #[inline]
    pub const fn lightness(&self) -> f64 {
        self.lightness
    }
}

impl core::fmt::Display for Hsv {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "h: {}, s: {}, v: {}",
            self.hue, self.saturation, self.value
        )
    }
}

impl core::fmt::Display for Hsl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "h: {}, s: {}, l: {}",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// The color model a gradient is interpolated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorModel {
    /// Interpolate the 8-bit channels directly.
    #[default]
    Rgb,

    /// Interpolate hue, saturation and value.
    Hsv,

    /// Interpolate hue, saturation and lightness.
    Hsl,
}

/// Hex color parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HexError {
    /// Input is neither `#RGB` nor `#RRGGBB` long. Holds the byte length.
    InvalidLength(usize),

    /// Input does not start with `#`.
    MissingPrefix,

    /// Byte at `index` is not a hex digit.
    InvalidDigit { index: usize },
}

impl core::fmt::Display for HexError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HexError::InvalidLength(len) => {
                write!(
                    f,
                    "malformed hex color: expected 4 or 7 characters, got {}",
                    len
                )
            }
            HexError::MissingPrefix => {
                write!(f, "malformed hex color: missing leading '#'")
            }
            HexError::InvalidDigit { index } => {
                write!(f, "malformed hex color: invalid hex digit at position {}", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HexError {}

/// Gradient generation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GradientError {
    /// Step count was zero or negative.
    InvalidStepCount(i32),

    /// Step count does not fit in the output buffer.
    CapacityExceeded { requested: usize, capacity: usize },
}

impl core::fmt::Display for GradientError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GradientError::InvalidStepCount(steps) => {
                write!(f, "invalid step count {}: must be at least 1", steps)
            }
            GradientError::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "{} gradient steps requested, capacity is {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GradientError {}
