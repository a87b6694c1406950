//! Color space conversion between [`Rgb`], [`Hsv`] and [`Hsl`].
//!
//! Every conversion is an explicit function per direction. HSV and HSL are
//! only ever derived from RGB, so `hsv_to_hsl` and `hsl_to_hsv` go through an
//! intermediate 8-bit [`Rgb`] and inherit its quantization.
//!
//! Also provides conversions to and from `palette::Srgb` so these colors can be
//! handed to palette-based code.

use crate::types::{Hsl, Hsv, Rgb};
use palette::Srgb;

/// Scales a `0.0..=1.0` component to a channel, rounding half away from zero.
#[inline]
fn to_channel(component: f64) -> u8 {
    libm::round(component * 255.0) as u8
}

#[inline]
fn normalize(rgb: Rgb) -> (f64, f64, f64) {
    (
        f64::from(rgb.r()) / 255.0,
        f64::from(rgb.g()) / 255.0,
        f64::from(rgb.b()) / 255.0,
    )
}

/// Hue of a chromatic color in `0.0..1.0`.
///
/// Ties between maximal channels resolve in the order red, green, blue.
fn chromatic_hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    sector / 6.0
}

/// Converts RGB to HSV. Achromatic colors get zero hue and saturation.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = normalize(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Black has no saturation.
    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    let hue = if max == min {
        0.0
    } else {
        chromatic_hue(r, g, b, max, delta)
    };

    Hsv::new(hue, saturation, max)
}

/// Converts HSV to RGB, rounding each channel to the nearest integer.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let value = hsv.value();
    let saturation = hsv.saturation();

    let scaled = hsv.hue() * 6.0;
    let sector = libm::floor(scaled);
    let f = scaled - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Converts RGB to HSL. Achromatic colors get zero hue and saturation.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = normalize(rgb);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, lightness);
    }

    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    Hsl::new(chromatic_hue(r, g, b, max, delta), saturation, lightness)
}

/// One channel of an HSL color, with `t` the hue offset for that channel.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts HSL to RGB, rounding each channel to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let lightness = hsl.lightness();
    let saturation = hsl.saturation();

    if saturation == 0.0 {
        let level = to_channel(lightness);
        return Rgb::new(level, level, level);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;
    let hue = hsl.hue();

    Rgb::new(
        to_channel(hue_to_channel(p, q, hue + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, hue)),
        to_channel(hue_to_channel(p, q, hue - 1.0 / 3.0)),
    )
}

/// Converts HSV to HSL through an intermediate [`Rgb`].
#[inline]
pub fn hsv_to_hsl(hsv: Hsv) -> Hsl {
    rgb_to_hsl(hsv_to_rgb(hsv))
}

/// Converts HSL to HSV through an intermediate [`Rgb`].
#[inline]
pub fn hsl_to_hsv(hsl: Hsl) -> Hsv {
    rgb_to_hsv(hsl_to_rgb(hsl))
}

impl Rgb {
    #[inline]
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    #[inline]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// Returns the color as a floating-point `palette::Srgb` (0.0-1.0 range).
    #[inline]
    pub fn to_srgb(self) -> Srgb {
        Srgb::<u8>::from(self).into_format()
    }

    /// Quantizes a floating-point `palette::Srgb` to 8-bit channels.
    #[inline]
    pub fn from_srgb(color: Srgb) -> Self {
        color.into_format::<u8>().into()
    }
}

impl Hsv {
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }

    #[inline]
    pub fn to_hsl(self) -> Hsl {
        hsv_to_hsl(self)
    }
}

impl Hsl {
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self)
    }

    #[inline]
    pub fn to_hsv(self) -> Hsv {
        hsl_to_hsv(self)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(color: Rgb) -> Self {
        Srgb::new(color.r(), color.g(), color.b())
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Rgb::new(color.red, color.green, color.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        libm::fabs(a - b) < EPSILON
    }

    #[test]
    fn red_converts_to_hsv_and_hsl() {
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 0));
        assert!(approx(hsv.hue(), 0.0));
        assert!(approx(hsv.saturation(), 1.0));
        assert!(approx(hsv.value(), 1.0));

        let hsl = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert!(approx(hsl.hue(), 0.0));
        assert!(approx(hsl.saturation(), 1.0));
        assert!(approx(hsl.lightness(), 0.5));
    }

    #[test]
    fn black_has_zero_saturation() {
        let hsv = rgb_to_hsv(Rgb::new(0, 0, 0));
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.0));

        let hsl = rgb_to_hsl(Rgb::new(0, 0, 0));
        assert_eq!(hsl, Hsl::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn red_green_tie_resolves_to_red_sector() {
        // Yellow: red and green are both maximal, so the red branch computes hue.
        let hsv = rgb_to_hsv(Rgb::new(255, 255, 0));
        assert!(approx(hsv.hue(), 1.0 / 6.0));

        let hsl = rgb_to_hsl(Rgb::new(255, 255, 0));
        assert!(approx(hsl.hue(), 1.0 / 6.0));
    }

    #[test]
    fn green_blue_tie_resolves_to_green_sector() {
        let hsv = rgb_to_hsv(Rgb::new(0, 200, 200));
        assert!(approx(hsv.hue(), 0.5));
    }

    #[test]
    fn hue_below_red_wraps_into_last_sector() {
        // Magenta-ish red: g < b adds a full turn before dividing.
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 51));
        assert!(hsv.hue() > 5.0 / 6.0 && hsv.hue() < 1.0);
    }

    #[test]
    fn hsv_to_rgb_covers_all_sectors() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(1.0 / 6.0, 1.0, 1.0)), Rgb::new(255, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(2.0 / 6.0, 1.0, 1.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(3.0 / 6.0, 1.0, 1.0)), Rgb::new(0, 255, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(4.0 / 6.0, 1.0, 1.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(5.0 / 6.0, 1.0, 1.0)), Rgb::new(255, 0, 255));
    }

    #[test]
    fn full_turn_hue_is_sector_zero() {
        assert_eq!(hsv_to_rgb(Hsv::new(1.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hsv_to_rgb_rounds_to_nearest() {
        // 0.5 * 255 = 127.5 rounds up.
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 0.5)), Rgb::new(128, 128, 128));
    }

    #[test]
    fn hsl_zero_saturation_short_circuits() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.7, 0.0, 0.5)), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 1.0)), Rgb::new(255, 255, 255));
    }

    #[test]
    fn hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 1.0, 0.5)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(1.0 / 3.0, 1.0, 0.5)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(2.0 / 3.0, 1.0, 0.5)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hsl_high_lightness_uses_alternate_denominator() {
        // Pale pink: lightness above one half.
        let hsl = rgb_to_hsl(Rgb::new(255, 204, 204));
        assert!(hsl.lightness() > 0.5);
        assert!(approx(hsl.saturation(), 1.0));
        assert_eq!(hsl_to_rgb(hsl), Rgb::new(255, 204, 204));
    }

    #[test]
    fn cross_conversions_go_through_rgb() {
        let hsv = Hsv::new(0.3, 0.6, 0.8);
        assert_eq!(hsv_to_hsl(hsv), rgb_to_hsl(hsv_to_rgb(hsv)));

        let hsl = Hsl::new(0.9, 0.4, 0.3);
        assert_eq!(hsl_to_hsv(hsl), rgb_to_hsv(hsl_to_rgb(hsl)));
    }

    #[test]
    fn palette_interop_round_trips_channels() {
        let color = Rgb::new(12, 200, 99);
        let srgb: Srgb<u8> = color.into();
        assert_eq!(srgb, Srgb::new(12, 200, 99));
        assert_eq!(Rgb::from(srgb), color);
        assert_eq!(Rgb::from_srgb(color.to_srgb()), color);
    }
}
