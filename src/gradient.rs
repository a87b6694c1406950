//! Linear interpolation and gradient generation.

use crate::types::{ColorModel, GradientError, Hsl, Hsv, Rgb};
use heapless::Vec;

#[inline]
fn lerp(a: f64, b: f64, fraction: f64) -> f64 {
    (1.0 - fraction) * a + fraction * b
}

/// Colors that can be linearly interpolated component by component.
///
/// `fraction` is not clamped: `0.0` yields `self`, `1.0` yields `other`, and
/// values outside `0.0..=1.0` extrapolate along the same line.
pub trait Interpolate: Copy {
    /// Returns the color at `fraction` of the way from `self` to `other`.
    fn interpolate(self, other: Self, fraction: f64) -> Self;
}

impl Interpolate for Rgb {
    /// Channels are rounded to the nearest integer and saturate at the `u8` bounds.
    fn interpolate(self, other: Self, fraction: f64) -> Self {
        let channel = |a: u8, b: u8| libm::round(lerp(f64::from(a), f64::from(b), fraction)) as u8;

        Rgb::new(
            channel(self.r(), other.r()),
            channel(self.g(), other.g()),
            channel(self.b(), other.b()),
        )
    }
}

impl Interpolate for Hsv {
    fn interpolate(self, other: Self, fraction: f64) -> Self {
        Hsv::new(
            lerp(self.hue(), other.hue(), fraction),
            lerp(self.saturation(), other.saturation(), fraction),
            lerp(self.value(), other.value(), fraction),
        )
    }
}

impl Interpolate for Hsl {
    fn interpolate(self, other: Self, fraction: f64) -> Self {
        Hsl::new(
            lerp(self.hue(), other.hue(), fraction),
            lerp(self.saturation(), other.saturation(), fraction),
            lerp(self.lightness(), other.lightness(), fraction),
        )
    }
}

/// Interpolates between two colors of the same model.
#[inline]
pub fn interpolate<C: Interpolate>(from: C, to: C, fraction: f64) -> C {
    from.interpolate(to, fraction)
}

/// Returns the midpoint between two colors.
#[inline]
pub fn gradient<C: Interpolate>(from: C, to: C) -> C {
    from.interpolate(to, 0.5)
}

/// Generates `steps` evenly spaced colors from `from` towards `to`.
///
/// The colors sit at fractions `1/steps, 2/steps, ..., 1`, so `from` itself is
/// never part of the output and the last element is exactly `to`.
///
/// # Type Parameters
/// * `N` - Capacity of the returned buffer
///
/// # Errors
/// * `InvalidStepCount` - `steps` is zero or negative
/// * `CapacityExceeded` - `steps` is larger than `N`
pub fn gradient_steps<C: Interpolate, const N: usize>(
    from: C,
    to: C,
    steps: i32,
) -> Result<Vec<C, N>, GradientError> {
    if steps <= 0 {
        return Err(GradientError::InvalidStepCount(steps));
    }

    let requested = steps as usize;
    if requested > N {
        return Err(GradientError::CapacityExceeded {
            requested,
            capacity: N,
        });
    }

    #[cfg(feature = "defmt")]
    defmt::trace!("generating {} gradient steps", steps);

    let mut colors = Vec::new();
    for step in 1..=steps {
        let fraction = f64::from(step) / f64::from(steps);
        // Capacity checked above.
        let _ = colors.push(from.interpolate(to, fraction));
    }

    Ok(colors)
}

/// Generates a gradient between two RGB colors, interpolating in `model`.
///
/// Both endpoints are converted into `model`, the steps are generated there,
/// and every step is converted back to [`Rgb`].
///
/// # Errors
/// Same as [`gradient_steps`].
pub fn gradient_steps_in<const N: usize>(
    model: ColorModel,
    from: Rgb,
    to: Rgb,
    steps: i32,
) -> Result<Vec<Rgb, N>, GradientError> {
    match model {
        ColorModel::Rgb => gradient_steps(from, to, steps),
        ColorModel::Hsv => {
            let colors: Vec<Hsv, N> = gradient_steps(from.to_hsv(), to.to_hsv(), steps)?;
            Ok(colors.into_iter().map(Hsv::to_rgb).collect())
        }
        ColorModel::Hsl => {
            let colors: Vec<Hsl, N> = gradient_steps(from.to_hsl(), to.to_hsl(), steps)?;
            Ok(colors.into_iter().map(Hsl::to_rgb).collect())
        }
    }
}
