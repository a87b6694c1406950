#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb`**: An 8-bit color, parsed from and formatted as `#rrggbb` hex text
//! - **`Hsv`** / **`Hsl`**: Hue/saturation/value and hue/saturation/lightness, all components in 0.0-1.0
//! - **`colors`**: Explicit conversions between the three models (`rgb_to_hsv`, `hsl_to_rgb`, ...)
//! - **`Interpolate`**: Linear interpolation implemented by every color type
//! - **`gradient`** / **`gradient_steps`**: A midpoint, or `n` evenly spaced steps towards a target
//! - **`ColorModel`**: Which model `gradient_steps_in` interpolates RGB endpoints in
//!
//! HSV and HSL use `f64` components where hue is a fraction of a full turn.
//! Gradient steps are collected into a fixed-capacity `heapless::Vec`, so the
//! crate never allocates.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod types;
pub mod colors;
pub mod hex;
pub mod gradient;

pub use types::{ColorModel, GradientError, HexError, Hsl, Hsv, Rgb};
pub use colors::{hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use gradient::{Interpolate, gradient, gradient_steps, gradient_steps_in, interpolate};

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
