//! Hex text codec for [`Rgb`].
//!
//! Accepts `#RGB` and `#RRGGBB` with digits in either case, and always writes
//! the lowercase six-digit form.

use crate::types::{HexError, Rgb};
use core::fmt::Write;
use core::str::FromStr;
use heapless::String;

/// Length of `#rrggbb`.
pub const HEX_LEN: usize = 7;

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Rgb {
    /// Parses a `#RGB` or `#RRGGBB` hex color.
    ///
    /// The compact form repeats each digit, so `#abc` is `#aabbcc`.
    ///
    /// # Errors
    /// * `InvalidLength` - Input is not 4 or 7 bytes long
    /// * `MissingPrefix` - Input does not start with `#`
    /// * `InvalidDigit` - A character after `#` is not a hex digit
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let bytes = hex.as_bytes();
        if bytes.len() != 4 && bytes.len() != HEX_LEN {
            return Err(HexError::InvalidLength(bytes.len()));
        }
        if bytes[0] != b'#' {
            return Err(HexError::MissingPrefix);
        }

        let digit = |index: usize| nibble(bytes[index]).ok_or(HexError::InvalidDigit { index });

        if bytes.len() == 4 {
            let r = digit(1)?;
            let g = digit(2)?;
            let b = digit(3)?;
            return Ok(Rgb::new(r * 17, g * 17, b * 17));
        }

        let byte = |index: usize| -> Result<u8, HexError> { Ok((digit(index)? << 4) | digit(index + 1)?) };
        Ok(Rgb::new(byte(1)?, byte(3)?, byte(5)?))
    }

    /// Formats the color as `#rrggbb`.
    pub fn to_hex(&self) -> String<HEX_LEN> {
        let mut hex = String::new();
        // Always exactly HEX_LEN bytes.
        let _ = write!(hex, "{}", self);
        hex
    }
}

impl FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl core::fmt::Display for Rgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}
