use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Widest code the decoder accepts: a signed 64-bit value with the sign bit reserved.
pub const MAX_CODE_BITS: usize = 63;

/// Why a raw code could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty input")]
    Empty,

    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    #[error("code needs more than {} bits", MAX_CODE_BITS)]
    TooWide,
}

/// Binary iris code, most significant bit first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub struct IrisCode {
    bits: Vec<bool>,
}

impl IrisCode {
    pub fn from_bits(bits: Vec<bool>) -> Result<Self, DecodeError> {
        if bits.is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(Self { bits })
    }

    /// Decode a base-16 magnitude into its minimal-width binary form.
    ///
    /// `"F0"` becomes `11110000`, `"0"` becomes the single bit `0`. Leading
    /// zero digits are accepted but never widen the result, so codes of
    /// different lengths are normal here and get reconciled by [`align`].
    pub fn decode_hex(raw: &str) -> Result<Self, DecodeError> {
        if raw.is_empty() {
            return Err(DecodeError::Empty);
        }
        // from_str_radix also takes a sign; only bare hex digits are valid codes.
        if let Some((position, found)) = raw.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(DecodeError::InvalidDigit { position, found });
        }

        let value = i64::from_str_radix(raw, 16).map_err(|_| DecodeError::TooWide)?;
        let code = Self::from_value(value as u64);
        debug!(raw, bits = code.len(), "decoded iris code");
        Ok(code)
    }

    /// Parse a string of '0' and '1' characters.
    pub fn from_binary_str(s: &str) -> Result<Self, DecodeError> {
        if s.is_empty() {
            return Err(DecodeError::Empty);
        }
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(DecodeError::InvalidDigit { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }

    fn from_value(value: u64) -> Self {
        let width = (u64::BITS - value.leading_zeros()).max(1);
        let bits = (0..width).rev().map(|i| (value >> i) & 1 == 1).collect();
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Left-pad with zero bits up to `width`; wider codes come back unchanged.
    fn padded_to(&self, width: usize) -> Self {
        let mut bits = vec![false; width.saturating_sub(self.len())];
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }
}

/// Bring two codes to the same length by left-padding the shorter one with zeros.
pub fn align(a: &IrisCode, b: &IrisCode) -> (IrisCode, IrisCode) {
    let width = a.len().max(b.len());
    (a.padded_to(width), b.padded_to(width))
}

impl fmt::Display for IrisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<IrisCode> for String {
    fn from(code: IrisCode) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for IrisCode {
    type Error = DecodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_binary_str(&s)
    }
}
