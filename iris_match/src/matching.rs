use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::iris_code::{align, IrisCode};

/// Accept an iris scan as a match if its distance is below this.
pub const THRESHOLD: f64 = 0.32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Granted,
    Denied,
}

impl Decision {
    /// Strictly below [`THRESHOLD`] grants; equal denies.
    pub fn from_distance(distance: f64) -> Self {
        if is_match(distance) {
            Decision::Granted
        } else {
            Decision::Denied
        }
    }

    pub fn is_granted(self) -> bool {
        self == Decision::Granted
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Decision::Granted => "granted",
            Decision::Denied => "denied",
        })
    }
}

/// Calculate Hamming distance between two binary vectors
pub fn hamming_distance(bits1: &[bool], bits2: &[bool]) -> usize {
    assert_eq!(bits1.len(), bits2.len());

    bits1.iter()
        .zip(bits2.iter())
        .filter(|(a, b)| a != b)
        .count()
}

/// Fraction of differing positions between two aligned codes.
pub fn normalized_distance(a: &IrisCode, b: &IrisCode) -> f64 {
    assert!(!a.is_empty(), "cannot compare empty codes");

    let mismatch = hamming_distance(a.bits(), b.bits());
    mismatch as f64 / a.len() as f64
}

/// Align two codes of any length and return their normalized Hamming distance.
pub fn compare(a: &IrisCode, b: &IrisCode) -> f64 {
    let (a, b) = align(a, b);
    let distance = normalized_distance(&a, &b);
    debug!(width = a.len(), distance, "compared iris codes");
    distance
}

pub fn is_match(distance: f64) -> bool {
    distance < THRESHOLD
}
