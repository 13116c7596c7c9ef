use serde::{Deserialize, Serialize};
use std::fmt;

use crate::iris_code::IrisCode;
use crate::matching::Decision;

/// Engine → driver: a code was recorded under a name
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnrollResult {
    pub name: String,

    /// Decoded code, minimal width
    pub code: IrisCode,
}

/// Engine → driver: outcome of a recognition attempt
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecognizeResult {
    pub name: String,

    /// Normalized Hamming distance in [0, 1]
    pub distance: f64,

    pub decision: Decision,
}

impl EnrollResult {
    pub fn new(name: String, code: IrisCode) -> Self {
        Self { name, code }
    }
}

impl RecognizeResult {
    pub fn new(name: String, distance: f64) -> Self {
        Self {
            name,
            distance,
            decision: Decision::from_distance(distance),
        }
    }

    pub fn granted(&self) -> bool {
        self.decision.is_granted()
    }
}

impl fmt::Display for EnrollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">> {}'s iris code (in binary) = {} recorded", self.name, self.code)
    }
}

impl fmt::Display for RecognizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hamming Distance = {:.2}", self.distance)?;
        write!(f, "Access {} for {}", self.decision, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enroll_result_text() {
        let result = EnrollResult::new("Alice".to_string(), IrisCode::decode_hex("F0").unwrap());
        assert_eq!(result.to_string(), ">> Alice's iris code (in binary) = 11110000 recorded");
    }

    #[test]
    fn test_recognize_result_text() {
        let granted = RecognizeResult::new("Alice".to_string(), 0.12);
        assert!(granted.granted());
        assert_eq!(granted.to_string(), "Hamming Distance = 0.12\nAccess granted for Alice");

        let denied = RecognizeResult::new("Bob".to_string(), 1.0);
        assert!(!denied.granted());
        assert_eq!(denied.to_string(), "Hamming Distance = 1.00\nAccess denied for Bob");
    }

    #[test]
    fn test_boundary_distance_is_denied() {
        let result = RecognizeResult::new("Dave".to_string(), 0.32);
        assert_eq!(result.decision, Decision::Denied);
        assert_eq!(result.to_string(), "Hamming Distance = 0.32\nAccess denied for Dave");
    }

    #[test]
    fn test_serialized_shape() {
        let result = RecognizeResult::new("Alice".to_string(), 0.0);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({
            "name": "Alice",
            "distance": 0.0,
            "decision": "granted",
        }));

        let enrolled = EnrollResult::new("Bob".to_string(), IrisCode::decode_hex("FF").unwrap());
        let json = serde_json::to_string(&enrolled).unwrap();
        assert_eq!(json, r#"{"name":"Bob","code":"11111111"}"#);
        assert_eq!(serde_json::from_str::<EnrollResult>(&json).unwrap(), enrolled);
    }
}
