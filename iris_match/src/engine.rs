use tracing::{info, warn};

use crate::database::IdentityStore;
use crate::error::MatchError;
use crate::iris_code::IrisCode;
use crate::matching::compare;
use crate::protocol::{EnrollResult, RecognizeResult};

/// Enrollment phase: decode the raw code and record it under `name`.
///
/// Existing entries are never consulted; re-enrolling a name overwrites it.
pub fn enroll(store: &mut IdentityStore, name: &str, raw_hex: &str) -> Result<EnrollResult, MatchError> {
    let code = IrisCode::decode_hex(raw_hex)?;
    store.enroll(name, code.clone());
    info!(name, bits = code.len(), "enrolled");
    Ok(EnrollResult::new(name.to_string(), code))
}

/// Recognition phase: compare a presented code against the enrolled one.
///
/// The input is decoded before the name is looked up, so a malformed code
/// reports `Decode` even for an unknown name.
pub fn recognize(store: &IdentityStore, name: &str, raw_hex: &str) -> Result<RecognizeResult, MatchError> {
    let presented = IrisCode::decode_hex(raw_hex)?;
    let record = store.lookup(name).map_err(|e| {
        warn!(name, "recognition for unknown name");
        e
    })?;

    let result = RecognizeResult::new(name.to_string(), compare(&presented, &record.code));
    info!(name, distance = result.distance, decision = %result.decision, "recognized");
    Ok(result)
}
