pub mod iris_code;
pub mod matching;
pub mod database;
pub mod protocol;
pub mod error;
pub mod engine;

// Re-exports
pub use iris_code::{align, DecodeError, IrisCode, MAX_CODE_BITS};
pub use matching::{compare, hamming_distance, is_match, normalized_distance, Decision, THRESHOLD};
pub use database::{IdentityRecord, IdentityStore};
pub use protocol::{EnrollResult, RecognizeResult};
pub use error::MatchError;
pub use engine::{enroll, recognize};
