use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::error::MatchError;
use crate::iris_code::IrisCode;

/// In-memory identity store. Lives as long as its owner; nothing is persisted.
#[derive(Debug, Default)]
pub struct IdentityStore {
    records: HashMap<String, IdentityRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdentityRecord {
    pub name: String,
    pub code: IrisCode,
    pub enrolled_at: String,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; the last enrollment for a name wins.
    /// Returns the record that was replaced, if any.
    pub fn enroll(&mut self, name: &str, code: IrisCode) -> Option<IdentityRecord> {
        let previous = self.records.insert(name.to_string(), IdentityRecord::new(name, code));
        if previous.is_some() {
            warn!(name, "re-enrollment replaced existing iris code");
        }
        previous
    }

    pub fn lookup(&self, name: &str) -> Result<&IdentityRecord, MatchError> {
        self.records.get(name).ok_or_else(|| MatchError::not_found(name))
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

impl IdentityRecord {
    pub fn new(name: &str, code: IrisCode) -> Self {
        Self {
            name: name.to_string(),
            code,
            enrolled_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
