//! Persisted split records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One stored before/after pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRecord {
    /// Caller-supplied unique id (path plus ordinal by default).
    pub id: String,

    /// The mutated document, serialized.
    pub document: String,

    /// The input document exactly as received.
    pub original_xml: String,

    /// The path expression that selected the split node.
    pub node_path: String,

    /// SHA-256 of the original input text.
    pub fingerprint: String,

    /// When the split was performed.
    pub created_at: DateTime<Utc>,
}

impl SplitRecord {
    /// Create a record stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        document: impl Into<String>,
        original_xml: impl Into<String>,
        node_path: impl Into<String>,
    ) -> Self {
        let original_xml = original_xml.into();
        let mut hasher = Sha256::new();
        hasher.update(original_xml.as_bytes());
        let fingerprint = format!("{:x}", hasher.finalize());

        Self {
            id: id.into(),
            document: document.into(),
            original_xml,
            node_path: node_path.into(),
            fingerprint,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_depends_on_original_only() {
        let a = SplitRecord::new("id0", "<x/>", "<a>1</a>", "//a");
        let b = SplitRecord::new("id1", "<y/>", "<a>1</a>", "//b");
        let c = SplitRecord::new("id2", "<x/>", "<a>2</a>", "//a");
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_ne!(a.fingerprint, c.fingerprint);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = SplitRecord::new("//a_0", "<x/>", "<a>1</a>", "//a");
        let json = serde_json::to_string(&record).unwrap();
        let back: SplitRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.fingerprint, record.fingerprint);
        assert_eq!(back.created_at, record.created_at);
    }
}
