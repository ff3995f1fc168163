//! Pagination meta attached to list responses.

use serde::Serialize;
use serde_json::Value;

use crate::envelope::META_KEY;

/// Contents of a `MetaInformation` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Number of pages in the collection.
    pub total_pages: u32,
    /// Page this response holds.
    pub current_page: u32,
    /// Number of resources across all pages.
    pub total_resources: u64,
}

impl PaginationMeta {
    /// Read the meta block of a raw (not unwrapped) response envelope.
    ///
    /// Returns `None` when the envelope has no `MetaInformation` key. Missing
    /// or malformed counters default to zero.
    #[must_use]
    pub fn from_envelope(envelope: &Value) -> Option<Self> {
        let meta = envelope.get(META_KEY)?;
        Some(Self {
            total_pages: counter(meta, "@TotalPages")
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            current_page: counter(meta, "@CurrentPage")
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            total_resources: counter(meta, "@TotalResources").unwrap_or(0),
        })
    }

    /// Whether more than one page must be fetched.
    #[must_use]
    pub const fn is_paged(&self) -> bool {
        self.total_pages > 1
    }
}

fn counter(meta: &Value, key: &str) -> Option<u64> {
    match meta.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_counters() {
        let envelope = json!({
            "MetaInformation": {"@TotalResources": 1210, "@TotalPages": 13, "@CurrentPage": 1},
            "Accounts": []
        });
        let meta = PaginationMeta::from_envelope(&envelope).unwrap();
        assert_eq!(
            meta,
            PaginationMeta {
                total_pages: 13,
                current_page: 1,
                total_resources: 1210
            }
        );
        assert!(meta.is_paged());
    }

    #[test]
    fn accepts_numeric_strings() {
        let envelope = json!({"MetaInformation": {"@TotalPages": "2", "@CurrentPage": "1"}});
        let meta = PaginationMeta::from_envelope(&envelope).unwrap();
        assert_eq!(meta.total_pages, 2);
        assert_eq!(meta.total_resources, 0);
    }

    #[test]
    fn absent_meta() {
        assert!(PaginationMeta::from_envelope(&json!({"Accounts": []})).is_none());
    }
}
