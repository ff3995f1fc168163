//! Resource keys.
//!
//! Most resources are addressed by a single identifier (`/customers/{id}`),
//! a few by a composite key (`/absencetransactions/{employee}/{date}/{code}`).
//! A [`ResourceKey`] holds the path segments in order.

use std::fmt;

use chrono::NaiveDate;

/// One or more path segments identifying a resource.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey(Vec<String>);

impl ResourceKey {
    /// The path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Render as a relative path suffix, without a leading slash.
    #[must_use]
    pub fn to_path(&self) -> String {
        self.0.join("/")
    }
}

impl fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceKey({})", self.to_path())
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Implement `From<$ty> for ResourceKey` for single-segment keys.
macro_rules! single_segment_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ResourceKey {
                fn from(value: $ty) -> Self {
                    Self(vec![value.to_string()])
                }
            }
        )*
    };
}

single_segment_key!(&str, String, &String, i32, i64, u32, u64, usize);

impl From<NaiveDate> for ResourceKey {
    fn from(value: NaiveDate) -> Self {
        Self(vec![value.format("%Y-%m-%d").to_string()])
    }
}

impl<A: fmt::Display, B: fmt::Display> From<(A, B)> for ResourceKey {
    fn from((a, b): (A, B)) -> Self {
        Self(vec![a.to_string(), b.to_string()])
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> From<(A, B, C)> for ResourceKey {
    fn from((a, b, c): (A, B, C)) -> Self {
        Self(vec![a.to_string(), b.to_string(), c.to_string()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment() {
        assert_eq!(ResourceKey::from("1001").to_path(), "1001");
        assert_eq!(ResourceKey::from(42_u32).to_path(), "42");
    }

    #[test]
    fn composite_key_joins_segments() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let key = ResourceKey::from(("007", date.format("%Y-%m-%d"), "SEM"));
        assert_eq!(key.to_path(), "007/2024-05-17/SEM");
        assert_eq!(key.segments().len(), 3);
    }

    #[test]
    fn debug_shows_path() {
        let key = ResourceKey::from(("A", 1));
        assert_eq!(format!("{key:?}"), "ResourceKey(A/1)");
    }
}
