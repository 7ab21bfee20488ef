//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a page in a reference string.
///
/// Any integer is a legal page number, so the inner type is signed and
/// there is no "invalid" sentinel. Serializes as a bare number.
///
/// # Example
/// ```
/// use lrutrace::PageId;
///
/// let page = PageId::new(42);
/// assert_eq!(page.0, 42);
/// assert_eq!(page.to_string(), "Page 42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: i64) -> Self {
        PageId(id)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {}", self.0)
    }
}
