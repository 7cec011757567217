//! Node identifier trait.

use std::fmt;
use std::hash::Hash;

/// An opaque, comparable, hashable node identifier.
///
/// `Ord` fixes the tie-break order used by the uninformed searches, and
/// `Display` is used when identifiers appear in errors or graph listings.
///
/// # Examples
///
/// ```
/// use u_graphsearch::graph::NodeId;
///
/// assert!("A".is_valid_id());
/// assert!(!"".is_valid_id());
/// assert!(!String::from("  ").is_valid_id());
/// assert!(7u32.is_valid_id());
/// ```
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {
    /// Returns `false` for identifiers the graph refuses to store.
    fn is_valid_id(&self) -> bool {
        true
    }
}

impl NodeId for String {
    fn is_valid_id(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl NodeId for &str {
    fn is_valid_id(&self) -> bool {
        !self.trim().is_empty()
    }
}

macro_rules! impl_always_valid {
    ($($t:ty),* $(,)?) => {
        $(impl NodeId for $t {})*
    };
}

impl_always_valid!(char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
