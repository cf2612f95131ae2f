//! Element handles.
//!
//! An `ElementId` names one element on the host surface for its whole
//! life: the host hands one out from `create_element` (or a caller interns
//! the name of an element it placed itself), the coordinator keys its
//! registry on it between `register` and `unregister`, and snapshots carry
//! its name. A handle outlives the element it names, so every coordinator
//! operation treats a handle that is no longer registered as a no-op.

use lasso::{Spur, ThreadedRodeo};
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Element names, shared by every surface in the process.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Handle for one element on the host surface. Handles from [`ElementId::fresh`]
/// are never reused, so a stale one cannot alias a newer element.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Spur);

impl ElementId {
    /// Handle for the element with this name. The same name always yields
    /// the same handle.
    pub fn intern(s: &str) -> Self {
        ElementId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to the element's name.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Generate a fresh handle for a newly created element (`movable_0`, `movable_1`, ...).
    pub fn fresh() -> Self {
        Self::with_prefix("movable")
    }

    /// Unique handle `{prefix}_{n}`; the counter is process-wide.
    pub fn with_prefix(prefix: &str) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("{prefix}_{n}"))
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ElementId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let a = ElementId::intern("play_area_box");
        let b = ElementId::intern("play_area_box");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "play_area_box");
    }

    #[test]
    fn fresh_handles_are_unique() {
        let a = ElementId::fresh();
        let b = ElementId::fresh();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("movable_"));
    }
}
