//! # Scope Identities
//!
//! Every callback in the lessons answers the question "what is my enclosing
//! context?". The answer is a [`ScopeId`]: a small `Copy` token handed out by
//! a [`Scopes`] registry. A registry never hands out the same index twice, and
//! one started with [`Scopes::after`] skips the indices already in use, so an
//! anonymous object that opens its own scope can never be mistaken for the
//! scope that created it.
//!
//! ## Example
//!
//! ```
//! use estudos_common::scope::Scopes;
//!
//! let mut scopes = Scopes::new();
//! let outer = scopes.enter("Holder");
//! let inner = scopes.enter("Holder$1");
//!
//! assert_ne!(outer, inner);
//! assert_eq!(outer.label(), "Holder");
//! assert_eq!(inner.to_string(), "Holder$1#1");
//! ```

use std::fmt;

/// A comparable handle naming one enclosing scope.
///
/// Equality and hashing only look at the allocation index; the label is for
/// humans reading the transcript.
#[derive(Debug, Clone, Copy)]
pub struct ScopeId {
    index: usize,
    label: &'static str,
}

impl PartialEq for ScopeId {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for ScopeId {}

impl std::hash::Hash for ScopeId {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl ScopeId {
    /// Returns the raw allocation index.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the human-readable label given at allocation.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.label
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.label, self.index)
    }
}

/// Hands out fresh [`ScopeId`]s.
///
/// A registry is owned by whoever opens scopes with it. To open scopes next to
/// one that already exists, start a registry [`Scopes::after`] that scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scopes {
    next: usize,
}

impl Scopes {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Creates a registry whose allocations can never equal `existing` or any
    /// scope allocated before it.
    ///
    /// # Example
    /// ```
    /// use estudos_common::scope::Scopes;
    ///
    /// let mut outer = Scopes::new();
    /// let holder = outer.enter("Holder");
    ///
    /// let mut inner = Scopes::after(holder);
    /// assert_ne!(inner.enter("Holder$1"), holder);
    /// ```
    #[must_use]
    pub fn after(existing: ScopeId) -> Self {
        Self {
            next: existing.index + 1,
        }
    }

    /// Allocates a new scope identity, distinct from every earlier one.
    pub fn enter(&mut self, label: &'static str) -> ScopeId {
        let index = self.next;
        self.next += 1;
        ScopeId { index, label }
    }

    /// Number of scopes allocated so far, counting any skipped by
    /// [`Scopes::after`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.next
    }

    /// Returns true if no scope has been allocated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
