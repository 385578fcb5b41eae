//! Prototype capability - deep copies of owned object graphs
//!
//! A prototype produces a new instance that is equal field by field to the
//! source while sharing none of its owned sub-objects. Owned parts are copied
//! by calling `try_clone` on them in turn, so the guarantee holds at every
//! depth of the graph.
//!
//! Every implementor is also `Clone`; `try_clone` is the fallible form for
//! types whose parts might one day need fallible construction.

use crate::error::DomainError;

/// Deep, non-aliasing copy.
pub trait Prototype: Sized {
    /// Returns a copy with equal fields and freshly cloned owned parts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CloneFailed` if an owned part cannot be copied.
    fn try_clone(&self) -> Result<Self, DomainError>;
}
