//! # Estudos Common
//!
//! Shared building blocks for the estudos lessons.
//!
//! ## Modules
//!
//! - [`sample`]: The fixed sample data every lesson reads
//! - [`scope`]: Comparable identity tokens for enclosing scopes
//! - [`store`]: A persistent key-value store backed by `im::HashMap`
//!
//! ## Design Principles
//!
//! 1. **Read-only samples**: Lessons borrow the sample data, they never change it
//! 2. **Functional updates**: Stores return a new value instead of mutating in place
//! 3. **Identity as a value**: Scopes are plain tokens that can be compared and printed

pub mod sample;
pub mod scope;
pub mod store;

// Re-export main types for convenience
pub use sample::{NamedHolder, Person, PersonDirectory, Samples};
pub use scope::{ScopeId, Scopes};
pub use store::KeyValueStore;
