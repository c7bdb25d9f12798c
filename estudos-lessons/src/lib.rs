//! Estudos: a fixed curriculum of language-idiom lessons.
//!
//! Each lesson takes the shared sample data, applies one transformation and
//! prints the result:
//! - Closures and iterator pipelines (lambdas, streams)
//! - Folding with and without a seed (reduce)
//! - Optional values and persistent maps (optional)
//! - Borrowed versus growable strings (strings)
//! - Anonymous objects versus closures (callbacks)
//! - Overloading by argument shape (overloading)
//!
//! The [`runner`] calls them in order, one at a time.

pub mod callbacks;
pub mod error;
pub mod lambdas;
pub mod optional;
pub mod overloading;
pub mod reduce;
pub mod runner;
pub mod streams;
pub mod strings;

pub use error::{LessonError, Result};
pub use runner::{Lesson, RunSummary, Runner, curriculum};
