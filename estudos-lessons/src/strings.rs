//! Immutable and growable strings.
//!
//! `&str` is a read-only view: "adding" to it means allocating a new
//! `String`. An owned `String` is a growable buffer that appends in place,
//! and wrapping it in a `Mutex` gives the lock-guarded variant that can be
//! shared between threads at the cost of a lock per access.

use std::io::Write;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use estudos_common::Samples;
use tracing::debug;

use crate::error::Result;

/// How many characters the benchmark appends.
pub const APPEND_COUNT: usize = 100_000;

const SURNAME: &str = " Tavares";

// ============================================================================
// Borrowed, growable and lock-guarded strings
// ============================================================================

/// Concatenation on a borrowed string: the result is a new value and the
/// original is untouched.
///
/// # Examples
/// ```
/// use estudos_lessons::strings::concat;
/// let name = "André";
/// let full = concat(name, " Tavares");
/// assert_eq!(name, "André");
/// assert_eq!(full, "André Tavares");
/// ```
pub fn concat(original: &str, suffix: &str) -> String {
    [original, suffix].concat()
}

/// Appends into one growable buffer without creating intermediate strings.
pub fn builder_append(base: &str, suffix: &str) -> String {
    let mut buffer = String::with_capacity(base.len() + suffix.len());
    buffer.push_str(base);
    buffer.push_str(suffix);
    buffer
}

/// Same as [`builder_append`], but every access goes through a lock.
///
/// The mutex is local and nothing panics while it is held, so it cannot be
/// poisoned; a poisoned guard would still carry the buffer and is used as is.
pub fn synchronized_append(base: &str, suffix: &str) -> String {
    let buffer = Mutex::new(String::from(base));
    buffer
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_str(suffix);
    buffer.into_inner().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Append benchmark
// ============================================================================

/// Outcome of [`append_benchmark`]. Only the lengths are meaningful; the
/// elapsed time is for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub initial_len: usize,
    pub final_len: usize,
    pub elapsed: Duration,
}

/// Appends `'x'` `count` times to a buffer that starts as `initial`.
///
/// Lengths are in bytes; `'x'` is a single byte.
///
/// # Examples
/// ```
/// use estudos_lessons::strings::append_benchmark;
/// let report = append_benchmark("abc", 10);
/// assert_eq!(report.final_len, 13);
/// ```
pub fn append_benchmark(initial: &str, count: usize) -> BenchmarkReport {
    let start = Instant::now();
    let mut buffer = String::from(initial);
    for _ in 0..count {
        buffer.push('x');
    }
    BenchmarkReport {
        initial_len: initial.len(),
        final_len: buffer.len(),
        elapsed: start.elapsed(),
    }
}

// ============================================================================
// Lessons
// ============================================================================

/// Prints the holder's name after a discarded concat, then both appends.
pub fn strings_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    let Some(name) = samples.holder.name() else {
        writeln!(out, "holder has no name")?;
        return Ok(());
    };

    let _discarded = concat(name, SURNAME);
    writeln!(out, "{name}")?;
    writeln!(out, "{}", builder_append(name, SURNAME))?;
    writeln!(out, "{}", synchronized_append(name, SURNAME))?;
    Ok(())
}

/// Prints the benchmark's final length and elapsed time.
pub fn benchmark_lesson(_samples: &Samples, out: &mut dyn Write) -> Result<()> {
    let report = append_benchmark("", APPEND_COUNT);
    debug!(final_len = report.final_len, "append benchmark done");
    writeln!(out, "length: {}", report.final_len)?;
    writeln!(out, "elapsed: {} ms", report.elapsed.as_millis())?;
    Ok(())
}
