//! Lambdas: anonymous functions as values.
//!
//! A closure is a function without a name, passed around like any other
//! value. The prefix lesson computes the same answer twice: once with an
//! explicit loop and a mutable vector, once with an iterator pipeline
//! (`filter -> map -> collect -> sort`). Both must agree for every input.

use std::io::Write;

use estudos_common::Samples;
use tracing::debug;

use crate::error::Result;

/// Names starting with `prefix`, uppercased and sorted, built with a loop.
///
/// # Examples
/// ```
/// use estudos_lessons::lambdas::uppercase_by_prefix_loop;
/// let names = ["Ana", "João", "Alice"];
/// assert_eq!(uppercase_by_prefix_loop(&names, 'A'), ["ALICE", "ANA"]);
/// ```
pub fn uppercase_by_prefix_loop<S: AsRef<str>>(names: &[S], prefix: char) -> Vec<String> {
    let mut matching = Vec::new();
    for name in names {
        let name = name.as_ref();
        if name.starts_with(prefix) {
            matching.push(name.to_uppercase());
        }
    }
    matching.sort();
    matching
}

/// Same result as [`uppercase_by_prefix_loop`], written as a pipeline.
///
/// # Examples
/// ```
/// use estudos_lessons::lambdas::uppercase_by_prefix_pipeline;
/// let names = ["Ana", "João", "Pedro"];
/// assert_eq!(uppercase_by_prefix_pipeline(&names, 'A'), ["ANA"]);
/// ```
pub fn uppercase_by_prefix_pipeline<S: AsRef<str>>(names: &[S], prefix: char) -> Vec<String> {
    let mut matching: Vec<String> = names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| n.starts_with(prefix))
        .map(str::to_uppercase)
        .collect();
    matching.sort();
    matching
}

/// Prints every name on its own line through a closure.
pub fn for_each_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    samples
        .names
        .iter()
        .try_for_each(|name| writeln!(out, "{name}"))?;
    Ok(())
}

/// Shows the loop and the pipeline side by side.
pub fn prefix_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    let by_loop = uppercase_by_prefix_loop(&samples.names, 'A');
    let by_pipeline = uppercase_by_prefix_pipeline(&samples.names, 'A');
    debug!(matches = by_loop.len(), "prefix filter applied");

    writeln!(out, "{by_loop:?}")?;
    writeln!(out, "{by_pipeline:?}")?;
    Ok(())
}
