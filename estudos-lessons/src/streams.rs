//! Streams: sequence pipelines over slices.
//!
//! Rust iterators are lazy pipelines. Nothing runs until a terminal step
//! (`sum`, `count`, `collect`) pulls values through `filter` and `map`.
//! Integer sums wrap on overflow instead of panicking.

use std::collections::HashSet;
use std::fmt;
use std::io::Write;

use estudos_common::Samples;
use tracing::debug;

use crate::error::Result;

// ============================================================================
// Filter and reduce: evens and distinct values
// ============================================================================

/// Sum of the elements divisible by two, wrapping on overflow. An empty slice
/// sums to 0.
///
/// # Examples
/// ```
/// use estudos_lessons::streams::sum_even;
/// assert_eq!(sum_even(&[1, 2, 3, 4, 5]), 6);
/// assert_eq!(sum_even(&[]), 0);
/// ```
pub fn sum_even(numbers: &[i32]) -> i32 {
    numbers
        .iter()
        .filter(|&&n| n % 2 == 0)
        .fold(0, |acc, &n| acc.wrapping_add(n))
}

/// Number of distinct values, compared case-sensitively.
///
/// # Examples
/// ```
/// use estudos_lessons::streams::count_distinct;
/// assert_eq!(count_distinct(&["Ana", "Ana"]), 1);
/// assert_eq!(count_distinct(&["Ana", "ana"]), 2);
/// ```
pub fn count_distinct<S: AsRef<str>>(names: &[S]) -> usize {
    names.iter().map(|n| n.as_ref()).collect::<HashSet<&str>>().len()
}

// ============================================================================
// Grouping: partition by a predicate
// ============================================================================

/// Two groups split by a predicate; every input lands in exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition<T> {
    pub matching: Vec<T>,
    pub rest: Vec<T>,
}

impl<T: fmt::Debug> fmt::Display for Partition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{false: {:?}, true: {:?}}}", self.rest, self.matching)
    }
}

/// Splits names into those longer than `threshold` and the rest, keeping
/// input order inside each group. Length counts characters, not bytes.
///
/// # Examples
/// ```
/// use estudos_lessons::streams::partition_by_length;
/// let groups = partition_by_length(&["Ana", "João", "Pedro"], 3);
/// assert_eq!(groups.matching, ["João", "Pedro"]);
/// assert_eq!(groups.rest, ["Ana"]);
/// ```
pub fn partition_by_length<S: AsRef<str>>(names: &[S], threshold: usize) -> Partition<String> {
    let (matching, rest): (Vec<String>, Vec<String>) = names
        .iter()
        .map(|n| n.as_ref().to_string())
        .partition(|n| n.chars().count() > threshold);
    Partition { matching, rest }
}

// ============================================================================
// map versus flat_map
// ============================================================================

/// Uppercases every name, one output per input.
pub fn map_uppercase<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|n| n.as_ref().to_uppercase()).collect()
}

/// Concatenates the inner sequences, outer order first.
///
/// # Examples
/// ```
/// use estudos_lessons::streams::flatten;
/// let nested = vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 9]];
/// assert_eq!(flatten(&nested), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn flatten<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flat_map(|inner| inner.iter().cloned()).collect()
}

// ============================================================================
// Lessons
// ============================================================================

/// Prints the sum of the even sample numbers.
pub fn sum_even_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", sum_even(&samples.numbers))?;
    Ok(())
}

/// Prints how many distinct sample names there are.
pub fn count_distinct_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", count_distinct(&samples.names))?;
    Ok(())
}

/// Prints the sample names split at length 3.
pub fn partition_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    let groups = partition_by_length(&samples.names, 3);
    debug!(
        longer = groups.matching.len(),
        rest = groups.rest.len(),
        "names partitioned"
    );
    writeln!(out, "{groups}")?;
    Ok(())
}

/// `map` keeps one output per input; `flat_map` flattens nested sequences.
pub fn map_flatten_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{:?}", map_uppercase(&samples.names))?;
    writeln!(out, "{:?}", flatten(&samples.nested))?;
    Ok(())
}
