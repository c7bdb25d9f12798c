//! Reduce: folding a sequence into one value.
//!
//! Without a seed there is nothing to return for an empty input, so the
//! result is an `Option`. With a seed the answer always exists. Callers check
//! for presence before they print anything.
//!
//! Integer sums wrap on overflow instead of panicking.

use std::io::Write;

use estudos_common::Samples;

use crate::error::Result;

// ============================================================================
// Numeric folds
// ============================================================================

/// Pairwise left-fold sum with no seed.
///
/// # Examples
/// ```
/// use estudos_lessons::reduce::fold_no_seed;
/// assert_eq!(fold_no_seed(&[1, 2, 3, 4, 5]), Some(15));
/// assert_eq!(fold_no_seed(&[]), None);
/// ```
pub fn fold_no_seed(numbers: &[i32]) -> Option<i32> {
    numbers.iter().copied().reduce(i32::wrapping_add)
}

/// Left-fold sum starting from `seed`.
///
/// # Examples
/// ```
/// use estudos_lessons::reduce::fold_with_seed;
/// assert_eq!(fold_with_seed(0, &[1, 2, 3, 4, 5]), 15);
/// assert_eq!(fold_with_seed(0, &[]), 0);
/// ```
pub fn fold_with_seed(seed: i32, numbers: &[i32]) -> i32 {
    numbers.iter().fold(seed, |acc, &n| acc.wrapping_add(n))
}

// ============================================================================
// Other reductions
// ============================================================================

/// Joins names with `", "`. Nothing to join means no result.
///
/// # Examples
/// ```
/// use estudos_lessons::reduce::join_names;
/// assert_eq!(join_names(&["Ana", "João", "Pedro"]).as_deref(), Some("Ana, João, Pedro"));
/// assert_eq!(join_names::<&str>(&[]), None);
/// ```
pub fn join_names<S: AsRef<str>>(names: &[S]) -> Option<String> {
    names
        .iter()
        .map(|n| n.as_ref().to_string())
        .reduce(|a, b| format!("{a}, {b}"))
}

/// Largest element, found by reducing with `max`.
pub fn max(numbers: &[i32]) -> Option<i32> {
    numbers.iter().copied().reduce(i32::max)
}

// ============================================================================
// Lesson
// ============================================================================

/// Prints each reduction, but only after checking that it produced a value.
pub fn reduce_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    if let Some(total) = fold_no_seed(&samples.numbers) {
        writeln!(out, "{total}")?;
    }

    writeln!(out, "{}", fold_with_seed(0, &samples.numbers))?;

    if let Some(joined) = join_names(&samples.names) {
        writeln!(out, "{joined}")?;
    }

    if let Some(largest) = max(&samples.numbers) {
        writeln!(out, "{largest}")?;
    }
    Ok(())
}
