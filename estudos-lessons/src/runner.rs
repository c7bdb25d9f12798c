//! The run-to-completion driver.
//!
//! A [`Lesson`] is a title plus a plain function over the shared samples. The
//! [`Runner`] calls them one after another, each one finishing (output
//! included) before the next starts. The first failure stops the run.

use std::io::Write;

use estudos_common::Samples;
use tracing::{debug, info, info_span};

use crate::error::{LessonError, Result};
use crate::{callbacks, lambdas, optional, overloading, reduce, streams, strings};

/// Signature every lesson body has.
pub type LessonFn = fn(&Samples, &mut dyn Write) -> Result<()>;

/// One self-contained demonstration step.
#[derive(Clone, Copy)]
pub struct Lesson {
    pub title: &'static str,
    pub run: LessonFn,
}

impl Lesson {
    #[must_use]
    pub const fn new(title: &'static str, run: LessonFn) -> Self {
        Self { title, run }
    }
}

impl std::fmt::Debug for Lesson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lesson").field("title", &self.title).finish()
    }
}

/// What a completed run reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: usize,
}

/// The full curriculum, in the order it is taught.
#[must_use]
pub fn curriculum() -> Vec<Lesson> {
    vec![
        Lesson::new("for-each", lambdas::for_each_lesson),
        Lesson::new("uppercase names by prefix", lambdas::prefix_lesson),
        Lesson::new("sum of evens", streams::sum_even_lesson),
        Lesson::new("distinct count", streams::count_distinct_lesson),
        Lesson::new("partition by length", streams::partition_lesson),
        Lesson::new("anonymous object vs closure", callbacks::runnable_lesson),
        Lesson::new("enclosing context", callbacks::identity_lesson),
        Lesson::new("map vs flat_map", streams::map_flatten_lesson),
        Lesson::new("reduce", reduce::reduce_lesson),
        Lesson::new("optional values", optional::optional_lesson),
        Lesson::new("key-value store", optional::store_lesson),
        Lesson::new("immutable and growable strings", strings::strings_lesson),
        Lesson::new("overloading", overloading::overloading_lesson),
        Lesson::new("append benchmark", strings::benchmark_lesson),
    ]
}

/// Runs lessons strictly in order.
#[derive(Debug, Clone)]
pub struct Runner {
    lessons: Vec<Lesson>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(curriculum())
    }
}

impl Runner {
    #[must_use]
    pub fn new(lessons: Vec<Lesson>) -> Self {
        Self { lessons }
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Runs every lesson against `samples`, writing the transcript to `out`.
    ///
    /// # Example
    /// ```
    /// use estudos_common::Samples;
    /// use estudos_lessons::runner::{Lesson, Runner};
    ///
    /// let runner = Runner::new(vec![Lesson::new("sum of evens", estudos_lessons::streams::sum_even_lesson)]);
    /// let mut out = Vec::new();
    /// let summary = runner.run(&Samples::new(), &mut out).unwrap();
    ///
    /// assert_eq!(summary.completed, 1);
    /// assert_eq!(String::from_utf8(out).unwrap(), "== sum of evens ==\n6\n");
    /// ```
    pub fn run(&self, samples: &Samples, out: &mut dyn Write) -> Result<RunSummary> {
        let mut completed = 0;
        for lesson in &self.lessons {
            let span = info_span!("lesson", title = lesson.title);
            let _enter = span.enter();

            writeln!(out, "== {} ==", lesson.title)?;
            (lesson.run)(samples, out).map_err(|source| LessonError::Failed {
                lesson: lesson.title,
                source: Box::new(source),
            })?;
            out.flush()?;

            completed += 1;
            debug!(completed, "lesson finished");
        }

        info!(completed, "curriculum finished");
        Ok(RunSummary { completed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing(_: &Samples, _: &mut dyn Write) -> Result<()> {
        Err(LessonError::Io(std::io::Error::other("stdout closed")))
    }

    fn greeting(_: &Samples, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "olá")?;
        Ok(())
    }

    #[test]
    fn test_curriculum_order() {
        let titles: Vec<_> = curriculum().iter().map(|l| l.title).collect();
        assert_eq!(titles.first(), Some(&"for-each"));
        assert_eq!(titles.last(), Some(&"append benchmark"));
        assert_eq!(titles.len(), 14);
    }

    #[test]
    fn test_runs_in_order_with_headers() {
        let runner = Runner::new(vec![
            Lesson::new("one", greeting),
            Lesson::new("two", greeting),
        ]);
        let mut out = Vec::new();
        let summary = runner.run(&Samples::new(), &mut out).unwrap();

        assert_eq!(summary, RunSummary { completed: 2 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "== one ==\nolá\n== two ==\nolá\n"
        );
    }

    #[test]
    fn test_first_failure_stops_the_run() {
        let runner = Runner::new(vec![
            Lesson::new("ok", greeting),
            Lesson::new("broken", failing),
            Lesson::new("never", greeting),
        ]);
        let mut out = Vec::new();
        let err = runner.run(&Samples::new(), &mut out).unwrap_err();

        assert!(matches!(err, LessonError::Failed { lesson: "broken", .. }));
        let transcript = String::from_utf8(out).unwrap();
        assert!(!transcript.contains("never"));
    }

    #[test]
    fn test_empty_runner() {
        let mut out = Vec::new();
        let summary = Runner::new(Vec::new()).run(&Samples::new(), &mut out).unwrap();
        assert_eq!(summary.completed, 0);
        assert!(out.is_empty());
    }
}
