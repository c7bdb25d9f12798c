//! Anonymous objects versus closures.
//!
//! Two ways to hand someone "a thing that can be run":
//!
//! - **Anonymous object**: a struct written for the occasion that implements
//!   the trait. It is a value of its own, so asking it "who am I?" names the
//!   struct, not whoever built it.
//! - **Closure**: a function literal that captures its environment. Asking it
//!   "who am I?" answers with whatever it captured, i.e. the enclosing scope.
//!
//! Identities are [`ScopeId`] tokens so the difference can be printed and
//! compared.

use std::io::Write;

use estudos_common::{NamedHolder, Samples, ScopeId, Scopes};
use tracing::debug;

use crate::error::Result;

// ============================================================================
// Runnables: same interface, two implementations
// ============================================================================

/// Something that can be run for its message.
pub trait Runnable {
    fn run(&self) -> String;
}

/// A one-off implementation, the Rust counterpart of an anonymous class.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousRunnable;

impl Runnable for AnonymousRunnable {
    fn run(&self) -> String {
        "running as anonymous object".to_string()
    }
}

impl<F> Runnable for F
where
    F: Fn() -> String,
{
    fn run(&self) -> String {
        self()
    }
}

// ============================================================================
// Enclosing context: who does `self` refer to?
// ============================================================================

/// A callback that can say which scope it resolves `self` to.
pub trait Callback {
    fn enclosing(&self) -> ScopeId;
}

/// The anonymous-object variant: it opens a scope of its own when built.
#[derive(Debug, Clone, Copy)]
pub struct AnonymousCallback {
    this: ScopeId,
}

impl AnonymousCallback {
    #[must_use]
    pub fn new(scopes: &mut Scopes) -> Self {
        Self {
            this: scopes.enter("NamedHolder$1"),
        }
    }
}

impl Callback for AnonymousCallback {
    fn enclosing(&self) -> ScopeId {
        self.this
    }
}

impl<F> Callback for F
where
    F: Fn() -> ScopeId,
{
    fn enclosing(&self) -> ScopeId {
        self()
    }
}

/// The two answers to "what is my enclosing context?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextReport {
    pub anonymous: ScopeId,
    pub closure: ScopeId,
}

/// Builds both callback variants inside `holder` and asks each for its
/// enclosing context.
///
/// `scopes` must not hand out the holder's own index; a registry started
/// with [`Scopes::after`] the holder's scope guarantees that.
///
/// # Examples
/// ```
/// use estudos_common::{Samples, Scopes};
/// use estudos_lessons::callbacks::enclosing_contexts;
///
/// let samples = Samples::new();
/// let mut scopes = Scopes::after(samples.holder.scope());
/// let report = enclosing_contexts(&samples.holder, &mut scopes);
/// assert_ne!(report.anonymous, report.closure);
/// assert_eq!(report.closure, samples.holder.scope());
/// ```
pub fn enclosing_contexts(holder: &NamedHolder, scopes: &mut Scopes) -> ContextReport {
    let anonymous = AnonymousCallback::new(scopes);
    let this = holder.scope();
    let closure = move || this;

    ContextReport {
        anonymous: anonymous.enclosing(),
        closure: closure.enclosing(),
    }
}

// ============================================================================
// Lessons
// ============================================================================

/// Runs an anonymous runnable and a closure through the same trait object.
pub fn runnable_lesson(_samples: &Samples, out: &mut dyn Write) -> Result<()> {
    let runnables: [Box<dyn Runnable>; 2] = [
        Box::new(AnonymousRunnable),
        Box::new(|| "running as closure".to_string()),
    ];
    for runnable in &runnables {
        writeln!(out, "{}", runnable.run())?;
    }
    Ok(())
}

/// Prints the scope each callback variant resolves `self` to.
///
/// The registry is local to this lesson, so the shared samples stay untouched.
pub fn identity_lesson(samples: &Samples, out: &mut dyn Write) -> Result<()> {
    let mut scopes = Scopes::after(samples.holder.scope());
    let report = enclosing_contexts(&samples.holder, &mut scopes);
    debug!(
        anonymous = %report.anonymous,
        closure = %report.closure,
        "enclosing contexts resolved"
    );

    writeln!(out, "{}", report.anonymous.label())?;
    writeln!(out, "{}", report.closure.label())?;
    Ok(())
}
