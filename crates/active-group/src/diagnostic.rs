#![forbid(unsafe_code)]

//! Diagnostic events emitted by the group core.
//!
//! Nothing in the core fails. Misuse is reported as a [`Diagnostic`] pushed to
//! a caller-supplied [`DiagnosticSink`], and the group degrades to an empty
//! or best-effort rendering.
//!
//! # Failure Modes
//!
//! | Diagnostic | Cause | Recovery |
//! |------------|-------|----------|
//! | `MissingChildren` | no `children` input | render nothing |
//! | `SingularChild` | one element instead of a sequence | render nothing |
//! | `AmbiguousNesting` | nesting on, no single nested element | treat entry as non-nested |
//! | `ActiveOutOfRange` | external index past the roster | adopt it, nothing renders active |

use std::fmt;

/// How loud a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A structured diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("active group received no children; pass two or more children")]
    MissingChildren,

    #[error(
        "active group cannot manage a single child; pass a sequence of children, \
         or use `custom_styles` on a plain container to style one element"
    )]
    SingularChild,

    #[error(
        "child {index} has {nested} nested elements where exactly one primary \
         component was expected; did you mean to set `no_nesting`? treating it as non-nested"
    )]
    AmbiguousNesting { index: usize, nested: usize },

    #[error("active index {index} is outside the {len} managed children; no child will render active")]
    ActiveOutOfRange { index: usize, len: usize },
}

impl Diagnostic {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::MissingChildren | Self::SingularChild => Severity::Error,
            Self::AmbiguousNesting { .. } | Self::ActiveOutOfRange { .. } => Severity::Warning,
        }
    }

    /// Stable short code for the diagnostic kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingChildren => "missing-children",
            Self::SingularChild => "singular-child",
            Self::AmbiguousNesting { .. } => "ambiguous-nesting",
            Self::ActiveOutOfRange { .. } => "active-out-of-range",
        }
    }
}

/// Receiver for diagnostics. The host decides how to surface them.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// Collects every diagnostic in emission order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Logs diagnostics through `tracing` under the `active_group` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => tracing::error!(
                target: "active_group",
                code = diagnostic.code(),
                "{diagnostic}"
            ),
            Severity::Warning => tracing::warn!(
                target: "active_group",
                code = diagnostic.code(),
                "{diagnostic}"
            ),
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(Diagnostic)> DiagnosticSink for FnSink<F> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (self.0)(diagnostic);
    }
}

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSink(..)")
    }
}


#[cfg(test)]
mod tests {
    use super::capture::capture;
    use super::*;
    use tracing::Level;

    // ── Severity / codes ────────────────────────────────────────────

    #[test]
    fn severities() {
        assert_eq!(Diagnostic::MissingChildren.severity(), Severity::Error);
        assert_eq!(Diagnostic::SingularChild.severity(), Severity::Error);
        assert_eq!(
            Diagnostic::AmbiguousNesting { index: 0, nested: 0 }.severity(),
            Severity::Warning
        );
        assert_eq!(
            Diagnostic::ActiveOutOfRange { index: 4, len: 2 }.severity(),
            Severity::Warning
        );
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            Diagnostic::MissingChildren.code(),
            Diagnostic::SingularChild.code(),
            Diagnostic::AmbiguousNesting { index: 0, nested: 0 }.code(),
            Diagnostic::ActiveOutOfRange { index: 0, len: 0 }.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn messages_mention_the_fix() {
        assert!(Diagnostic::SingularChild.to_string().contains("sequence"));
        let msg = Diagnostic::AmbiguousNesting { index: 2, nested: 0 }.to_string();
        assert!(msg.contains("child 2"));
        assert!(msg.contains("no_nesting"));
    }

    // ── Sinks ───────────────────────────────────────────────────────

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.emit(Diagnostic::MissingChildren);
        sink.emit(Diagnostic::SingularChild);
        assert_eq!(
            sink,
            vec![Diagnostic::MissingChildren, Diagnostic::SingularChild]
        );
    }

    #[test]
    fn mut_ref_forwards() {
        fn emit_one<S: DiagnosticSink>(mut sink: S) {
            sink.emit(Diagnostic::MissingChildren);
        }
        let mut sink: Vec<Diagnostic> = Vec::new();
        emit_one(&mut sink);
        emit_one(&mut sink);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn fn_sink_calls_closure() {
        let mut seen = 0;
        let mut sink = FnSink(|_d: Diagnostic| seen += 1);
        sink.emit(Diagnostic::MissingChildren);
        sink.emit(Diagnostic::SingularChild);
        drop(sink);
        assert_eq!(seen, 2);
    }

    #[test]
    fn tracing_sink_levels_follow_severity() {
        let events = capture(|| {
            let mut sink = TracingSink;
            sink.emit(Diagnostic::MissingChildren);
            sink.emit(Diagnostic::AmbiguousNesting { index: 1, nested: 0 });
        });
        let levels: Vec<(Level, &str)> = events
            .iter()
            .map(|e| (e.level, e.target.as_str()))
            .collect();
        assert_eq!(
            levels,
            vec![(Level::ERROR, "active_group"), (Level::WARN, "active_group")]
        );
        assert!(events[0].message.contains("no children"));
    }

    #[test]
    fn null_sink_logs_nothing() {
        let events = capture(|| NullSink.emit(Diagnostic::MissingChildren));
        assert!(events.is_empty());
    }
}
