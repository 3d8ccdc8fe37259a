//! The incremental-query adapter.
//!
//! Routes the host compiler's attribute-driven symbol queries into the
//! typed shape generator callers expect: attribute identity + node-shape
//! predicate + transform, yielding a lazy, restartable sequence that is
//! re-evaluated against each compilation snapshot and honors
//! cancellation cooperatively.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sharpgen_emit::AttributeSpec;

/// Cooperative cancellation signal shared with the host.
///
/// Cheap to clone; all clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation to every holder of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been signalled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// One compilation snapshot's view of declared symbols.
///
/// The host re-implements this per snapshot; the adapter stays agnostic
/// of how symbols are produced.
pub trait SymbolSource {
    /// The host's symbol representation.
    type Symbol;

    /// Yield every declaration annotated with the given fully-qualified
    /// attribute name, together with its attribute instances.
    fn symbols_with_attribute<'a>(
        &'a self,
        qualified_attribute: &str,
    ) -> Box<dyn Iterator<Item = (Self::Symbol, Vec<AttributeSpec>)> + 'a>;
}

/// An attribute identity plus a node-shape predicate and a transform.
///
/// `evaluate` is restartable: call it again with the next snapshot to
/// recompute the sequence.
pub struct AttributeQuery<S, T> {
    attribute: String,
    predicate: Box<dyn Fn(&S) -> bool>,
    transform: Box<dyn Fn(S, &[AttributeSpec], &CancellationToken) -> Option<T>>,
}

impl<S, T> AttributeQuery<S, T> {
    /// Create a query for declarations carrying `attribute`.
    ///
    /// `predicate` filters on syntactic shape; `transform` maps a
    /// matched symbol and its attribute instances to the caller's value,
    /// returning `None` to skip (including when it observes
    /// cancellation).
    pub fn new<P, F>(attribute: impl Into<String>, predicate: P, transform: F) -> Self
    where
        P: Fn(&S) -> bool + 'static,
        F: Fn(S, &[AttributeSpec], &CancellationToken) -> Option<T> + 'static,
    {
        Self {
            attribute: attribute.into(),
            predicate: Box::new(predicate),
            transform: Box::new(transform),
        }
    }

    /// The fully-qualified attribute name this query matches.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Evaluate the query against one compilation snapshot.
    ///
    /// Lazy: symbols are pulled, filtered and transformed one at a time.
    /// Cancellation is checked between elements; a cancelled token ends
    /// the sequence early.
    pub fn evaluate<'a, Src>(
        &'a self,
        source: &'a Src,
        token: &'a CancellationToken,
    ) -> impl Iterator<Item = T> + 'a
    where
        Src: SymbolSource<Symbol = S>,
        S: 'a,
        T: 'a,
    {
        source
            .symbols_with_attribute(&self.attribute)
            .take_while(move |_| !token.is_cancelled())
            .filter(move |(symbol, _)| (self.predicate)(symbol))
            .filter_map(move |(symbol, attributes)| {
                (self.transform)(symbol, &attributes, token)
            })
    }
}
