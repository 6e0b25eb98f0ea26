//! Rule configuration
//!
//! An insertion-ordered collection of (key, record-aware strategy)
//! bindings at one nesting level. Dotted paths recurse: `"a.b"` builds a
//! sub-configuration binding `"b"`, lifts it to a nested engine, and
//! binds that under `"a"`; arbitrary depth costs one configuration per
//! segment.
//!
//! Binding order is application order. No duplicate-path detection is
//! performed: registering the same path twice yields two bindings, both
//! applied in order, so the later one overwrites the earlier one's
//! effect.

use crate::masking::adapter::FieldAdapter;
use crate::masking::engine::MaskingEngine;
use crate::masking::strategy::{MaskStrategy, RecordStrategy};

/// A resolved (key, record-aware strategy) pair.
pub struct Binding {
    key: String,
    strategy: Box<dyn RecordStrategy>,
}

impl Binding {
    /// The first path segment this binding targets.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn strategy_mut(&mut self) -> &mut dyn RecordStrategy {
        self.strategy.as_mut()
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding").field("key", &self.key).finish_non_exhaustive()
    }
}

/// Ordered set of bindings for one nesting level.
#[derive(Debug, Default)]
pub struct MaskingConfiguration {
    bindings: Vec<Binding>,
}

impl MaskingConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scalar strategy for `path`, wrapping it in the
    /// record-aware adapter.
    pub fn with_entry(self, path: &str, strategy: Box<dyn MaskStrategy>) -> Self {
        self.with_record_entry(path, Box::new(FieldAdapter::new(strategy)))
    }

    /// Register an already record-aware strategy for `path`.
    ///
    /// Splits on the first dot: `"a.b.c"` binds, under `"a"`, a nested
    /// engine whose configuration carries one entry for `"b.c"`.
    pub fn with_record_entry(mut self, path: &str, strategy: Box<dyn RecordStrategy>) -> Self {
        match path.split_once('.') {
            Some((head, rest)) => {
                let nested = MaskingConfiguration::new().with_record_entry(rest, strategy);
                let lifted = FieldAdapter::new(Box::new(nested.into_nested_engine()));
                self.bindings.push(Binding {
                    key: head.to_string(),
                    strategy: Box::new(lifted),
                });
            }
            None => self.bindings.push(Binding {
                key: path.to_string(),
                strategy,
            }),
        }
        self
    }

    /// Exact first-segment match; no wildcards.
    pub fn lookup(&self, key: &str) -> Option<&dyn RecordStrategy> {
        self.bindings
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.strategy.as_ref())
    }

    /// Bindings in registration (= application) order.
    pub fn entries(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn bindings_mut(&mut self) -> impl Iterator<Item = &mut Binding> {
        self.bindings.iter_mut()
    }

    /// Consume the configuration into a root masking driver.
    pub fn into_engine(self) -> MaskingEngine {
        MaskingEngine::root(self)
    }

    fn into_nested_engine(self) -> MaskingEngine {
        MaskingEngine::nested(self)
    }
}
