//! Template selection strategy.
//!
//! Coaching replies are drawn from fixed per-stage pools. Selection is
//! randomized in production to avoid repetitive replies across turns, and
//! injected as a strategy so tests can substitute a deterministic pick.

use rand::Rng;

/// Strategy for picking an entry from a template pool.
pub trait TemplateSelector: Send + Sync {
    /// Returns an index in `0..pool_len`.
    ///
    /// `pool_len` is always at least 1 (pools are fixed, non-empty
    /// constants).
    fn pick(&self, pool_len: usize) -> usize;
}

/// Uniform-random selection from the process-wide random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTemplateSelector;

impl TemplateSelector for RandomTemplateSelector {
    fn pick(&self, pool_len: usize) -> usize {
        rand::thread_rng().gen_range(0..pool_len)
    }
}

/// Deterministic selection, for tests and reproducible tooling.
///
/// Always picks `index % pool_len`.
#[derive(Debug, Clone, Copy)]
pub struct FixedTemplateSelector(pub usize);

impl TemplateSelector for FixedTemplateSelector {
    fn pick(&self, pool_len: usize) -> usize {
        self.0 % pool_len
    }
}
