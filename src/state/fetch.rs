//! Fetch Lifecycle
//!
//! Primitives for the fetch-render-mutate-refetch cycle shared by all
//! pages: a submit gate for mutating forms and a generation token that
//! discards responses arriving after their view moved on.

use std::cell::Cell;
use std::rc::Rc;

/// Gate for mutating forms: submission is rejected while a request is in
/// flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn is_submitting(self) -> bool {
        self == SubmitPhase::Submitting
    }
}

/// Generation counter tied to a view's active lifetime.
///
/// Each fetch takes a [`FetchGuard`] before awaiting; the response is
/// applied only while the guard is current. Unmounting the view or
/// starting a superseding refetch invalidates outstanding guards, so
/// late responses are dropped instead of clobbering fresh state.
#[derive(Clone, Debug, Default)]
pub struct ViewToken {
    generation: Rc<Cell<u64>>,
}

impl ViewToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current generation for one in-flight request.
    pub fn issue(&self) -> FetchGuard {
        FetchGuard {
            generation: self.generation.clone(),
            issued: self.generation.get(),
        }
    }

    /// Invalidate every guard issued so far.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

/// Proof that a response still belongs to the view that requested it.
#[derive(Debug)]
pub struct FetchGuard {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl FetchGuard {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_phase_starts_idle() {
        assert!(!SubmitPhase::default().is_submitting());
        assert!(SubmitPhase::Submitting.is_submitting());
    }

    #[test]
    fn fresh_guard_is_current() {
        let token = ViewToken::new();
        assert!(token.issue().is_current());
    }

    #[test]
    fn invalidation_stales_outstanding_guards() {
        let token = ViewToken::new();
        let guard = token.issue();

        token.invalidate();

        assert!(!guard.is_current());
        assert!(token.issue().is_current());
    }

    #[test]
    fn superseding_refetch_drops_the_earlier_response() {
        let token = ViewToken::new();

        // First fetch goes out.
        let first = token.issue();

        // A refetch supersedes it before the response lands.
        token.invalidate();
        let second = token.issue();

        assert!(!first.is_current());
        assert!(second.is_current());
    }
}
