//! NaP ("Not-a-Point") policy (spec §4.8, component C9).
//!
//! A NaP is the sentinel coordinate pattern that the arithmetic kernels in
//! [`crate::coords`] can produce as an output even though it doesn't
//! represent any point on the curve — notably from [`crate::coords::add`]
//! fed a difference that hits an infinite 2-torsion point. Detection is
//! per-coordinate-system and lives next to each coordinate type; this
//! module holds the process-wide *policy hook* spec §4.8/§5 describes:
//! what happens the moment a NaP is produced.
//!
//! Modeled on `algebra-core`'s GPU scalar-mul profiler
//! (`curves/gpu/scalar_mul/mod.rs`), which reaches for a lazily
//! initialized, globally shared cell for its one piece of process-wide
//! mutable state. The policy here only ever takes one of two values, so
//! a single `AtomicU8` stands in for that cell instead of a
//! `Mutex`-guarded one — cheaper to read on the hot path (every NaP
//! check) and, unlike `std::sync::Mutex`, available under `no_std` too,
//! which matters since this hook is consulted from every arithmetic
//! kernel regardless of the `std` feature.

use core::sync::atomic::{AtomicU8, Ordering};

/// What happens when a kernel operation produces a NaP.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NapPolicy {
    /// Propagate the NaP coordinate pattern silently (the default); callers
    /// that care must check `is_nap()` themselves.
    Propagate,
    /// Panic immediately, surfacing the invariant violation at the call
    /// site that produced it rather than at some later, harder-to-trace
    /// read.
    Panic,
}

const PROPAGATE: u8 = 0;
const PANIC: u8 = 1;

static POLICY: AtomicU8 = AtomicU8::new(PROPAGATE);

impl NapPolicy {
    fn to_tag(self) -> u8 {
        match self {
            NapPolicy::Propagate => PROPAGATE,
            NapPolicy::Panic => PANIC,
        }
    }

    fn from_tag(tag: u8) -> Self {
        match tag {
            PANIC => NapPolicy::Panic,
            _ => NapPolicy::Propagate,
        }
    }
}

/// Installs a new process-wide NaP policy, returning the previous one.
pub fn set_policy(policy: NapPolicy) -> NapPolicy {
    NapPolicy::from_tag(POLICY.swap(policy.to_tag(), Ordering::SeqCst))
}

/// Reads the current process-wide NaP policy.
pub fn policy() -> NapPolicy {
    NapPolicy::from_tag(POLICY.load(Ordering::SeqCst))
}

/// Runs the installed policy against a freshly produced coordinate result.
/// Call sites pass `is_nap` lazily (a closure, not a bool) so that under
/// [`NapPolicy::Propagate`] — the overwhelmingly common case — no
/// coordinate inspection happens at all.
pub(crate) fn check(is_nap: impl FnOnce() -> bool) {
    if policy() == NapPolicy::Panic && is_nap() {
        panic!("NaP policy violation: arithmetic kernel produced a Not-a-Point result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_propagate() {
        assert_eq!(policy(), NapPolicy::Propagate);
    }

    #[test]
    fn set_policy_round_trips() {
        let prev = set_policy(NapPolicy::Panic);
        assert_eq!(policy(), NapPolicy::Panic);
        set_policy(prev);
        assert_eq!(policy(), NapPolicy::Propagate);
    }

    #[test]
    #[should_panic(expected = "NaP policy violation")]
    fn panic_policy_panics_on_nap() {
        let prev = set_policy(NapPolicy::Panic);
        check(|| true);
        set_policy(prev);
    }
}
