//! Single-value capture.

use crate::core::{Reducer, Reply};
use serde::{Deserialize, Serialize};

/// When a [`Cap`] stops accepting values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapPolicy {
    /// Capture the first value and halt.
    #[default]
    HaltOnFirst,

    /// Keep overwriting with the latest value; never halt.
    KeepLast,
}

/// Terminal reducer holding at most one value.
///
/// # Example
///
/// ```rust
/// use transducers::reducers::{cap, CapPolicy};
/// use transducers::transduce;
/// use transducers::xform::map;
///
/// let first = transduce(map(|x: i32| x * 2), cap(CapPolicy::HaltOnFirst), vec![4, 5]);
/// let last = transduce(map(|x: i32| x * 2), cap(CapPolicy::KeepLast), vec![4, 5]);
/// assert_eq!(first, Some(8));
/// assert_eq!(last, Some(10));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Cap<T> {
    value: Option<T>,
    policy: CapPolicy,
}

impl<T> Cap<T> {
    pub fn new(policy: CapPolicy) -> Self {
        Self {
            value: None,
            policy,
        }
    }

    pub fn policy(&self) -> CapPolicy {
        self.policy
    }
}

impl<T> Default for Cap<T> {
    fn default() -> Self {
        Self::new(CapPolicy::default())
    }
}

impl<T> Reducer<T> for Cap<T> {
    type Output = Option<T>;

    fn step(mut self, input: T) -> Reply<Self> {
        if self.is_halted() {
            return Reply::Halt(self);
        }

        self.value = Some(input);
        match self.policy {
            CapPolicy::HaltOnFirst => Reply::Halt(self),
            CapPolicy::KeepLast => Reply::Continue(self),
        }
    }

    fn finish(self) -> Option<T> {
        self.value
    }

    fn is_halted(&self) -> bool {
        self.policy == CapPolicy::HaltOnFirst && self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_halts_on_first() {
        let cap = Cap::default();
        assert_eq!(cap.policy(), CapPolicy::HaltOnFirst);

        let reply = cap.step(1);
        assert!(reply.is_halted());

        let reply = reply.into_state().step(2);
        assert!(reply.is_halted());
        assert_eq!(reply.into_state().finish(), Some(1));
    }

    #[test]
    fn keep_last_never_halts() {
        let cap = Cap::new(CapPolicy::KeepLast).absorb("a").absorb("b");
        assert!(!Reducer::<&str>::is_halted(&cap));
        assert_eq!(cap.finish(), Some("b"));
    }

    #[test]
    fn finish_without_input_is_none() {
        assert_eq!(Cap::<u8>::default().finish(), None);
    }

    #[test]
    fn policy_serializes_correctly() {
        let json = serde_json::to_string(&CapPolicy::KeepLast).unwrap();
        let deserialized: CapPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, CapPolicy::KeepLast);
    }
}
