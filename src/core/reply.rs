//! Step replies.
//!
//! Every stage answers an ingested element with a [`Reply`] that wraps its
//! next state and tells the driver whether to keep feeding it.

use serde::{Deserialize, Serialize};

/// Strength of a [`Reply`].
///
/// Tags are ordered `Continue < Empty < Halt`, so merging two replies keeps
/// the stronger signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReplyTag {
    Continue,
    Empty,
    Halt,
}

/// Signal returned by a step, carrying the next state.
///
/// `Halt` is one-way: once a computation has halted, combinators on this
/// type never let the halt become observable as `Continue` again.
///
/// # Example
///
/// ```rust
/// use transducers::Reply;
///
/// let reply = Reply::Continue(1).and_then(|n| Reply::Halt(n + 1));
/// assert!(reply.is_halted());
///
/// // Halt is sticky even if the chained step wants to continue.
/// let reply = Reply::Halt(1).and_then(|n| Reply::Continue(n + 1));
/// assert_eq!(reply, Reply::Halt(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reply<S> {
    /// Processing may resume with this state.
    Continue(S),

    /// The element was absorbed without anything reaching the terminal
    /// reducer. Drivers treat it like `Continue`.
    Empty(S),

    /// Processing must stop; this is the final state.
    Halt(S),
}

impl<S> Reply<S> {
    /// Build a reply with the given strength.
    pub fn with_tag(tag: ReplyTag, state: S) -> Self {
        match tag {
            ReplyTag::Continue => Reply::Continue(state),
            ReplyTag::Empty => Reply::Empty(state),
            ReplyTag::Halt => Reply::Halt(state),
        }
    }

    pub fn tag(&self) -> ReplyTag {
        match self {
            Reply::Continue(_) => ReplyTag::Continue,
            Reply::Empty(_) => ReplyTag::Empty,
            Reply::Halt(_) => ReplyTag::Halt,
        }
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, Reply::Halt(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Reply::Empty(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Reply::Continue(_))
    }

    /// Borrow the wrapped state regardless of tag.
    pub fn state(&self) -> &S {
        match self {
            Reply::Continue(s) | Reply::Empty(s) | Reply::Halt(s) => s,
        }
    }

    /// Unwrap the state regardless of tag.
    pub fn into_state(self) -> S {
        match self {
            Reply::Continue(s) | Reply::Empty(s) | Reply::Halt(s) => s,
        }
    }

    /// Transform the state, keeping the tag.
    pub fn map<T, F>(self, f: F) -> Reply<T>
    where
        F: FnOnce(S) -> T,
    {
        match self {
            Reply::Continue(s) => Reply::Continue(f(s)),
            Reply::Empty(s) => Reply::Empty(f(s)),
            Reply::Halt(s) => Reply::Halt(f(s)),
        }
    }

    /// Chain a state-dependent step that may itself halt.
    ///
    /// If `self` is `Halt`, the result is `Halt` whatever `f` returns.
    /// An `Empty` reply is not sticky: the result carries `f`'s tag.
    pub fn and_then<T, F>(self, f: F) -> Reply<T>
    where
        F: FnOnce(S) -> Reply<T>,
    {
        match self {
            Reply::Halt(s) => Reply::Halt(f(s).into_state()),
            Reply::Continue(s) | Reply::Empty(s) => f(s),
        }
    }

    /// Raise the tag to at least `tag`.
    ///
    /// ```rust
    /// use transducers::{Reply, ReplyTag};
    ///
    /// assert_eq!(Reply::Continue(0).strengthen(ReplyTag::Empty), Reply::Empty(0));
    /// assert_eq!(Reply::Halt(0).strengthen(ReplyTag::Continue), Reply::Halt(0));
    /// ```
    pub fn strengthen(self, tag: ReplyTag) -> Self {
        let tag = self.tag().max(tag);
        Reply::with_tag(tag, self.into_state())
    }

    /// Pair two replies, keeping the stronger tag.
    pub fn merge<T>(self, other: Reply<T>) -> Reply<(S, T)> {
        let tag = self.tag().max(other.tag());
        Reply::with_tag(tag, (self.into_state(), other.into_state()))
    }

    /// Turn `Empty` back into `Continue`.
    pub fn refill(self) -> Self {
        match self {
            Reply::Empty(s) => Reply::Continue(s),
            other => other,
        }
    }

    /// Turn `Empty` into a permanent `Halt`.
    pub fn promote(self) -> Self {
        match self {
            Reply::Empty(s) => Reply::Halt(s),
            other => other,
        }
    }
}
