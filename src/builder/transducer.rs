//! Transducers built from plain functions.
//!
//! This is the escape hatch for stages the primitive library does not cover.
//! The step function receives the stage's local state, one input and an
//! [`Emitter`] to push any number of outputs through; it answers with the
//! next local state wrapped in a [`Reply`]. A flush function runs when the
//! pipeline finishes, before the downstream reducer is finished.

use crate::core::{Queue, Reducer, Reply, ReplyTag, Transducer};
use std::marker::PhantomData;

/// Outbox handed to a custom stage's step and flush functions.
///
/// Emitted values are delivered downstream in order once the function
/// returns. Values emitted after the downstream reducer halts are dropped.
#[derive(Debug)]
pub struct Emitter<T> {
    queue: Queue<T>,
    closed: bool,
}

impl<T> Emitter<T> {
    fn new(closed: bool) -> Self {
        Self {
            queue: Queue::new(),
            closed,
        }
    }

    pub fn emit(&mut self, item: T) {
        self.queue.push(item);
    }

    /// True when the downstream reducer had already halted before this call,
    /// so nothing emitted now will be delivered.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of values emitted and not yet delivered.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Deliver everything queued in `out` to `down`, stopping at a halt.
/// Returns the new downstream and whether anything was emitted.
fn deliver<T, R>(mut down: R, out: Emitter<T>) -> (R, bool)
where
    R: Reducer<T>,
{
    let produced = !out.queue.is_empty();
    for item in out.queue {
        if down.is_halted() {
            break;
        }
        down = down.absorb(item);
    }
    (down, produced)
}

/// Transducer assembled by [`transducer`] or [`simple_transducer`].
pub struct FnTransducer<L, F, G, In, Out> {
    init: L,
    step: F,
    flush: G,
    _types: PhantomData<fn(In) -> Out>,
}

/// Reducer produced by applying a [`FnTransducer`].
pub struct FnStage<L, F, G, In, Out, R> {
    local: L,
    step: F,
    flush: G,
    halted: bool,
    down: R,
    _types: PhantomData<fn(In) -> Out>,
}

impl<L, F, G, In, Out> Transducer for FnTransducer<L, F, G, In, Out> {
    type Reducer<R> = FnStage<L, F, G, In, Out, R>;

    fn apply<R>(self, downstream: R) -> Self::Reducer<R> {
        FnStage {
            local: self.init,
            step: self.step,
            flush: self.flush,
            halted: false,
            down: downstream,
            _types: PhantomData,
        }
    }
}

impl<L, F, G, In, Out, R> Reducer<In> for FnStage<L, F, G, In, Out, R>
where
    F: FnMut(L, In, &mut Emitter<Out>) -> Reply<L>,
    G: FnOnce(L, &mut Emitter<Out>),
    R: Reducer<Out>,
{
    type Output = R::Output;

    fn step(self, input: In) -> Reply<Self> {
        if Reducer::<In>::is_halted(&self) {
            return Reply::Halt(self);
        }

        let FnStage {
            local,
            mut step,
            flush,
            down,
            ..
        } = self;
        let mut out = Emitter::new(false);
        let reply = step(local, input, &mut out);
        let (down, produced) = deliver(down, out);

        let tag = reply.tag();
        let next = FnStage {
            local: reply.into_state(),
            step,
            flush,
            halted: tag == ReplyTag::Halt,
            down,
            _types: PhantomData,
        };
        if Reducer::<In>::is_halted(&next) {
            Reply::Halt(next)
        } else if produced {
            Reply::Continue(next)
        } else {
            Reply::Empty(next)
        }
    }

    fn finish(self) -> R::Output {
        let mut out = Emitter::new(self.down.is_halted());
        (self.flush)(self.local, &mut out);
        let (down, _) = deliver(self.down, out);
        down.finish()
    }

    fn is_halted(&self) -> bool {
        self.halted || self.down.is_halted()
    }
}

/// Build a stateful transducer.
///
/// - `init` is the stage's local state;
/// - `step` ingests one element, may emit any number of outputs, and returns
///   the next local state (`Reply::Halt` stops the stage);
/// - `flush` runs on finish and may emit whatever the stage still buffers.
///
/// # Example
///
/// ```rust
/// use transducers::builder::transducer;
/// use transducers::reducers::into_vec;
/// use transducers::{transduce, Reply};
///
/// // Group consecutive elements into pairs; a trailing single is flushed.
/// let pairs = transducer(
///     None,
///     |held: Option<i32>, x: i32, out| match held {
///         Some(first) => {
///             out.emit(vec![first, x]);
///             Reply::Continue(None)
///         }
///         None => Reply::Continue(Some(x)),
///     },
///     |held, out| {
///         if let Some(last) = held {
///             out.emit(vec![last]);
///         }
///     },
/// );
///
/// assert_eq!(
///     transduce(pairs, into_vec(), 1..=5),
///     vec![vec![1, 2], vec![3, 4], vec![5]]
/// );
/// ```
pub fn transducer<L, In, Out, F, G>(init: L, step: F, flush: G) -> FnTransducer<L, F, G, In, Out>
where
    F: FnMut(L, In, &mut Emitter<Out>) -> Reply<L>,
    G: FnOnce(L, &mut Emitter<Out>),
{
    FnTransducer {
        init,
        step,
        flush,
        _types: PhantomData,
    }
}

fn no_flush<L, Out>(_local: L, _out: &mut Emitter<Out>) {}

/// A function-built transducer whose finish passes straight through.
pub type SimpleTransducer<L, F, In, Out> =
    FnTransducer<L, F, fn(L, &mut Emitter<Out>), In, Out>;

/// Build a transducer with no flush step.
///
/// ```rust
/// use transducers::builder::simple_transducer;
/// use transducers::reducers::into_vec;
/// use transducers::{transduce, Reply};
///
/// // Running maximum.
/// let running_max = simple_transducer(i32::MIN, |max: i32, x: i32, out| {
///     let max = max.max(x);
///     out.emit(max);
///     Reply::Continue(max)
/// });
/// assert_eq!(transduce(running_max, into_vec(), [3, 1, 4, 1, 5]), vec![3, 3, 4, 4, 5]);
/// ```
pub fn simple_transducer<L, In, Out, F>(init: L, step: F) -> SimpleTransducer<L, F, In, Out>
where
    F: FnMut(L, In, &mut Emitter<Out>) -> Reply<L>,
{
    transducer(init, step, no_flush::<L, Out> as fn(L, &mut Emitter<Out>))
}
