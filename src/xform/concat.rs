use crate::core::{Reducer, Reply, ReplyTag, Transducer};
use crate::stepper::{Seq, Stepper};
use tracing::trace;

/// Transducer deconstructing one level of collection-valued input.
///
/// Every input collection is walked with the configured [`Stepper`] and its
/// elements forwarded one by one. A downstream halt in the middle of a
/// collection stops the walk and halts the stage; each input is stepped
/// independently of the previous ones.
#[derive(Clone, Copy, Debug)]
pub struct Concat<St> {
    stepper: St,
}

#[derive(Clone, Debug)]
pub struct ConcatReducer<St, R> {
    stepper: St,
    down: R,
}

impl<St> Transducer for Concat<St> {
    type Reducer<R> = ConcatReducer<St, R>;

    fn apply<R>(self, downstream: R) -> ConcatReducer<St, R> {
        ConcatReducer {
            stepper: self.stepper,
            down: downstream,
        }
    }
}

impl<C, St, R> Reducer<C> for ConcatReducer<St, R>
where
    St: Stepper<C>,
    R: Reducer<St::Item>,
{
    type Output = R::Output;

    fn step(self, input: C) -> Reply<Self> {
        let ConcatReducer { stepper, down } = self;
        if down.is_halted() {
            return Reply::Halt(ConcatReducer { stepper, down });
        }

        let mut forwarded = false;
        let reply = stepper.step(
            |down: R, item| {
                forwarded = true;
                down.step(item)
            },
            Reply::Continue(down),
            input,
        );
        if reply.is_halted() {
            trace!("concat halted inside a collection");
        }

        let reply = if forwarded {
            reply
        } else {
            reply.strengthen(ReplyTag::Empty)
        };
        reply.map(|down| ConcatReducer { stepper, down })
    }

    fn finish(self) -> R::Output {
        self.down.finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

/// Flatten collections using `stepper` to walk each one.
pub fn concat<St>(stepper: St) -> Concat<St> {
    Concat { stepper }
}

/// Flatten any `IntoIterator` input.
pub fn flatten() -> Concat<Seq> {
    Concat { stepper: Seq }
}
