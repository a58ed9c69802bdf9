//! Reducers built from plain functions.

use crate::core::{Reducer, Reply};

/// Reducer assembled from an initial state, a step function and a finish
/// function. See [`reducer`](crate::builder::reducer).
pub struct FnReducer<S, F, G> {
    state: S,
    step: F,
    finish: G,
    halted: bool,
}

impl<In, Out, S, F, G> Reducer<In> for FnReducer<S, F, G>
where
    F: FnMut(S, In) -> Reply<S>,
    G: FnOnce(S) -> Out,
{
    type Output = Out;

    fn step(self, input: In) -> Reply<Self> {
        let FnReducer {
            state,
            mut step,
            finish,
            halted,
        } = self;
        if halted {
            return Reply::Halt(FnReducer {
                state,
                step,
                finish,
                halted,
            });
        }

        let reply = step(state, input);
        let halted = reply.is_halted();
        reply.map(|state| FnReducer {
            state,
            step,
            finish,
            halted,
        })
    }

    fn finish(self) -> Out {
        (self.finish)(self.state)
    }

    fn is_halted(&self) -> bool {
        self.halted
    }
}

/// Build a reducer from `init`, a `step` that may halt, and a `finish` that
/// turns the state into the output.
///
/// # Example
///
/// ```rust
/// use transducers::builder::reducer;
/// use transducers::stepper::{reduce, Seq};
/// use transducers::Reply;
///
/// // Sum until the running total passes 10.
/// let capped_sum = reducer(
///     0,
///     |total: u32, x: u32| {
///         let total = total + x;
///         if total > 10 { Reply::Halt(total) } else { Reply::Continue(total) }
///     },
///     |total| total,
/// );
/// assert_eq!(reduce(&Seq, capped_sum, 1..), 15);
/// ```
pub fn reducer<S, In, Out, F, G>(init: S, step: F, finish: G) -> FnReducer<S, F, G>
where
    F: FnMut(S, In) -> Reply<S>,
    G: FnOnce(S) -> Out,
{
    FnReducer {
        state: init,
        step,
        finish,
        halted: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::{reduce, Seq};

    #[test]
    fn finish_before_input_uses_init() {
        let r = reducer(
            Vec::new(),
            |mut v: Vec<u8>, x: u8| {
                v.push(x);
                Reply::Continue(v)
            },
            |v| v.len(),
        );
        assert_eq!(Reducer::<u8>::finish(r), 0);
    }

    #[test]
    fn halted_reducer_ignores_further_input() {
        let r = reducer(0, |n: i32, x: i32| Reply::Halt(n + x), |n| n);
        let reply = r.step(5);
        assert!(reply.is_halted());

        let reply = reply.into_state().step(100);
        assert!(reply.is_halted());
        assert_eq!(Reducer::<i32>::finish(reply.into_state()), 5);
    }

    #[test]
    fn error_payload_is_the_final_output() {
        let checked = reducer(
            Ok(0),
            |acc: Result<i32, String>, x: i32| match acc {
                Ok(sum) if x >= 0 => Reply::Continue(Ok(sum + x)),
                Ok(_) => Reply::Halt(Err(format!("negative input {x}"))),
                Err(e) => Reply::Halt(Err(e)),
            },
            |acc| acc,
        );

        let out = reduce(&Seq, checked, vec![1, 2, -3, 4]);
        assert_eq!(out, Err("negative input -3".to_string()));
    }
}
