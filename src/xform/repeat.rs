use crate::core::{Reducer, Reply, Transducer};
use crate::stepper::step_iter;

/// Transducer expanding `(count, value)` pairs into `count` copies of
/// `value`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Repeat;

#[derive(Clone, Debug)]
pub struct RepeatReducer<R> {
    down: R,
}

impl Transducer for Repeat {
    type Reducer<R> = RepeatReducer<R>;

    fn apply<R>(self, downstream: R) -> RepeatReducer<R> {
        RepeatReducer { down: downstream }
    }
}

impl<T, R> Reducer<(usize, T)> for RepeatReducer<R>
where
    T: Clone,
    R: Reducer<T>,
{
    type Output = R::Output;

    fn step(self, (count, value): (usize, T)) -> Reply<Self> {
        if self.down.is_halted() {
            return Reply::Halt(self);
        }
        if count == 0 {
            return Reply::Empty(self);
        }

        let copies = std::iter::repeat(value).take(count);
        step_iter(
            |down: R, item| down.step(item),
            Reply::Continue(self.down),
            copies,
        )
        .map(|down| RepeatReducer { down })
    }

    fn finish(self) -> R::Output {
        self.down.finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

pub fn repeat() -> Repeat {
    Repeat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::into_vec;
    use crate::stepper::transduce;
    use crate::xform::take;

    #[test]
    fn expands_pairs_in_order() {
        let out = transduce(repeat(), into_vec(), vec![(2, 'a'), (0, 'b'), (1, 'c')]);
        assert_eq!(out, vec!['a', 'a', 'c']);
    }

    #[test]
    fn zero_count_replies_empty() {
        let reply = repeat().apply(into_vec::<&str>()).step((0, "x"));
        assert!(reply.is_empty());
    }

    #[test]
    fn halts_partway_through_a_run() {
        let out = transduce(
            repeat().then(take(3)),
            into_vec(),
            vec![(2, 1), (5, 2), (4, 3)],
        );
        assert_eq!(out, vec![1, 1, 2]);
    }
}
