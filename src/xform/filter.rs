use crate::core::{Reducer, Reply, Transducer};

/// Transducer forwarding only elements that satisfy a predicate.
///
/// Rejected elements are answered with `Reply::Empty`. A filter never halts
/// on its own.
#[derive(Clone, Debug)]
pub struct Filter<P> {
    pred: P,
}

#[derive(Clone, Debug)]
pub struct FilterReducer<P, R> {
    pred: P,
    down: R,
}

impl<P> Transducer for Filter<P> {
    type Reducer<R> = FilterReducer<P, R>;

    fn apply<R>(self, downstream: R) -> FilterReducer<P, R> {
        FilterReducer {
            pred: self.pred,
            down: downstream,
        }
    }
}

impl<T, P, R> Reducer<T> for FilterReducer<P, R>
where
    P: FnMut(&T) -> bool,
    R: Reducer<T>,
{
    type Output = R::Output;

    fn step(self, input: T) -> Reply<Self> {
        let FilterReducer { mut pred, down } = self;
        if down.is_halted() {
            return Reply::Halt(FilterReducer { pred, down });
        }

        if pred(&input) {
            down.step(input).map(|down| FilterReducer { pred, down })
        } else {
            Reply::Empty(FilterReducer { pred, down })
        }
    }

    fn finish(self) -> R::Output {
        self.down.finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

pub fn filter<P>(pred: P) -> Filter<P> {
    Filter { pred }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::into_vec;
    use crate::stepper::transduce;

    #[test]
    fn keeps_matching_elements() {
        let out = transduce(filter(|x: &i32| x % 3 == 0), into_vec(), 1..=10);
        assert_eq!(out, vec![3, 6, 9]);
    }

    #[test]
    fn rejected_elements_reply_empty() {
        let reducer = filter(|x: &i32| *x > 0).apply(into_vec());
        let reply = reducer.step(-1);
        assert!(reply.is_empty());

        let reply = reply.into_state().step(1);
        assert!(reply.is_continue());
        assert_eq!(reply.into_state().finish(), vec![1]);
    }

    #[test]
    fn rejecting_everything_yields_default() {
        let out = transduce(filter(|_: &char| false), into_vec(), "abc".chars());
        assert!(out.is_empty());
    }
}
