use crate::core::{Reducer, Reply, Transducer};

/// Transducer tagging each element with its position, starting at 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct WithIndex;

#[derive(Clone, Debug)]
pub struct IndexReducer<R> {
    next: usize,
    down: R,
}

impl Transducer for WithIndex {
    type Reducer<R> = IndexReducer<R>;

    fn apply<R>(self, downstream: R) -> IndexReducer<R> {
        IndexReducer {
            next: 0,
            down: downstream,
        }
    }
}

impl<T, R> Reducer<T> for IndexReducer<R>
where
    R: Reducer<(usize, T)>,
{
    type Output = R::Output;

    fn step(self, input: T) -> Reply<Self> {
        let IndexReducer { next, down } = self;
        if down.is_halted() {
            return Reply::Halt(IndexReducer { next, down });
        }

        down.step((next, input)).map(|down| IndexReducer {
            next: next + 1,
            down,
        })
    }

    fn finish(self) -> R::Output {
        self.down.finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

/// Transducer counting the elements that pass through it and attaching the
/// count to the downstream output as `(output, count)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WithCount;

#[derive(Clone, Debug)]
pub struct CountReducer<R> {
    seen: usize,
    down: R,
}

impl Transducer for WithCount {
    type Reducer<R> = CountReducer<R>;

    fn apply<R>(self, downstream: R) -> CountReducer<R> {
        CountReducer {
            seen: 0,
            down: downstream,
        }
    }
}

impl<T, R> Reducer<T> for CountReducer<R>
where
    R: Reducer<T>,
{
    type Output = (R::Output, usize);

    fn step(self, input: T) -> Reply<Self> {
        let CountReducer { seen, down } = self;
        if down.is_halted() {
            return Reply::Halt(CountReducer { seen, down });
        }

        down.step(input).map(|down| CountReducer {
            seen: seen + 1,
            down,
        })
    }

    fn finish(self) -> (R::Output, usize) {
        (self.down.finish(), self.seen)
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

pub fn with_index() -> WithIndex {
    WithIndex
}

pub fn with_count() -> WithCount {
    WithCount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::into_vec;
    use crate::stepper::transduce;
    use crate::xform::{filter, take};

    #[test]
    fn indexes_from_zero() {
        let out = transduce(with_index(), into_vec(), vec![1, 2, 3]);
        assert_eq!(out, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn index_follows_what_reaches_the_stage() {
        let out = transduce(
            filter(|c: &char| *c != '-').then(with_index()),
            into_vec(),
            "a-b".chars(),
        );
        assert_eq!(out, vec![(0, 'a'), (1, 'b')]);
    }

    #[test]
    fn count_starts_at_zero() {
        let out = transduce(with_count(), into_vec(), Vec::<u8>::new());
        assert_eq!(out, (vec![], 0));
    }

    #[test]
    fn count_stops_with_downstream_halt() {
        let out = transduce(with_count().then(take(2)), into_vec(), 10..20);
        assert_eq!(out, (vec![10, 11], 2));
    }
}
