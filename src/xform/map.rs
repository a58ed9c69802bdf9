use crate::core::{Reducer, Reply, Transducer};

/// Transducer applying `f` to every element.
#[derive(Clone, Debug)]
pub struct Map<F> {
    f: F,
}

#[derive(Clone, Debug)]
pub struct MapReducer<F, R> {
    f: F,
    down: R,
}

impl<F> Transducer for Map<F> {
    type Reducer<R> = MapReducer<F, R>;

    fn apply<R>(self, downstream: R) -> MapReducer<F, R> {
        MapReducer {
            f: self.f,
            down: downstream,
        }
    }
}

impl<A, B, F, R> Reducer<A> for MapReducer<F, R>
where
    F: FnMut(A) -> B,
    R: Reducer<B>,
{
    type Output = R::Output;

    fn step(self, input: A) -> Reply<Self> {
        let MapReducer { mut f, down } = self;
        if down.is_halted() {
            return Reply::Halt(MapReducer { f, down });
        }

        let mapped = f(input);
        down.step(mapped).map(|down| MapReducer { f, down })
    }

    fn finish(self) -> R::Output {
        self.down.finish()
    }

    fn is_halted(&self) -> bool {
        self.down.is_halted()
    }
}

pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::{first, into_vec};
    use crate::stepper::transduce;

    #[test]
    fn maps_in_order() {
        let out = transduce(map(|s: &str| s.len()), into_vec(), ["a", "bcd", ""]);
        assert_eq!(out, vec![1, 3, 0]);
    }

    #[test]
    fn passes_halt_through() {
        let reply = map(|x: i32| x * 2).apply(first()).step(4);
        assert!(reply.is_halted());

        let reply = reply.into_state().step(5);
        assert!(reply.is_halted());
        assert_eq!(Reducer::<i32>::finish(reply.into_state()), Some(8));
    }

    #[test]
    fn stateful_function_sees_every_element_once() {
        let mut calls = 0;
        let out = transduce(
            map(|x: i32| {
                calls += 1;
                x + calls
            }),
            into_vec(),
            vec![10, 10, 10],
        );
        assert_eq!(out, vec![11, 12, 13]);
    }
}
