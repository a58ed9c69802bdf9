//! Composition of transducers.

use super::reducer::Transducer;

/// Two transducers fused into one, `First` running before `Second` in
/// data-flow order.
///
/// Applying the composite to a reducer wraps it with `Second` first and then
/// with `First`, so elements reach `First` before `Second` and a halt in
/// `Second` stops `First` from being stepped again.
#[derive(Clone, Debug)]
pub struct Compose<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Compose<First, Second> {
    pub fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }
}

impl<First, Second> Transducer for Compose<First, Second>
where
    First: Transducer,
    Second: Transducer,
{
    type Reducer<R> = First::Reducer<Second::Reducer<R>>;

    fn apply<R>(self, downstream: R) -> Self::Reducer<R> {
        self.first.apply(self.second.apply(downstream))
    }
}

/// Compose two transducers, `outer` being the stage closer to the final
/// reducer and `inner` the one closer to the source.
///
/// `compose(outer, inner)` is the same pipeline as `inner.then(outer)`.
///
/// # Example
///
/// ```rust
/// use transducers::xform::{filter, map};
/// use transducers::reducers::into_vec;
/// use transducers::{compose, transduce};
///
/// // Source -> filter -> map -> reducer.
/// let pipeline = compose(map(|x: i32| x * 10), filter(|x: &i32| x % 2 == 1));
/// assert_eq!(transduce(pipeline, into_vec(), 1..=5), vec![10, 30, 50]);
/// ```
pub fn compose<Outer, Inner>(outer: Outer, inner: Inner) -> Compose<Inner, Outer>
where
    Outer: Transducer,
    Inner: Transducer,
{
    Compose::new(inner, outer)
}

/// The transducer that leaves its downstream untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl Transducer for Identity {
    type Reducer<R> = R;

    fn apply<R>(self, downstream: R) -> R {
        downstream
    }
}

pub fn identity() -> Identity {
    Identity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::into_vec;
    use crate::stepper::transduce;
    use crate::xform::{drop, filter, map, take};

    #[test]
    fn then_runs_stages_in_data_flow_order() {
        let pipeline = map(|x: i32| x + 1).then(take(2));
        assert_eq!(transduce(pipeline, into_vec(), vec![3, 7, 9]), vec![4, 8]);
    }

    #[test]
    fn compose_puts_outer_closer_to_reducer() {
        let a = transduce(compose(take(2), drop(1)), into_vec(), 1..=5);
        let b = transduce(drop(1).then(take(2)), into_vec(), 1..=5);
        assert_eq!(a, vec![2, 3]);
        assert_eq!(a, b);
    }

    #[test]
    fn composition_is_associative() {
        let left = map(|x: i32| x * 3)
            .then(filter(|x: &i32| x % 2 == 0))
            .then(take(3));
        let right = map(|x: i32| x * 3)
            .then(filter(|x: &i32| x % 2 == 0).then(take(3)));

        let xs: Vec<i32> = (0..20).collect();
        assert_eq!(
            transduce(left, into_vec(), xs.clone()),
            transduce(right, into_vec(), xs)
        );
    }

    #[test]
    fn identity_is_neutral() {
        let xs = vec!['a', 'b', 'c'];
        assert_eq!(transduce(identity(), into_vec(), xs.clone()), xs);
        assert_eq!(
            transduce(identity().then(take(2)).then(identity()), into_vec(), xs),
            vec!['a', 'b']
        );
    }
}
