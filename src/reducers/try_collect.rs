//! Collection that halts on the first failure.

use crate::core::{Reducer, Reply};

/// Collects `Ok` values and halts on the first `Err`, which becomes the
/// final output.
///
/// Nothing after the failing element is drawn from the source, and no stage
/// can turn the error back into a success.
///
/// # Example
///
/// ```rust
/// use transducers::reducers::try_into_vec;
/// use transducers::transduce;
/// use transducers::xform::map;
///
/// let parsed = transduce(
///     map(|s: &str| s.parse::<i32>()),
///     try_into_vec(),
///     ["1", "2", "x", "4"],
/// );
/// assert!(parsed.is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TryIntoVec<T, E> {
    items: Vec<T>,
    error: Option<E>,
}

impl<T, E> Default for TryIntoVec<T, E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T, E> Reducer<Result<T, E>> for TryIntoVec<T, E> {
    type Output = Result<Vec<T>, E>;

    fn step(mut self, input: Result<T, E>) -> Reply<Self> {
        if self.error.is_some() {
            return Reply::Halt(self);
        }

        match input {
            Ok(item) => {
                self.items.push(item);
                Reply::Continue(self)
            }
            Err(error) => {
                self.error = Some(error);
                Reply::Halt(self)
            }
        }
    }

    fn finish(self) -> Result<Vec<T>, E> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.items),
        }
    }

    fn is_halted(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity;
    use crate::stepper::transduce;
    use std::cell::Cell;

    #[test]
    fn all_ok_collects_everything() {
        let out = transduce(
            identity(),
            TryIntoVec::default(),
            vec![Ok::<_, String>(1), Ok(2)],
        );
        assert_eq!(out, Ok(vec![1, 2]));
    }

    #[test]
    fn first_error_is_final_and_stops_the_source() {
        let drawn = Cell::new(0);
        let source = vec![Ok(1), Err("bad"), Err("worse"), Ok(4)]
            .into_iter()
            .inspect(|_| drawn.set(drawn.get() + 1));

        let out = transduce(identity(), TryIntoVec::default(), source);

        assert_eq!(out, Err("bad"));
        assert_eq!(drawn.get(), 2);
    }

    #[test]
    fn empty_input_is_ok() {
        let r: TryIntoVec<u8, ()> = TryIntoVec::default();
        assert_eq!(r.finish(), Ok(vec![]));
    }
}
