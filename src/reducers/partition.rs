//! Splitting a stream between two independent reducers.

use crate::core::{Reducer, Reply};

/// Routes each element to `yes` or `no` depending on a predicate and
/// finishes to the pair of their outputs.
///
/// The branches are isolated: a halt in one branch only means elements
/// routed to it are dropped, the other branch keeps going. The partition
/// itself halts once both branches have.
#[derive(Clone, Debug)]
pub struct Partition<P, A, B> {
    pred: P,
    yes: A,
    no: B,
}

impl<P, A, B> Partition<P, A, B> {
    pub fn new(pred: P, yes: A, no: B) -> Self {
        Self { pred, yes, no }
    }
}

impl<T, P, A, B> Reducer<T> for Partition<P, A, B>
where
    P: FnMut(&T) -> bool,
    A: Reducer<T>,
    B: Reducer<T>,
{
    type Output = (A::Output, B::Output);

    fn step(self, input: T) -> Reply<Self> {
        if Reducer::<T>::is_halted(&self) {
            return Reply::Halt(self);
        }

        let Partition { mut pred, yes, no } = self;
        let (reply, yes, no) = if pred(&input) {
            let (reply, yes) = route(yes, input);
            (reply, yes, no)
        } else {
            let (reply, no) = route(no, input);
            (reply, yes, no)
        };

        let next = Partition { pred, yes, no };
        if Reducer::<T>::is_halted(&next) {
            Reply::Halt(next)
        } else {
            Reply::with_tag(reply.tag(), next)
        }
    }

    fn finish(self) -> Self::Output {
        (self.yes.finish(), self.no.finish())
    }

    fn is_halted(&self) -> bool {
        self.yes.is_halted() && self.no.is_halted()
    }
}

/// Step one branch; a halted branch swallows the element. The returned
/// reply never carries `Halt`, since one branch halting does not halt the
/// partition.
fn route<T, R: Reducer<T>>(branch: R, input: T) -> (Reply<()>, R) {
    if branch.is_halted() {
        return (Reply::Empty(()), branch);
    }

    match branch.step(input) {
        Reply::Halt(branch) => (Reply::Continue(()), branch),
        reply => {
            let tag = reply.tag();
            (Reply::with_tag(tag, ()), reply.into_state())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity;
    use crate::reducers::{count, first, into_vec};
    use crate::stepper::transduce;
    use crate::xform::take;
    use crate::Transducer;

    #[test]
    fn splits_preserving_sub_order() {
        let p = Partition::new(|x: &i32| x % 2 == 0, into_vec(), into_vec());
        let (evens, odds) = transduce(identity(), p, 1..=7);
        assert_eq!(evens, vec![2, 4, 6]);
        assert_eq!(odds, vec![1, 3, 5, 7]);
    }

    #[test]
    fn halting_one_branch_keeps_the_other() {
        let p = Partition::new(|x: &i32| *x > 0, first(), count());
        let (positive, non_positive) = transduce(identity(), p, vec![5, -1, 6, 0, 7, -2]);
        assert_eq!(positive, Some(5));
        assert_eq!(non_positive, 3);
    }

    #[test]
    fn halts_once_both_branches_halt() {
        let p = Partition::new(
            |x: &char| x.is_uppercase(),
            take(1).apply(into_vec()),
            take(1).apply(into_vec()),
        );

        let reply = p.step('a');
        assert!(!reply.is_halted());
        let reply = reply.into_state().step('b');
        assert!(!reply.is_halted());
        assert!(reply.is_empty());
        let reply = reply.into_state().step('C');
        assert!(reply.is_halted());
        assert_eq!(
            Reducer::<char>::finish(reply.into_state()),
            (vec!['C'], vec!['a'])
        );
    }
}
