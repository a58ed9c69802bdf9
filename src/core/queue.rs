//! FIFO buffer for stages that hold unconsumed elements.

use serde::{Deserialize, Serialize};

/// First-in first-out queue built from two stacks.
///
/// Pushes land on the input stack. Pops come from the output stack, which is
/// refilled by reversing the input stack only once it runs dry, so both
/// operations are amortized O(1).
///
/// # Example
///
/// ```rust
/// use transducers::Queue;
///
/// let mut queue = Queue::new();
/// queue.push(1);
/// queue.push(2);
/// assert_eq!(queue.pop(), Some(1));
/// queue.push(3);
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), Some(3));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Queue<T> {
    input: Vec<T>,
    output: Vec<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            input: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.input.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.output.is_empty() {
            self.output.extend(self.input.drain(..).rev());
        }
        self.output.pop()
    }

    /// The element `pop` would return next.
    pub fn peek(&self) -> Option<&T> {
        self.output.last().or_else(|| self.input.first())
    }

    pub fn len(&self) -> usize {
        self.input.len() + self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty() && self.output.is_empty()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    /// Queues are equal when they would pop the same sequence.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T> Queue<T> {
    /// Iterate in pop order without consuming.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.output.iter().rev().chain(self.input.iter())
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.input.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            input: iter.into_iter().collect(),
            output: Vec::new(),
        }
    }
}

/// Consuming iterator in pop order.
pub struct IntoIter<T> {
    queue: Queue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { queue: self }
    }
}
