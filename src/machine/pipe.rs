//! Composition of two machines.

use super::{Machine, Signal, Status};
use crate::core::Queue;
use tracing::warn;

/// `left` feeding `right`.
///
/// Signals fed to the pipe wait in a FIFO inbox and reach `left` one at a
/// time, only when `left` is waiting. `left` is only polled while `right`
/// is waiting, so a value `right` has committed to is always delivered
/// before the pipe asks for more input.
pub struct Pipe<L, R>
where
    L: Machine,
{
    left: L,
    right: R,
    inbox: Queue<Signal<L::In>>,
    left_ended: bool,
    right_ended: bool,
    closed: bool,
}

impl<L, R> Pipe<L, R>
where
    L: Machine,
    R: Machine<In = L::Out>,
{
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            inbox: Queue::new(),
            left_ended: false,
            right_ended: false,
            closed: false,
        }
    }

    /// Signals fed but not yet handed to the left stage.
    pub fn queued(&self) -> usize {
        self.inbox.len()
    }

    fn terminate(&mut self) -> Status<R::Out> {
        self.closed = true;
        self.inbox = Queue::new();
        Status::Terminated
    }

    fn end_right(&mut self) {
        self.right.feed(Signal::End);
        self.right_ended = true;
    }
}

impl<L, R> Machine for Pipe<L, R>
where
    L: Machine,
    R: Machine<In = L::Out>,
{
    type In = L::In;
    type Out = R::Out;

    /// Signals after `End`, or after the pipe terminated, are dropped.
    fn feed(&mut self, signal: Signal<L::In>) {
        if self.closed {
            return;
        }
        self.closed = matches!(signal, Signal::End);
        self.inbox.push(signal);
    }

    fn poll(&mut self) -> Status<R::Out> {
        loop {
            match self.right.poll() {
                Status::Terminated => return self.terminate(),
                Status::Producing(value) => return Status::Producing(value),
                Status::Waiting if self.right_ended => {
                    warn!("stage kept waiting after end of input, treating it as terminated");
                    return self.terminate();
                }
                Status::Waiting => {}
            }

            // Right needs input: advance left until it yields something.
            loop {
                match self.left.poll() {
                    Status::Producing(value) => {
                        self.right.feed(Signal::Item(value));
                        break;
                    }
                    Status::Terminated => {
                        self.end_right();
                        break;
                    }
                    Status::Waiting if self.left_ended => {
                        warn!("stage kept waiting after end of input, treating it as terminated");
                        self.end_right();
                        break;
                    }
                    Status::Waiting => match self.inbox.pop() {
                        Some(signal) => {
                            self.left_ended = matches!(signal, Signal::End);
                            self.left.feed(signal);
                        }
                        None => return Status::Waiting,
                    },
                }
            }
        }
    }
}
