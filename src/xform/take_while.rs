use crate::{Flow, Step, Transducer, Wrap};

/* TakeWhile */

#[derive(Debug, Clone, Copy)]
pub struct TakeWhile<O> {
    operation: O,
}

/// Forward items while `operation` holds. The first item it rejects is
/// not forwarded and ends the run with a stop signal.
pub fn take_while<O>(operation: O) -> TakeWhile<O> {
    TakeWhile { operation }
}

impl<O> Transducer for TakeWhile<O> {}

impl<O, F> Wrap<F> for TakeWhile<O> {
    type Step = TakeWhileStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        TakeWhileStep {
            base,
            operation: self.operation,
            done: false,
        }
    }
}

/* TakeWhileStep */

#[derive(Clone)]
pub struct TakeWhileStep<F, O> {
    base: F,
    operation: O,
    done: bool,
}

impl<F, O, S, T> Step<S, T> for TakeWhileStep<F, O>
where
    F: Step<S, T>,
    O: FnMut(&T) -> bool,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        self.done = self.done || !(self.operation)(&item);

        if self.done {
            Flow::Stop
        } else {
            self.base.step(state, item)
        }
    }
}

/* TakeWhileIndexed */

#[derive(Debug, Clone, Copy)]
pub struct TakeWhileIndexed<O> {
    operation: O,
}

pub fn take_while_indexed<O>(operation: O) -> TakeWhileIndexed<O> {
    TakeWhileIndexed { operation }
}

impl<O> Transducer for TakeWhileIndexed<O> {}

impl<O, F> Wrap<F> for TakeWhileIndexed<O> {
    type Step = TakeWhileIndexedStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        TakeWhileIndexedStep {
            base,
            operation: self.operation,
            done: false,
            index: 0,
        }
    }
}

/* TakeWhileIndexedStep */

#[derive(Clone)]
pub struct TakeWhileIndexedStep<F, O> {
    base: F,
    operation: O,
    done: bool,
    index: usize,
}

impl<F, O, S, T> Step<S, T> for TakeWhileIndexedStep<F, O>
where
    F: Step<S, T>,
    O: FnMut(usize, &T) -> bool,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        if !self.done {
            self.done = !(self.operation)(self.index, &item);
            self.index += 1;
        }

        if self.done {
            Flow::Stop
        } else {
            self.base.step(state, item)
        }
    }
}
