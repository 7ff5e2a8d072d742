use crate::{Flow, Step, Transducer, Wrap};

/* DropWhile */

#[derive(Debug, Clone, Copy)]
pub struct DropWhile<O> {
    operation: O,
}

/// Suppress items while `operation` holds. From the first item it
/// rejects onwards everything is forwarded and `operation` is no longer
/// consulted.
pub fn drop_while<O>(operation: O) -> DropWhile<O> {
    DropWhile { operation }
}

impl<O> Transducer for DropWhile<O> {}

impl<O, F> Wrap<F> for DropWhile<O> {
    type Step = DropWhileStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        DropWhileStep {
            base,
            operation: self.operation,
            done: false,
        }
    }
}

/* DropWhileStep */

#[derive(Clone)]
pub struct DropWhileStep<F, O> {
    base: F,
    operation: O,
    done: bool,
}

impl<F, O, S, T> Step<S, T> for DropWhileStep<F, O>
where
    F: Step<S, T>,
    O: FnMut(&T) -> bool,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        self.done = self.done || !(self.operation)(&item);

        if self.done {
            self.base.step(state, item)
        } else {
            Flow::Continue
        }
    }
}

/* DropWhileIndexed */

#[derive(Debug, Clone, Copy)]
pub struct DropWhileIndexed<O> {
    operation: O,
}

pub fn drop_while_indexed<O>(operation: O) -> DropWhileIndexed<O> {
    DropWhileIndexed { operation }
}

impl<O> Transducer for DropWhileIndexed<O> {}

impl<O, F> Wrap<F> for DropWhileIndexed<O> {
    type Step = DropWhileIndexedStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        DropWhileIndexedStep {
            base,
            operation: self.operation,
            done: false,
            index: 0,
        }
    }
}

/* DropWhileIndexedStep */

#[derive(Clone)]
pub struct DropWhileIndexedStep<F, O> {
    base: F,
    operation: O,
    done: bool,
    index: usize,
}

impl<F, O, S, T> Step<S, T> for DropWhileIndexedStep<F, O>
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
            self.base.step(state, item)
        } else {
            Flow::Continue
        }
    }
}
