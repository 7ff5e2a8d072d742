use crate::{Flow, Step, Transducer, Wrap};

/* Inspect */

#[derive(Debug, Clone, Copy)]
pub struct Inspect<O> {
    operation: O,
}

/// Call `operation` with a reference to each item, then forward the item
/// unchanged.
pub fn inspect<O>(operation: O) -> Inspect<O> {
    Inspect { operation }
}

impl<O> Transducer for Inspect<O> {}

impl<O, F> Wrap<F> for Inspect<O> {
    type Step = InspectStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        InspectStep {
            base,
            operation: self.operation,
        }
    }
}

/* InspectStep */

#[derive(Clone)]
pub struct InspectStep<F, O> {
    base: F,
    operation: O,
}

impl<F, O, S, T> Step<S, T> for InspectStep<F, O>
where
    F: Step<S, T>,
    O: FnMut(&T),
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        (self.operation)(&item);

        self.base.step(state, item)
    }
}

/* InspectIndexed */

#[derive(Debug, Clone, Copy)]
pub struct InspectIndexed<O> {
    operation: O,
}

pub fn inspect_indexed<O>(operation: O) -> InspectIndexed<O> {
    InspectIndexed { operation }
}

impl<O> Transducer for InspectIndexed<O> {}

impl<O, F> Wrap<F> for InspectIndexed<O> {
    type Step = InspectIndexedStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        InspectIndexedStep {
            base,
            operation: self.operation,
            index: 0,
        }
    }
}

/* InspectIndexedStep */

#[derive(Clone)]
pub struct InspectIndexedStep<F, O> {
    base: F,
    operation: O,
    index: usize,
}

impl<F, O, S, T> Step<S, T> for InspectIndexedStep<F, O>
where
    F: Step<S, T>,
    O: FnMut(usize, &T),
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        (self.operation)(self.index, &item);
        self.index += 1;

        self.base.step(state, item)
    }
}
