use crate::{Flow, Step, Transducer, Wrap};

/* Transform */

#[derive(Debug, Clone, Copy)]
pub struct Transform<O> {
    operation: O,
}

/// Forward `operation(item)` for every item.
pub fn transform<O>(operation: O) -> Transform<O> {
    Transform { operation }
}

impl<O> Transducer for Transform<O> {}

impl<O, F> Wrap<F> for Transform<O> {
    type Step = TransformStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        TransformStep {
            base,
            operation: self.operation,
        }
    }
}

/* TransformStep */

#[derive(Clone)]
pub struct TransformStep<F, O> {
    base: F,
    operation: O,
}

impl<F, O, S, T, R> Step<S, T> for TransformStep<F, O>
where
    F: Step<S, R>,
    O: FnMut(T) -> R,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        let item = (self.operation)(item);

        self.base.step(state, item)
    }
}

/* TransformIndexed */

#[derive(Debug, Clone, Copy)]
pub struct TransformIndexed<O> {
    operation: O,
}

/// Forward `operation(index, item)`, where `index` counts the items seen
/// by this stage starting at 0.
pub fn transform_indexed<O>(operation: O) -> TransformIndexed<O> {
    TransformIndexed { operation }
}

impl<O> Transducer for TransformIndexed<O> {}

impl<O, F> Wrap<F> for TransformIndexed<O> {
    type Step = TransformIndexedStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        TransformIndexedStep {
            base,
            operation: self.operation,
            index: 0,
        }
    }
}

/* TransformIndexedStep */

#[derive(Clone)]
pub struct TransformIndexedStep<F, O> {
    base: F,
    operation: O,
    index: usize,
}

impl<F, O, S, T, R> Step<S, T> for TransformIndexedStep<F, O>
where
    F: Step<S, R>,
    O: FnMut(usize, T) -> R,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        let item = (self.operation)(self.index, item);
        self.index += 1;

        self.base.step(state, item)
    }
}
