use crate::{misc::Maybe, Flow, Step, Transducer, Wrap};

/* TransformMaybe */

#[derive(Debug, Clone, Copy)]
pub struct TransformMaybe<O> {
    operation: O,
}

/// Forward the value produced by `operation` when there is one and skip
/// the item otherwise. `operation` may return `Option<R>` or
/// `Result<R, E>`; `None` and `Err(_)` both mean "skip", not "stop".
pub fn transform_maybe<O>(operation: O) -> TransformMaybe<O> {
    TransformMaybe { operation }
}

impl<O> Transducer for TransformMaybe<O> {}

impl<O, F> Wrap<F> for TransformMaybe<O> {
    type Step = TransformMaybeStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        TransformMaybeStep {
            base,
            operation: self.operation,
        }
    }
}

/* TransformMaybeStep */

#[derive(Clone)]
pub struct TransformMaybeStep<F, O> {
    base: F,
    operation: O,
}

impl<F, O, S, T, M> Step<S, T> for TransformMaybeStep<F, O>
where
    F: Step<S, M::Value>,
    O: FnMut(T) -> M,
    M: Maybe,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        match (self.operation)(item).into_option() {
            Some(item) => self.base.step(state, item),
            None => Flow::Continue,
        }
    }
}

/* TransformMaybeIndexed */

#[derive(Debug, Clone, Copy)]
pub struct TransformMaybeIndexed<O> {
    operation: O,
}

/// Indexed flavour of [`transform_maybe`]; the index counts every item
/// this stage has seen, including skipped ones.
///
/// [`transform_maybe`]: fn.transform_maybe.html
pub fn transform_maybe_indexed<O>(operation: O) -> TransformMaybeIndexed<O> {
    TransformMaybeIndexed { operation }
}

impl<O> Transducer for TransformMaybeIndexed<O> {}

impl<O, F> Wrap<F> for TransformMaybeIndexed<O> {
    type Step = TransformMaybeIndexedStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        TransformMaybeIndexedStep {
            base,
            operation: self.operation,
            index: 0,
        }
    }
}

/* TransformMaybeIndexedStep */

#[derive(Clone)]
pub struct TransformMaybeIndexedStep<F, O> {
    base: F,
    operation: O,
    index: usize,
}

impl<F, O, S, T, M> Step<S, T> for TransformMaybeIndexedStep<F, O>
where
    F: Step<S, M::Value>,
    O: FnMut(usize, T) -> M,
    M: Maybe,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        let value = (self.operation)(self.index, item).into_option();
        self.index += 1;

        match value {
            Some(item) => self.base.step(state, item),
            None => Flow::Continue,
        }
    }
}
