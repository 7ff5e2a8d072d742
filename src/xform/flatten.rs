use crate::{Flow, Step, Transducer, Wrap};

/* Flatten */

#[derive(Debug, Default, Clone, Copy)]
pub struct Flatten;

/// Forward each member of every (iterable) item, in order.
///
/// A stop from below ends the walk over the current item immediately; the
/// remaining members of that item are never pulled.
pub fn flatten() -> Flatten {
    Flatten
}

impl Transducer for Flatten {}

impl<F> Wrap<F> for Flatten {
    type Step = FlattenStep<F>;

    fn wrap(self, base: F) -> Self::Step {
        FlattenStep { base }
    }
}

/* FlattenStep */

#[derive(Clone)]
pub struct FlattenStep<F> {
    base: F,
}

impl<F, S, T> Step<S, T> for FlattenStep<F>
where
    T: IntoIterator,
    F: Step<S, T::Item>,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        for member in item {
            if self.base.step(state, member).is_stop() {
                return Flow::Stop;
            }
        }

        Flow::Continue
    }
}
