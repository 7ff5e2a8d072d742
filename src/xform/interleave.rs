use crate::{Flow, Step, Transducer, Wrap};

/* Interleave */

#[derive(Debug, Clone, Copy)]
pub struct Interleave<I> {
    separator: I,
}

/// Forward a clone of `separator` before every item except the first.
pub fn interleave<I>(separator: I) -> Interleave<I> {
    Interleave { separator }
}

impl<I> Transducer for Interleave<I> {}

impl<I, F> Wrap<F> for Interleave<I> {
    type Step = InterleaveStep<F, I>;

    fn wrap(self, base: F) -> Self::Step {
        InterleaveStep {
            base,
            separator: self.separator,
            first: true,
        }
    }
}

/* InterleaveStep */

#[derive(Clone)]
pub struct InterleaveStep<F, I> {
    base: F,
    separator: I,
    first: bool,
}

impl<F, S, I> Step<S, I> for InterleaveStep<F, I>
where
    F: Step<S, I>,
    I: Clone,
{
    fn step(&mut self, state: &mut S, item: I) -> Flow {
        if self.first {
            self.first = false;
        } else if self.base.step(state, self.separator.clone()).is_stop() {
            return Flow::Stop;
        }

        self.base.step(state, item)
    }
}
