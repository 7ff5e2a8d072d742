use crate::{Flow, Step, Transducer, Wrap};

/* Filter */

#[derive(Debug, Clone, Copy)]
pub struct Filter<O> {
    operation: O,
}

/// Forward only the items for which `operation` returns `true`.
pub fn filter<O>(operation: O) -> Filter<O> {
    Filter { operation }
}

impl<O> Transducer for Filter<O> {}

impl<O, F> Wrap<F> for Filter<O> {
    type Step = FilterStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        FilterStep {
            base,
            operation: self.operation,
        }
    }
}

/* FilterStep */

#[derive(Clone)]
pub struct FilterStep<F, O> {
    base: F,
    operation: O,
}

impl<F, O, S, T> Step<S, T> for FilterStep<F, O>
where
    F: Step<S, T>,
    O: FnMut(&T) -> bool,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        if (self.operation)(&item) {
            self.base.step(state, item)
        } else {
            Flow::Continue
        }
    }
}

/* FilterIndexed */

#[derive(Debug, Clone, Copy)]
pub struct FilterIndexed<O> {
    operation: O,
}

/// Like [`filter`], but `operation` also receives the 0-based position of
/// the item among all items this stage has seen.
///
/// [`filter`]: fn.filter.html
pub fn filter_indexed<O>(operation: O) -> FilterIndexed<O> {
    FilterIndexed { operation }
}

impl<O> Transducer for FilterIndexed<O> {}

impl<O, F> Wrap<F> for FilterIndexed<O> {
    type Step = FilterIndexedStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        FilterIndexedStep {
            base,
            operation: self.operation,
            index: 0,
        }
    }
}

/* FilterIndexedStep */

#[derive(Clone)]
pub struct FilterIndexedStep<F, O> {
    base: F,
    operation: O,
    index: usize,
}

impl<F, O, S, T> Step<S, T> for FilterIndexedStep<F, O>
where
    F: Step<S, T>,
    O: FnMut(usize, &T) -> bool,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        let index = self.index;
        self.index += 1;

        if (self.operation)(index, &item) {
            self.base.step(state, item)
        } else {
            Flow::Continue
        }
    }
}
