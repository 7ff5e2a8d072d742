use super::Flow;

/// The `Step` trait is the per-element half of a [`Reducer`]: it is fed
/// one item at a time together with the accumulator it updates, and
/// answers with a [`Flow`] telling the caller whether more items are
/// wanted.
///
/// Every transducer stage materialises one `Step` that wraps the step of
/// the stage below it. Private cursors of a stage (remaining counts,
/// running indices, "done" flags) live in that materialised step, never
/// in the transducer it was built from.
///
/// Calling `step` again after it returned [`Flow::Stop`] is a contract
/// violation; the drivers in this crate never do it.
///
/// [`Reducer`]: struct.Reducer.html
pub trait Step<S, T> {
    /// Consume next item and update `state`.
    fn step(&mut self, state: &mut S, item: T) -> Flow;
}

impl<S, T, X> Step<S, T> for &mut X
where
    X: Step<S, T> + ?Sized,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        (**self).step(state, item)
    }
}

/* StepFn */

/// Step implemented by a closure `FnMut(&mut S, T) -> Flow`.
#[derive(Clone, Copy)]
pub struct StepFn<O> {
    operation: O,
}

pub fn step_fn<O>(operation: O) -> StepFn<O> {
    StepFn { operation }
}

impl<O, S, T> Step<S, T> for StepFn<O>
where
    O: FnMut(&mut S, T) -> Flow,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        (self.operation)(state, item)
    }
}
