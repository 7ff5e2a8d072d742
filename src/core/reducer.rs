use super::{step_fn, Flow, Step, StepFn};

/// A `Reducer` bundles an accumulator (`state`) with the [`Step`] that
/// updates it. It is what every pipeline ends in, and what every
/// transducer stage produces when applied to the reducer below it.
///
/// The reducer owns its state exclusively for the duration of a run. Once
/// the run is over (either the source ran dry or a step signalled
/// [`Flow::Stop`]) the state is taken out with [`into_state`].
///
/// [`Step`]: trait.Step.html
/// [`into_state`]: #method.into_state
#[derive(Debug, Clone)]
pub struct Reducer<S, F> {
    state: S,
    step: F,
}

impl<S, F> Reducer<S, F> {
    pub fn new(state: S, step: F) -> Self {
        Self { state, step }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub fn into_parts(self) -> (S, F) {
        (self.state, self.step)
    }

    /// Feed one item into the reducer.
    pub fn step<T>(&mut self, item: T) -> Flow
    where
        F: Step<S, T>,
    {
        self.step.step(&mut self.state, item)
    }

    /// Swap the step function, keeping the state.
    pub fn map_step<G, O>(self, operation: O) -> Reducer<S, G>
    where
        O: FnOnce(F) -> G,
    {
        Reducer {
            state: self.state,
            step: operation(self.step),
        }
    }
}

impl<S, O> Reducer<S, StepFn<O>> {
    /// Build a reducer from a closure `FnMut(&mut S, T) -> Flow`.
    pub fn from_fn(state: S, operation: O) -> Self {
        Self::new(state, step_fn(operation))
    }
}
