use crate::{misc::Apply, Flow, Step, Transducer, Wrap};

/* Unpack */

#[derive(Debug, Clone, Copy)]
pub struct Unpack<O> {
    operation: O,
}

/// Spread each tuple item over the parameters of `operation` and forward
/// the result. Zipped sources produce tuples, so this is how their items
/// reach a function taking one argument per source.
///
/// ```
/// use trx::{into, reduce, unpack, Transducer};
///
/// let sums = reduce(
///     unpack(|x: i32, y: i32| x + y).apply(into(Vec::new())),
///     vec![(1, 2), (3, 4), (5, 6)],
/// );
/// assert_eq!(sums, vec![3, 7, 11]);
/// ```
pub fn unpack<O>(operation: O) -> Unpack<O> {
    Unpack { operation }
}

impl<O> Transducer for Unpack<O> {}

impl<O, F> Wrap<F> for Unpack<O> {
    type Step = UnpackStep<F, O>;

    fn wrap(self, base: F) -> Self::Step {
        UnpackStep {
            base,
            operation: self.operation,
        }
    }
}

/* UnpackStep */

#[derive(Clone)]
pub struct UnpackStep<F, O> {
    base: F,
    operation: O,
}

impl<F, O, S, T> Step<S, T> for UnpackStep<F, O>
where
    O: Apply<T>,
    F: Step<S, O::Output>,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        let item = self.operation.apply(item);

        self.base.step(state, item)
    }
}
