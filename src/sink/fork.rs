use crate::{Flow, Reducer, Step};

/// A tuple of reducers that can be run side by side by [`fork`].
///
/// [`fork`]: fn.fork.html
pub trait Branches {
    /// Tuple of the branch states.
    type States;

    /// The combined step.
    type Step;

    fn into_parts(self) -> (Self::States, Self::Step);
}

/// Feed every item to each of the `branches` and keep their states side
/// by side.
///
/// A branch that signalled stop is not called again, while the others keep
/// receiving items. The fork itself only stops once every branch has
/// stopped, so one bounded branch never truncates an unbounded one.
///
/// ```
/// use trx::{count, fork, into, reduce};
///
/// let (items, n) = reduce(fork((into(Vec::new()), count())), vec![1, 2, 3, 4, 5]);
///
/// assert_eq!(items, vec![1, 2, 3, 4, 5]);
/// assert_eq!(n, 5);
/// ```
pub fn fork<B>(branches: B) -> Reducer<B::States, B::Step>
where
    B: Branches,
{
    let (states, step) = branches.into_parts();

    Reducer::new(states, step)
}

/* ForkStep */

#[derive(Clone)]
pub struct ForkStep<F, D> {
    steps: F,
    done: D,
}

macro_rules! fork_tuple {
    ($N:expr; $(($S:ident, $F:ident)),+) => {
        #[allow(non_snake_case)]
        impl<$($S,)+ $($F,)+> Branches for ($(Reducer<$S, $F>,)+) {
            type States = ($($S,)+);
            type Step = ForkStep<($($F,)+), [bool; $N]>;

            fn into_parts(self) -> (Self::States, Self::Step) {
                let ($($S,)+) = self;
                let ($($S,)+) = ($($S.into_parts(),)+);

                let states = ($($S.0,)+);
                let steps = ($($S.1,)+);

                (states, ForkStep { steps, done: [false; $N] })
            }
        }

        #[allow(non_snake_case, unused_assignments)]
        impl<T, $($S,)+ $($F,)+> Step<($($S,)+), T> for ForkStep<($($F,)+), [bool; $N]>
        where
            T: Clone,
            $($F: Step<$S, T>,)+
        {
            fn step(&mut self, state: &mut ($($S,)+), item: T) -> Flow {
                let ($($S,)+) = state;
                let ($($F,)+) = &mut self.steps;
                let mut index = 0;

                $(
                    if !self.done[index] && $F.step($S, item.clone()).is_stop() {
                        self.done[index] = true;
                        log_trace!(branch = index, "fork branch stopped");
                    }
                    index += 1;
                )+

                Flow::from(!self.done.iter().all(|done| *done))
            }
        }
    };
}

fork_tuple!(1; (S0, F0));
fork_tuple!(2; (S0, F0), (S1, F1));
fork_tuple!(3; (S0, F0), (S1, F1), (S2, F2));
fork_tuple!(4; (S0, F0), (S1, F1), (S2, F2), (S3, F3));
fork_tuple!(5; (S0, F0), (S1, F1), (S2, F2), (S3, F3), (S4, F4));
fork_tuple!(6; (S0, F0), (S1, F1), (S2, F2), (S3, F3), (S4, F4), (S5, F5));
