use crate::{Flow, Reducer, Step};

/* Partition */

/// Route every item to exactly one of two reducers: `on_true` when
/// `operation` holds, `on_false` otherwise. The state is the pair of both
/// branch states.
///
/// A branch that signalled stop receives nothing further; items routed to
/// it are dropped. The partition as a whole only stops once both branches
/// have stopped.
///
/// ```
/// use trx::{into, partition, reduce};
///
/// let (even, odd) = reduce(
///     partition(|x: &i32| x % 2 == 0, into(Vec::new()), into(Vec::new())),
///     1..=10,
/// );
///
/// assert_eq!(even, vec![2, 4, 6, 8, 10]);
/// assert_eq!(odd, vec![1, 3, 5, 7, 9]);
/// ```
pub fn partition<O, S0, F0, S1, F1>(
    operation: O,
    on_true: Reducer<S0, F0>,
    on_false: Reducer<S1, F1>,
) -> Reducer<(S0, S1), PartitionStep<O, F0, F1>> {
    let (state_true, step_true) = on_true.into_parts();
    let (state_false, step_false) = on_false.into_parts();

    Reducer::new(
        (state_true, state_false),
        PartitionStep {
            operation,
            on_true: step_true,
            on_false: step_false,
            done: [false; 2],
        },
    )
}

/* PartitionStep */

#[derive(Clone)]
pub struct PartitionStep<O, F0, F1> {
    operation: O,
    on_true: F0,
    on_false: F1,
    done: [bool; 2],
}

impl<O, F0, F1, S0, S1, T> Step<(S0, S1), T> for PartitionStep<O, F0, F1>
where
    O: FnMut(&T) -> bool,
    F0: Step<S0, T>,
    F1: Step<S1, T>,
{
    fn step(&mut self, state: &mut (S0, S1), item: T) -> Flow {
        if (self.operation)(&item) {
            if !self.done[0] && self.on_true.step(&mut state.0, item).is_stop() {
                self.done[0] = true;
                log_trace!(branch = 0, "partition branch stopped");
            }
        } else if !self.done[1] && self.on_false.step(&mut state.1, item).is_stop() {
            self.done[1] = true;
            log_trace!(branch = 1, "partition branch stopped");
        }

        Flow::from(!(self.done[0] && self.done[1]))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn routes_by_predicate() {
        let (even, odd) = reduce(
            partition(|x: &i32| x % 2 == 0, into(Vec::new()), into(Vec::new())),
            vec![1, 2, 3, 4, 5],
        );

        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1, 3, 5]);
    }

    #[test]
    fn one_branch_stopping_does_not_stop_the_other() {
        let (even, odd) = reduce(
            partition(
                |x: &i32| x % 2 == 0,
                take(1).apply(into(Vec::new())),
                into(Vec::new()),
            ),
            1..=10,
        );

        assert_eq!(even, vec![2]);
        assert_eq!(odd, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn stops_once_both_branches_stopped() {
        let mut pulled = 0;
        let (even, odd) = reduce(
            inspect(|_: &i32| pulled += 1).apply(partition(
                |x: &i32| x % 2 == 0,
                take(2).apply(into(Vec::new())),
                take(1).apply(into(Vec::new())),
            )),
            1..,
        );

        assert_eq!(even, vec![2, 4]);
        assert_eq!(odd, vec![1]);
        assert_eq!(pulled, 4);
    }
}
