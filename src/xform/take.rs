use crate::{Flow, Step, Transducer, Wrap};

/* Take */

#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: usize,
}

/// Forward the first `count` items, then stop.
///
/// The stop signal travels back together with the `count`-th item, so a
/// source is never asked for one more item than needed. `take(0)` stops
/// on the first item without forwarding it.
pub fn take(count: usize) -> Take {
    Take { count }
}

impl Transducer for Take {}

impl<F> Wrap<F> for Take {
    type Step = TakeStep<F>;

    fn wrap(self, base: F) -> Self::Step {
        TakeStep {
            base,
            remaining: self.count,
        }
    }
}

/* TakeStep */

#[derive(Clone)]
pub struct TakeStep<F> {
    base: F,
    remaining: usize,
}

impl<F, S, T> Step<S, T> for TakeStep<F>
where
    F: Step<S, T>,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        if self.remaining == 0 {
            return Flow::Stop;
        }

        self.remaining -= 1;
        let flow = self.base.step(state, item);

        if self.remaining == 0 {
            Flow::Stop
        } else {
            flow
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn takes_prefix() {
        let xform = take(3).apply(into(Vec::new()));

        assert_eq!(reduce(xform.clone(), Vec::<i32>::new()), Vec::<i32>::new());
        assert_eq!(reduce(xform.clone(), vec![1, 2]), vec![1, 2]);
        assert_eq!(reduce(xform, 1..=10), vec![1, 2, 3]);
    }

    #[test]
    fn take_zero_forwards_nothing() {
        assert_eq!(
            reduce(take(0).apply(into(Vec::new())), 1..=10),
            Vec::<i32>::new()
        );
    }

    #[test]
    fn never_pulls_past_count() {
        let mut produced = 0;
        let result = iota(0u64).reduce(
            inspect(|_: &u64| produced += 1)
                .then(take(5))
                .apply(into(Vec::new())),
        );

        assert_eq!(result, vec![0, 1, 2, 3, 4]);
        assert_eq!(produced, 5);
    }
}
