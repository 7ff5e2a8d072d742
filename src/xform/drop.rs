use crate::{Flow, Step, Transducer, Wrap};

/* Skip */

#[derive(Debug, Clone, Copy)]
pub struct Skip {
    count: usize,
}

/// Suppress the first `count` items and forward the rest.
pub fn drop(count: usize) -> Skip {
    Skip { count }
}

impl Transducer for Skip {}

impl<F> Wrap<F> for Skip {
    type Step = SkipStep<F>;

    fn wrap(self, base: F) -> Self::Step {
        SkipStep {
            base,
            remaining: self.count,
        }
    }
}

/* SkipStep */

#[derive(Clone)]
pub struct SkipStep<F> {
    base: F,
    remaining: usize,
}

impl<F, S, T> Step<S, T> for SkipStep<F>
where
    F: Step<S, T>,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        if self.remaining > 0 {
            self.remaining -= 1;

            Flow::Continue
        } else {
            self.base.step(state, item)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn drops_prefix() {
        let xform = drop(3).apply(into(Vec::new()));

        assert_eq!(reduce(xform.clone(), Vec::<i32>::new()), Vec::<i32>::new());
        assert_eq!(reduce(xform.clone(), vec![1, 2]), Vec::<i32>::new());
        assert_eq!(reduce(xform, 1..=10), vec![4, 5, 6, 7, 8, 9, 10]);
    }
}
