use crate::{Flow, Step, Transducer, Wrap};

/// A tuple of extractor functions, each taking a reference to the same
/// item.
pub trait Projection<T> {
    type Output;

    fn project(&mut self, item: &T) -> Self::Output;
}

macro_rules! projection_tuple {
    ($(($O:ident, $R:ident)),+) => {
        #[allow(non_snake_case)]
        impl<T, $($O,)+ $($R,)+> Projection<T> for ($($O,)+)
        where
            $($O: FnMut(&T) -> $R,)+
        {
            type Output = ($($R,)+);

            fn project(&mut self, item: &T) -> Self::Output {
                let ($($O,)+) = self;

                ($($O(item),)+)
            }
        }
    };
}

projection_tuple!((O1, R1));
projection_tuple!((O1, R1), (O2, R2));
projection_tuple!((O1, R1), (O2, R2), (O3, R3));
projection_tuple!((O1, R1), (O2, R2), (O3, R3), (O4, R4));

/* Project */

#[derive(Debug, Clone, Copy)]
pub struct Project<P> {
    projection: P,
}

/// Apply every function of the `projection` tuple to the item and forward
/// the tuple of their results.
pub fn project<P>(projection: P) -> Project<P> {
    Project { projection }
}

impl<P> Transducer for Project<P> {}

impl<P, F> Wrap<F> for Project<P> {
    type Step = ProjectStep<F, P>;

    fn wrap(self, base: F) -> Self::Step {
        ProjectStep {
            base,
            projection: self.projection,
        }
    }
}

/* ProjectStep */

#[derive(Clone)]
pub struct ProjectStep<F, P> {
    base: F,
    projection: P,
}

impl<F, P, S, T> Step<S, T> for ProjectStep<F, P>
where
    P: Projection<T>,
    F: Step<S, P::Output>,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        let item = self.projection.project(&item);

        self.base.step(state, item)
    }
}
