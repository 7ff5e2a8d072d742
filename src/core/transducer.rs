use super::Reducer;

/// A transducer turns the step of an inner reducer into the step of an
/// outer one. It knows nothing about where items come from or where the
/// accumulated state ends up, so the same transducer can sit in front of
/// any reducer whose items it can forward.
///
/// The mapping itself is [`Wrap`]; this trait only carries the chaining
/// methods.
///
/// A transducer holds nothing but its construction parameters. Running
/// cursors are created fresh each time it is wrapped around a step, and
/// wrapping consumes it, so reusing a pipeline means cloning the
/// transducer before each [`apply`].
///
/// [`Wrap`]: trait.Wrap.html
/// [`apply`]: #method.apply
pub trait Transducer: Sized {
    /// Chain `next` behind `self`. Items pass through `self` first.
    ///
    /// `a.then(b).apply(r)` behaves exactly like `a.apply(b.apply(r))`.
    fn then<B>(self, next: B) -> Compose<Self, B>
    where
        B: Transducer,
    {
        Compose::new(self, next)
    }

    /// Put `self` in front of `reducer`. The state is carried over
    /// unchanged, only the step is wrapped.
    fn apply<S, F>(self, reducer: Reducer<S, F>) -> Reducer<S, Self::Step>
    where
        Self: Wrap<F>,
    {
        reducer.map_step(|step| self.wrap(step))
    }
}

/// The actual `Step_inner -> Step_outer` mapping of a transducer.
pub trait Wrap<F>: Transducer {
    /// The step produced by wrapping `F`.
    type Step;

    fn wrap(self, inner: F) -> Self::Step;
}

/* Compose */

/// Two transducers chained with [`Transducer::then`].
#[derive(Debug, Clone, Copy)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A, B> Compose<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Transducer for Compose<A, B> {}

impl<A, B, F> Wrap<F> for Compose<A, B>
where
    B: Wrap<F>,
    A: Wrap<B::Step>,
{
    type Step = A::Step;

    fn wrap(self, inner: F) -> Self::Step {
        self.first.wrap(self.second.wrap(inner))
    }
}

/* Identity */

/// The transducer that forwards every item unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

pub fn identity() -> Identity {
    Identity
}

impl Transducer for Identity {}

impl<F> Wrap<F> for Identity {
    type Step = F;

    fn wrap(self, inner: F) -> F {
        inner
    }
}
