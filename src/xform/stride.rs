use crate::{Error, Flow, Result, Step, Transducer, Wrap};

/* Stride */

#[derive(Debug, Clone, Copy)]
pub struct Stride {
    step: usize,
}

impl Stride {
    pub fn try_new(step: usize) -> Result<Self> {
        if step == 0 {
            return Err(Error::ZeroStride);
        }

        Ok(Self { step })
    }
}

/// Forward every `step`-th item, starting with the first one.
///
/// # Panics
///
/// Panics if `step` is 0. Use [`Stride::try_new`] to get an error instead.
///
/// [`Stride::try_new`]: struct.Stride.html#method.try_new
pub fn stride(step: usize) -> Stride {
    assert!(step != 0, "stride must be greater than zero");

    Stride { step }
}

impl Transducer for Stride {}

impl<F> Wrap<F> for Stride {
    type Step = StrideStep<F>;

    fn wrap(self, base: F) -> Self::Step {
        StrideStep {
            base,
            step: self.step,
            phase: 0,
        }
    }
}

/* StrideStep */

#[derive(Clone)]
pub struct StrideStep<F> {
    base: F,
    step: usize,
    phase: usize,
}

impl<F, S, T> Step<S, T> for StrideStep<F>
where
    F: Step<S, T>,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        let forward = self.phase == 0;
        self.phase = (self.phase + 1) % self.step;

        if forward {
            self.base.step(state, item)
        } else {
            Flow::Continue
        }
    }
}
