use std::mem;
use std::ops::AddAssign;

use crate::{Flow, Reducer, Step};

/* Sum */

#[derive(Debug, Default, Clone, Copy)]
pub struct Sum;

/// Add every item onto `init`.
pub fn sum<T>(init: T) -> Reducer<T, Sum> {
    Reducer::new(init, Sum)
}

impl<T, I> Step<T, I> for Sum
where
    T: AddAssign<I>,
{
    fn step(&mut self, state: &mut T, item: I) -> Flow {
        *state += item;

        Flow::Continue
    }
}

/* Count */

#[derive(Debug, Default, Clone, Copy)]
pub struct Count;

/// Count the items.
pub fn count() -> Reducer<usize, Count> {
    Reducer::new(0, Count)
}

impl<T> Step<usize, T> for Count {
    fn step(&mut self, state: &mut usize, _item: T) -> Flow {
        *state += 1;

        Flow::Continue
    }
}

/* Accumulate */

#[derive(Debug, Clone, Copy)]
pub struct Accumulate<O> {
    operation: O,
}

/// Fold items into `init` with `operation(state, item) -> state`.
///
/// The state is moved out for each call, which needs `S: Default` to
/// leave something behind in the meantime. An accumulator without a
/// `Default` is folded in place with [`Reducer::from_fn`] instead.
///
/// [`Reducer::from_fn`]: struct.Reducer.html#method.from_fn
pub fn accumulate<S, O>(init: S, operation: O) -> Reducer<S, Accumulate<O>> {
    Reducer::new(init, Accumulate { operation })
}

/// Turn a plain fold function into an always-continue reducer.
pub fn to_reducer<S, O>(init: S, operation: O) -> Reducer<S, Accumulate<O>> {
    accumulate(init, operation)
}

impl<O, S, T> Step<S, T> for Accumulate<O>
where
    O: FnMut(S, T) -> S,
    S: Default,
{
    fn step(&mut self, state: &mut S, item: T) -> Flow {
        let acc = mem::take(state);
        *state = (self.operation)(acc, item);

        Flow::Continue
    }
}

/* Discard */

#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

/// Accept and drop every item. Useful when only the side effects of
/// earlier stages matter.
pub fn discard() -> Reducer<(), Discard> {
    Reducer::new((), Discard)
}

impl<T> Step<(), T> for Discard {
    fn step(&mut self, _state: &mut (), _item: T) -> Flow {
        Flow::Continue
    }
}
