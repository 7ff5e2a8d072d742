use crate::{Flow, Reducer, Step};

/* AllOf */

#[derive(Debug, Clone, Copy)]
pub struct AllOf<O> {
    operation: O,
}

/// `true` unless some item fails `operation`; stops at the first failure.
pub fn all_of<O>(operation: O) -> Reducer<bool, AllOf<O>> {
    Reducer::new(true, AllOf { operation })
}

impl<O, T> Step<bool, T> for AllOf<O>
where
    O: FnMut(&T) -> bool,
{
    fn step(&mut self, state: &mut bool, item: T) -> Flow {
        *state = *state && (self.operation)(&item);

        Flow::from(*state)
    }
}

/* AnyOf */

#[derive(Debug, Clone, Copy)]
pub struct AnyOf<O> {
    operation: O,
}

/// `true` once some item satisfies `operation`; stops at the first match.
pub fn any_of<O>(operation: O) -> Reducer<bool, AnyOf<O>> {
    Reducer::new(false, AnyOf { operation })
}

impl<O, T> Step<bool, T> for AnyOf<O>
where
    O: FnMut(&T) -> bool,
{
    fn step(&mut self, state: &mut bool, item: T) -> Flow {
        *state = *state || (self.operation)(&item);

        Flow::from(!*state)
    }
}

/* NoneOf */

#[derive(Debug, Clone, Copy)]
pub struct NoneOf<O> {
    operation: O,
}

/// `true` unless some item satisfies `operation`; stops at the first match.
pub fn none_of<O>(operation: O) -> Reducer<bool, NoneOf<O>> {
    Reducer::new(true, NoneOf { operation })
}

impl<O, T> Step<bool, T> for NoneOf<O>
where
    O: FnMut(&T) -> bool,
{
    fn step(&mut self, state: &mut bool, item: T) -> Flow {
        *state = *state && !(self.operation)(&item);

        Flow::from(*state)
    }
}
