use crate::{Flow, Reducer, Step};

/* ForEach */

#[derive(Debug, Clone, Copy)]
pub struct ForEach<O> {
    operation: O,
}

/// Call `operation` for every item. The state counts the calls.
pub fn for_each<O>(operation: O) -> Reducer<usize, ForEach<O>> {
    Reducer::new(0, ForEach { operation })
}

impl<O, T> Step<usize, T> for ForEach<O>
where
    O: FnMut(T),
{
    fn step(&mut self, state: &mut usize, item: T) -> Flow {
        (self.operation)(item);
        *state += 1;

        Flow::Continue
    }
}

/* ForEachIndexed */

#[derive(Debug, Clone, Copy)]
pub struct ForEachIndexed<O> {
    operation: O,
}

/// Call `operation(index, item)` for every item. The state is the next
/// index, which equals the number of calls made.
pub fn for_each_indexed<O>(operation: O) -> Reducer<usize, ForEachIndexed<O>> {
    Reducer::new(0, ForEachIndexed { operation })
}

impl<O, T> Step<usize, T> for ForEachIndexed<O>
where
    O: FnMut(usize, T),
{
    fn step(&mut self, state: &mut usize, item: T) -> Flow {
        (self.operation)(*state, item);
        *state += 1;

        Flow::Continue
    }
}
