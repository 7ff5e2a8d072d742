use crate::{Flow, Reducer, Step};

/* Into */

/// Step that appends every item to the container it owns.
#[derive(Debug, Default, Clone, Copy)]
pub struct Push;

/// Collect items into `container`, which becomes the final state.
pub fn into<C>(container: C) -> Reducer<C, Push> {
    Reducer::new(container, Push)
}

impl<C, T> Step<C, T> for Push
where
    C: Extend<T>,
{
    fn step(&mut self, state: &mut C, item: T) -> Flow {
        state.extend(Some(item));

        Flow::Continue
    }
}

/* PushBack */

/// Step that appends every item to a container borrowed from the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct PushBack;

/// Append items to a caller-owned `container`. The container stays
/// mutably borrowed until the pipeline's state is dropped.
pub fn push_back<C>(container: &mut C) -> Reducer<&mut C, PushBack>
where
    C: ?Sized,
{
    Reducer::new(container, PushBack)
}

impl<'a, C, T> Step<&'a mut C, T> for PushBack
where
    C: Extend<T> + ?Sized,
{
    fn step(&mut self, state: &mut &'a mut C, item: T) -> Flow {
        state.extend(Some(item));

        Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::*;

    #[test]
    fn into_owned_container() {
        assert_eq!(
            reduce(into(Vec::new()), vec![1, 2, 3, 4, 5]),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(
            reduce(into(BTreeSet::new()), vec![3, 1, 3, 2]),
            vec![1, 2, 3].into_iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn push_back_into_borrowed() {
        let mut result = vec![0];
        reduce(push_back(&mut result), vec![1, 2, 3]);

        assert_eq!(result, vec![0, 1, 2, 3]);
    }
}
