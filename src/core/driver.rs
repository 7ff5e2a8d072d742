use super::{Reducer, Step};

/// Feed every item of `source` into `reducer`, stopping as soon as the
/// reducer signals stop, and return the final state.
///
/// ```
/// use trx::{filter, into, reduce, Transducer};
///
/// let evens = reduce(
///     filter(|x: &i32| x % 2 == 0).apply(into(Vec::new())),
///     vec![1, 2, 3, 4],
/// );
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn reduce<S, F, I>(mut reducer: Reducer<S, F>, source: I) -> S
where
    I: IntoIterator,
    F: Step<S, I::Item>,
{
    for (index, item) in source.into_iter().enumerate() {
        if reducer.step(item).is_stop() {
            log_trace!(items = index + 1, "reduce stopped by reducer");
            break;
        }
    }

    reducer.into_state()
}

/// Walk two sources in lockstep and feed each aligned pair into
/// `reducer`. Iteration ends with the shorter source.
pub fn reduce2<S, F, A, B>(mut reducer: Reducer<S, F>, a: A, b: B) -> S
where
    A: IntoIterator,
    B: IntoIterator,
    F: Step<S, (A::Item, B::Item)>,
{
    for (index, item) in a.into_iter().zip(b).enumerate() {
        if reducer.step(item).is_stop() {
            log_trace!(items = index + 1, "reduce2 stopped by reducer");
            break;
        }
    }

    reducer.into_state()
}

/// Walk three sources in lockstep and feed each aligned triple into
/// `reducer`. Iteration ends with the shortest source.
pub fn reduce3<S, F, A, B, C>(mut reducer: Reducer<S, F>, a: A, b: B, c: C) -> S
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    F: Step<S, (A::Item, B::Item, C::Item)>,
{
    let items = a.into_iter().zip(b).zip(c).map(|((x, y), z)| (x, y, z));

    for (index, item) in items.enumerate() {
        if reducer.step(item).is_stop() {
            log_trace!(items = index + 1, "reduce3 stopped by reducer");
            break;
        }
    }

    reducer.into_state()
}
