use std::marker::PhantomData;

use super::{Flow, Reducer, Step};

/// The capability a [`Generator`] pushes its items into.
///
/// Implemented for every closure `FnMut(T) -> Flow`, so a reducer step is
/// handed to a generator as `&mut |item| reducer.step(item)` without any
/// manual type erasure.
///
/// [`Generator`]: trait.Generator.html
pub trait Sink<T> {
    fn accept(&mut self, item: T) -> Flow;
}

impl<T, O> Sink<T> for O
where
    O: FnMut(T) -> Flow,
{
    fn accept(&mut self, item: T) -> Flow {
        self(item)
    }
}

/// A push-style source of items.
///
/// `drive` calls `sink.accept` zero or more times, synchronously, and must
/// return as soon as one of those calls answers [`Flow::Stop`]. Each call
/// to `drive` starts production over from the beginning; a generator does
/// not remember where a previous run ended unless its own closure keeps
/// such state.
///
/// [`Flow::Stop`]: enum.Flow.html#variant.Stop
pub trait Generator {
    /// The type of item this generator produces.
    type Item;

    /// Push items into `sink` until the source is exhausted or the sink
    /// signals stop.
    fn drive(&mut self, sink: &mut dyn Sink<Self::Item>);

    /// Drive the generator into `reducer` and return the final state.
    fn reduce<S, F>(mut self, reducer: Reducer<S, F>) -> S
    where
        Self: Sized,
        F: Step<S, Self::Item>,
    {
        self.reduce_by_ref(reducer)
    }

    /// Like [`reduce`] but leaves the generator usable for another run.
    ///
    /// [`reduce`]: #method.reduce
    fn reduce_by_ref<S, F>(&mut self, mut reducer: Reducer<S, F>) -> S
    where
        F: Step<S, Self::Item>,
    {
        let mut count = 0usize;

        self.drive(&mut |item: Self::Item| {
            count += 1;

            let flow = reducer.step(item);
            if flow.is_stop() {
                log_trace!(items = count, "generator run stopped by reducer");
            }

            flow
        });

        reducer.into_state()
    }
}

impl<G> Generator for &mut G
where
    G: Generator + ?Sized,
{
    type Item = G::Item;

    fn drive(&mut self, sink: &mut dyn Sink<Self::Item>) {
        (**self).drive(sink)
    }
}

impl<G> Generator for Box<G>
where
    G: Generator + ?Sized,
{
    type Item = G::Item;

    fn drive(&mut self, sink: &mut dyn Sink<Self::Item>) {
        (**self).drive(sink)
    }
}

/* FnGenerator */

/// Generator backed by a closure that receives the sink.
pub struct FnGenerator<O, T> {
    operation: O,
    marker: PhantomData<fn() -> T>,
}

/// Build a generator from a closure.
///
/// The closure must check the [`Flow`] returned by every `accept` call and
/// return once it sees `Stop`.
///
/// ```
/// use trx::{generator, into, Generator};
///
/// let squares = generator(|sink| {
///     for i in 0..10 {
///         if sink.accept((i, i * i)).is_stop() {
///             break;
///         }
///     }
/// });
///
/// assert_eq!(squares.reduce(into(Vec::new()))[3], (3, 9));
/// ```
///
/// [`Flow`]: enum.Flow.html
pub fn generator<T, O>(operation: O) -> FnGenerator<O, T>
where
    O: FnMut(&mut dyn Sink<T>),
{
    FnGenerator {
        operation,
        marker: PhantomData,
    }
}

impl<O, T> Generator for FnGenerator<O, T>
where
    O: FnMut(&mut dyn Sink<T>),
{
    type Item = T;

    fn drive(&mut self, sink: &mut dyn Sink<T>) {
        (self.operation)(sink)
    }
}

impl<O, T> Clone for FnGenerator<O, T>
where
    O: Clone,
{
    fn clone(&self) -> Self {
        Self {
            operation: self.operation.clone(),
            marker: PhantomData,
        }
    }
}
