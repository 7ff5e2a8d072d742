use std::ops::{Range, RangeFrom};

use crate::{Generator, Sink};

/* Span */

/// Generator over the half-open interval `[low, high)`.
#[derive(Debug, Clone)]
pub struct Span<T> {
    range: Range<T>,
}

/// Produce `low, low + 1, ..., high - 1`. Empty when `low >= high`.
pub fn range<T>(low: T, high: T) -> Span<T>
where
    Range<T>: Iterator<Item = T> + Clone,
{
    Span { range: low..high }
}

/// Produce `0, 1, ..., high - 1`.
pub fn range_to<T>(high: T) -> Span<T>
where
    T: Default,
    Range<T>: Iterator<Item = T> + Clone,
{
    range(T::default(), high)
}

impl<T> Generator for Span<T>
where
    Range<T>: Iterator<Item = T> + Clone,
{
    type Item = T;

    fn drive(&mut self, sink: &mut dyn Sink<T>) {
        for item in self.range.clone() {
            if sink.accept(item).is_stop() {
                break;
            }
        }
    }
}

/* Iota */

/// Unbounded generator counting up from a start value.
#[derive(Debug, Clone)]
pub struct Iota<T> {
    start: RangeFrom<T>,
}

/// Produce `start, start + 1, ...` until the reducer stops. Overflowing
/// the item type panics in debug builds.
pub fn iota<T>(start: T) -> Iota<T>
where
    RangeFrom<T>: Iterator<Item = T> + Clone,
{
    Iota { start: start.. }
}

impl<T> Generator for Iota<T>
where
    RangeFrom<T>: Iterator<Item = T> + Clone,
{
    type Item = T;

    fn drive(&mut self, sink: &mut dyn Sink<T>) {
        for item in self.start.clone() {
            if sink.accept(item).is_stop() {
                break;
            }
        }
    }
}
