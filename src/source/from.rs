use crate::{Generator, Sink};

/* Iter */

/// Generator over a cloneable sequence. Every run clones the sequence and
/// walks it from the start.
#[derive(Debug, Clone)]
pub struct Iter<I> {
    source: I,
}

/// Turn a sequence into a restartable generator. Pass a reference (for
/// example `&vec`) to avoid cloning the data itself on every run.
pub fn from<I>(source: I) -> Iter<I>
where
    I: IntoIterator + Clone,
{
    Iter { source }
}

impl<I> Generator for Iter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn drive(&mut self, sink: &mut dyn Sink<Self::Item>) {
        for item in self.source.clone() {
            if sink.accept(item).is_stop() {
                break;
            }
        }
    }
}

/* Zip2 */

/// Generator walking two sequences in lockstep.
#[derive(Debug, Clone)]
pub struct Zip2<A, B> {
    a: A,
    b: B,
}

/// Zip two sequences into a generator of pairs. It ends with the shorter
/// sequence.
pub fn from2<A, B>(a: A, b: B) -> Zip2<A, B>
where
    A: IntoIterator + Clone,
    B: IntoIterator + Clone,
{
    Zip2 { a, b }
}

impl<A, B> Generator for Zip2<A, B>
where
    A: IntoIterator + Clone,
    B: IntoIterator + Clone,
{
    type Item = (A::Item, B::Item);

    fn drive(&mut self, sink: &mut dyn Sink<Self::Item>) {
        for item in self.a.clone().into_iter().zip(self.b.clone()) {
            if sink.accept(item).is_stop() {
                break;
            }
        }
    }
}

/* Zip3 */

/// Generator walking three sequences in lockstep.
#[derive(Debug, Clone)]
pub struct Zip3<A, B, C> {
    a: A,
    b: B,
    c: C,
}

/// Zip three sequences into a generator of triples. It ends with the
/// shortest sequence.
pub fn from3<A, B, C>(a: A, b: B, c: C) -> Zip3<A, B, C>
where
    A: IntoIterator + Clone,
    B: IntoIterator + Clone,
    C: IntoIterator + Clone,
{
    Zip3 { a, b, c }
}

impl<A, B, C> Generator for Zip3<A, B, C>
where
    A: IntoIterator + Clone,
    B: IntoIterator + Clone,
    C: IntoIterator + Clone,
{
    type Item = (A::Item, B::Item, C::Item);

    fn drive(&mut self, sink: &mut dyn Sink<Self::Item>) {
        let items = self
            .a
            .clone()
            .into_iter()
            .zip(self.b.clone())
            .zip(self.c.clone())
            .map(|((a, b), c)| (a, b, c));

        for item in items {
            if sink.accept(item).is_stop() {
                break;
            }
        }
    }
}
