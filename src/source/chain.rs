use crate::{Generator, Sink};

/// Generator running `first` to completion and then `second`.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Concatenate two generators of the same item type. A stop raised while
/// `first` runs ends the whole chain.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Generator,
    B: Generator<Item = A::Item>,
{
    Chain { first, second }
}

impl<A, B> Generator for Chain<A, B>
where
    A: Generator,
    B: Generator<Item = A::Item>,
{
    type Item = A::Item;

    fn drive(&mut self, sink: &mut dyn Sink<Self::Item>) {
        let mut stopped = false;

        self.first.drive(&mut |item: A::Item| {
            let flow = sink.accept(item);
            if flow.is_stop() {
                stopped = true;
            }

            flow
        });

        if stopped {
            return;
        }

        self.second.drive(sink);
    }
}
