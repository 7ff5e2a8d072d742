use super::{Reducer, Step};

/// Adapter that lets a reducer be the target of code which only knows how
/// to write one item at a time and never looks at a stop signal, such as
/// anything generic over [`Extend`].
///
/// Writes always succeed from the writer's point of view. Once the
/// wrapped reducer signalled stop, further writes are dropped.
///
/// ```
/// use trx::{out, transform, into, Transducer};
///
/// let mut sink = out(transform(|x: i32| x.to_string()).apply(into(Vec::new())));
/// sink.extend(vec![1, 2, 3]);
///
/// assert_eq!(sink.into_state(), vec!["1", "2", "3"]);
/// ```
///
/// [`Extend`]: https://doc.rust-lang.org/std/iter/trait.Extend.html
#[derive(Debug, Clone)]
pub struct Output<S, F> {
    reducer: Reducer<S, F>,
    done: bool,
}

pub fn out<S, F>(reducer: Reducer<S, F>) -> Output<S, F> {
    Output {
        reducer,
        done: false,
    }
}

impl<S, F> Output<S, F> {
    pub fn write<T>(&mut self, item: T)
    where
        F: Step<S, T>,
    {
        if !self.done {
            self.done = self.reducer.step(item).is_stop();
        }
    }

    /// Whether the wrapped reducer has stopped accepting items.
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn get(&self) -> &S {
        self.reducer.state()
    }

    pub fn into_state(self) -> S {
        self.reducer.into_state()
    }
}

impl<S, F, T> Extend<T> for Output<S, F>
where
    F: Step<S, T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in iter {
            if self.done {
                break;
            }

            self.write(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn writes_after_stop_are_ignored() {
        let mut sink = out(take(2).apply(into(Vec::new())));

        for x in 1..=5 {
            sink.write(x);
        }

        assert!(sink.is_done());
        assert_eq!(sink.get(), &vec![1, 2]);
    }

    #[test]
    fn extend_with_generic_algorithm() {
        fn copy_all<E: Extend<u8>>(input: &[u8], target: &mut E) {
            target.extend(input.iter().copied());
        }

        let mut sink = out(filter(|b: &u8| b.is_ascii_uppercase())
            .then(transform(|b: u8| b as char))
            .apply(into(String::new())));
        copy_all(b"aBcDeF", &mut sink);

        assert_eq!(sink.into_state(), "BDF");
    }
}
