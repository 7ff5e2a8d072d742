use std::slice::IterMut;

use crate::{Flow, Reducer, Step};

/* Slots */

/// The write position of a [`copy_to`] pipeline: the slots not yet
/// written and how many have been written so far.
///
/// [`copy_to`]: fn.copy_to.html
#[derive(Debug)]
pub struct Slots<'a, T> {
    slots: IterMut<'a, T>,
    written: usize,
}

impl<'a, T> Slots<'a, T> {
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn remaining(&self) -> usize {
        self.slots.len()
    }
}

/* CopyTo */

#[derive(Debug, Default, Clone, Copy)]
pub struct CopyTo;

/// Write items into consecutive slots of `target`.
///
/// The pipeline stops once the last slot is written, so nothing is ever
/// written past the end of `target`.
pub fn copy_to<T>(target: &mut [T]) -> Reducer<Slots<'_, T>, CopyTo> {
    Reducer::new(
        Slots {
            slots: target.iter_mut(),
            written: 0,
        },
        CopyTo,
    )
}

impl<'a, T> Step<Slots<'a, T>, T> for CopyTo {
    fn step(&mut self, state: &mut Slots<'a, T>, item: T) -> Flow {
        match state.slots.next() {
            Some(slot) => {
                *slot = item;
                state.written += 1;

                Flow::from(state.slots.len() > 0)
            }
            None => Flow::Stop,
        }
    }
}
