//! Composable reducers, transducers and push-style generators.
//!
//! A pipeline is a terminal [`Reducer`] with any number of transducers put
//! in front of it. Every step answers [`Flow::Continue`] or [`Flow::Stop`],
//! and a stop travels back through all stages to the source, which then
//! stops producing.
//!
//! ```
//! use trx::*;
//!
//! let result = reduce(
//!     filter(|x: &i32| x % 2 == 1)
//!         .then(transform(|x: i32| x * x))
//!         .then(take(3))
//!         .apply(into(Vec::new())),
//!     1..,
//! );
//!
//! assert_eq!(result, vec![1, 9, 25]);
//! ```

#[macro_use]
mod misc;

mod core;
mod error;
mod sink;
mod source;
mod xform;

pub use self::core::{
    generator, identity, out, reduce, reduce2, reduce3, step_fn, Compose, Flow, FnGenerator,
    Generator, Identity, Output, Reducer, Sink, Step, StepFn, Transducer, Wrap,
};
pub use self::error::{Error, Result};
pub use self::misc::{Apply, Maybe};
pub use self::sink::{
    accumulate, all_of, any_of, copy_to, count, discard, for_each, for_each_indexed, fork, into,
    none_of, partition, push_back, sum, to_reducer, Accumulate, AllOf, AnyOf, Branches, CopyTo,
    Count, Discard, ForEach, ForEachIndexed, ForkStep, NoneOf, PartitionStep, Push, PushBack, Slots,
    Sum,
};
pub use self::source::{
    chain, from, from2, from3, iota, range, range_to, read_lines, Chain, Iota, Iter, Lines, Span,
    Zip2, Zip3,
};
pub use self::xform::{
    drop, drop_while, drop_while_indexed, filter, filter_indexed, flatten, inspect,
    inspect_indexed, interleave, project, stride, take, take_while, take_while_indexed, transform,
    transform_indexed, transform_maybe, transform_maybe_indexed, unpack, DropWhile,
    DropWhileIndexed, DropWhileIndexedStep, DropWhileStep, Filter, FilterIndexed,
    FilterIndexedStep, FilterStep, Flatten, FlattenStep, Inspect, InspectIndexed,
    InspectIndexedStep, InspectStep, Interleave, InterleaveStep, Project, ProjectStep, Projection,
    Skip, SkipStep, Stride, StrideStep, Take, TakeStep, TakeWhile, TakeWhileIndexed,
    TakeWhileIndexedStep, TakeWhileStep, Transform, TransformIndexed, TransformIndexedStep,
    TransformMaybe, TransformMaybeIndexed, TransformMaybeIndexedStep, TransformMaybeStep,
    TransformStep, Unpack, UnpackStep,
};
