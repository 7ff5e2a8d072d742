mod drop;
mod drop_while;
mod filter;
mod flatten;
mod inspect;
mod interleave;
mod project;
mod stride;
mod take;
mod take_while;
mod transform;
mod transform_maybe;
mod unpack;

pub use self::drop::{drop, Skip, SkipStep};
pub use drop_while::{
    drop_while, drop_while_indexed, DropWhile, DropWhileIndexed, DropWhileIndexedStep,
    DropWhileStep,
};
pub use filter::{
    filter, filter_indexed, Filter, FilterIndexed, FilterIndexedStep, FilterStep,
};
pub use flatten::{flatten, Flatten, FlattenStep};
pub use inspect::{
    inspect, inspect_indexed, Inspect, InspectIndexed, InspectIndexedStep, InspectStep,
};
pub use interleave::{interleave, Interleave, InterleaveStep};
pub use project::{project, Project, ProjectStep, Projection};
pub use stride::{stride, Stride, StrideStep};
pub use take::{take, Take, TakeStep};
pub use take_while::{
    take_while, take_while_indexed, TakeWhile, TakeWhileIndexed, TakeWhileIndexedStep,
    TakeWhileStep,
};
pub use transform::{
    transform, transform_indexed, Transform, TransformIndexed, TransformIndexedStep, TransformStep,
};
pub use transform_maybe::{
    transform_maybe, transform_maybe_indexed, TransformMaybe, TransformMaybeIndexed,
    TransformMaybeIndexedStep, TransformMaybeStep,
};
pub use unpack::{unpack, Unpack, UnpackStep};
